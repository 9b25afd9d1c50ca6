mod app;
mod constants;
mod event;
mod event_loop;
mod services;
mod terminal;
mod view;

pub use app::{
    AppState, AppStateOptions, Edge, InputEvent, LayoutDirection, NavDirection, OutputEvent, Panel,
    Side,
};
pub use constants::{DEFAULT_ANIMATION_MS, DEFAULT_FRAME_MS};
pub use event::map_crossterm_event_to_input_event;
pub use event_loop::run_tui;
pub use services::selector::{CircularSelector, advance};
pub use services::slide::{SlideAnimation, SlideFrame};
pub use services::transition::{Transition, TransitionDirector};
pub use terminal::TerminalGuard;
pub use view::view;
