mod events;
mod types;

pub use events::{InputEvent, OutputEvent};
pub use types::*;

use crate::constants::{DEFAULT_ANIMATION_MS, DEFAULT_FRAME_MS};
use crate::services::controls::ControlButton;
use crate::services::selector::CircularSelector;
use crate::services::slide::{SlideAnimation, SlideFrame};
use crate::services::transition::{Transition, TransitionDirector};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppStateOptions {
    pub start_panel: Panel,
    pub animation_duration: Duration,
    pub frame_interval: Duration,
    pub layout_direction: LayoutDirection,
}

impl Default for AppStateOptions {
    fn default() -> Self {
        Self {
            start_panel: Panel::A,
            animation_duration: Duration::from_millis(DEFAULT_ANIMATION_MS),
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MS),
            layout_direction: LayoutDirection::LeftToRight,
        }
    }
}

pub struct AppState {
    pub selector: CircularSelector,
    pub director: TransitionDirector,
    /// Running slide, `None` at rest.
    pub slide: Option<SlideAnimation>,
    pub animation_duration: Duration,
    pub frame_interval: Duration,
    pub layout_direction: LayoutDirection,
}

impl AppState {
    pub fn new(options: AppStateOptions) -> Self {
        Self {
            selector: CircularSelector::new(options.start_panel),
            director: TransitionDirector::new(),
            slide: None,
            animation_duration: options.animation_duration,
            frame_interval: options.frame_interval,
            layout_direction: options.layout_direction,
        }
    }

    pub fn current_panel(&self) -> Panel {
        self.selector.current()
    }

    /// Move one panel and start its slide, replacing any slide in flight.
    pub fn navigate(&mut self, direction: NavDirection, now: Instant) -> Transition {
        let transition = self.director.navigate(&mut self.selector, direction, now);
        self.begin(transition);
        transition
    }

    pub fn jump_to(&mut self, panel: Panel, now: Instant) -> Option<Transition> {
        let transition = self.director.jump_to(&mut self.selector, panel, now)?;
        self.begin(transition);
        Some(transition)
    }

    fn begin(&mut self, transition: Transition) {
        self.slide = Some(SlideAnimation::new(
            transition,
            self.animation_duration,
            self.layout_direction,
        ));
    }

    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Drop a finished slide. Returns the panel that came to rest.
    pub fn settle(&mut self, now: Instant) -> Option<Panel> {
        if self.slide.as_ref()?.is_finished(now) {
            self.slide = None;
            return Some(self.current_panel());
        }
        None
    }

    pub fn slide_frame(&self, now: Instant, width: u16) -> Option<SlideFrame> {
        self.slide.as_ref()?.sample(now, width)
    }

    /// Button that triggered the running slide, if any.
    pub fn pressed_button(&self) -> Option<ControlButton> {
        self.slide
            .as_ref()
            .map(|slide| match slide.transition().direction {
                NavDirection::Forward => ControlButton::Next,
                NavDirection::Backward => ControlButton::Previous,
            })
    }
}
