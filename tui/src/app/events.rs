use crate::app::Panel;
use crate::services::transition::Transition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// "previous" control
    Previous,
    /// "next" control
    Next,
    SelectPanel(Panel),
    MouseClick(u16, u16),
    Resized(u16, u16),
    Quit,
}

/// Events published by the UI to whoever drives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    TransitionStarted(Transition),
    /// The slide finished and the panel is at rest.
    Settled(Panel),
}
