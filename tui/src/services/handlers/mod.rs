//! Event Handlers Module
//!
//! The main `update()` function routes InputEvents to the appropriate handler modules.

mod navigation;

use crate::app::{AppState, InputEvent, NavDirection, OutputEvent};
use ratatui::layout::Size;
use std::time::Instant;
use tokio::sync::mpsc::Sender;

pub fn update(
    state: &mut AppState,
    event: InputEvent,
    terminal_size: Size,
    output_tx: &Sender<OutputEvent>,
) {
    let now = Instant::now();
    match event {
        InputEvent::Previous => {
            navigation::handle_navigate(state, NavDirection::Backward, now, output_tx);
        }
        InputEvent::Next => {
            navigation::handle_navigate(state, NavDirection::Forward, now, output_tx);
        }
        InputEvent::SelectPanel(panel) => {
            navigation::handle_select_panel(state, panel, now, output_tx);
        }
        InputEvent::MouseClick(column, row) => {
            navigation::handle_mouse_click(state, column, row, terminal_size, now, output_tx);
        }
        InputEvent::Resized(width, height) => {
            log::debug!("terminal resized to {}x{}", width, height);
        }
        InputEvent::Quit => {}
    }
}

/// Emit a completed slide, if any, as `OutputEvent::Settled`.
pub fn settle(state: &mut AppState, now: Instant, output_tx: &Sender<OutputEvent>) {
    if let Some(panel) = state.settle(now) {
        publish(output_tx, OutputEvent::Settled(panel));
    }
}

/// Never blocks the UI: a full or closed channel drops the event.
pub(crate) fn publish(output_tx: &Sender<OutputEvent>, event: OutputEvent) {
    if let Err(e) = output_tx.try_send(event) {
        log::warn!("Failed to publish output event: {}", e);
    }
}
