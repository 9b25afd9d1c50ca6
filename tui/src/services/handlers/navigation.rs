//! Navigation Event Handlers
//!
//! Handles previous/next, direct panel selection and clicks on the on-screen buttons.

use std::time::Instant;

use crate::app::{AppState, NavDirection, OutputEvent, Panel};
use crate::view::ScreenLayout;
use ratatui::layout::{Rect, Size};
use tokio::sync::mpsc::Sender;

use super::publish;

pub fn handle_navigate(
    state: &mut AppState,
    direction: NavDirection,
    now: Instant,
    output_tx: &Sender<OutputEvent>,
) {
    let transition = state.navigate(direction, now);
    publish(output_tx, OutputEvent::TransitionStarted(transition));
}

pub fn handle_select_panel(
    state: &mut AppState,
    panel: Panel,
    now: Instant,
    output_tx: &Sender<OutputEvent>,
) {
    if let Some(transition) = state.jump_to(panel, now) {
        publish(output_tx, OutputEvent::TransitionStarted(transition));
    }
}

pub fn handle_mouse_click(
    state: &mut AppState,
    column: u16,
    row: u16,
    terminal_size: Size,
    now: Instant,
    output_tx: &Sender<OutputEvent>,
) {
    let layout = ScreenLayout::new(Rect::new(0, 0, terminal_size.width, terminal_size.height));
    if let Some(button) = layout.controls.hit_test(column, row) {
        handle_navigate(state, button.direction(), now, output_tx);
    }
}
