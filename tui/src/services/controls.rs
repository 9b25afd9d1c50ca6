//! Previous / next buttons.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::NavDirection;
use crate::constants::{BUTTON_HEIGHT, BUTTON_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Previous,
    Next,
}

impl ControlButton {
    pub fn direction(self) -> NavDirection {
        match self {
            ControlButton::Previous => NavDirection::Backward,
            ControlButton::Next => NavDirection::Forward,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ControlButton::Previous => "◀",
            ControlButton::Next => "▶",
        }
    }
}

/// Where the two buttons sit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlsLayout {
    pub previous: Rect,
    pub next: Rect,
}

impl ControlsLayout {
    /// Buttons spaced evenly across `area`, vertically centred.
    pub fn new(area: Rect) -> Self {
        let height = BUTTON_HEIGHT.min(area.height);
        let row = Rect {
            y: area.y + (area.height - height) / 2,
            height,
            ..area
        };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Fill(1),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Fill(1),
            ])
            .split(row);
        Self {
            previous: columns[1],
            next: columns[3],
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<ControlButton> {
        let position = Position::new(column, row);
        if self.previous.contains(position) {
            Some(ControlButton::Previous)
        } else if self.next.contains(position) {
            Some(ControlButton::Next)
        } else {
            None
        }
    }
}

/// Draw both buttons; `pressed` is highlighted while its slide runs.
pub fn render_controls(f: &mut Frame, layout: &ControlsLayout, pressed: Option<ControlButton>) {
    for (button, area) in [
        (ControlButton::Previous, layout.previous),
        (ControlButton::Next, layout.next),
    ] {
        let style = if pressed == Some(button) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let widget = Paragraph::new(button.glyph())
            .alignment(Alignment::Center)
            .style(style)
            .block(block);
        f.render_widget(widget, area);
    }
}
