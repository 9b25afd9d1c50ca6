use crate::app::{AppState, Panel};
use crate::constants::{CONTROLS_HEIGHT, HINT_HEIGHT, INDICATOR_HEIGHT};
use crate::services::controls::{ControlsLayout, render_controls};
use crate::services::panels::PanelWidget;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::Instant;

/// Screen regions, shared by the renderer and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub indicator: Rect,
    /// Band the panels slide through.
    pub content: Rect,
    /// Square panel region inside `content`.
    pub panel: Rect,
    pub controls: ControlsLayout,
    pub hint: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INDICATOR_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(CONTROLS_HEIGHT),
                Constraint::Length(HINT_HEIGHT),
            ])
            .split(area);
        let content = chunks[1];
        Self {
            indicator: chunks[0],
            content,
            panel: square_in(content),
            controls: ControlsLayout::new(chunks[2]),
            hint: chunks[3],
        }
    }
}

/// Largest visually square region centred in `area`.
///
/// Terminal cells are about twice as tall as they are wide, so a square
/// spans two columns per row.
pub fn square_in(area: Rect) -> Rect {
    let rows = area.height.min(area.width / 2);
    let columns = rows * 2;
    Rect {
        x: area.x + (area.width - columns) / 2,
        y: area.y + (area.height - rows) / 2,
        width: columns,
        height: rows,
    }
}

pub fn view(f: &mut Frame, state: &AppState) {
    render_at(f, state, Instant::now());
}

/// Draw the screen as it looks at `now`.
pub fn render_at(f: &mut Frame, state: &AppState, now: Instant) {
    let layout = ScreenLayout::new(f.area());

    render_indicator(f, state.current_panel(), layout.indicator);

    match state.slide_frame(now, layout.content.width) {
        Some(frame) => {
            f.render_widget(
                PanelWidget::new(frame.outgoing, layout.panel).offset(frame.outgoing_offset),
                layout.content,
            );
            f.render_widget(
                PanelWidget::new(frame.incoming, layout.panel).offset(frame.incoming_offset),
                layout.content,
            );
        }
        None => {
            f.render_widget(
                PanelWidget::new(state.current_panel(), layout.panel),
                layout.content,
            );
        }
    }

    render_controls(f, &layout.controls, state.pressed_button());
    render_hint(f, layout.hint);
}

fn render_indicator(f: &mut Frame, current: Panel, area: Rect) {
    let spans: Vec<Span> = Panel::ALL
        .iter()
        .flat_map(|panel| {
            let (dot, color) = if *panel == current {
                ("●", Color::White)
            } else {
                ("○", Color::DarkGray)
            };
            [Span::styled(dot, Style::default().fg(color)), Span::raw(" ")]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_hint(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Span::styled(
        "←/h prev . →/l next . 1-5 jump . q quit",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hint, area);
}
