//! The five static panels and the widget that paints them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use crate::app::Panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub fill: Color,
    pub label_color: Color,
    /// Leave the four corner cells unpainted.
    pub rounded: bool,
    pub bold: bool,
}

pub fn panel_style(panel: Panel) -> PanelStyle {
    let base = PanelStyle {
        fill: Color::Red,
        label_color: Color::White,
        rounded: false,
        bold: false,
    };
    match panel {
        Panel::A => base,
        Panel::B => PanelStyle {
            fill: Color::Green,
            ..base
        },
        Panel::C => PanelStyle {
            fill: Color::Blue,
            ..base
        },
        Panel::D => PanelStyle {
            fill: Color::Yellow,
            rounded: true,
            ..base
        },
        Panel::E => PanelStyle {
            fill: Color::Cyan,
            bold: true,
            ..base
        },
    }
}

/// Paints `panel` at `bounds` shifted horizontally by `offset` columns.
///
/// Only cells inside the render area are touched, so a panel that has
/// slid partly off screen is clipped rather than squeezed.
pub struct PanelWidget {
    pub panel: Panel,
    pub bounds: Rect,
    pub offset: i32,
}

impl PanelWidget {
    pub fn new(panel: Panel, bounds: Rect) -> Self {
        Self {
            panel,
            bounds,
            offset: 0,
        }
    }

    pub fn offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    /// Label glyph at panel-local column `x` on the label row, if any.
    fn label_char(&self, x: u16) -> Option<char> {
        let label = self.panel.label();
        let label_width: u16 = label.chars().filter_map(|c| c.width()).sum::<usize>() as u16;
        let start = self.bounds.width.saturating_sub(label_width) / 2;
        let mut column = start;
        for c in label.chars() {
            let w = c.width().unwrap_or(0) as u16;
            if x >= column && x < column + w.max(1) {
                return Some(c);
            }
            column += w;
        }
        None
    }
}

impl Widget for PanelWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.bounds.is_empty() {
            return;
        }
        let style = panel_style(self.panel);
        let label_row = self.bounds.height / 2;
        let last_col = self.bounds.width - 1;
        let last_row = self.bounds.height - 1;

        let area = area.intersection(Rect {
            y: self.bounds.y,
            height: self.bounds.height,
            ..area
        });
        for y in area.top()..area.bottom() {
            let local_y = y - self.bounds.y;
            for x in area.left()..area.right() {
                let local_x = i32::from(x) - i32::from(self.bounds.x) - self.offset;
                if local_x < 0 || local_x > i32::from(last_col) {
                    continue;
                }
                let local_x = local_x as u16;
                let corner = (local_x == 0 || local_x == last_col)
                    && (local_y == 0 || local_y == last_row);
                if style.rounded && corner {
                    continue;
                }
                let Some(cell) = buf.cell_mut((x, y)) else {
                    continue;
                };
                cell.reset();
                cell.set_bg(style.fill);
                match (local_y == label_row)
                    .then(|| self.label_char(local_x))
                    .flatten()
                {
                    Some(c) => {
                        cell.set_char(c).set_fg(style.label_color);
                        if style.bold {
                            cell.modifier.insert(Modifier::BOLD);
                        }
                    }
                    None => {
                        cell.set_char(' ');
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_panel_styles() {
        assert_eq!(panel_style(Panel::A).fill, Color::Red);
        assert_eq!(panel_style(Panel::B).fill, Color::Green);
        assert_eq!(panel_style(Panel::C).fill, Color::Blue);
        assert!(panel_style(Panel::D).rounded);
        assert_eq!(panel_style(Panel::D).fill, Color::Yellow);
        assert!(panel_style(Panel::E).bold);
        assert_eq!(panel_style(Panel::E).fill, Color::Cyan);
        for panel in Panel::ALL {
            assert_eq!(panel_style(panel).label_color, Color::White);
        }
    }

    #[test]
    fn test_label_is_centered() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        PanelWidget::new(Panel::A, area).render(area, &mut buf);

        assert_eq!(row_text(&buf, 1), "  View A  ");
        assert_eq!(buf[(0, 0)].bg, Color::Red);
        assert_eq!(buf[(4, 1)].fg, Color::White);
    }

    #[test]
    fn test_rounded_panel_skips_corners() {
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        PanelWidget::new(Panel::D, area).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, Color::Reset);
        assert_eq!(buf[(7, 3)].bg, Color::Reset);
        assert_eq!(buf[(1, 0)].bg, Color::Yellow);
        assert_eq!(buf[(0, 1)].bg, Color::Yellow);
    }

    #[test]
    fn test_bold_label() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        PanelWidget::new(Panel::E, area).render(area, &mut buf);

        assert!(buf[(2, 1)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(2, 1)].symbol(), "V");
    }

    #[test]
    fn test_offset_panel_is_clipped() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        PanelWidget::new(Panel::B, area)
            .offset(6)
            .render(area, &mut buf);

        for x in 0..6 {
            assert_eq!(buf[(x, 0)].bg, Color::Reset);
        }
        for x in 6..10 {
            assert_eq!(buf[(x, 0)].bg, Color::Green);
        }
        // "  View B  " shifted right by six shows its first four columns.
        assert_eq!(row_text(&buf, 1), "        Vi");
    }

    #[test]
    fn test_fully_offscreen_panel_paints_nothing() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        PanelWidget::new(Panel::C, area)
            .offset(-10)
            .render(area, &mut buf);

        assert_eq!(buf, Buffer::empty(area));
    }
}
