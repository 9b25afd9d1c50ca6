use crate::app::{InputEvent, Panel};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

pub fn map_crossterm_event_to_input_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::Quit)
                }
                KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
                KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Char('p') => {
                    Some(InputEvent::Previous)
                }
                KeyCode::Right
                | KeyCode::Tab
                | KeyCode::Char(' ')
                | KeyCode::Char('l')
                | KeyCode::Char('n') => Some(InputEvent::Next),
                KeyCode::Char(c @ '1'..='9') => c
                    .to_digit(10)
                    .and_then(|digit| Panel::from_index(digit as usize - 1))
                    .map(InputEvent::SelectPanel),
                _ => None,
            }
        }
        Event::Mouse(me) => match me.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(InputEvent::MouseClick(me.column, me.row))
            }
            _ => None,
        },
        Event::Resize(w, h) => Some(InputEvent::Resized(w, h)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation_keys() {
        for code in [KeyCode::Left, KeyCode::BackTab, KeyCode::Char('h'), KeyCode::Char('p')] {
            assert_eq!(map_crossterm_event_to_input_event(key(code)), Some(InputEvent::Previous));
        }
        for code in [
            KeyCode::Right,
            KeyCode::Tab,
            KeyCode::Char(' '),
            KeyCode::Char('l'),
            KeyCode::Char('n'),
        ] {
            assert_eq!(map_crossterm_event_to_input_event(key(code)), Some(InputEvent::Next));
        }
    }

    #[test]
    fn test_digit_keys_select_panels() {
        assert_eq!(
            map_crossterm_event_to_input_event(key(KeyCode::Char('1'))),
            Some(InputEvent::SelectPanel(Panel::A))
        );
        assert_eq!(
            map_crossterm_event_to_input_event(key(KeyCode::Char('5'))),
            Some(InputEvent::SelectPanel(Panel::E))
        );
        assert_eq!(map_crossterm_event_to_input_event(key(KeyCode::Char('6'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_crossterm_event_to_input_event(key(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(
            map_crossterm_event_to_input_event(key(KeyCode::Char('q'))),
            Some(InputEvent::Quit)
        );
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_crossterm_event_to_input_event(ctrl_c), Some(InputEvent::Quit));
        assert_eq!(map_crossterm_event_to_input_event(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_crossterm_event_to_input_event(release), None);
    }

    #[test]
    fn test_mouse_left_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_crossterm_event_to_input_event(click),
            Some(InputEvent::MouseClick(12, 7))
        );

        let right_click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_crossterm_event_to_input_event(right_click), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            map_crossterm_event_to_input_event(Event::Resize(80, 24)),
            Some(InputEvent::Resized(80, 24))
        );
    }
}
