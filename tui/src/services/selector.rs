//! Circular panel selection.
//!
//! The selection index moves around a fixed ring of panels and always
//! wraps, in both directions.

use crate::app::{NavDirection, Panel};

/// Move `steps` positions from `current` around a ring of `count` slots.
///
/// The result is always in `[0, count)` whatever the sign or size of
/// `steps`. An empty ring yields `0`.
pub fn advance(current: usize, steps: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let count = count as i128;
    (((current as i128 + steps as i128) % count + count) % count) as usize
}

/// Holds the selected panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircularSelector {
    current: Panel,
}

impl CircularSelector {
    pub fn new(start: Panel) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Panel {
        self.current
    }

    /// The panel `steps` away from the current one, without moving.
    pub fn offset(&self, steps: isize) -> Panel {
        Panel::ALL[advance(self.current.index(), steps, Panel::COUNT)]
    }

    pub fn next(&mut self) -> Panel {
        self.current = self.offset(1);
        self.current
    }

    pub fn prev(&mut self) -> Panel {
        self.current = self.offset(-1);
        self.current
    }

    pub fn step(&mut self, direction: NavDirection) -> Panel {
        match direction {
            NavDirection::Forward => self.next(),
            NavDirection::Backward => self.prev(),
        }
    }

    pub fn select(&mut self, panel: Panel) {
        self.current = panel;
    }

    /// Shortest way around the ring to `target`; ties go forward.
    ///
    /// Returns `None` when `target` is already selected.
    pub fn direction_to(&self, target: Panel) -> Option<NavDirection> {
        if target == self.current {
            return None;
        }
        let forward = advance(target.index(), -(self.current.index() as isize), Panel::COUNT);
        let backward = Panel::COUNT - forward;
        if forward <= backward {
            Some(NavDirection::Forward)
        } else {
            Some(NavDirection::Backward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_forward() {
        assert_eq!(advance(4, 1, 5), 0);
        assert_eq!(advance(0, 1, 5), 1);
    }

    #[test]
    fn test_advance_wraps_backward() {
        assert_eq!(advance(0, -1, 5), 4);
        assert_eq!(advance(3, -1, 5), 2);
    }

    #[test]
    fn test_advance_large_steps() {
        assert_eq!(advance(2, 13, 5), 0);
        assert_eq!(advance(2, -13, 5), 4);
        assert_eq!(advance(0, isize::MIN, 5), 2);
        assert_eq!(advance(0, isize::MAX, 7), (isize::MAX % 7) as usize);
    }

    #[test]
    fn test_advance_round_trip() {
        for count in 1..=9 {
            for i in 0..count {
                assert_eq!(advance(advance(i, 1, count), -1, count), i);
                assert_eq!(advance(advance(i, -1, count), 1, count), i);
            }
        }
    }

    #[test]
    fn test_advance_single_slot_and_empty_ring() {
        assert_eq!(advance(0, 1, 1), 0);
        assert_eq!(advance(0, -1, 1), 0);
        assert_eq!(advance(3, 1, 0), 0);
    }

    #[test]
    fn test_next_visits_every_panel_then_wraps() {
        let mut selector = CircularSelector::new(Panel::A);
        let visited: Vec<Panel> = (0..4).map(|_| selector.next()).collect();
        assert_eq!(visited, vec![Panel::B, Panel::C, Panel::D, Panel::E]);
        assert_eq!(selector.next(), Panel::A);
    }

    #[test]
    fn test_prev_from_first_wraps_to_last() {
        let mut selector = CircularSelector::new(Panel::A);
        assert_eq!(selector.prev(), Panel::E);
        assert_eq!(selector.current(), Panel::E);
    }

    #[test]
    fn test_offset_does_not_move() {
        let selector = CircularSelector::new(Panel::D);
        assert_eq!(selector.offset(2), Panel::A);
        assert_eq!(selector.offset(-4), Panel::E);
        assert_eq!(selector.current(), Panel::D);
    }

    #[test]
    fn test_direction_to_takes_shortest_path() {
        let selector = CircularSelector::new(Panel::A);
        assert_eq!(selector.direction_to(Panel::A), None);
        assert_eq!(selector.direction_to(Panel::B), Some(NavDirection::Forward));
        assert_eq!(selector.direction_to(Panel::C), Some(NavDirection::Forward));
        assert_eq!(selector.direction_to(Panel::D), Some(NavDirection::Backward));
        assert_eq!(selector.direction_to(Panel::E), Some(NavDirection::Backward));

        let selector = CircularSelector::new(Panel::E);
        assert_eq!(selector.direction_to(Panel::A), Some(NavDirection::Forward));
        assert_eq!(selector.direction_to(Panel::D), Some(NavDirection::Backward));
    }
}
