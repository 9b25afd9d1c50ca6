//! Transition director.
//!
//! Decides which edge a panel change slides across and emits exactly one
//! [`Transition`] per change.

use std::time::Instant;

use crate::app::{Edge, NavDirection, Panel};
use crate::services::selector::CircularSelector;

/// A one-shot panel change, published to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Panel,
    pub to: Panel,
    pub direction: NavDirection,
    /// Edge the outgoing panel exits toward. The incoming panel enters
    /// from the opposite one.
    pub edge: Edge,
    pub started_at: Instant,
}

impl Transition {
    pub fn entry_edge(&self) -> Edge {
        self.edge.opposite()
    }
}

#[derive(Debug, Default)]
pub struct TransitionDirector {
    edge: Edge,
}

impl TransitionDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge used by the most recent transition (leading before any).
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Step the selector one panel and describe the resulting slide.
    pub fn navigate(
        &mut self,
        selector: &mut CircularSelector,
        direction: NavDirection,
        now: Instant,
    ) -> Transition {
        let from = selector.current();
        let to = selector.step(direction);
        self.emit(from, to, direction, now)
    }

    /// Jump straight to `target`, sliding the short way around.
    pub fn jump_to(
        &mut self,
        selector: &mut CircularSelector,
        target: Panel,
        now: Instant,
    ) -> Option<Transition> {
        let direction = selector.direction_to(target)?;
        let from = selector.current();
        selector.select(target);
        Some(self.emit(from, target, direction, now))
    }

    fn emit(
        &mut self,
        from: Panel,
        to: Panel,
        direction: NavDirection,
        now: Instant,
    ) -> Transition {
        self.edge = direction.edge();
        log::debug!(
            "transition {} -> {} ({:?}, exit {:?})",
            from,
            to,
            direction,
            self.edge
        );
        Transition {
            from,
            to,
            direction,
            edge: self.edge,
            started_at: now,
        }
    }
}
