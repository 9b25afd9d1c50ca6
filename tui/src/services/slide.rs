//! Slide animation for an in-flight [`Transition`].
//!
//! Linear timing. The outgoing panel travels one full width toward the
//! exit side while the incoming panel travels in from the other side.

use std::time::{Duration, Instant};

use crate::app::{LayoutDirection, Panel, Side};
use crate::services::transition::Transition;

/// Snapshot of a running slide at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideFrame {
    pub progress: f32,
    pub outgoing: Panel,
    pub incoming: Panel,
    /// Horizontal displacement in columns, negative is left.
    pub outgoing_offset: i32,
    pub incoming_offset: i32,
}

#[derive(Debug, Clone)]
pub struct SlideAnimation {
    transition: Transition,
    duration: Duration,
    exit_side: Side,
}

impl SlideAnimation {
    pub fn new(transition: Transition, duration: Duration, layout: LayoutDirection) -> Self {
        Self {
            transition,
            duration,
            exit_side: layout.resolve(transition.edge),
        }
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn exit_side(&self) -> Side {
        self.exit_side
    }

    /// Fraction of the slide completed at `now`, clamped to `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.transition.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Offsets for both panels across a travel distance of `width`
    /// columns. `None` once the slide has come to rest.
    pub fn sample(&self, now: Instant, width: u16) -> Option<SlideFrame> {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return None;
        }
        let width = f32::from(width);
        let sign = self.exit_side.sign();
        Some(SlideFrame {
            progress,
            outgoing: self.transition.from,
            incoming: self.transition.to,
            outgoing_offset: sign * (progress * width).round() as i32,
            incoming_offset: -sign * ((1.0 - progress) * width).round() as i32,
        })
    }
}
