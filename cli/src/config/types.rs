//! Sections of the configuration file.

use serde::{Deserialize, Serialize};
use slidedeck_tui::{DEFAULT_ANIMATION_MS, DEFAULT_FRAME_MS, LayoutDirection, Panel};

/// What is shown and how edges map to screen sides.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    /// Panel shown at startup
    pub start: Panel,
    pub layout_direction: LayoutDirection,
}

/// Slide timing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationSettings {
    /// Length of one slide; 0 swaps panels without animating
    pub duration_ms: u64,
    /// Redraw interval while a slide is running
    pub frame_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        AnimationSettings {
            duration_ms: DEFAULT_ANIMATION_MS,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}
