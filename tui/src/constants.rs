// ========== Animation Constants ==========
pub const DEFAULT_ANIMATION_MS: u64 = 350;
pub const DEFAULT_FRAME_MS: u64 = 16;

// ========== Layout Constants ==========
pub const BUTTON_WIDTH: u16 = 7;
pub const BUTTON_HEIGHT: u16 = 3;
pub const INDICATOR_HEIGHT: u16 = 1;
pub const CONTROLS_HEIGHT: u16 = 5;
pub const HINT_HEIGHT: u16 = 1;

// ========== Channels ==========
pub const INTERNAL_CHANNEL_CAPACITY: usize = 100;
