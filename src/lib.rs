//! Ravine Despoiler - a tiny handheld arcade game
//!
//! Core modules:
//! - `sim`: Deterministic fixed-point simulation (physics, entities, screen state machine)
//! - `platform`: Frame pacing, buttons, drawing, tones and seeding behind traits
//! - `settings`: Data-driven configuration loaded from JSON

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions in pixels
    pub const WIDTH: i16 = 128;
    pub const HEIGHT: i16 = 64;

    /// Target frame rate of the device
    pub const FRAME_RATE: u8 = 60;

    /// Sprite sizes
    pub const PLANE_WIDTH: i16 = 16;
    pub const PLANE_HEIGHT: i16 = 8;
    pub const ZEPPELIN_WIDTH: i16 = 32;
    pub const ZEPPELIN_HEIGHT: i16 = 12;

    /// Top edge of the ravine strip; the plane flies above it
    pub const RAVINE_TOP: i16 = 44;

    /// Title card placement
    pub const LOGO_X: i16 = 14;
    pub const LOGO_Y: i16 = 14;

    /// "Press A" prompt placement and size
    pub const PROMPT_X: i16 = 24;
    pub const PROMPT_Y: i16 = 48;
    pub const PROMPT_WIDTH: i16 = 80;
    pub const PROMPT_HEIGHT: i16 = 8;

    /// Screen timings, in frames since entering the screen
    pub const LOGO_FRAMES: u32 = 90;
    pub const PROMPT_FRAME: u32 = 180;
    pub const OBJECTIVE_FRAMES: u32 = 120;
    pub const LEVEL_COMPLETE_FRAMES: u32 = 150;
}
