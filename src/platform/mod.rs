//! Platform abstraction layer
//!
//! The simulation never touches hardware. Everything it needs from the device
//! comes through these traits:
//! - Frame pacing
//! - Button state (level and edge triggered)
//! - Drawing into the frame buffer
//! - Tone playback
//! - Seeds for the RNG

pub mod headless;

pub use headless::{DrawCall, HeadlessPlatform};

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physical buttons the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Left,
    Right,
    A,
    B,
}

impl Button {
    pub const fn mask(self) -> u8 {
        match self {
            Button::Left => 1 << 0,
            Button::Right => 1 << 1,
            Button::A => 1 << 2,
            Button::B => 1 << 3,
        }
    }
}

/// Set of buttons held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    pub fn of(buttons: &[Button]) -> Self {
        buttons.iter().fold(Self::EMPTY, |set, &b| set.with(b))
    }

    pub const fn with(self, button: Button) -> Self {
        ButtonSet(self.0 | button.mask())
    }

    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    /// Buttons in `self` that are not in `earlier`
    pub const fn newly_pressed_since(self, earlier: ButtonSet) -> Self {
        ButtonSet(self.0 & !earlier.0)
    }
}

/// Monochrome pixel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

/// Bitmaps the game draws. Their pixel data lives with the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    StudioLogo,
    TitleLogo,
    PressA,
    Ravine,
    Plane,
    Zeppelin,
}

impl Sprite {
    /// Width and height in pixels
    pub const fn size(self) -> (i16, i16) {
        match self {
            Sprite::StudioLogo => (WIDTH, HEIGHT),
            Sprite::TitleLogo => (WIDTH - 2 * LOGO_X, 24),
            Sprite::PressA => (PROMPT_WIDTH, PROMPT_HEIGHT),
            Sprite::Ravine => (WIDTH, HEIGHT - RAVINE_TOP),
            Sprite::Plane => (PLANE_WIDTH, PLANE_HEIGHT),
            Sprite::Zeppelin => (ZEPPELIN_WIDTH, ZEPPELIN_HEIGHT),
        }
    }
}

/// Gates the simulation to the device frame rate
pub trait FramePacer {
    /// True when a new frame is due; the caller skips the tick otherwise
    fn next_frame(&mut self) -> bool;
}

pub trait Buttons {
    /// Latch the current button state; call once per frame
    fn poll(&mut self);
    fn pressed(&self, button: Button) -> bool;
    /// Pressed this frame but not the previous one
    fn just_pressed(&self, button: Button) -> bool;
}

/// Frame buffer drawing. Coordinates are integer pixels and may be offscreen.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_sprite(&mut self, x: i16, y: i16, sprite: Sprite, frame: u8);
    /// Draw with transparency, optionally mirrored horizontally
    fn draw_sprite_masked(&mut self, x: i16, y: i16, sprite: Sprite, flipped: bool);
    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color);
    fn draw_compressed(&mut self, x: i16, y: i16, sprite: Sprite);
    /// Commit the frame buffer to the screen
    fn display(&mut self);
}

pub trait Audio {
    fn play_tone(&mut self, freq_hz: u16, duration_ms: u16);
    fn stop_tone(&mut self);
    fn is_playing(&self) -> bool;
}

pub trait SeedSource {
    fn generate_seed(&mut self) -> u64;
}

/// Everything the game loop needs from a device
pub trait Platform: FramePacer + Buttons + Renderer + Audio + SeedSource {}

impl<T: FramePacer + Buttons + Renderer + Audio + SeedSource> Platform for T {}
