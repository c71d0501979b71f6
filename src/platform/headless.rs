//! In-memory platform
//!
//! Runs the game without a screen: button presses come from a script, draw
//! calls are recorded per frame, and tones simply count down frames. Used by
//! the native binary and by tests.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{Audio, Button, ButtonSet, Buttons, Color, FramePacer, Renderer, SeedSource, Sprite};
use crate::consts::FRAME_RATE;

/// One recorded drawing operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Clear,
    Sprite { x: i16, y: i16, sprite: Sprite, frame: u8 },
    Masked { x: i16, y: i16, sprite: Sprite, flipped: bool },
    FillRect { x: i16, y: i16, w: i16, h: i16, color: Color },
    Compressed { x: i16, y: i16, sprite: Sprite },
}

#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    script: VecDeque<ButtonSet>,
    current: ButtonSet,
    previous: ButtonSet,
    pending: Vec<DrawCall>,
    /// Draw calls of the most recently displayed frame
    pub last_frame: Vec<DrawCall>,
    pub frames_displayed: u64,
    /// While true, `next_frame` reports that no frame is due
    pub hold: bool,
    frame_rate: u8,
    tone_frames_left: u32,
    /// Every tone requested, as (frequency, duration ms)
    pub tones: Vec<(u16, u16)>,
    seed: Option<u64>,
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HeadlessPlatform {
    /// `seed` fixes every generated seed; `None` draws from the system clock
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            script: VecDeque::new(),
            current: ButtonSet::EMPTY,
            previous: ButtonSet::EMPTY,
            pending: Vec::new(),
            last_frame: Vec::new(),
            frames_displayed: 0,
            hold: false,
            frame_rate: FRAME_RATE,
            tone_frames_left: 0,
            tones: Vec::new(),
            seed,
        }
    }

    pub fn with_frame_rate(mut self, frame_rate: u8) -> Self {
        self.frame_rate = frame_rate.max(1);
        self
    }

    /// Queue the buttons held for the next polled frame
    pub fn push_buttons(&mut self, buttons: ButtonSet) {
        self.script.push_back(buttons);
    }

    /// Queue `frames` frames with nothing held
    pub fn push_idle(&mut self, frames: usize) {
        self.script.extend(std::iter::repeat_n(ButtonSet::EMPTY, frames));
    }

    pub fn pending_script(&self) -> usize {
        self.script.len()
    }
}

impl FramePacer for HeadlessPlatform {
    fn next_frame(&mut self) -> bool {
        if self.hold {
            return false;
        }
        self.tone_frames_left = self.tone_frames_left.saturating_sub(1);
        true
    }
}

impl Buttons for HeadlessPlatform {
    fn poll(&mut self) {
        self.previous = self.current;
        self.current = self.script.pop_front().unwrap_or(ButtonSet::EMPTY);
    }

    fn pressed(&self, button: Button) -> bool {
        self.current.contains(button)
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.current.newly_pressed_since(self.previous).contains(button)
    }
}

impl Renderer for HeadlessPlatform {
    fn clear(&mut self) {
        self.pending.push(DrawCall::Clear);
    }

    fn draw_sprite(&mut self, x: i16, y: i16, sprite: Sprite, frame: u8) {
        self.pending.push(DrawCall::Sprite { x, y, sprite, frame });
    }

    fn draw_sprite_masked(&mut self, x: i16, y: i16, sprite: Sprite, flipped: bool) {
        self.pending.push(DrawCall::Masked { x, y, sprite, flipped });
    }

    fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        self.pending.push(DrawCall::FillRect { x, y, w, h, color });
    }

    fn draw_compressed(&mut self, x: i16, y: i16, sprite: Sprite) {
        self.pending.push(DrawCall::Compressed { x, y, sprite });
    }

    fn display(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_displayed += 1;
    }
}

impl Audio for HeadlessPlatform {
    fn play_tone(&mut self, freq_hz: u16, duration_ms: u16) {
        let frames = (duration_ms as u32 * self.frame_rate as u32).div_ceil(1000);
        log::trace!("Tone {} Hz for {} ms ({} frames)", freq_hz, duration_ms, frames);
        self.tones.push((freq_hz, duration_ms));
        self.tone_frames_left = frames;
    }

    fn stop_tone(&mut self) {
        self.tone_frames_left = 0;
    }

    fn is_playing(&self) -> bool {
        self.tone_frames_left > 0
    }
}

impl SeedSource for HeadlessPlatform {
    fn generate_seed(&mut self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}
