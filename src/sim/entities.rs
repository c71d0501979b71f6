//! Game entities
//!
//! `Plane` and `Zeppelin` wrap a `PhysicsBody` with their own bounds and
//! boundary behaviour. `Ravine` is scenery and has no physics at all.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::num::{Narrow, Wide, narrow_int, narrow_to_pixel, random_in_range, wide, wide_int, wide_to_pixel};
use super::tuning::Tuning;
use crate::consts::*;
use crate::platform::{Color, Renderer, Sprite};

/// Cruising speed, px/frame
const CRUISE: Wide = wide_int(1);
/// Speed when pushing in the direction of travel (1.5)
const BOOST: Wide = wide(3 << 15);
/// Speed when pushing against the direction of travel (0.5)
const BRAKE: Wide = wide(1 << 15);
/// Zeppelin drift speed (0.5)
const DRIFT: Wide = wide(1 << 15);

/// The player's plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub body: PhysicsBody,
}

impl Default for Plane {
    fn default() -> Self {
        Self::new()
    }
}

impl Plane {
    /// How far past each screen edge the plane may fly
    pub const OFFSCREEN_MARGIN: i16 = 10;

    pub fn new() -> Self {
        Self {
            body: PhysicsBody::with_bounds(
                wide_int(-(Self::OFFSCREEN_MARGIN + PLANE_WIDTH) as i32),
                wide_int((WIDTH + Self::OFFSCREEN_MARGIN) as i32),
                Narrow::ZERO,
                narrow_int(RAVINE_TOP - PLANE_HEIGHT - 2),
            ),
        }
    }

    /// Starting position and heading for a new game
    pub fn reset(&mut self) {
        self.body.x = wide_int(10);
        self.body.y = narrow_int(2);
        self.body.x_vel = CRUISE;
    }

    /// Set horizontal speed from the held direction buttons.
    ///
    /// Speed snaps back to cruise every frame. Pushing along the heading
    /// boosts, pushing against it brakes, and a brake from the right keeps
    /// the plane moving right. Right is applied after left.
    pub fn steer(&mut self, left: bool, right: bool) {
        let heading_left = |v: Wide| v < Wide::ZERO;

        let mut v = if heading_left(self.body.x_vel) { -CRUISE } else { CRUISE };
        if left {
            v = if heading_left(v) { -BOOST } else { BRAKE };
        }
        if right {
            v = if heading_left(v) { -BRAKE } else { BOOST };
        }
        self.body.x_vel = v;
    }

    /// Horizontal motion; on reaching either bound the plane comes back at a
    /// random altitude. Returns whether the altitude was re-rolled.
    pub fn integrate_horizontal<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) -> bool {
        self.body.integrate_horizontal(tuning);
        if !self.body.at_horizontal_bound() {
            return false;
        }
        self.body.y = random_in_range(rng, self.body.y_min, self.body.y_max);
        log::trace!("Plane re-entered at y={}", self.body.y);
        true
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_sprite_masked(
            wide_to_pixel(self.body.x),
            narrow_to_pixel(self.body.y),
            Sprite::Plane,
            self.body.x_vel > Wide::ZERO,
        );
    }
}

/// Title-screen zeppelin drifting back and forth along the top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zeppelin {
    pub body: PhysicsBody,
}

impl Default for Zeppelin {
    fn default() -> Self {
        Self::new()
    }
}

impl Zeppelin {
    pub const OFFSCREEN_MARGIN: i16 = 20;

    pub fn new() -> Self {
        Self {
            body: PhysicsBody::with_bounds(
                wide_int(-(Self::OFFSCREEN_MARGIN + ZEPPELIN_WIDTH) as i32),
                wide_int((WIDTH + Self::OFFSCREEN_MARGIN) as i32),
                Narrow::ZERO,
                Narrow::ZERO,
            ),
        }
    }

    /// Start offscreen right, drifting left
    pub fn reset(&mut self) {
        self.body.x = self.body.x_max;
        self.body.y = Narrow::ZERO;
        self.body.x_vel = -DRIFT;
    }

    pub fn integrate_horizontal(&mut self, tuning: &Tuning) {
        self.body.integrate_horizontal(tuning);
    }

    /// Blank the zeppelin's current footprint before it moves
    pub fn erase<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let (w, h) = Sprite::Zeppelin.size();
        renderer.fill_rect(wide_to_pixel(self.body.x), narrow_to_pixel(self.body.y), w, h, Color::Black);
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_sprite_masked(
            wide_to_pixel(self.body.x),
            narrow_to_pixel(self.body.y),
            Sprite::Zeppelin,
            self.body.x_vel > Wide::ZERO,
        );
    }
}

/// The ravine strip along the bottom of the screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ravine;

impl Ravine {
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_sprite(0, RAVINE_TOP, Sprite::Ravine, 0);
    }
}
