//! Axis-aligned physics body
//!
//! Every moving thing in the game is a `PhysicsBody`: a position, a velocity
//! and a bounding box it can never leave. Horizontal walls reflect without
//! losing speed; the floor soaks up some of the vertical speed.

use serde::{Deserialize, Serialize};

use super::num::{Narrow, Wide, clamp, narrow_int, wide_int};
use super::tuning::Tuning;
use crate::consts::{HEIGHT, WIDTH};

/// Position, velocity and bounds of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsBody {
    pub x: Wide,
    pub x_min: Wide,
    pub x_max: Wide,
    pub x_vel: Wide,
    pub y: Narrow,
    pub y_min: Narrow,
    pub y_max: Narrow,
    pub y_vel: Narrow,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            x: Wide::ZERO,
            x_min: Wide::ZERO,
            x_max: wide_int(WIDTH as i32),
            x_vel: Wide::ZERO,
            y: Narrow::ZERO,
            y_min: Narrow::ZERO,
            y_max: narrow_int(HEIGHT),
            y_vel: Narrow::ZERO,
        }
    }
}

impl PhysicsBody {
    /// Body at rest at the origin with the given bounds
    pub fn with_bounds(x_min: Wide, x_max: Wide, y_min: Narrow, y_max: Narrow) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            ..Self::default()
        }
    }

    /// Place the body, clamping both axes into bounds
    pub fn move_to(&mut self, x: Wide, y: Narrow) {
        self.x = clamp(x, self.x_min, self.x_max);
        self.y = clamp(y, self.y_min, self.y_max);
    }

    /// Move relative to the current position
    pub fn adjust_by(&mut self, dx: Wide, dy: Narrow) {
        self.move_to(self.x.saturating_add(dx), self.y.saturating_add(dy));
    }

    /// Whether the body sits exactly on its left or right bound
    pub fn at_horizontal_bound(&self) -> bool {
        self.x == self.x_min || self.x == self.x_max
    }

    /// Advance x by one frame, reflecting off either bound with no speed loss
    pub fn integrate_horizontal(&mut self, tuning: &Tuning) {
        self.x = self.x.saturating_add(self.x_vel);
        if self.x < self.x_min {
            self.x = self.x_min;
            self.x_vel = self.x_vel.saturating_neg();
        } else if self.x > self.x_max {
            self.x = self.x_max;
            self.x_vel = self.x_vel.saturating_neg();
        }
        if let Some(friction) = tuning.friction {
            self.x_vel = self.x_vel.saturating_mul(friction);
        }
    }

    /// Advance y by one frame, then apply gravity.
    ///
    /// A body with zero vertical velocity does not move this frame. The
    /// ceiling is a hard reflect; the floor keeps only `restitution` of the
    /// speed. Gravity is added afterwards whichever branch ran, so a body
    /// whose `y_min == y_max` is still held in place by the clamp.
    pub fn integrate_vertical(&mut self, tuning: &Tuning) {
        if self.y_vel != Narrow::ZERO {
            self.y = self.y.saturating_add(self.y_vel);
            if self.y < self.y_min {
                self.y = self.y_min;
                self.y_vel = self.y_vel.saturating_neg();
            } else if self.y > self.y_max {
                self.y = self.y_max;
                self.y_vel = self.y_vel.saturating_neg().saturating_mul(tuning.restitution);
            }
        }
        if let Some(threshold) = tuning.rest_threshold {
            if self.y == self.y_max && -threshold < self.y_vel && self.y_vel < threshold {
                self.y_vel = Narrow::ZERO;
                return;
            }
        }
        self.y_vel = self.y_vel.saturating_add(tuning.gravity);
    }

    /// One full frame of motion: horizontal first, then vertical
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.integrate_horizontal(tuning);
        self.integrate_vertical(tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::num::{narrow, wide};
    use crate::sim::tuning::{FRICTION, GRAVITY, RESTITUTION};
    use proptest::prelude::*;

    fn band() -> PhysicsBody {
        PhysicsBody::with_bounds(wide_int(-26), wide_int(138), narrow_int(0), narrow_int(34))
    }

    fn weightless() -> Tuning {
        Tuning {
            gravity: Narrow::ZERO,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_default_bounds_cover_screen() {
        let body = PhysicsBody::default();
        assert_eq!(body.x_max, wide_int(128));
        assert_eq!(body.y_max, narrow_int(64));
        assert_eq!(body.x_vel, Wide::ZERO);
    }

    #[test]
    fn test_move_to_clamps() {
        let mut body = band();
        body.move_to(wide_int(500), narrow_int(-5));
        assert_eq!(body.x, wide_int(138));
        assert_eq!(body.y, narrow_int(0));

        body.move_to(wide_int(20), narrow_int(10));
        body.adjust_by(wide_int(-100), narrow_int(100));
        assert_eq!(body.x, wide_int(-26));
        assert_eq!(body.y, narrow_int(34));
    }

    #[test]
    fn test_horizontal_bounce_keeps_speed() {
        let mut body = band();
        body.move_to(wide_int(137), narrow_int(5));
        body.x_vel = wide(3 << 15); // 1.5
        body.integrate_horizontal(&Tuning::default());
        assert_eq!(body.x, body.x_max);
        assert_eq!(body.x_vel, wide(-(3 << 15)));
        assert!(body.at_horizontal_bound());

        body.integrate_horizontal(&Tuning::default());
        assert_eq!(body.x, wide((136 << 16) + (1 << 15)));
        assert!(!body.at_horizontal_bound());
    }

    #[test]
    fn test_left_bounce() {
        let mut body = band();
        body.move_to(wide_int(-25), Narrow::ZERO);
        body.x_vel = wide_int(-2);
        body.integrate_horizontal(&Tuning::default());
        assert_eq!(body.x, body.x_min);
        assert_eq!(body.x_vel, wide_int(2));
    }

    #[test]
    fn test_friction_damps_when_enabled() {
        let mut body = band();
        body.move_to(wide_int(50), Narrow::ZERO);
        body.x_vel = wide_int(1);
        body.integrate_horizontal(&Tuning::default().with_friction());
        assert_eq!(body.x, wide_int(51));
        assert_eq!(body.x_vel, FRICTION);
    }

    #[test]
    fn test_zero_velocity_holds_position_but_gains_gravity() {
        let mut body = band();
        body.move_to(wide_int(10), narrow_int(20));
        body.integrate_vertical(&Tuning::default());
        assert_eq!(body.y, narrow_int(20));
        assert_eq!(body.y_vel, GRAVITY);
    }

    #[test]
    fn test_floor_bounce_loses_energy() {
        let mut body = band();
        body.move_to(Wide::ZERO, narrow_int(33));
        body.y_vel = narrow_int(2);
        body.integrate_vertical(&weightless());
        assert_eq!(body.y, body.y_max);
        // -2 * 179/256 is exact in 8 fractional bits
        assert_eq!(body.y_vel, narrow(-358));
    }

    #[test]
    fn test_floor_bounce_then_gravity() {
        let mut body = band();
        body.move_to(Wide::ZERO, narrow_int(33));
        body.y_vel = narrow_int(2);
        body.integrate_vertical(&Tuning::default());
        assert_eq!(body.y_vel, narrow(-358) + GRAVITY);
    }

    #[test]
    fn test_ceiling_bounce_is_lossless() {
        let mut body = band();
        body.move_to(Wide::ZERO, narrow_int(1));
        body.y_vel = narrow_int(-3);
        body.integrate_vertical(&weightless());
        assert_eq!(body.y, body.y_min);
        assert_eq!(body.y_vel, narrow_int(3));
    }

    #[test]
    fn test_bounces_never_settle_by_default() {
        let mut body = band();
        body.move_to(Wide::ZERO, narrow_int(30));
        body.y_vel = narrow_int(1);
        let tuning = Tuning::default();
        for _ in 0..2000 {
            body.integrate_vertical(&tuning);
        }
        assert_ne!(body.y_vel, Narrow::ZERO);
    }

    #[test]
    fn test_rest_threshold_settles_on_floor() {
        let mut body = band();
        body.move_to(Wide::ZERO, narrow_int(30));
        body.y_vel = narrow_int(1);
        // At 0.5 px/frame² gravity the floor rebound never drops under the
        // threshold; settling needs a lighter pull.
        let tuning = Tuning {
            gravity: narrow(16),
            ..Tuning::default().with_rest_threshold()
        };
        let settled = (0..2000).any(|_| {
            body.integrate_vertical(&tuning);
            body.y_vel == Narrow::ZERO && body.y == body.y_max
        });
        assert!(settled);

        for _ in 0..100 {
            body.integrate_vertical(&tuning);
        }
        assert_eq!(body.y, body.y_max);
        assert_eq!(body.y_vel, Narrow::ZERO);
    }

    #[test]
    fn test_pinned_axis_never_moves() {
        let mut body = PhysicsBody::with_bounds(wide_int(-52), wide_int(148), Narrow::ZERO, Narrow::ZERO);
        body.x_vel = wide(-(1 << 15));
        let tuning = Tuning::default();
        for _ in 0..10_000 {
            body.integrate(&tuning);
            assert_eq!(body.y, Narrow::ZERO);
        }
    }

    #[test]
    fn test_integrate_order_horizontal_first() {
        let mut body = band();
        body.move_to(wide_int(137), narrow_int(33));
        body.x_vel = wide_int(2);
        body.y_vel = narrow_int(2);
        body.integrate(&weightless());
        assert_eq!(body.x, body.x_max);
        assert_eq!(body.x_vel, wide_int(-2));
        assert_eq!(body.y, body.y_max);
        assert_eq!(body.y_vel, narrow(-358));
    }

    proptest! {
        #[test]
        fn horizontal_step_respects_bounds(x in (-26i32 << 16) + 1..(138i32 << 16), v in -(64i32 << 16)..(64i32 << 16)) {
            let mut body = band();
            body.x = wide(x);
            body.x_vel = wide(v);
            let unclamped = wide(x) + wide(v);
            body.integrate_horizontal(&Tuning::default());

            prop_assert!(body.x_min <= body.x && body.x <= body.x_max);
            if unclamped > body.x_max {
                prop_assert_eq!(body.x, body.x_max);
                prop_assert_eq!(body.x_vel, -wide(v));
            } else if unclamped < body.x_min {
                prop_assert_eq!(body.x, body.x_min);
                prop_assert_eq!(body.x_vel, -wide(v));
            } else {
                prop_assert_eq!(body.x, unclamped);
                prop_assert_eq!(body.x_vel, wide(v));
            }
        }

        #[test]
        fn floor_bounce_scales_by_restitution(y in 0i16..(34 << 8), v in 1i16..(16 << 8)) {
            let mut body = band();
            body.y = narrow(y);
            body.y_vel = narrow(v);
            body.integrate_vertical(&weightless());

            prop_assert!(body.y_min <= body.y && body.y <= body.y_max);
            if narrow(y) + narrow(v) > body.y_max {
                prop_assert_eq!(body.y, body.y_max);
                prop_assert_eq!(body.y_vel, (-narrow(v)).saturating_mul(RESTITUTION));
            }
        }

        #[test]
        fn ceiling_bounce_reflects_exactly(y in 0i16..(34 << 8), v in -(16i16 << 8)..0) {
            let mut body = band();
            body.y = narrow(y);
            body.y_vel = narrow(v);
            body.integrate_vertical(&weightless());

            if narrow(y) + narrow(v) < body.y_min {
                prop_assert_eq!(body.y, body.y_min);
                prop_assert_eq!(body.y_vel, -narrow(v));
            }
        }
    }
}
