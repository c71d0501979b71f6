//! Physics coefficients
//!
//! Not how real friction or restitution work; these are picked to feel right
//! on a 64 pixel tall screen.

use serde::{Deserialize, Serialize};

use super::num::{Narrow, Wide, narrow, wide};

/// Added to vertical velocity every frame (0.5 px/frame²)
pub const GRAVITY: Narrow = narrow(128);

/// Fraction of vertical speed kept after hitting the floor (0.7)
pub const RESTITUTION: Narrow = narrow(179);

/// Horizontal velocity multiplier per frame when friction is enabled (0.95)
pub const FRICTION: Wide = wide(62259);

/// Floor speed below which a body settles when the rest threshold is enabled (16 epsilons)
pub const REST_THRESHOLD: Narrow = narrow(16);

/// Physics tuning shared by every body in a game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: Narrow,
    pub restitution: Narrow,
    /// Horizontal damping; `None` keeps speed constant across wall contacts
    pub friction: Option<Wide>,
    /// Floor settling; `None` lets bounces decay without ever stopping
    pub rest_threshold: Option<Narrow>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: RESTITUTION,
            friction: None,
            rest_threshold: None,
        }
    }
}

impl Tuning {
    /// Default tuning with horizontal friction switched on
    pub fn with_friction(mut self) -> Self {
        self.friction = Some(FRICTION);
        self
    }

    /// Default tuning with floor settling switched on
    pub fn with_rest_threshold(mut self) -> Self {
        self.rest_threshold = Some(REST_THRESHOLD);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_truncate_like_device() {
        assert_eq!(GRAVITY, Narrow::from_num(0.5));
        // 0.7 * 256 = 179.2, truncated
        assert_eq!(RESTITUTION.to_bits(), 179);
        assert_eq!(REST_THRESHOLD, Narrow::DELTA * 16);
        // 0.95 * 65536 = 62259.2, truncated
        assert_eq!(FRICTION.to_bits(), 62259);
    }

    #[test]
    fn test_default_disables_friction_and_threshold() {
        let t = Tuning::default();
        assert!(t.friction.is_none());
        assert!(t.rest_threshold.is_none());
        let t = t.with_friction().with_rest_threshold();
        assert_eq!(t.friction, Some(FRICTION));
        assert_eq!(t.rest_threshold, Some(REST_THRESHOLD));
    }
}
