//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed-point arithmetic only, no floats
//! - Seeded RNG only
//! - One tick per frame, in a fixed order (input, physics, screen update)
//! - Hardware reached only through `platform` traits

pub mod body;
pub mod entities;
pub mod num;
pub mod state;
pub mod tick;
pub mod tuning;

pub use body::PhysicsBody;
pub use entities::{Plane, Ravine, Zeppelin};
pub use num::{Narrow, Wide, clamp, random_in_range};
pub use state::{GamePhase, GameState};
pub use tick::{LEVEL_COMPLETE_TONE, complete_level, enter_state, setup, tick};
pub use tuning::Tuning;
