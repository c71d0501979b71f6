//! Game state and screen phases
//!
//! Everything the simulation mutates lives in one `GameState` owned by the
//! caller; there are no globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{Plane, Ravine, Zeppelin};
use super::tuning::Tuning;
use crate::settings::Settings;

/// Which screen is running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Studio logo shown at power-on
    #[default]
    InitialLogo,
    /// Title card with the drifting zeppelin, waiting for A
    TitleScreen,
    /// Mission briefing before play (only when enabled in settings)
    ObjectiveScreen,
    /// Flying
    GameActive,
    /// Level finished, waiting out the jingle
    LevelComplete,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current screen
    pub phase: GamePhase,
    /// Frames since entering `phase`; 0 on entry, 1 during the first update
    pub frame_count: u32,
    pub plane: Plane,
    pub zeppelin: Zeppelin,
    pub ravine: Ravine,
    /// Drives the plane's re-entry altitude; reseeded for every game
    pub rng: Pcg32,
    /// Seed the RNG was last seeded with
    pub seed: u64,
    pub tuning: Tuning,
    /// Route the title screen through `ObjectiveScreen`
    pub show_objective: bool,
    pub sound: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_default();
        Self {
            phase: GamePhase::InitialLogo,
            frame_count: 0,
            plane: Plane::new(),
            zeppelin: Zeppelin::new(),
            ravine: Ravine,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            tuning: settings.tuning,
            show_objective: settings.show_objective,
            sound: settings.sound,
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        log::debug!("Reseeding RNG with {}", seed);
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::num::{narrow_int, random_in_range};

    #[test]
    fn test_new_state_from_settings() {
        let settings = Settings {
            seed: Some(5),
            show_objective: true,
            ..Settings::default()
        };
        let state = GameState::new(&settings);
        assert_eq!(state.phase, GamePhase::InitialLogo);
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.seed, 5);
        assert!(state.show_objective);
        assert_eq!(state.tuning, Tuning::default());
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut state = GameState::default();
        state.reseed(77);
        let lo = narrow_int(0);
        let hi = narrow_int(34);
        let first: Vec<_> = (0..8).map(|_| random_in_range(&mut state.rng, lo, hi)).collect();
        state.reseed(77);
        let second: Vec<_> = (0..8).map(|_| random_in_range(&mut state.rng, lo, hi)).collect();
        assert_eq!(first, second);
        assert_eq!(state.seed, 77);
    }
}
