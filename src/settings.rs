//! Game settings
//!
//! Read from a JSON file next to the binary. Every field has a default, so a
//! partial file (or none at all) is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_RATE;
use crate::sim::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames per second the platform paces to
    pub frame_rate: u8,
    /// Fixed RNG seed; `None` seeds every game from the platform
    pub seed: Option<u64>,
    /// Play tones
    pub sound: bool,
    /// Show the objective screen between title and play
    pub show_objective: bool,
    /// Frames the headless driver runs before exiting
    pub headless_frames: u32,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            seed: None,
            sound: true,
            show_objective: false,
            headless_frames: 600,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "ravine_despoiler.json";

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
