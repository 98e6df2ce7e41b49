//! Game settings and preferences
//!
//! Persisted as JSON next to the executable, separately from any game state.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Settings file name (in the working directory)
const SETTINGS_FILE: &str = "dice_duel_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Particle burst visuals
    pub particles: bool,
    /// Reduced motion (suppresses the burst animation)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective particle visibility (respects reduced_motion)
    pub fn effective_particles(&self) -> bool {
        self.particles && !self.reduced_motion
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings, best effort
    pub fn save(&self) {
        self.save_to(Path::new(SETTINGS_FILE));
    }

    fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("failed to save settings: {err}");
                } else {
                    log::info!("settings saved");
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}
