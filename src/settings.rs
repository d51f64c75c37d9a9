//! Game settings and preferences
//!
//! Persisted as JSON in the platform config directory, separately from
//! high scores. Load failures fall back to defaults with a logged warning.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === HUD ===
    /// Log a frame-rate line from the shell
    pub show_fps: bool,

    // === Accessibility ===
    /// Render the jet solid instead of blinking during invincibility
    pub reduced_flicker: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 1.0,
            muted: false,
            show_fps: false,
            reduced_flicker: false,
        }
    }
}

impl Settings {
    /// Settings file under the platform config directory
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jetfall").join("settings.json"))
    }

    /// Load settings, falling back to defaults if missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("no config directory; using default settings");
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("unparseable settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                log::warn!("failed to read {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to the config directory
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = Self::path() else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no config directory",
            ));
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }
}
