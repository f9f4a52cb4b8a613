//! Runtime settings for the headless runner
//!
//! Persisted as a JSON file next to the binary; anything missing or corrupt
//! silently falls back to defaults, settings are never a failure path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pin the world seed instead of drawing a fresh one (reproducible runs)
    pub fixed_seed: Option<u64>,
    /// How many 60 Hz frames the demo run simulates
    pub demo_frames: u32,
    /// Dump the final `GameState` as JSON at the end of the run
    pub dump_final_state: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fixed_seed: None,
            demo_frames: 1800,
            dump_final_state: false,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE: &'static str = "elementalist.json";

    /// Load from `path`, falling back to defaults when the file is absent
    /// or unreadable.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
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
            Err(_) => Self::default(),
        }
    }

    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE))
    }

    /// Best-effort save; a failed write is logged, never fatal.
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("could not save settings: {err}");
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }
}
