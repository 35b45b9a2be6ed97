use crate::viewer::scroll;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog document to load when none is given on the command line.
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default = "default_bpm")]
    pub default_bpm: u16,
}

fn default_bpm() -> u16 {
    120
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            default_bpm: default_bpm(),
        }
    }
}

impl AppConfig {
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("segno");
        path.push("config.toml");
        path
    }

    /// Load the user config, falling back to defaults on any problem.
    /// The BPM is clamped here so a hand-edited file can't start the engine
    /// out of range.
    pub fn load() -> Self {
        let path = Self::get_config_path();
        let mut config = Self::default();
        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                match toml::from_str::<Self>(&content) {
                    Ok(parsed) => config = parsed,
                    Err(e) => tracing::warn!("ignoring invalid config {}: {}", path.display(), e),
                }
            }
        }
        config.default_bpm = scroll::clamp_tempo(config.default_bpm as i64);
        config
    }

    /// TOML rendition for `--generate-config`. Nothing is ever written to
    /// disk implicitly.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
