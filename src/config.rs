use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::{constants::TIME_SETTINGS, storage};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not load config {path}: {reason}")]
    Invalid { path: String, reason: String },
    #[error("Config value {field} must be greater than zero")]
    ZeroInterval { field: &'static str },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    programs_path: Option<PathBuf>,
    tick_ms: Option<u64>,
    frame_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub programs_path: PathBuf,
    pub tick_ms: u64,
    pub frame_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            programs_path: storage::get_programs_path(),
            tick_ms: TIME_SETTINGS.tick_ms,
            frame_ms: TIME_SETTINGS.frame_ms,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&storage::get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        if !storage::file_exists(path) {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(defaults);
        }

        let raw: RawSettings = storage::read_json(path).map_err(|reason| ConfigError::Invalid {
            path: path.display().to_string(),
            reason,
        })?;

        let settings = Settings {
            programs_path: raw.programs_path.unwrap_or(defaults.programs_path),
            tick_ms: raw.tick_ms.unwrap_or(defaults.tick_ms),
            frame_ms: raw.frame_ms.unwrap_or(defaults.frame_ms),
        };

        if settings.tick_ms == 0 {
            return Err(ConfigError::ZeroInterval { field: "tick_ms" });
        }
        if settings.frame_ms == 0 {
            return Err(ConfigError::ZeroInterval { field: "frame_ms" });
        }

        log::info!("Loaded config from {}", path.display());
        Ok(settings)
    }

    pub fn with_programs_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.programs_path = path;
        }
        self
    }
}
