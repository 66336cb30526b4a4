use crate::presentation::Palette;
use crate::types::Mode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DAY_COLOR: &str = "#6EBFF7";
pub const DEFAULT_NIGHT_COLOR: &str = "#1a1c29";

/// Host options. The toggle state itself is never written here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub seed: i64,
    /// Rendering multiplier. Has no effect on generated stars.
    pub scale: f64,
    pub day_color: String,
    pub night_color: String,
    /// Initial mode supplied by the host.
    pub start_night: bool,
    pub sound: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 0,
            scale: 1.0,
            day_color: DEFAULT_DAY_COLOR.into(),
            night_color: DEFAULT_NIGHT_COLOR.into(),
            start_night: false,
            sound: true,
        }
    }
}

impl Config {
    pub fn initial_mode(&self) -> Mode {
        Mode::from_night(self.start_night)
    }

    pub fn palette(&self) -> Palette {
        Palette {
            day: self.day_color.clone(),
            night: self.night_color.clone(),
        }
    }

    /// Replace a scale that is not a positive finite number.
    fn sanitized(mut self) -> Self {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            tracing::warn!(scale = self.scale, "ignoring invalid scale");
            self.scale = 1.0;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// `<config dir>/daybreak/config.json`
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("daybreak").join("config.json")
}

pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config.sanitized())
}

/// Load the config from disk, returning defaults if the file is missing or broken.
pub fn load_config() -> Config {
    let path = config_path();
    if !path.exists() {
        return Config::default();
    }
    match read_config(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "using default config");
            Config::default()
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
