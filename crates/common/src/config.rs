//! Application configuration.
//!
//! The config file is only ever read; sensconv never writes it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SensconvError, SensconvResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "debug", "sensconv=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an error
    /// so the caller can report it once logging is up.
    pub fn load() -> SensconvResult<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load config from `path`, using defaults when the file does not exist.
    pub fn load_from(path: &Path) -> SensconvResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| SensconvError::config(format!("{}: {e}", path.display())))
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("sensconv").join("config.json")
}
