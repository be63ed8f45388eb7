//! Configuration loading
//!
//! Reads optional, read-only window settings from disk. The application never
//! writes this file.

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to determine config directory
    NoConfigDir,
    /// IO error while reading config
    Io(io::Error),
    /// Failed to parse config file
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial window width in points
    pub window_width: u32,
    /// Initial window height in points
    pub window_height: u32,
    /// Padding between the window edge and the clock face
    pub padding: f32,
    /// `env_logger` filter string; `RUST_LOG` applies when unset
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 480,
            window_height: 480,
            padding: 16.0,
            log_filter: None,
        }
    }
}

/// Get the base configuration directory for all clocks
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "clock-series", "clocks")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the configuration file path for a specific clock
pub fn config_path(clock_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", clock_name)))
}

/// Parse settings from TOML text; missing keys take their defaults
pub fn parse_settings(contents: &str) -> Result<Settings, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load settings for a specific clock
///
/// Returns the defaults if the file doesn't exist yet.
/// Returns an error if the file exists but can't be read or parsed.
pub fn load_settings(clock_name: &str) -> Result<Settings, ConfigError> {
    let path = config_path(clock_name).ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        log::debug!("no settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(&path)?;
    parse_settings(&contents)
}
