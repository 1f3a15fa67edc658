//! TOML configuration loader

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use aircube_core::config::EmulatorConfig;

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    /// File exists but could not be read
    Io(io::Error),
    /// TOML parsing failed
    TomlParse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {}", e),
            ConfigError::TomlParse(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::TomlParse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::TomlParse(e)
    }
}

/// Parse TOML text into an `EmulatorConfig`
///
/// Sections and keys that are left out keep their defaults.
pub fn parse_config(text: &str) -> Result<EmulatorConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    /// No file at the path
    Defaults,
}

/// Load the configuration at `path`, falling back to defaults if it is absent
///
/// Nothing is logged here: the log level lives in the file, so the caller
/// reports the load with [`log_config_summary`] once the logger is up.
pub fn load_config(path: &Path) -> Result<(EmulatorConfig, ConfigSource), ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok((EmulatorConfig::default(), ConfigSource::Defaults));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((parse_config(&text)?, ConfigSource::File))
}

pub fn log_config_summary(path: &Path, source: ConfigSource, config: &EmulatorConfig) {
    match source {
        ConfigSource::File => log::info!("Configuration loaded from {}", path.display()),
        ConfigSource::Defaults => log::info!("No config at {}, using defaults", path.display()),
    }
    log::debug!("  api: {}", config.server.api_url);
    log::debug!("  push: {}", config.server.ws_url);
    log::debug!("  font: {}", config.display.font_path);
    log::debug!("  {} Hz presentation", config.display.frame_rate_hz);
}
