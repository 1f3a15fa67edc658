//! Configuration type definitions

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum URL length
pub const MAX_URL_LEN: usize = 128;

/// Maximum file path length
pub const MAX_PATH_LEN: usize = 256;

/// Default REST prefix of the controller
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Default push socket of the controller
pub const DEFAULT_WS_URL: &str = "ws://localhost:8080/ws";

/// Default location of the 8x8 font asset
pub const DEFAULT_FONT_PATH: &str = "fonts/8x8.fnt";

/// Default location of stored credentials
pub const DEFAULT_CREDENTIALS_PATH: &str = "aircube-credentials.json";

/// Default presentation rate
pub const DEFAULT_FRAME_RATE_HZ: u16 = 60;

/// Controller endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServerConfig {
    /// REST prefix for list and image fetches
    pub api_url: String<MAX_URL_LEN>,
    /// Push notification socket
    pub ws_url: String<MAX_URL_LEN>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: bounded(DEFAULT_API_URL),
            ws_url: bounded(DEFAULT_WS_URL),
        }
    }
}

impl ServerConfig {
    /// Where the image for `screen` is fetched from
    pub fn image_url(&self, screen: u8) -> alloc::string::String {
        alloc::format!("{}/screen/{}", self.api_url, screen)
    }

    /// Where the list for `screen` is fetched from
    pub fn list_url(&self, screen: u8) -> alloc::string::String {
        alloc::format!("{}/list/{}", self.api_url, screen)
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Path of the 2048-byte glyph table
    pub font_path: String<MAX_PATH_LEN>,
    /// How often finished frames are sampled for presentation
    pub frame_rate_hz: u16,
    /// Where PPM snapshots go; none disables them
    pub snapshot_dir: Option<String<MAX_PATH_LEN>>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            font_path: bounded(DEFAULT_FONT_PATH),
            frame_rate_hz: DEFAULT_FRAME_RATE_HZ,
            snapshot_dir: None,
        }
    }
}

impl DisplayConfig {
    /// Frame period in milliseconds, never zero
    pub fn frame_period_ms(&self) -> u32 {
        (1000 / self.frame_rate_hz.max(1) as u32).max(1)
    }
}

/// Pairing settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PairingConfig {
    /// Where the token and serial number are kept once bound
    pub credentials_path: String<MAX_PATH_LEN>,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            credentials_path: bounded(DEFAULT_CREDENTIALS_PATH),
        }
    }
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Complete emulator configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmulatorConfig {
    pub server: ServerConfig,
    pub display: DisplayConfig,
    pub pairing: PairingConfig,
    pub logging: LoggingConfig,
}

/// Copy `text` into a bounded string, truncating at a character boundary
pub fn bounded<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            log::warn!("Config value truncated to {} bytes", N);
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_device_constants() {
        let config = EmulatorConfig::default();
        assert_eq!(config.server.api_url.as_str(), "http://localhost:8080/api/v1");
        assert_eq!(config.server.ws_url.as_str(), "ws://localhost:8080/ws");
        assert_eq!(config.display.font_path.as_str(), "fonts/8x8.fnt");
        assert_eq!(config.display.frame_rate_hz, 60);
        assert_eq!(config.display.snapshot_dir, None);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_fetch_urls() {
        let server = ServerConfig::default();
        assert_eq!(server.image_url(2), "http://localhost:8080/api/v1/screen/2");
        assert_eq!(server.list_url(0), "http://localhost:8080/api/v1/list/0");
    }

    #[test]
    fn test_frame_period() {
        let mut display = DisplayConfig::default();
        assert_eq!(display.frame_period_ms(), 16);
        display.frame_rate_hz = 0;
        assert_eq!(display.frame_period_ms(), 1000);
        display.frame_rate_hz = 5000;
        assert_eq!(display.frame_period_ms(), 1);
    }

    #[test]
    fn test_bounded_truncates() {
        let short: String<4> = bounded("abcdef");
        assert_eq!(short.as_str(), "abcd");
        let cyrillic: String<5> = bounded("жжж");
        assert_eq!(cyrillic.as_str(), "жж");
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(LogLevel::Off.to_level_filter(), log::LevelFilter::Off);
    }
}
