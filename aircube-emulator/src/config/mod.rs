//! Configuration loading
//!
//! Reads `EmulatorConfig` from a TOML file. A missing file means defaults.

pub mod loader;

pub use loader::{load_config, log_config_summary};
