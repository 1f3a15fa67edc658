//! Configuration types
//!
//! Board-agnostic settings for the device and its host driver. The host
//! loads them from TOML; every field has a default so a partial or missing
//! file still yields a working setup.

pub mod types;

pub use types::*;
