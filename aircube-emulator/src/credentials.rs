//! Credential persistence
//!
//! The token and serial number the controller hands out when pairing are
//! kept in a small JSON file. Without that file the cube pairs again.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use aircube_protocol::Credentials;

/// Load stored credentials
///
/// A missing or unreadable file yields `None` so the device falls back to
/// pairing.
pub fn load_credentials(path: &Path) -> Option<Credentials> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("No credentials at {}, pairing required", path.display());
            return None;
        }
        Err(e) => {
            log::warn!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(credentials) => Some(credentials),
        Err(e) => {
            log::warn!("Ignoring malformed credentials in {}: {}", path.display(), e);
            None
        }
    }
}

/// Persist credentials, replacing any previous ones
pub fn store_credentials(path: &Path, credentials: &Credentials) -> Result<()> {
    let body = serde_json::to_string_pretty(credentials)?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Stored credentials for {} in {}", credentials.sn, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "aircube-credentials-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_store_then_load() {
        let path = scratch("roundtrip");
        let credentials = Credentials {
            token: "secret".into(),
            sn: 1042,
        };
        store_credentials(&path, &credentials).unwrap();
        assert_eq!(load_credentials(&path), Some(credentials));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_means_pairing() {
        assert_eq!(load_credentials(&scratch("missing")), None);
    }

    #[test]
    fn test_malformed_file_means_pairing() {
        let path = scratch("malformed");
        fs::write(&path, "{\"token\": 5}").unwrap();
        assert_eq!(load_credentials(&path), None);
        fs::remove_file(&path).unwrap();
    }
}
