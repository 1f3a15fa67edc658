//! Session handshake messages
//!
//! An unpaired device greets the server with a four-digit PIN and waits for
//! a `DeviceBound` reply. A paired device greets with its stored token and
//! serial number instead.

use alloc::string::String;
use core::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// Largest PIN the pairing screen can show
pub const MAX_PIN: u16 = 9999;

/// First message sent after the socket opens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloMessage {
    pub token: Option<String>,
    pub sn: Option<u32>,
    /// Zero-padded four-digit PIN, only while pairing
    pub pin: Option<heapless::String<4>>,
}

impl HelloMessage {
    /// Greeting for a device that already has credentials
    pub fn logged_in(token: &str, sn: u32) -> Self {
        Self {
            token: Some(token.into()),
            sn: Some(sn),
            pin: None,
        }
    }

    /// Greeting for a device waiting to be bound
    ///
    /// PINs above `MAX_PIN` are reduced modulo 10000.
    pub fn pairing(pin: u16) -> Self {
        let mut text = heapless::String::new();
        // Four digits always fit the four-byte buffer
        let _ = write!(text, "{:04}", pin % (MAX_PIN + 1));
        Self {
            token: None,
            sn: None,
            pin: Some(text),
        }
    }

    /// Encode as a JSON body
    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Server reply once the user has entered the PIN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceBound {
    pub sn: u32,
    pub token: String,
}

impl DeviceBound {
    /// Decode a binding reply
    pub fn from_json(body: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Persisted login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub token: String,
    pub sn: u32,
}

impl From<DeviceBound> for Credentials {
    fn from(bound: DeviceBound) -> Self {
        Self {
            token: bound.token,
            sn: bound.sn,
        }
    }
}

impl Credentials {
    /// Greeting built from stored credentials
    pub fn hello(&self) -> HelloMessage {
        HelloMessage::logged_in(&self.token, self.sn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_pin_is_zero_padded() {
        let hello = HelloMessage::pairing(42);
        assert_eq!(hello.pin.as_deref(), Some("0042"));
        assert_eq!(
            hello.to_json().unwrap(),
            r#"{"token":null,"sn":null,"pin":"0042"}"#
        );
    }

    #[test]
    fn test_pairing_pin_wraps() {
        assert_eq!(HelloMessage::pairing(12345).pin.as_deref(), Some("2345"));
    }

    #[test]
    fn test_logged_in_hello() {
        let hello = HelloMessage::logged_in("abc", 7);
        assert_eq!(
            hello.to_json().unwrap(),
            r#"{"token":"abc","sn":7,"pin":null}"#
        );
    }

    #[test]
    fn test_device_bound_to_credentials() {
        let bound = DeviceBound::from_json(r#"{"sn": 1001, "token": "t0k"}"#).unwrap();
        let creds = Credentials::from(bound);
        assert_eq!(creds.sn, 1001);
        assert_eq!(creds.hello(), HelloMessage::logged_in("t0k", 1001));
    }

    #[test]
    fn test_device_bound_missing_token() {
        assert_eq!(
            DeviceBound::from_json(r#"{"sn": 1}"#),
            Err(PayloadError::InvalidJson)
        );
    }
}
