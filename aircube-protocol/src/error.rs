//! Payload validation errors

use core::fmt;

/// Errors raised while decoding or validating a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PayloadError {
    /// Byte count does not match what the payload declares
    LengthMismatch { expected: usize, actual: usize },
    /// JSON body could not be decoded
    InvalidJson,
    /// Icon data is not valid base64
    InvalidBase64,
    /// Icon present without its width or height
    MissingIconSize,
    /// Screen index outside 0..SCREEN_COUNT
    InvalidScreen(i32),
    /// A selection notice without a screen
    MissingScreen,
    /// Negative list position
    InvalidPosition(i32),
    /// Message type code not known to the protocol
    UnknownMessageType(u8),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::LengthMismatch { expected, actual } => {
                write!(f, "payload length {} (expected {})", actual, expected)
            }
            PayloadError::InvalidJson => f.write_str("malformed JSON payload"),
            PayloadError::InvalidBase64 => f.write_str("icon data is not valid base64"),
            PayloadError::MissingIconSize => f.write_str("icon without width/height"),
            PayloadError::InvalidScreen(screen) => write!(f, "no such screen: {}", screen),
            PayloadError::MissingScreen => f.write_str("selection notice without a screen"),
            PayloadError::InvalidPosition(pos) => write!(f, "invalid list position: {}", pos),
            PayloadError::UnknownMessageType(kind) => write!(f, "unknown message type {}", kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PayloadError {}

impl From<serde_json::Error> for PayloadError {
    fn from(_: serde_json::Error) -> Self {
        PayloadError::InvalidJson
    }
}

impl From<base64::DecodeError> for PayloadError {
    fn from(_: base64::DecodeError) -> Self {
        PayloadError::InvalidBase64
    }
}
