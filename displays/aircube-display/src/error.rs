//! Rendering errors

use core::fmt;

use aircube_protocol::PayloadError;

/// Errors reported by the compositor and its building blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Payload byte count does not match what it declares
    MalformedPayload { expected: usize, actual: usize },
    /// Item `index` sits above its predecessor
    InvalidListOrdering { index: usize },
    /// Stale selection after a shorter list replaced a longer one
    SelectionOutOfRange { selected: usize, count: usize },
    /// Screen index outside 0..SCREEN_COUNT
    InvalidScreen(usize),
    /// Payload failed to decode
    Payload(PayloadError),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::MalformedPayload { expected, actual } => {
                write!(f, "malformed payload: {} bytes, expected {}", actual, expected)
            }
            DisplayError::InvalidListOrdering { index } => {
                write!(f, "list item {} breaks the vertical ordering", index)
            }
            DisplayError::SelectionOutOfRange { selected, count } => {
                write!(f, "selection {} out of range for {} items", selected, count)
            }
            DisplayError::InvalidScreen(screen) => write!(f, "no such screen: {}", screen),
            DisplayError::Payload(e) => write!(f, "bad payload: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {}

impl From<PayloadError> for DisplayError {
    fn from(e: PayloadError) -> Self {
        match e {
            PayloadError::LengthMismatch { expected, actual } => {
                DisplayError::MalformedPayload { expected, actual }
            }
            other => DisplayError::Payload(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_length_mismatch_becomes_malformed_payload() {
        let err = DisplayError::from(PayloadError::LengthMismatch {
            expected: 38400,
            actual: 12,
        });
        assert_eq!(
            err,
            DisplayError::MalformedPayload {
                expected: 38400,
                actual: 12
            }
        );
        assert_eq!(err.to_string(), "malformed payload: 12 bytes, expected 38400");
    }

    #[test]
    fn test_other_payload_errors_are_wrapped() {
        assert_eq!(
            DisplayError::from(PayloadError::MissingIconSize),
            DisplayError::Payload(PayloadError::MissingIconSize)
        );
        assert_eq!(
            DisplayError::InvalidListOrdering { index: 3 }.to_string(),
            "list item 3 breaks the vertical ordering"
        );
    }
}
