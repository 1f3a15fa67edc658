//! Raw wire image format
//!
//! A screen image travels as `SCREEN_WIDTH * SCREEN_HEIGHT` RGB565 words,
//! little-endian, two bytes per pixel. The device scans columns, so the
//! byte order is column-major; mapping into the row-major frame buffer is
//! the renderer's job.

use alloc::vec::Vec;

use crate::error::PayloadError;

/// Number of physical screens on the cube
pub const SCREEN_COUNT: usize = 4;

/// Panel width in pixels
pub const SCREEN_WIDTH: usize = 160;

/// Panel height in pixels
pub const SCREEN_HEIGHT: usize = 120;

/// Bytes per RGB565 wire pixel
pub const WIRE_PIXEL_SIZE: usize = 2;

/// Exact byte length of a full-screen wire image
pub const WIRE_IMAGE_LEN: usize = SCREEN_WIDTH * SCREEN_HEIGHT * WIRE_PIXEL_SIZE;

/// A validated full-screen wire image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireImage {
    bytes: Vec<u8>,
}

impl WireImage {
    /// Validate and wrap a raw image body
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PayloadError> {
        check_len(WIRE_IMAGE_LEN, bytes.len())?;
        Ok(Self { bytes })
    }

    /// A single-color image, mostly useful for tests and boot screens
    pub fn solid(word: u16) -> Self {
        let [lo, hi] = word.to_le_bytes();
        let mut bytes = Vec::with_capacity(WIRE_IMAGE_LEN);
        for _ in 0..SCREEN_WIDTH * SCREEN_HEIGHT {
            bytes.push(lo);
            bytes.push(hi);
        }
        Self { bytes }
    }

    /// Raw little-endian RGB565 bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Wire word at source index `i`
    pub fn word(&self, i: usize) -> Option<u16> {
        read_word(&self.bytes, i)
    }
}

impl TryFrom<Vec<u8>> for WireImage {
    type Error = PayloadError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

/// Read the little-endian RGB565 word at pixel index `i`
pub fn read_word(bytes: &[u8], i: usize) -> Option<u16> {
    let lo = *bytes.get(i * WIRE_PIXEL_SIZE)?;
    let hi = *bytes.get(i * WIRE_PIXEL_SIZE + 1)?;
    Some(u16::from_le_bytes([lo, hi]))
}

/// Check a payload length against the expected byte count
pub fn check_len(expected: usize, actual: usize) -> Result<(), PayloadError> {
    if expected != actual {
        return Err(PayloadError::LengthMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_wire_image_accepts_exact_length() {
        let image = WireImage::from_bytes(vec![0u8; WIRE_IMAGE_LEN]).unwrap();
        assert_eq!(image.as_bytes().len(), 38_400);
    }

    #[test]
    fn test_wire_image_rejects_short_body() {
        let result = WireImage::from_bytes(vec![0u8; WIRE_IMAGE_LEN - 1]);
        assert_eq!(
            result,
            Err(PayloadError::LengthMismatch {
                expected: WIRE_IMAGE_LEN,
                actual: WIRE_IMAGE_LEN - 1
            })
        );
    }

    #[test]
    fn test_wire_image_rejects_long_body() {
        assert!(WireImage::try_from(vec![0u8; WIRE_IMAGE_LEN + 2]).is_err());
    }

    #[test]
    fn test_word_is_little_endian() {
        let image = WireImage::solid(0xF800);
        assert_eq!(image.as_bytes()[0], 0x00);
        assert_eq!(image.as_bytes()[1], 0xF8);
        assert_eq!(image.word(0), Some(0xF800));
        assert_eq!(image.word(SCREEN_WIDTH * SCREEN_HEIGHT), None);
    }
}
