//! Color codec
//!
//! RGB565 wire words and `#RRGGBB` text both end up as an 8-bit `Rgb`.

use core::fmt::{self, Write};

use heapless::String;

/// 8-bit per channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray level with all three channels equal
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

/// Color used for malformed color strings and for items without one
pub const FALLBACK_COLOR: Rgb = Rgb::WHITE;

/// Strict color parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Not 3 or 6 hex digits after the optional `#`
    BadLength(usize),
    /// A character that is not a hex digit
    BadDigit,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::BadLength(len) => write!(f, "color must have 3 or 6 hex digits, got {}", len),
            ColorError::BadDigit => f.write_str("color contains a non-hex digit"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}

/// Unpack a little-endian RGB565 word
///
/// Channels are widened by plain shifts (`r << 3`, `g << 2`, `b << 3`),
/// so full intensity decodes to 248/252/248, not 255.
pub const fn decode_wire_pixel(word: u16) -> Rgb {
    let b = (word & 0x1F) as u8;
    let g = ((word >> 5) & 0x3F) as u8;
    let r = ((word >> 11) & 0x1F) as u8;
    Rgb::new(r << 3, g << 2, b << 3)
}

/// Parse `#RRGGBB`, `RRGGBB` or `#RGB`
pub fn try_parse_hex(text: &str) -> Result<Rgb, ColorError> {
    let digits = text.trim().strip_prefix('#').unwrap_or(text.trim()).as_bytes();

    match digits.len() {
        6 => Ok(Rgb::new(
            hex_pair(digits[0], digits[1])?,
            hex_pair(digits[2], digits[3])?,
            hex_pair(digits[4], digits[5])?,
        )),
        3 => Ok(Rgb::new(
            hex_pair(digits[0], digits[0])?,
            hex_pair(digits[1], digits[1])?,
            hex_pair(digits[2], digits[2])?,
        )),
        len => Err(ColorError::BadLength(len)),
    }
}

/// Parse a color, degrading to `FALLBACK_COLOR` on malformed input
pub fn parse_hex(text: &str) -> Rgb {
    match try_parse_hex(text) {
        Ok(color) => color,
        Err(e) => {
            log::warn!("Bad color {:?} ({}), using fallback", text, e);
            FALLBACK_COLOR
        }
    }
}

/// Canonical lowercase `#rrggbb`
pub fn to_hex(color: Rgb) -> String<7> {
    let mut out = String::new();
    // 7 bytes always fit
    let _ = write!(out, "#{:02x}{:02x}{:02x}", color.r, color.g, color.b);
    out
}

fn hex_pair(hi: u8, lo: u8) -> Result<u8, ColorError> {
    Ok(hex_digit(hi)? << 4 | hex_digit(lo)?)
}

fn hex_digit(c: u8) -> Result<u8, ColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ColorError::BadDigit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_pixel_exact_shifts() {
        assert_eq!(decode_wire_pixel(0x0000), Rgb::new(0, 0, 0));
        assert_eq!(decode_wire_pixel(0xF800), Rgb::new(248, 0, 0));
        assert_eq!(decode_wire_pixel(0x07E0), Rgb::new(0, 252, 0));
        assert_eq!(decode_wire_pixel(0x001F), Rgb::new(0, 0, 248));
        assert_eq!(decode_wire_pixel(0xFFFF), Rgb::new(248, 252, 248));
    }

    #[test]
    fn test_decode_mixed_word() {
        // r=0b10000, g=0b000001, b=0b00001
        assert_eq!(decode_wire_pixel(0x8021), Rgb::new(128, 4, 8));
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex("#1FBFBF"), Rgb::new(31, 191, 191));
        assert_eq!(parse_hex("ffcc00"), Rgb::new(255, 204, 0));
        assert_eq!(parse_hex("#abc"), Rgb::new(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn test_malformed_color_falls_back() {
        assert_eq!(parse_hex(""), FALLBACK_COLOR);
        assert_eq!(parse_hex("#12345"), FALLBACK_COLOR);
        assert_eq!(parse_hex("#GGGGGG"), FALLBACK_COLOR);
        assert_eq!(parse_hex("red"), FALLBACK_COLOR);
    }

    #[test]
    fn test_try_parse_hex_errors() {
        assert_eq!(try_parse_hex("#1234"), Err(ColorError::BadLength(4)));
        assert_eq!(try_parse_hex("#12345z"), Err(ColorError::BadDigit));
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(to_hex(Rgb::new(255, 204, 0)).as_str(), "#ffcc00");
        assert_eq!(to_hex(Rgb::BLACK).as_str(), "#000000");
    }

    #[test]
    fn test_hex_parses_back() {
        let color = Rgb::new(48, 16, 87);
        assert_eq!(try_parse_hex(&to_hex(color)), Ok(color));
    }
}
