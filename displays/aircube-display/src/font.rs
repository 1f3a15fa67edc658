//! 8x8 bitmap font
//!
//! 256 glyphs indexed by code-page byte, 8 bytes per glyph, one byte per
//! row. Bit 0 of a row byte is the rightmost column.

use alloc::boxed::Box;
use core::fmt;

use aircube_protocol::wire::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::buffer::Canvas;
use crate::color::Rgb;

/// Glyph width and height in pixels
pub const GLYPH_SIZE: usize = 8;

/// Number of glyphs in the table
pub const GLYPH_COUNT: usize = 256;

/// Exact byte length of a font asset
pub const FONT_LEN: usize = GLYPH_COUNT * GLYPH_SIZE;

/// Font loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Asset is not exactly `FONT_LEN` bytes
    WrongSize(usize),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::WrongSize(len) => {
                write!(f, "font must be {} bytes, got {}", FONT_LEN, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FontError {}

/// Immutable glyph table
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphFont {
    table: Box<[u8; FONT_LEN]>,
}

impl fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GlyphFont")
    }
}

impl GlyphFont {
    /// Load a font from its raw asset bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        let table: [u8; FONT_LEN] = bytes
            .try_into()
            .map_err(|_| FontError::WrongSize(bytes.len()))?;
        Ok(Self {
            table: Box::new(table),
        })
    }

    /// Row bytes of one glyph
    pub fn glyph(&self, code: u8) -> [u8; GLYPH_SIZE] {
        let start = code as usize * GLYPH_SIZE;
        let mut rows = [0u8; GLYPH_SIZE];
        rows.copy_from_slice(&self.table[start..start + GLYPH_SIZE]);
        rows
    }

    /// Draw code-page bytes starting at `(x, y)`
    ///
    /// Rows above `top_clip_y` or below the screen are skipped. Each glyph
    /// advances 8px; once the pen passes the right edge it wraps to the
    /// start of the next text line.
    pub fn render_text(
        &self,
        canvas: &mut Canvas<'_>,
        text: &[u8],
        mut x: i32,
        mut y: i32,
        top_clip_y: i32,
        color: Rgb,
    ) {
        let size = GLYPH_SIZE as i32;

        for &code in text {
            let glyph = self.glyph(code);
            for (cy, &bits) in glyph.iter().enumerate() {
                let row_y = y.saturating_add(cy as i32);
                if row_y >= SCREEN_HEIGHT as i32 || row_y < top_clip_y {
                    continue;
                }
                let mut row = bits;
                for cx in (0..size).rev() {
                    if row & 1 != 0 {
                        canvas.set_pixel(x.saturating_add(cx), row_y, color);
                    }
                    row >>= 1;
                }
            }

            x = x.saturating_add(size);
            if x >= SCREEN_WIDTH as i32 {
                x = 0;
                y = y.saturating_add(size);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::buffer::{Orientation, PixelBuffer};

    /// Font where every glyph is blank except `A` (0x41)
    pub(crate) fn test_font() -> GlyphFont {
        let mut table = [0u8; FONT_LEN];
        let a = 0x41 * GLYPH_SIZE;
        table[a..a + GLYPH_SIZE].copy_from_slice(&[
            0b0001_1000,
            0b0010_0100,
            0b0100_0010,
            0b0111_1110,
            0b0100_0010,
            0b0100_0010,
            0b0100_0010,
            0b0000_0001,
        ]);
        // Solid block for 0xFF
        let block = 0xFF * GLYPH_SIZE;
        table[block..block + GLYPH_SIZE].fill(0xFF);
        GlyphFont::from_bytes(&table).unwrap()
    }

    fn lit(buffer: &PixelBuffer, x: usize, y: usize) -> bool {
        buffer.pixel(x, y) == Some([255, 255, 255, 255])
    }

    #[test]
    fn test_from_bytes_requires_exact_size() {
        assert_eq!(
            GlyphFont::from_bytes(&[0u8; 100]).unwrap_err(),
            FontError::WrongSize(100)
        );
        assert!(GlyphFont::from_bytes(&[0u8; FONT_LEN]).is_ok());
    }

    #[test]
    fn test_glyph_lookup() {
        let font = test_font();
        assert_eq!(font.glyph(0x41)[3], 0b0111_1110);
        assert_eq!(font.glyph(0x42), [0u8; 8]);
    }

    #[test]
    fn test_render_glyph_exact_pattern() {
        let font = test_font();
        let glyph = font.glyph(0x41);
        let mut buffer = PixelBuffer::new();
        font.render_text(
            &mut buffer.canvas(Orientation::Normal),
            b"A",
            10,
            20,
            0,
            Rgb::WHITE,
        );

        for (cy, &bits) in glyph.iter().enumerate() {
            for cx in 0..8 {
                // Bit 0 paints the rightmost column
                let expected = bits & (1 << (7 - cx)) != 0;
                assert_eq!(lit(&buffer, 10 + cx, 20 + cy), expected, "({}, {})", cx, cy);
            }
        }
        assert!(lit(&buffer, 17, 27));
        assert!(!lit(&buffer, 10, 27));
    }

    #[test]
    fn test_rows_above_clip_are_skipped() {
        let font = test_font();
        let mut buffer = PixelBuffer::new();
        font.render_text(
            &mut buffer.canvas(Orientation::Normal),
            &[0xFF],
            0,
            20,
            24,
            Rgb::WHITE,
        );
        for y in 20..24 {
            assert!(!lit(&buffer, 0, y));
        }
        for y in 24..28 {
            assert!(lit(&buffer, 0, y));
        }
    }

    #[test]
    fn test_text_wraps_at_right_edge() {
        let font = test_font();
        let mut buffer = PixelBuffer::new();
        font.render_text(
            &mut buffer.canvas(Orientation::Normal),
            &[0xFF, 0xFF],
            152,
            0,
            0,
            Rgb::WHITE,
        );
        assert!(lit(&buffer, 159, 7));
        // Second glyph starts the next line at x = 0
        assert!(lit(&buffer, 0, 8));
        assert!(lit(&buffer, 7, 15));
    }

    #[test]
    fn test_rows_below_screen_are_dropped() {
        let font = test_font();
        let mut buffer = PixelBuffer::new();
        font.render_text(
            &mut buffer.canvas(Orientation::Normal),
            &[0xFF],
            0,
            116,
            0,
            Rgb::WHITE,
        );
        assert!(lit(&buffer, 0, 119));
    }
}
