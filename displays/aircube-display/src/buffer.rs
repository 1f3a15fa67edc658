//! Per-screen RGBA pixel buffer
//!
//! Row-major, 4 bytes per pixel, alpha always 255. The buffer itself knows
//! nothing about orientation: every write goes through a [`Canvas`], which
//! captures the orientation once for the whole render pass.

use alloc::boxed::Box;
use alloc::vec;

use aircube_protocol::wire::{self, SCREEN_HEIGHT, SCREEN_WIDTH, WIRE_IMAGE_LEN};

use crate::color::{decode_wire_pixel, Rgb};
use crate::error::DisplayError;

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Pixels per screen
pub const PIXEL_COUNT: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Exact byte length of a screen buffer
pub const BUFFER_LEN: usize = PIXEL_COUNT * BYTES_PER_PIXEL;

/// How the cube is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    #[default]
    Normal,
    /// Rotated by half a turn; linear index `i` lands at `PIXEL_COUNT - 1 - i`
    Flipped,
}

impl Orientation {
    pub fn from_flipped(flipped: bool) -> Self {
        if flipped {
            Orientation::Flipped
        } else {
            Orientation::Normal
        }
    }

    pub fn is_flipped(self) -> bool {
        self == Orientation::Flipped
    }

    /// Physical pixel index for a logical one
    pub const fn map_index(self, index: usize) -> usize {
        match self {
            Orientation::Normal => index,
            Orientation::Flipped => PIXEL_COUNT - 1 - index,
        }
    }
}

/// RGBA storage for one screen
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    bytes: Box<[u8]>,
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl PixelBuffer {
    /// Create a new black, opaque buffer
    pub fn new() -> Self {
        let mut buffer = Self {
            bytes: vec![0u8; BUFFER_LEN].into_boxed_slice(),
        };
        buffer.clear();
        buffer
    }

    /// Raw RGBA bytes, ready for a bitmap surface
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Black and opaque everywhere
    pub fn clear(&mut self) {
        for px in self.bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    /// Physical RGBA value at `(x, y)`, ignoring orientation
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        let at = (y * SCREEN_WIDTH + x) * BYTES_PER_PIXEL;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.bytes[at..at + BYTES_PER_PIXEL]);
        Some(px)
    }

    /// Rotate the contents by 180 degrees in place
    ///
    /// Equivalent to re-rendering the same scene with the other orientation.
    pub fn rotate_half_turn(&mut self) {
        let (front, back) = self.bytes.split_at_mut(BUFFER_LEN / 2);
        for (i, px) in front.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let at = back.len() - (i + 1) * BYTES_PER_PIXEL;
            px.swap_with_slice(&mut back[at..at + BYTES_PER_PIXEL]);
        }
    }

    /// Borrow for drawing with a fixed orientation
    pub fn canvas(&mut self, orientation: Orientation) -> Canvas<'_> {
        Canvas {
            buffer: self,
            orientation,
        }
    }

    fn write(&mut self, index: usize, color: Rgb) -> bool {
        let at = index * BYTES_PER_PIXEL;
        match self.bytes.get_mut(at..at + BYTES_PER_PIXEL) {
            Some(px) => {
                px.copy_from_slice(&[color.r, color.g, color.b, 255]);
                true
            }
            None => false,
        }
    }
}

/// A pixel buffer borrowed for one render pass
///
/// All coordinates are logical; the orientation captured at creation is
/// applied to every write.
pub struct Canvas<'a> {
    buffer: &'a mut PixelBuffer,
    orientation: Orientation,
}

impl Canvas<'_> {
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Set a pixel.
    ///
    /// Returns `false` and writes nothing when `(x, y)` is off screen.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        if x < 0 || y < 0 || x as usize >= SCREEN_WIDTH || y as usize >= SCREEN_HEIGHT {
            return false;
        }
        let index = y as usize * SCREEN_WIDTH + x as usize;
        self.buffer.write(self.orientation.map_index(index), color)
    }

    /// Write a decoded RGB565 word at a logical linear index
    pub fn put_wire_pixel(&mut self, index: usize, word: u16) -> bool {
        if index >= PIXEL_COUNT {
            return false;
        }
        self.buffer
            .write(self.orientation.map_index(index), decode_wire_pixel(word))
    }

    /// Horizontal run from `x0` to `x1` inclusive
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb) {
        for x in x0.max(0)..=x1.min(SCREEN_WIDTH as i32 - 1) {
            self.set_pixel(x, y, color);
        }
    }

    /// Filled rectangle, clipped to the screen
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        for row in y..y + height {
            for col in x..x + width {
                self.set_pixel(col, row, color);
            }
        }
    }

    /// Copy a full-screen wire image
    ///
    /// The device scans columns: source pixel `i = x * height + y` goes to
    /// the mirrored destination `(width - 1 - x) + width * y`.
    pub fn blit_wire_image(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        wire::check_len(WIRE_IMAGE_LEN, bytes.len())?;

        let mut i = 0;
        for x in 0..SCREEN_WIDTH {
            for y in 0..SCREEN_HEIGHT {
                if let Some(word) = wire::read_word(bytes, i) {
                    self.put_wire_pixel((SCREEN_WIDTH - 1 - x) + SCREEN_WIDTH * y, word);
                }
                i += 1;
            }
        }
        Ok(())
    }
}
