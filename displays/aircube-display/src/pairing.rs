//! Pairing screen
//!
//! While unpaired, each screen shows one digit of the PIN, scaled 4x,
//! inside a colored border.

use aircube_protocol::wire::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::buffer::Canvas;
use crate::color::Rgb;

/// Digit bitmap side in pixels before scaling
pub const DIGIT_SIZE: usize = 32;

/// Scale applied to every digit pixel
pub const DIGIT_SCALE: i32 = 4;

/// Left edge of a scaled digit
pub const DIGIT_ORIGIN_X: i32 = 16;

/// Border thickness around a pairing screen
pub const BORDER_WIDTH: i32 = 8;

/// Border color of each screen, left to right
pub const BORDER_COLORS: [Rgb; 4] = [
    Rgb::new(48, 16, 87),
    Rgb::new(110, 50, 181),
    Rgb::new(153, 82, 235),
    Rgb::new(191, 144, 245),
];

const ROW_BYTES: usize = DIGIT_SIZE / 8;

/// 32x32 digit bitmaps, 4 bytes per row, least significant bit leftmost
static DIGITS: [[u8; DIGIT_SIZE * ROW_BYTES]; 10] = [
    // 0
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x07, 0x00, 0x00, 0xFE, 0x3F, 0x00, 0x00, 0xFF, 0xFF, 0x00,
        0xC0, 0x5F, 0xFE, 0x01, 0xC0, 0x0F, 0xF0, 0x01, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x03, 0xE0, 0x03,
        0xF0, 0x03, 0xE0, 0x07, 0xF0, 0x01, 0xC0, 0x07, 0xE0, 0x01, 0xC0, 0x07, 0xF0, 0x03, 0xC0, 0x07,
        0xF0, 0x01, 0xC0, 0x07, 0xF0, 0x03, 0xC0, 0x07, 0xE0, 0x03, 0xE0, 0x07, 0xE0, 0x03, 0xE0, 0x03,
        0xE0, 0x07, 0xF0, 0x03, 0xC0, 0x0F, 0xF8, 0x01, 0x80, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0x7F, 0x00,
        0x00, 0xFC, 0x1F, 0x00, 0x00, 0x60, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 1
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x03, 0x00, 0x00, 0xFC, 0x03, 0x00, 0x80, 0xFF, 0x03, 0x00,
        0xE0, 0xFF, 0x03, 0x00, 0xE0, 0xE7, 0x07, 0x00, 0xA0, 0xE1, 0x03, 0x00, 0x00, 0xE0, 0x03, 0x00,
        0x00, 0xE0, 0x03, 0x00, 0x00, 0xE0, 0x03, 0x00, 0x00, 0xE0, 0x07, 0x00, 0x00, 0xE0, 0x03, 0x00,
        0x00, 0xE0, 0x03, 0x00, 0x00, 0xE0, 0x03, 0x00, 0x00, 0xE0, 0x07, 0x00, 0x00, 0xE0, 0x03, 0x00,
        0x00, 0xE0, 0x03, 0x00, 0x00, 0xE0, 0x07, 0x00, 0xE0, 0xFF, 0xFF, 0x03, 0xF0, 0xFF, 0xFF, 0x07,
        0xE0, 0xFF, 0xFF, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 2
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x07, 0x00, 0x00, 0xFF, 0x3F, 0x00, 0xC0, 0xFF, 0xFF, 0x00,
        0xE0, 0x2F, 0xFE, 0x01, 0xF0, 0x03, 0xF0, 0x03, 0xF0, 0x01, 0xE0, 0x03, 0xE0, 0x00, 0xF0, 0x03,
        0x00, 0x00, 0xF0, 0x03, 0x00, 0x00, 0xFC, 0x01, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x80, 0x7F, 0x00,
        0x00, 0xE0, 0x1F, 0x00, 0x00, 0xF8, 0x0B, 0x00, 0x00, 0xFE, 0x01, 0x00, 0x80, 0xFF, 0x00, 0x00,
        0xE0, 0x3F, 0xC0, 0x01, 0xF8, 0x0F, 0xE0, 0x03, 0xF8, 0xFF, 0xFF, 0x03, 0xF8, 0xFF, 0xFF, 0x03,
        0xF8, 0xFF, 0xFF, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 3
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x0F, 0x00, 0x80, 0xFF, 0x7F, 0x00, 0xC0, 0xFF, 0xFF, 0x01,
        0xE0, 0x2F, 0xFD, 0x01, 0xE0, 0x01, 0xF0, 0x03, 0x00, 0x00, 0xE0, 0x03, 0x00, 0x00, 0xE0, 0x03,
        0x00, 0x00, 0xF8, 0x01, 0x00, 0xF0, 0xFF, 0x00, 0x00, 0xF0, 0x7F, 0x00, 0x00, 0xF0, 0xFF, 0x00,
        0x00, 0x00, 0xFC, 0x03, 0x00, 0x00, 0xF0, 0x03, 0x00, 0x00, 0xC0, 0x07, 0x00, 0x00, 0xC0, 0x0F,
        0x00, 0x00, 0xE0, 0x07, 0x60, 0x00, 0xF0, 0x07, 0xF0, 0xDF, 0xFF, 0x03, 0xF0, 0xFF, 0xFF, 0x01,
        0xE0, 0xFF, 0x3F, 0x00, 0x00, 0x64, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 4
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x80, 0xFF, 0x00, 0x00, 0x80, 0x7F, 0x00,
        0x00, 0xE0, 0x7F, 0x00, 0x00, 0xF0, 0xFF, 0x00, 0x00, 0xF8, 0x7F, 0x00, 0x00, 0xF8, 0x7C, 0x00,
        0x00, 0xFE, 0xFC, 0x00, 0x00, 0x3F, 0x7C, 0x00, 0x00, 0x3F, 0x7C, 0x00, 0xC0, 0x0F, 0x7C, 0x00,
        0xE0, 0x07, 0x7C, 0x00, 0xE0, 0x5F, 0xFE, 0x00, 0xF8, 0xFF, 0xFF, 0x03, 0xF0, 0xFF, 0xFF, 0x03,
        0xD0, 0xDB, 0xFF, 0x01, 0x00, 0x00, 0x7C, 0x00, 0x00, 0xE0, 0xFF, 0x03, 0x00, 0xF0, 0xFF, 0x03,
        0x00, 0xE0, 0xFF, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 5
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x41, 0x44, 0x00, 0xC0, 0xFF, 0xFF, 0x01, 0xC0, 0xFF, 0xFF, 0x01,
        0xE0, 0xFF, 0xFF, 0x00, 0xC0, 0x0F, 0x00, 0x00, 0xC0, 0x0F, 0x00, 0x00, 0xC0, 0x07, 0x00, 0x00,
        0xC0, 0xFF, 0x1F, 0x00, 0xC0, 0xFF, 0xFF, 0x00, 0xC0, 0xFF, 0xFF, 0x01, 0x80, 0x0F, 0xF8, 0x03,
        0x00, 0x00, 0xF0, 0x07, 0x00, 0x00, 0xC0, 0x07, 0x00, 0x00, 0xC0, 0x0F, 0x00, 0x00, 0xC0, 0x07,
        0x00, 0x00, 0xE0, 0x07, 0xF0, 0x01, 0xF0, 0x07, 0xF0, 0xDF, 0xFF, 0x01, 0xF0, 0xFF, 0xFF, 0x00,
        0xC0, 0xFF, 0x3F, 0x00, 0x00, 0x68, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 6
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0x03, 0x00, 0xC0, 0xFF, 0x07, 0x00, 0xF0, 0xFF, 0x0F,
        0x00, 0xFC, 0x9F, 0x03, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x80, 0x1F, 0x00, 0x00,
        0xC0, 0x0F, 0x04, 0x00, 0xC0, 0xE7, 0x3F, 0x00, 0xC0, 0xFF, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0x03,
        0xE0, 0x7F, 0xF0, 0x07, 0xC0, 0x0F, 0xC0, 0x07, 0xC0, 0x0F, 0xC0, 0x0F, 0xC0, 0x0F, 0x80, 0x0F,
        0x80, 0x0F, 0xC0, 0x0F, 0x80, 0x3F, 0xE0, 0x07, 0x00, 0xFF, 0xFB, 0x03, 0x00, 0xFE, 0xFF, 0x01,
        0x00, 0xF8, 0x7F, 0x00, 0x00, 0x40, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 7
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x80, 0x21, 0x44, 0x02, 0xF8, 0xFF, 0xFF, 0x03, 0xF0, 0xFF, 0xFF, 0x03,
        0xF0, 0xF7, 0xFF, 0x03, 0xF0, 0x01, 0xF0, 0x03, 0x60, 0x00, 0xF0, 0x01, 0x00, 0x00, 0xF8, 0x01,
        0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x7E, 0x00,
        0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x80, 0x1F, 0x00, 0x00, 0x80, 0x0F, 0x00,
        0x00, 0xC0, 0x0F, 0x00, 0x00, 0xC0, 0x07, 0x00, 0x00, 0xE0, 0x07, 0x00, 0x00, 0xE0, 0x03, 0x00,
        0x00, 0xE0, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 8
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x07, 0x00, 0x00, 0xFF, 0x3F, 0x00, 0x80, 0xFF, 0xFF, 0x00,
        0xC0, 0x9F, 0xFC, 0x01, 0xE0, 0x07, 0xF0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xE0, 0x03,
        0xE0, 0x07, 0xF0, 0x03, 0xC0, 0x7F, 0xFD, 0x00, 0x00, 0xFF, 0x7F, 0x00, 0x00, 0xFF, 0x7F, 0x00,
        0xC0, 0xBF, 0xFF, 0x01, 0xE0, 0x0F, 0xF8, 0x03, 0xE0, 0x03, 0xE0, 0x03, 0xF0, 0x03, 0xE0, 0x07,
        0xF0, 0x03, 0xE0, 0x07, 0xE0, 0x07, 0xF0, 0x03, 0xC0, 0xFF, 0xFF, 0x03, 0xC0, 0xFF, 0xFF, 0x00,
        0x00, 0xFE, 0x3F, 0x00, 0x00, 0x60, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
    // 9
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x1F, 0x00, 0x00, 0xFE, 0x7F, 0x00, 0x00, 0xFF, 0xFF, 0x01,
        0xC0, 0x3F, 0xFA, 0x03, 0xC0, 0x0F, 0xF0, 0x03, 0xC0, 0x07, 0xE0, 0x07, 0xC0, 0x07, 0xC0, 0x0F,
        0xC0, 0x07, 0xC0, 0x0F, 0xC0, 0x0F, 0xF0, 0x07, 0x80, 0x3F, 0xFE, 0x0F, 0x00, 0xFF, 0xFF, 0x0F,
        0x00, 0xFE, 0xDF, 0x0F, 0x00, 0xF0, 0xC7, 0x07, 0x00, 0x00, 0xE0, 0x07, 0x00, 0x00, 0xF0, 0x03,
        0x00, 0x00, 0xFC, 0x01, 0x00, 0x00, 0xFF, 0x00, 0xC0, 0xFF, 0x7F, 0x00, 0xC0, 0xFF, 0x1F, 0x00,
        0xC0, 0xFF, 0x07, 0x00, 0x00, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
];

/// Split a PIN into its four decimal digits, most significant first
pub fn pin_digits(pin: u16) -> [u8; 4] {
    let pin = pin % 10_000;
    [
        (pin / 1000) as u8,
        (pin % 1000 / 100) as u8,
        (pin % 100 / 10) as u8,
        (pin % 10) as u8,
    ]
}

/// Clear the canvas and draw one scaled digit
///
/// Digits above 9 are drawn as 9.
pub fn draw_digit(canvas: &mut Canvas<'_>, digit: u8) {
    canvas.clear();
    let bitmap = &DIGITS[digit.min(9) as usize];

    for cy in 0..DIGIT_SIZE {
        for byte in 0..ROW_BYTES {
            let mut row = bitmap[cy * ROW_BYTES + byte];
            for bit in 0..8 {
                if row & 1 != 0 {
                    let col = (byte * 8 + bit) as i32;
                    canvas.fill_rect(
                        DIGIT_ORIGIN_X + col * DIGIT_SCALE,
                        cy as i32 * DIGIT_SCALE,
                        DIGIT_SCALE,
                        DIGIT_SCALE,
                        Rgb::WHITE,
                    );
                }
                row >>= 1;
            }
        }
    }
}

/// Paint a frame of `width` pixels around the screen edge
pub fn draw_border(canvas: &mut Canvas<'_>, width: i32, color: Rgb) {
    let w = SCREEN_WIDTH as i32;
    let h = SCREEN_HEIGHT as i32;
    canvas.fill_rect(0, 0, w, width, color);
    canvas.fill_rect(0, h - width, w, width, color);
    canvas.fill_rect(0, 0, width, h, color);
    canvas.fill_rect(w - width, 0, width, h, color);
}
