//! Text transcoding for the glyph table
//!
//! The font is laid out in Windows-1251. Characters outside the code page
//! become `?`.

use alloc::vec::Vec;

use encoding_rs::{EncoderResult, WINDOWS_1251};

/// Byte used for characters the code page cannot represent
pub const REPLACEMENT: u8 = b'?';

/// Encode UTF-8 text as Windows-1251 bytes
pub fn encode(text: &str) -> Vec<u8> {
    let mut encoder = WINDOWS_1251.new_encoder();
    let mut out = Vec::with_capacity(text.len());
    let mut chunk = [0u8; 64];
    let mut rest = text;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(rest, &mut chunk, true);
        out.extend_from_slice(&chunk[..written]);
        rest = &rest[read..];

        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => out.push(REPLACEMENT),
        }
    }

    out
}
