//! Rendering engine for the four AirCube screens
//!
//! This crate provides:
//! - `PixelBuffer` / `Canvas`: per-screen RGBA storage with orientation-aware writes
//! - `GlyphFont`: the 8x8 bitmap font and its text rasterizer
//! - `ListLayoutEngine`: scroll placement that keeps the selected row visible
//! - `ScreenCompositor`: full repaints of list and image screens
//! - `DisplaySession`: power, orientation, active screen and status light
//!
//! # Architecture
//!
//! Payloads arrive already fetched; the compositor converts them into
//! retained screen content and repaints the affected buffer in one call.
//! Nothing here blocks or locks: callers serialize access per screen and
//! hand finished buffers to whatever presents them.
//!
//! All text goes through the Windows-1251 code page before it reaches the
//! font, see [`codepage`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod buffer;
pub mod codepage;
pub mod color;
pub mod compositor;
pub mod error;
pub mod font;
pub mod layout;
pub mod list;
pub mod pairing;
pub mod session;

// Re-export key types
pub use buffer::{Canvas, Orientation, PixelBuffer, BUFFER_LEN};
pub use color::{parse_hex, to_hex, try_parse_hex, ColorError, Rgb, FALLBACK_COLOR};
pub use compositor::{Screen, ScreenCompositor, ScreenState};
pub use error::DisplayError;
pub use font::{FontError, GlyphFont, FONT_LEN};
pub use layout::{ListLayoutEngine, ScrollOutcome, ScrollState};
pub use list::{Icon, ListContent, ListItem};
pub use session::{DisplaySession, ScreenId};
