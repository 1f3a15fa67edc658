//! List payloads
//!
//! A list screen is delivered as JSON:
//!
//! ```text
//! { "title": "Rooms", "navigable": true,
//!   "items": [ { "x": 8, "y": 0, "text": "Kitchen", "number": 12,
//!                "icon": "<base64 RGB565>", "icon_width": 16, "icon_height": 16,
//!                "color": "#FFCC00" } ] }
//! ```
//!
//! Every field except `items[].text` may be absent.

use alloc::string::String;
use alloc::vec::Vec;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::PayloadError;
use crate::wire::{check_len, WIRE_PIXEL_SIZE};

/// A whole list screen as sent by the controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPayload {
    /// Optional title drawn in a band above the list
    #[serde(default)]
    pub title: Option<String>,
    /// Whether the user can move a selection through the items
    #[serde(default)]
    pub navigable: bool,
    /// Items in display order
    #[serde(default)]
    pub items: Vec<ListItemPayload>,
}

impl ListPayload {
    /// Decode a list body
    pub fn from_json(body: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// One list row as sent by the controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItemPayload {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub text: String,
    /// Opaque id reported back when the item is tapped
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub icon_width: Option<u16>,
    #[serde(default)]
    pub icon_height: Option<u16>,
    /// Base64 of `icon_width * icon_height` RGB565 words
    #[serde(default)]
    pub icon: Option<String>,
    /// `#RRGGBB`; white when absent
    #[serde(default)]
    pub color: Option<String>,
}

/// A decoded, size-checked icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPayload {
    pub width: u16,
    pub height: u16,
    /// Row-major RGB565 little-endian words
    pub pixels: Vec<u8>,
}

impl ListItemPayload {
    /// Decode the item's icon, if it has one
    pub fn decode_icon(&self) -> Result<Option<IconPayload>, PayloadError> {
        let Some(encoded) = self.icon.as_deref() else {
            return Ok(None);
        };
        let (Some(width), Some(height)) = (self.icon_width, self.icon_height) else {
            return Err(PayloadError::MissingIconSize);
        };

        let pixels = STANDARD.decode(encoded)?;
        check_len(
            width as usize * height as usize * WIRE_PIXEL_SIZE,
            pixels.len(),
        )?;

        Ok(Some(IconPayload {
            width,
            height,
            pixels,
        }))
    }
}
