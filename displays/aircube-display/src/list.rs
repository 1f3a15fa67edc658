//! List items as the renderer sees them
//!
//! Payload items are converted once, when a list is installed: text is
//! transcoded to the code page, icons decoded and colors parsed.

use alloc::string::String;
use alloc::vec::Vec;

use aircube_protocol::list::{IconPayload, ListItemPayload, ListPayload};

use crate::codepage;
use crate::color::{parse_hex, Rgb, FALLBACK_COLOR};
use crate::error::DisplayError;
use crate::font::GLYPH_SIZE;

/// Icon pixels, row-major RGB565 little-endian
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<u8>,
}

impl From<IconPayload> for Icon {
    fn from(icon: IconPayload) -> Self {
        Self {
            width: icon.width,
            height: icon.height,
            pixels: icon.pixels,
        }
    }
}

/// One row of a list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Position in the unscrolled list column
    pub x: i32,
    pub y: i32,
    /// Windows-1251 bytes
    pub text: Vec<u8>,
    /// Reported back when the item is activated
    pub numeric_id: i64,
    pub icon: Option<Icon>,
    pub color: Rgb,
}

impl ListItem {
    /// Plain text item with the default color
    pub fn new(x: i32, y: i32, text: &str, numeric_id: i64) -> Self {
        Self {
            x,
            y,
            text: codepage::encode(text),
            numeric_id,
            icon: None,
            color: FALLBACK_COLOR,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn icon_width(&self) -> i32 {
        self.icon.as_ref().map_or(0, |icon| icon.width as i32)
    }

    /// Height of the row: the icon height when it exceeds one text line
    pub fn line_height(&self) -> i32 {
        let icon = self.icon.as_ref().map_or(0, |icon| icon.height as i32);
        icon.max(GLYPH_SIZE as i32)
    }
}

impl TryFrom<&ListItemPayload> for ListItem {
    type Error = DisplayError;

    fn try_from(item: &ListItemPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            x: item.x,
            y: item.y,
            text: codepage::encode(&item.text),
            numeric_id: item.number,
            icon: item.decode_icon()?.map(Icon::from),
            color: item.color.as_deref().map_or(FALLBACK_COLOR, parse_hex),
        })
    }
}

/// A decoded list screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListContent {
    pub title: Option<String>,
    pub navigable: bool,
    pub items: Vec<ListItem>,
}

impl TryFrom<&ListPayload> for ListContent {
    type Error = DisplayError;

    fn try_from(payload: &ListPayload) -> Result<Self, Self::Error> {
        let items = payload
            .items
            .iter()
            .map(ListItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            title: payload.title.clone(),
            navigable: payload.navigable,
            items,
        })
    }
}

/// Reject lists whose `y` ever decreases
pub fn check_ordering(items: &[ListItem]) -> Result<(), DisplayError> {
    match items.windows(2).position(|pair| pair[1].y < pair[0].y) {
        Some(i) => Err(DisplayError::InvalidListOrdering { index: i + 1 }),
        None => Ok(()),
    }
}
