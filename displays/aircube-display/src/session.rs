//! Device-wide display state
//!
//! Power, orientation, active screen and the status light live here and
//! are passed into every compositor call instead of being globals.

use core::fmt;

use aircube_protocol::SCREEN_COUNT;

use crate::buffer::Orientation;
use crate::color::Rgb;
use crate::error::DisplayError;

/// Index of one of the four screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenId(u8);

impl ScreenId {
    /// All screens, left to right
    pub const ALL: [ScreenId; SCREEN_COUNT] = [ScreenId(0), ScreenId(1), ScreenId(2), ScreenId(3)];

    pub fn new(index: usize) -> Result<Self, DisplayError> {
        if index < SCREEN_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(DisplayError::InvalidScreen(index))
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Screen to the right, wrapping around the cube
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % SCREEN_COUNT as u8)
    }

    /// Screen to the left, wrapping around the cube
    pub const fn prev(self) -> Self {
        Self((self.0 + SCREEN_COUNT as u8 - 1) % SCREEN_COUNT as u8)
    }
}

impl TryFrom<u8> for ScreenId {
    type Error = DisplayError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index as usize)
    }
}

impl From<ScreenId> for u8 {
    fn from(id: ScreenId) -> u8 {
        id.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen {}", self.0)
    }
}

/// State shared by all four screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySession {
    pub power_on: bool,
    pub orientation: Orientation,
    /// Screen the user is looking at; the only one that shows a selection
    pub active: ScreenId,
    /// Status light under the screens
    pub light: Rgb,
}

impl DisplaySession {
    /// Create a new session: powered off, upright, screen 0, light off
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, screen: ScreenId) -> bool {
        self.active == screen
    }
}
