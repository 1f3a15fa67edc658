//! Message types for the AirCube push protocol
//!
//! Message types are divided into two categories:
//! - Controller → Display: `UpdateInfo` notices, converted to `PushMessage`
//! - Display → Controller: `CubeInfo` reports, built from `ControllerMessage`

use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;
use crate::wire::SCREEN_COUNT;

// Message type IDs: Display → Controller
pub const TYPE_TAP: u8 = 0;
pub const TYPE_FLIP: u8 = 1;
pub const TYPE_CHANGE: u8 = 2;

/// Cube id used for reports about navigable content
pub const CUBE_NAVIGABLE: u8 = 1;

/// Cube id used when tapping a screen that shows a plain image
pub const CUBE_IMAGE: u8 = 0;

/// Push notice exactly as it appears on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    #[serde(default)]
    pub screen: Option<i32>,
    #[serde(default)]
    pub is_text: bool,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub position: Option<i32>,
    #[serde(default)]
    pub select: Option<bool>,
}

/// Push notices from the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushMessage {
    /// Make `screen` the active one, optionally moving its selection
    Select { screen: u8, position: Option<usize> },
    /// A new list is waiting for `screen`
    RefreshList { screen: u8 },
    /// A new image is waiting for `screen`
    RefreshImage { screen: u8 },
    /// Change the color of the status light
    LightColor(String),
    /// Notice with nothing the display acts on
    Ignored,
}

impl PushMessage {
    /// Decode a push notice
    pub fn from_json(body: &str) -> Result<Self, PayloadError> {
        let info: UpdateInfo = serde_json::from_str(body)?;
        Self::try_from(info)
    }
}

impl TryFrom<UpdateInfo> for PushMessage {
    type Error = PayloadError;

    fn try_from(info: UpdateInfo) -> Result<Self, Self::Error> {
        if info.select == Some(true) {
            let screen = info.screen.ok_or(PayloadError::MissingScreen)?;
            let position = info.position.map(parse_position).transpose()?;
            return Ok(PushMessage::Select {
                screen: parse_screen(screen)?,
                position,
            });
        }

        if let Some(screen) = info.screen {
            let screen = parse_screen(screen)?;
            return Ok(if info.is_text {
                PushMessage::RefreshList { screen }
            } else {
                PushMessage::RefreshImage { screen }
            });
        }

        if !info.color.is_empty() {
            return Ok(PushMessage::LightColor(info.color));
        }

        Ok(PushMessage::Ignored)
    }
}

/// Report exactly as it appears on the wire
///
/// Absent fields are sent as `null`, never omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CubeInfo {
    #[serde(rename = "type")]
    pub kind: u8,
    pub cube: u8,
    pub screen: Option<i32>,
    pub state: Option<i64>,
}

/// Reports from the display to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerMessage {
    /// Central button pressed; `item` is the activated item's id on navigable screens
    Tap { screen: u8, item: Option<i64> },
    /// Orientation toggled; `flipped` is the orientation before the press
    Flip { flipped: bool },
    /// Ask the controller to move to `screen`, optionally at `position`
    Change { screen: u8, position: Option<usize> },
}

impl ControllerMessage {
    /// Convert to the wire struct
    pub fn to_cube_info(&self) -> CubeInfo {
        match *self {
            ControllerMessage::Tap { screen, item } => CubeInfo {
                kind: TYPE_TAP,
                cube: if item.is_some() {
                    CUBE_NAVIGABLE
                } else {
                    CUBE_IMAGE
                },
                screen: Some(screen as i32),
                state: item,
            },
            ControllerMessage::Flip { flipped } => CubeInfo {
                kind: TYPE_FLIP,
                cube: CUBE_NAVIGABLE,
                screen: None,
                state: Some(flipped as i64),
            },
            ControllerMessage::Change { screen, position } => CubeInfo {
                kind: TYPE_CHANGE,
                cube: CUBE_NAVIGABLE,
                screen: Some(screen as i32),
                state: position.map(|p| p as i64),
            },
        }
    }

    /// Encode as a JSON body
    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(&self.to_cube_info())?)
    }
}

impl TryFrom<CubeInfo> for ControllerMessage {
    type Error = PayloadError;

    /// Parse a report back (for testing or simulation of the controller side)
    fn try_from(info: CubeInfo) -> Result<Self, Self::Error> {
        match info.kind {
            TYPE_TAP => Ok(ControllerMessage::Tap {
                screen: parse_screen(info.screen.ok_or(PayloadError::MissingScreen)?)?,
                item: if info.cube == CUBE_NAVIGABLE {
                    info.state
                } else {
                    None
                },
            }),
            TYPE_FLIP => Ok(ControllerMessage::Flip {
                flipped: info.state.unwrap_or(0) != 0,
            }),
            TYPE_CHANGE => {
                let position = match info.state {
                    Some(state) => Some(parse_position(
                        i32::try_from(state).map_err(|_| PayloadError::InvalidPosition(-1))?,
                    )?),
                    None => None,
                };
                Ok(ControllerMessage::Change {
                    screen: parse_screen(info.screen.ok_or(PayloadError::MissingScreen)?)?,
                    position,
                })
            }
            other => Err(PayloadError::UnknownMessageType(other)),
        }
    }
}

fn parse_screen(screen: i32) -> Result<u8, PayloadError> {
    if (0..SCREEN_COUNT as i32).contains(&screen) {
        Ok(screen as u8)
    } else {
        Err(PayloadError::InvalidScreen(screen))
    }
}

fn parse_position(position: i32) -> Result<usize, PayloadError> {
    usize::try_from(position).map_err(|_| PayloadError::InvalidPosition(position))
}
