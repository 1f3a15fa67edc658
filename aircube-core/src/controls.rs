//! Front panel buttons

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Buttons on the cube besides the power switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PanelButton {
    /// Previous list item
    Up,
    /// Next list item
    Down,
    /// Activate the selection, or tap an image screen
    Tap,
    /// Ask for the screen to the left
    Left,
    /// Ask for the screen to the right
    Right,
    /// Turn the cube upside down
    Flip,
}
