//! AirCube push protocol
//!
//! This crate defines the messages exchanged between the AirCube display
//! and its remote controller. The controller pushes small JSON notices over
//! a persistent connection; the display then pulls the actual content
//! (a raw image or a list of items) and reports button presses back.
//!
//! # Protocol Overview
//!
//! ```text
//! controller ──UpdateInfo──▶ display      "screen 2 has a new list"
//! display    ──(fetch)────▶ controller    list JSON / wire image bytes
//! display    ──CubeInfo───▶ controller    tap / flip / change selection
//! ```
//!
//! Everything dynamic-typed on the wire is converted at this boundary into
//! tagged enums (`PushMessage`, `ControllerMessage`) and validated payloads
//! (`ListPayload`, `WireImage`) before it reaches the rendering engine.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod list;
pub mod messages;
pub mod pairing;
pub mod wire;

pub use error::PayloadError;
pub use list::{IconPayload, ListItemPayload, ListPayload};
pub use messages::{ControllerMessage, CubeInfo, PushMessage, UpdateInfo};
pub use pairing::{Credentials, DeviceBound, HelloMessage};
pub use wire::{WireImage, SCREEN_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH, WIRE_IMAGE_LEN};
