//! Transport-agnostic logic for the AirCube display
//!
//! This crate contains everything the cube does that does not depend on
//! how it is connected or presented:
//!
//! - Power / pairing / online lifecycle
//! - Push notice and panel button handling
//! - Pairing light blink
//! - Configuration type definitions
//!
//! Inputs return [`effects::Effects`]; the driver performs them (sending,
//! fetching, connecting) and feeds the results back into [`Device`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod blink;
pub mod config;
pub mod controls;
pub mod device;
pub mod effects;
pub mod state;

pub use blink::PairingBlink;
pub use controls::PanelButton;
pub use device::{Device, POWER_ON_LIGHT};
pub use effects::{Effect, Effects};
pub use state::{Event, State};
