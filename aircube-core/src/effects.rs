//! Requests the device hands to its transport
//!
//! The core never talks to the network itself. Every input returns the
//! follow-up work for the driver: messages to send, content to fetch,
//! connections to open or close.

use aircube_display::ScreenId;
use aircube_protocol::{ControllerMessage, Credentials, HelloMessage};

/// Maximum effects produced by one input
pub const MAX_EFFECTS: usize = 4;

/// One request for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Report to the controller over the push socket
    Send(ControllerMessage),
    /// Fetch the list for a screen, then hand it back with `deliver_list`
    FetchList(ScreenId),
    /// Fetch the image for a screen, then hand it back with `deliver_image`
    FetchImage(ScreenId),
    /// Open the push socket and greet with this message
    Connect(HelloMessage),
    /// Close the push socket
    Disconnect,
    /// Persist credentials received while pairing
    StoreCredentials(Credentials),
}

/// Effects of one input, in order
pub type Effects = heapless::Vec<Effect, MAX_EFFECTS>;

/// Append an effect, dropping it with a warning if the list is full
pub(crate) fn push(effects: &mut Effects, effect: Effect) {
    if let Err(effect) = effects.push(effect) {
        log::warn!("Effect list full, dropping {:?}", effect);
    }
}
