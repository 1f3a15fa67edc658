//! Device lifecycle
//!
//! Power and pairing status as an explicit, finite state machine.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
