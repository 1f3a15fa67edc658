//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Power button pressed while off; `paired` if credentials are stored
    PowerOn { paired: bool },
    /// Power button pressed while on
    PowerOff,
    /// The server accepted the pairing PIN
    Bound,
}
