//! State machine definition

use super::events::Event;

/// Device states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Screens dark, no connection
    #[default]
    Off,
    /// Showing the PIN and waiting for the server to bind the device
    Pairing,
    /// Logged in; push notices drive the screens
    Online,
}

impl State {
    /// Check if the screens are lit
    pub fn is_powered(&self) -> bool {
        !matches!(self, State::Off)
    }

    /// Check if push notices and button reports are exchanged
    pub fn is_online(&self) -> bool {
        matches!(self, State::Online)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Off, PowerOn { paired: true }) => Online,
            (Off, PowerOn { paired: false }) => Pairing,
            (Pairing, Bound) => Online,
            (Pairing | Online, PowerOff) => Off,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_paired() {
        let next = State::Off.transition(Event::PowerOn { paired: true });
        assert_eq!(next, State::Online);
    }

    #[test]
    fn test_power_on_unpaired_then_bound() {
        let state = State::Off.transition(Event::PowerOn { paired: false });
        assert_eq!(state, State::Pairing);
        assert_eq!(state.transition(Event::Bound), State::Online);
    }

    #[test]
    fn test_power_off_from_any_powered_state() {
        for state in [State::Pairing, State::Online] {
            assert_eq!(state.transition(Event::PowerOff), State::Off);
        }
    }

    #[test]
    fn test_ignored_events_keep_state() {
        assert_eq!(State::Off.transition(Event::Bound), State::Off);
        assert_eq!(State::Off.transition(Event::PowerOff), State::Off);
        assert_eq!(State::Online.transition(Event::Bound), State::Online);
        assert_eq!(
            State::Online.transition(Event::PowerOn { paired: false }),
            State::Online
        );
    }

    #[test]
    fn test_state_queries() {
        assert!(!State::Off.is_powered());
        assert!(State::Pairing.is_powered());
        assert!(!State::Pairing.is_online());
        assert!(State::Online.is_online());
    }
}
