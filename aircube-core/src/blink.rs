//! Status light pulse while waiting to be paired

use aircube_display::Rgb;

/// Interval between brightness steps
pub const BLINK_PERIOD_MS: u32 = 20;

const START_BRIGHTNESS: u8 = 128;
const STEP: i16 = 2;
const UPPER_TURN: u8 = 192;
const LOWER_TURN: u8 = 16;

/// Gray pulse bouncing between 16 and 192
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PairingBlink {
    brightness: u8,
    shift: i16,
}

impl Default for PairingBlink {
    fn default() -> Self {
        Self::new()
    }
}

impl PairingBlink {
    /// Create a new pulse at half brightness, rising
    pub const fn new() -> Self {
        Self {
            brightness: START_BRIGHTNESS,
            shift: STEP,
        }
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Advance one period and return the new light color
    pub fn step(&mut self) -> Rgb {
        self.brightness = (self.brightness as i16 + self.shift) as u8;
        if self.brightness > UPPER_TURN || self.brightness < LOWER_TURN {
            self.shift = -self.shift;
        }
        Rgb::gray(self.brightness)
    }
}
