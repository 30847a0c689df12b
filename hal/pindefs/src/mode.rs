//! Pin configuration modes

use static_assertions::{assert_eq_size, const_assert_eq};

pin_enum! {
    /// Hardware configuration of a pin
    ///
    /// Exactly one mode applies to a pin at any time.
    pub enum PinMode {
        /// High-impedance / disconnected
        #[default]
        Unset = 0 => "unset",
        /// Floating input
        Input = 1 => "input",
        /// Input with internal pull-up
        InputPullup = 2 => "input_pullup",
        /// Input with internal pull-down
        InputPulldown = 3 => "input_pulldown",
        /// Push-pull output
        Output = 4 => "output",
        /// Open-drain output for shared buses
        OutputOpenDrain = 5 => "output_open_drain",
        /// Bidirectional
        InputOutput = 6 => "input_output",
        /// ADC
        AnalogInput = 7 => "analog_input",
        /// DAC
        AnalogOutput = 8 => "analog_output",
    }
}

assert_eq_size!(PinMode, u8);

const_assert_eq!(PinMode::Unset as u8, 0);
const_assert_eq!(PinMode::Input as u8, 1);
const_assert_eq!(PinMode::InputPullup as u8, 2);
const_assert_eq!(PinMode::InputPulldown as u8, 3);
const_assert_eq!(PinMode::Output as u8, 4);
const_assert_eq!(PinMode::OutputOpenDrain as u8, 5);
const_assert_eq!(PinMode::InputOutput as u8, 6);
const_assert_eq!(PinMode::AnalogInput as u8, 7);
const_assert_eq!(PinMode::AnalogOutput as u8, 8);

/// Internal bias resistor selected by a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    None,
    Up,
    Down,
}

impl PinMode {
    /// Mode can sample a digital level
    pub const fn is_input(self) -> bool {
        match self {
            PinMode::Input
            | PinMode::InputPullup
            | PinMode::InputPulldown
            | PinMode::InputOutput => true,
            PinMode::Unset
            | PinMode::Output
            | PinMode::OutputOpenDrain
            | PinMode::AnalogInput
            | PinMode::AnalogOutput => false,
        }
    }

    /// Mode can drive a digital level
    pub const fn is_output(self) -> bool {
        match self {
            PinMode::Output | PinMode::OutputOpenDrain | PinMode::InputOutput => true,
            PinMode::Unset
            | PinMode::Input
            | PinMode::InputPullup
            | PinMode::InputPulldown
            | PinMode::AnalogInput
            | PinMode::AnalogOutput => false,
        }
    }

    pub const fn is_analog(self) -> bool {
        match self {
            PinMode::AnalogInput | PinMode::AnalogOutput => true,
            PinMode::Unset
            | PinMode::Input
            | PinMode::InputPullup
            | PinMode::InputPulldown
            | PinMode::Output
            | PinMode::OutputOpenDrain
            | PinMode::InputOutput => false,
        }
    }

    /// Any digital input or output variant
    pub const fn is_digital(self) -> bool {
        self.is_input() || self.is_output()
    }

    /// Pin is disconnected
    pub const fn is_high_impedance(self) -> bool {
        matches!(self, PinMode::Unset)
    }

    /// Bias resistor this mode enables
    pub const fn pull(self) -> Pull {
        match self {
            PinMode::InputPullup => Pull::Up,
            PinMode::InputPulldown => Pull::Down,
            PinMode::Unset
            | PinMode::Input
            | PinMode::Output
            | PinMode::OutputOpenDrain
            | PinMode::InputOutput
            | PinMode::AnalogInput
            | PinMode::AnalogOutput => Pull::None,
        }
    }
}
