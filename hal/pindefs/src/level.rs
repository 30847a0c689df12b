//! Polarity, logical intent and electrical level

use embedded_hal::digital::PinState;
use static_assertions::{assert_eq_size, const_assert_eq};

pin_enum! {
    /// Which electrical level represents the logical "active" state
    pub enum ActiveLevel {
        /// No polarity configured; logic conversions are rejected
        #[default]
        Unset = 0 => "unset",
        /// Active when the signal is low (inverted)
        ActiveLow = 1 => "active_low",
        /// Active when the signal is high
        ActiveHigh = 2 => "active_high",
    }
}

pin_enum! {
    /// Logical intent, independent of electrical polarity
    pub enum LogicLevel {
        #[default]
        Inactive = 0 => "inactive",
        Active = 1 => "active",
    }
}

pin_enum! {
    /// Physical signal level of a pin
    pub enum ElectricalLevel {
        #[default]
        Low = 0 => "low",
        High = 1 => "high",
    }
}

assert_eq_size!(ActiveLevel, u8);
assert_eq_size!(LogicLevel, u8);
assert_eq_size!(ElectricalLevel, u8);

const_assert_eq!(ActiveLevel::Unset as u8, 0);
const_assert_eq!(ActiveLevel::ActiveLow as u8, 1);
const_assert_eq!(ActiveLevel::ActiveHigh as u8, 2);
const_assert_eq!(LogicLevel::Inactive as u8, 0);
const_assert_eq!(LogicLevel::Active as u8, 1);
const_assert_eq!(ElectricalLevel::Low as u8, 0);
const_assert_eq!(ElectricalLevel::High as u8, 1);

impl ActiveLevel {
    /// Check whether a polarity has been chosen
    pub const fn is_set(self) -> bool {
        match self {
            ActiveLevel::Unset => false,
            ActiveLevel::ActiveLow | ActiveLevel::ActiveHigh => true,
        }
    }

    /// Polarity from an "inverted" flag as used in pin strings (`!PA0`)
    pub const fn from_inverted(inverted: bool) -> Self {
        if inverted {
            ActiveLevel::ActiveLow
        } else {
            ActiveLevel::ActiveHigh
        }
    }
}

impl LogicLevel {
    pub const fn is_active(self) -> bool {
        match self {
            LogicLevel::Active => true,
            LogicLevel::Inactive => false,
        }
    }

    pub const fn invert(self) -> Self {
        match self {
            LogicLevel::Active => LogicLevel::Inactive,
            LogicLevel::Inactive => LogicLevel::Active,
        }
    }
}

impl From<bool> for LogicLevel {
    fn from(active: bool) -> Self {
        if active {
            LogicLevel::Active
        } else {
            LogicLevel::Inactive
        }
    }
}

impl ElectricalLevel {
    pub const fn is_high(self) -> bool {
        match self {
            ElectricalLevel::High => true,
            ElectricalLevel::Low => false,
        }
    }

    pub const fn is_low(self) -> bool {
        !self.is_high()
    }

    pub const fn invert(self) -> Self {
        match self {
            ElectricalLevel::High => ElectricalLevel::Low,
            ElectricalLevel::Low => ElectricalLevel::High,
        }
    }
}

impl From<bool> for ElectricalLevel {
    fn from(high: bool) -> Self {
        if high {
            ElectricalLevel::High
        } else {
            ElectricalLevel::Low
        }
    }
}

impl From<PinState> for ElectricalLevel {
    fn from(state: PinState) -> Self {
        match state {
            PinState::High => ElectricalLevel::High,
            PinState::Low => ElectricalLevel::Low,
        }
    }
}

impl From<ElectricalLevel> for PinState {
    fn from(level: ElectricalLevel) -> Self {
        match level {
            ElectricalLevel::High => PinState::High,
            ElectricalLevel::Low => PinState::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidOrdinal, ParseNameError};

    #[test]
    fn test_active_level_ordinals() {
        assert_eq!(ActiveLevel::Unset.as_u8(), 0);
        assert_eq!(ActiveLevel::ActiveLow.as_u8(), 1);
        assert_eq!(ActiveLevel::ActiveHigh.as_u8(), 2);
        assert_eq!(ActiveLevel::from_u8(3), None);
        assert_eq!(ActiveLevel::try_from(3u8), Err(InvalidOrdinal(3)));
    }

    #[test]
    fn test_logic_level_ordinals() {
        assert_eq!(LogicLevel::Inactive.as_u8(), 0);
        assert_eq!(LogicLevel::Active.as_u8(), 1);
        assert_eq!(LogicLevel::try_from(1u8), Ok(LogicLevel::Active));
        assert_eq!(LogicLevel::try_from(2u8), Err(InvalidOrdinal(2)));
    }

    #[test]
    fn test_ordinals_decode_to_themselves() {
        for &level in ActiveLevel::ALL {
            assert_eq!(ActiveLevel::from_u8(u8::from(level)), Some(level));
        }
        for &level in LogicLevel::ALL {
            assert_eq!(LogicLevel::from_u8(u8::from(level)), Some(level));
        }
        for &level in ElectricalLevel::ALL {
            assert_eq!(ElectricalLevel::from_u8(u8::from(level)), Some(level));
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ActiveLevel::default(), ActiveLevel::Unset);
        assert_eq!(LogicLevel::default(), LogicLevel::Inactive);
        assert_eq!(ElectricalLevel::default(), ElectricalLevel::Low);
    }

    #[test]
    fn test_names() {
        assert_eq!(ActiveLevel::ActiveLow.name(), "active_low");
        assert_eq!(ActiveLevel::ActiveLow.ident(), "ActiveLow");
        assert_eq!("active_high".parse::<ActiveLevel>(), Ok(ActiveLevel::ActiveHigh));
        assert_eq!("ActiveHigh".parse::<ActiveLevel>(), Err(ParseNameError));
        assert_eq!("inactive".parse::<LogicLevel>(), Ok(LogicLevel::Inactive));
        assert_eq!("high".parse::<ElectricalLevel>(), Ok(ElectricalLevel::High));
    }

    #[test]
    fn test_invert() {
        assert_eq!(LogicLevel::Active.invert(), LogicLevel::Inactive);
        assert_eq!(LogicLevel::Inactive.invert(), LogicLevel::Active);
        assert_eq!(ElectricalLevel::High.invert(), ElectricalLevel::Low);
        assert!(ElectricalLevel::Low.invert().is_high());
    }

    #[test]
    fn test_pin_state_conversion() {
        assert_eq!(PinState::from(ElectricalLevel::High), PinState::High);
        assert_eq!(PinState::from(ElectricalLevel::Low), PinState::Low);
        assert_eq!(ElectricalLevel::from(PinState::High), ElectricalLevel::High);
        assert_eq!(ElectricalLevel::from(true), ElectricalLevel::High);
        assert_eq!(LogicLevel::from(false), LogicLevel::Inactive);
    }

    #[test]
    fn test_from_inverted() {
        assert_eq!(ActiveLevel::from_inverted(true), ActiveLevel::ActiveLow);
        assert_eq!(ActiveLevel::from_inverted(false), ActiveLevel::ActiveHigh);
        assert!(!ActiveLevel::Unset.is_set());
        assert!(ActiveLevel::ActiveLow.is_set());
    }
}
