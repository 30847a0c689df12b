//! Pin state model
//!
//! Pure mappings between logical intent and electrical level, and the
//! mode/polarity compatibility rules. Every input is an explicit parameter;
//! there is no module-level default.
//!
//! | Mode | Accepted active levels |
//! |------|------------------------|
//! | `Unset` | any (polarity may be staged before the pin is enabled) |
//! | digital input/output variants | `ActiveLow`, `ActiveHigh` |
//! | `AnalogInput`, `AnalogOutput` | `Unset` only |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::PinError;
use crate::level::{ActiveLevel, ElectricalLevel, LogicLevel};
use crate::mode::PinMode;

/// Check whether `mode` may be paired with `active_level`
pub const fn is_compatible(mode: PinMode, active_level: ActiveLevel) -> bool {
    match mode {
        PinMode::Unset => true,
        PinMode::Input
        | PinMode::InputPullup
        | PinMode::InputPulldown
        | PinMode::Output
        | PinMode::OutputOpenDrain
        | PinMode::InputOutput => active_level.is_set(),
        PinMode::AnalogInput | PinMode::AnalogOutput => !active_level.is_set(),
    }
}

/// Validate a mode/polarity pair
///
/// Fails with [`PinError::InvalidConfiguration`] when the pair is not
/// allowed by the compatibility table above.
pub const fn configure(mode: PinMode, active_level: ActiveLevel) -> Result<PinConfig, PinError> {
    if is_compatible(mode, active_level) {
        Ok(PinConfig { mode, active_level })
    } else {
        Err(PinError::InvalidConfiguration)
    }
}

/// Map logical intent to the electrical level
///
/// `High = (logic == Active) XOR (active_level == ActiveLow)`.
pub const fn to_electrical(
    logic: LogicLevel,
    active_level: ActiveLevel,
) -> Result<ElectricalLevel, PinError> {
    match (active_level, logic) {
        (ActiveLevel::Unset, _) => Err(PinError::UndefinedPolarity),
        (ActiveLevel::ActiveHigh, LogicLevel::Active) => Ok(ElectricalLevel::High),
        (ActiveLevel::ActiveHigh, LogicLevel::Inactive) => Ok(ElectricalLevel::Low),
        (ActiveLevel::ActiveLow, LogicLevel::Active) => Ok(ElectricalLevel::Low),
        (ActiveLevel::ActiveLow, LogicLevel::Inactive) => Ok(ElectricalLevel::High),
    }
}

/// Map an electrical level back to logical intent
pub const fn to_logic(
    electrical: ElectricalLevel,
    active_level: ActiveLevel,
) -> Result<LogicLevel, PinError> {
    match (active_level, electrical) {
        (ActiveLevel::Unset, _) => Err(PinError::UndefinedPolarity),
        (ActiveLevel::ActiveHigh, ElectricalLevel::High) => Ok(LogicLevel::Active),
        (ActiveLevel::ActiveHigh, ElectricalLevel::Low) => Ok(LogicLevel::Inactive),
        (ActiveLevel::ActiveLow, ElectricalLevel::Low) => Ok(LogicLevel::Active),
        (ActiveLevel::ActiveLow, ElectricalLevel::High) => Ok(LogicLevel::Inactive),
    }
}

/// Validated mode and polarity owned by a pin
///
/// Only obtainable through [`configure`] (or [`PinConfig::new`]), so a
/// value of this type always satisfies the compatibility table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PinConfig {
    mode: PinMode,
    active_level: ActiveLevel,
}

impl PinConfig {
    /// Disconnected pin with no polarity
    pub const UNSET: Self = Self {
        mode: PinMode::Unset,
        active_level: ActiveLevel::Unset,
    };

    /// Same as [`configure`]
    pub const fn new(mode: PinMode, active_level: ActiveLevel) -> Result<Self, PinError> {
        configure(mode, active_level)
    }

    pub const fn mode(&self) -> PinMode {
        self.mode
    }

    pub const fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    /// Electrical level that represents `logic` on this pin
    pub const fn to_electrical(&self, logic: LogicLevel) -> Result<ElectricalLevel, PinError> {
        to_electrical(logic, self.active_level)
    }

    /// Logical intent represented by `electrical` on this pin
    pub const fn to_logic(&self, electrical: ElectricalLevel) -> Result<LogicLevel, PinError> {
        to_logic(electrical, self.active_level)
    }

    /// Replace mode and polarity
    ///
    /// On error the current configuration is left untouched.
    pub fn reconfigure(
        &mut self,
        mode: PinMode,
        active_level: ActiveLevel,
    ) -> Result<(), PinError> {
        *self = configure(mode, active_level)?;
        Ok(())
    }
}

// Deserialization goes through `configure` so invalid pairs are rejected.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PinConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            mode: PinMode,
            #[serde(default)]
            active_level: ActiveLevel,
        }

        let raw = Raw::deserialize(deserializer)?;
        configure(raw.mode, raw.active_level).map_err(|_| {
            serde::de::Error::custom("mode is incompatible with active_level")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const POLARITIES: [ActiveLevel; 2] = [ActiveLevel::ActiveLow, ActiveLevel::ActiveHigh];

    #[test]
    fn test_round_trip_law() {
        for active_level in POLARITIES {
            for &logic in LogicLevel::ALL {
                let electrical = to_electrical(logic, active_level).unwrap();
                assert_eq!(to_logic(electrical, active_level), Ok(logic));
            }
        }
    }

    #[test]
    fn test_unset_polarity_rejected() {
        for &logic in LogicLevel::ALL {
            assert_eq!(
                to_electrical(logic, ActiveLevel::Unset),
                Err(PinError::UndefinedPolarity)
            );
        }
        for &electrical in ElectricalLevel::ALL {
            assert_eq!(
                to_logic(electrical, ActiveLevel::Unset),
                Err(PinError::UndefinedPolarity)
            );
        }
    }

    #[test]
    fn test_polarity_mapping() {
        assert_eq!(
            to_electrical(LogicLevel::Active, ActiveLevel::ActiveHigh),
            Ok(ElectricalLevel::High)
        );
        assert_eq!(
            to_electrical(LogicLevel::Active, ActiveLevel::ActiveLow),
            Ok(ElectricalLevel::Low)
        );
        assert_eq!(
            to_electrical(LogicLevel::Inactive, ActiveLevel::ActiveLow),
            Ok(ElectricalLevel::High)
        );
        assert_eq!(
            to_logic(ElectricalLevel::Low, ActiveLevel::ActiveLow),
            Ok(LogicLevel::Active)
        );
    }

    #[test]
    fn test_analog_requires_unset_polarity() {
        assert_eq!(
            configure(PinMode::AnalogInput, ActiveLevel::ActiveLow),
            Err(PinError::InvalidConfiguration)
        );
        assert_eq!(
            configure(PinMode::AnalogOutput, ActiveLevel::ActiveHigh),
            Err(PinError::InvalidConfiguration)
        );
        let config = configure(PinMode::AnalogInput, ActiveLevel::Unset).unwrap();
        assert_eq!(config.mode(), PinMode::AnalogInput);
        assert_eq!(config.active_level(), ActiveLevel::Unset);
    }

    #[test]
    fn test_digital_requires_polarity() {
        let config = configure(PinMode::Output, ActiveLevel::ActiveHigh).unwrap();
        assert_eq!(config.to_electrical(LogicLevel::Active), Ok(ElectricalLevel::High));

        for &mode in PinMode::ALL {
            if mode.is_digital() {
                assert_eq!(
                    configure(mode, ActiveLevel::Unset),
                    Err(PinError::InvalidConfiguration),
                    "{:?}",
                    mode
                );
                assert!(configure(mode, ActiveLevel::ActiveLow).is_ok());
            }
        }
    }

    #[test]
    fn test_unset_mode_accepts_any_polarity() {
        for &active_level in ActiveLevel::ALL {
            assert!(configure(PinMode::Unset, active_level).is_ok());
        }
    }

    #[test]
    fn test_compatibility_matches_configure() {
        for &mode in PinMode::ALL {
            for &active_level in ActiveLevel::ALL {
                assert_eq!(
                    is_compatible(mode, active_level),
                    configure(mode, active_level).is_ok()
                );
            }
        }
    }

    #[test]
    fn test_reconfigure_keeps_config_on_error() {
        let mut config = PinConfig::new(PinMode::Output, ActiveLevel::ActiveLow).unwrap();

        assert_eq!(
            config.reconfigure(PinMode::AnalogOutput, ActiveLevel::ActiveLow),
            Err(PinError::InvalidConfiguration)
        );
        assert_eq!(config.mode(), PinMode::Output);
        assert_eq!(config.active_level(), ActiveLevel::ActiveLow);

        config.reconfigure(PinMode::AnalogOutput, ActiveLevel::Unset).unwrap();
        assert_eq!(config.mode(), PinMode::AnalogOutput);
        assert_eq!(
            config.to_electrical(LogicLevel::Active),
            Err(PinError::UndefinedPolarity)
        );
    }

    #[test]
    fn test_default_is_unset() {
        assert_eq!(PinConfig::default(), PinConfig::UNSET);
        assert!(PinConfig::UNSET.mode().is_high_impedance());
    }

    const STATUS_LED: PinConfig = match configure(PinMode::Output, ActiveLevel::ActiveLow) {
        Ok(config) => config,
        Err(_) => panic!("status led configuration"),
    };

    #[test]
    fn test_const_configuration() {
        assert_eq!(STATUS_LED.to_electrical(LogicLevel::Active), Ok(ElectricalLevel::Low));
    }

    fn polarity() -> impl Strategy<Value = ActiveLevel> {
        prop_oneof![Just(ActiveLevel::ActiveLow), Just(ActiveLevel::ActiveHigh)]
    }

    proptest! {
        #[test]
        fn prop_electrical_is_xor(active in any::<bool>(), active_low in any::<bool>()) {
            let logic = LogicLevel::from(active);
            let active_level = ActiveLevel::from_inverted(active_low);
            let electrical = to_electrical(logic, active_level).unwrap();
            prop_assert_eq!(electrical.is_high(), active ^ active_low);
        }

        #[test]
        fn prop_to_logic_inverts_to_electrical(active_level in polarity(), high in any::<bool>()) {
            let electrical = ElectricalLevel::from(high);
            let logic = to_logic(electrical, active_level).unwrap();
            prop_assert_eq!(to_electrical(logic, active_level), Ok(electrical));
        }

        #[test]
        fn prop_raw_bytes_decode_or_reject(byte in any::<u8>()) {
            prop_assert_eq!(PinMode::from_u8(byte).is_some(), byte <= 8);
            prop_assert_eq!(ActiveLevel::from_u8(byte).is_some(), byte <= 2);
            prop_assert_eq!(LogicLevel::from_u8(byte).is_some(), byte <= 1);
        }
    }
}
