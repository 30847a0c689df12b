//! Error types

use core::fmt;

/// Errors from the pin state model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Mode and active level cannot be combined, or the mode does not
    /// support the requested operation
    InvalidConfiguration,
    /// Logic/electrical conversion attempted with `ActiveLevel::Unset`
    UndefinedPolarity,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::InvalidConfiguration => f.write_str("invalid pin configuration"),
            PinError::UndefinedPolarity => f.write_str("pin polarity is unset"),
        }
    }
}

/// Raw byte is not a valid ordinal for the target enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidOrdinal(pub u8);

impl fmt::Display for InvalidOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ordinal {}", self.0)
    }
}

/// String is not a known vocabulary name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseNameError;

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown name")
    }
}
