//! Pin strings as written in declaration files
//!
//! Supported formats:
//! - `"PA0"` -> port A, pin 0
//! - `"!PB1"` -> port B, pin 1, inverted (active-low)
//! - `"25"` / `"!25"` -> GPIO number 25

use std::fmt;
use std::str::FromStr;

/// Highest pin index within a port
pub const MAX_PORT_PIN: u8 = 15;

/// Highest bare GPIO number
pub const MAX_GPIO: u8 = 63;

/// Physical pin reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PinRef {
    /// Port letter and pin index (`PA5`)
    Port { port: char, index: u8 },
    /// Flat GPIO number (`25`)
    Gpio(u8),
}

impl fmt::Display for PinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinRef::Port { port, index } => write!(f, "P{}{}", port, index),
            PinRef::Gpio(n) => write!(f, "{}", n),
        }
    }
}

/// Parsed pin string: the physical pin and whether it is inverted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinString {
    pub pin: PinRef,
    pub inverted: bool,
}

impl fmt::Display for PinString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted {
            f.write_str("!")?;
        }
        write!(f, "{}", self.pin)
    }
}

/// Pin string did not match any supported format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPinString;

impl FromStr for PinString {
    type Err = InvalidPinString;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (s, inverted) = match s.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (s, false),
        };

        let pin = parse_pin_ref(s).ok_or(InvalidPinString)?;
        Ok(PinString { pin, inverted })
    }
}

fn parse_pin_ref(s: &str) -> Option<PinRef> {
    if let Some(rest) = s.strip_prefix('P') {
        let mut chars = rest.chars();
        let port = chars.next()?;
        if !('A'..='H').contains(&port) {
            return None;
        }
        let index = parse_number(chars.as_str())?;
        if index > MAX_PORT_PIN {
            return None;
        }
        return Some(PinRef::Port { port, index });
    }

    let n = parse_number(s)?;
    if n > MAX_GPIO {
        return None;
    }
    Some(PinRef::Gpio(n))
}

// Digits only; rejects signs and whitespace that `u8::from_str` would
// otherwise accept or report confusingly.
fn parse_number(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
