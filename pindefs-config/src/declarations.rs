//! Pin declaration files
//!
//! ```toml
//! [pins.status_led]
//! pin = "!PA5"        # '!' prefix = active-low
//! mode = "output"
//!
//! [pins.battery_sense]
//! pin = "PB0"
//! mode = "analog_input"
//! ```
//!
//! Every declaration is validated through [`pindefs::configure`]. All
//! problems in a file are collected and reported together.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pindefs::{configure, ActiveLevel, PinConfig, PinError, PinMode};
use serde::Deserialize;

use crate::error::{ConfigError, PinIssue};
use crate::pin_string::{PinRef, PinString};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFile {
    #[serde(default)]
    pins: BTreeMap<String, RawPin>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPin {
    pin: String,
    mode: Option<String>,
    active: Option<String>,
}

/// One validated pin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinDeclaration {
    /// Table key from the file (`status_led`)
    pub label: String,
    /// Physical pin
    pub pin: PinRef,
    /// Validated mode and polarity
    pub config: PinConfig,
}

impl PinDeclaration {
    /// Name of the generated constant (`STATUS_LED`)
    pub fn const_name(&self) -> String {
        const_name(&self.label)
    }
}

/// All pins declared in one file, sorted by label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinDeclarations {
    pins: Vec<PinDeclaration>,
}

impl PinDeclarations {
    /// Parse and validate declaration file contents
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawFile = toml::from_str(input)?;

        let mut issues = Vec::new();
        let mut pins = Vec::with_capacity(raw.pins.len());

        for (label, raw_pin) in &raw.pins {
            if !is_identifier(label) {
                issues.push(PinIssue::InvalidLabel { label: label.clone() });
                continue;
            }
            match resolve(label, raw_pin) {
                Ok(decl) => pins.push(decl),
                Err(issue) => issues.push(issue),
            }
        }

        check_duplicates(&pins, &mut issues);

        if issues.is_empty() {
            Ok(Self { pins })
        } else {
            Err(issues.into())
        }
    }

    /// Read and validate a declaration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PinDeclaration> {
        self.pins.iter()
    }

    pub fn get(&self, label: &str) -> Option<&PinDeclaration> {
        self.pins.iter().find(|p| p.label == label)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

fn resolve(label: &str, raw: &RawPin) -> Result<PinDeclaration, PinIssue> {
    let parsed: PinString = raw.pin.parse().map_err(|_| PinIssue::InvalidPinString {
        label: label.to_string(),
        value: raw.pin.clone(),
    })?;

    let mode = match &raw.mode {
        Some(value) => value.parse::<PinMode>().map_err(|_| PinIssue::UnknownMode {
            label: label.to_string(),
            value: value.clone(),
        })?,
        None => PinMode::Unset,
    };

    let active_level = match &raw.active {
        Some(value) => {
            let level = parse_active(value).ok_or_else(|| PinIssue::UnknownActiveLevel {
                label: label.to_string(),
                value: value.clone(),
            })?;
            if parsed.inverted && level != ActiveLevel::ActiveLow {
                return Err(PinIssue::ConflictingPolarity {
                    label: label.to_string(),
                    active: value.clone(),
                });
            }
            level
        }
        None => implied_active_level(mode, parsed.inverted).map_err(|error| PinIssue::Pin {
            label: label.to_string(),
            error,
        })?,
    };

    let config = configure(mode, active_level).map_err(|error| PinIssue::Pin {
        label: label.to_string(),
        error,
    })?;

    Ok(PinDeclaration {
        label: label.to_string(),
        pin: parsed.pin,
        config,
    })
}

/// Polarity when the file gives only the pin string
///
/// Analog pins carry no polarity, so an inverted analog pin is rejected.
fn implied_active_level(mode: PinMode, inverted: bool) -> Result<ActiveLevel, PinError> {
    if mode.is_analog() {
        if inverted {
            Err(PinError::InvalidConfiguration)
        } else {
            Ok(ActiveLevel::Unset)
        }
    } else {
        Ok(ActiveLevel::from_inverted(inverted))
    }
}

fn parse_active(value: &str) -> Option<ActiveLevel> {
    match value {
        "low" => Some(ActiveLevel::ActiveLow),
        "high" => Some(ActiveLevel::ActiveHigh),
        "unset" => Some(ActiveLevel::Unset),
        _ => None,
    }
}

fn check_duplicates(pins: &[PinDeclaration], issues: &mut Vec<PinIssue>) {
    for (i, pin) in pins.iter().enumerate() {
        if let Some(other) = pins[..i].iter().find(|p| p.pin == pin.pin) {
            issues.push(PinIssue::DuplicatePin {
                label: pin.label.clone(),
                other: other.label.clone(),
                pin: pin.pin,
            });
        }
        if let Some(other) = pins[..i].iter().find(|p| p.const_name() == pin.const_name()) {
            issues.push(PinIssue::DuplicateLabel {
                label: pin.label.clone(),
                other: other.label.clone(),
            });
        }
    }
}

/// Label is usable as a Rust identifier once upper-cased
fn is_identifier(label: &str) -> bool {
    syn::parse_str::<syn::Ident>(&const_name(label)).is_ok()
}

pub(crate) fn const_name(label: &str) -> String {
    label.to_ascii_uppercase()
}
