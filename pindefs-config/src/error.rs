//! Error types

use std::fmt;
use std::io;
use std::path::PathBuf;

use pindefs::PinError;
use thiserror::Error;

use crate::pin_string::PinRef;

/// Problem with a single pin declaration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinIssue {
    #[error("[pins.{label}] invalid pin string '{value}'")]
    InvalidPinString { label: String, value: String },

    #[error("[pins.{label}] unknown mode '{value}'")]
    UnknownMode { label: String, value: String },

    #[error("[pins.{label}] unknown active level '{value}' (expected low, high or unset)")]
    UnknownActiveLevel { label: String, value: String },

    #[error("[pins.{label}] '!' prefix contradicts active = '{active}'")]
    ConflictingPolarity { label: String, active: String },

    #[error("[pins.{label}] {error}")]
    Pin { label: String, error: PinError },

    #[error("[pins.{label}] pin {pin} already used by [pins.{other}]")]
    DuplicatePin { label: String, other: String, pin: PinRef },

    #[error("[pins.{label}] label is not a valid identifier")]
    InvalidLabel { label: String },

    #[error("[pins.{label}] label maps to the same constant as [pins.{other}]")]
    DuplicateLabel { label: String, other: String },

    #[error("[pins.{label}] label collides with reserved identifier `{reserved}`")]
    ReservedLabel { label: String, reserved: &'static str },
}

impl PinIssue {
    /// Label of the offending declaration
    pub fn label(&self) -> &str {
        match self {
            PinIssue::InvalidPinString { label, .. }
            | PinIssue::UnknownMode { label, .. }
            | PinIssue::UnknownActiveLevel { label, .. }
            | PinIssue::ConflictingPolarity { label, .. }
            | PinIssue::Pin { label, .. }
            | PinIssue::DuplicatePin { label, .. }
            | PinIssue::InvalidLabel { label }
            | PinIssue::DuplicateLabel { label, .. }
            | PinIssue::ReservedLabel { label, .. } => label,
        }
    }
}

/// Every issue found in one declaration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issues(pub Vec<PinIssue>);

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Errors from loading or generating pin declarations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid pin declarations: {0}")]
    Invalid(Issues),

    #[error("generated code does not parse: {0}")]
    Codegen(#[from] syn::Error),
}

impl ConfigError {
    /// Issues carried by an [`ConfigError::Invalid`] error
    pub fn issues(&self) -> &[PinIssue] {
        match self {
            ConfigError::Invalid(issues) => &issues.0,
            ConfigError::Io { .. } | ConfigError::Toml(_) | ConfigError::Codegen(_) => &[],
        }
    }
}

impl From<Vec<PinIssue>> for ConfigError {
    fn from(issues: Vec<PinIssue>) -> Self {
        ConfigError::Invalid(Issues(issues))
    }
}
