//! Pindefs: shared GPIO pin vocabulary
//!
//! This crate standardises how firmware describes a pin: its configuration
//! mode, the polarity of its "active" state and the logical intent being
//! expressed. Chip-specific HALs and drivers consume these types instead of
//! inventing their own `inverted: bool` flags.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers / application firmware         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pindefs (this crate - pin state model) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal digital pins (chip HAL)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`level`] - [`ActiveLevel`], [`LogicLevel`], [`ElectricalLevel`]
//! - [`mode`] - [`PinMode`]
//! - [`model`] - [`configure`], [`to_electrical`], [`to_logic`]
//! - [`gpio`] - [`LogicPin`] adapter over `embedded-hal` pins
//! - [`vocabulary`] - reserved identifiers and [`assert_not_reserved!`]
//!
//! The ordinals of every enum are a stable ABI and are checked at compile
//! time.
//!
//! ```
//! use pindefs::{configure, ActiveLevel, ElectricalLevel, LogicLevel, PinMode};
//!
//! let enable = configure(PinMode::Output, ActiveLevel::ActiveLow)?;
//! assert_eq!(enable.to_electrical(LogicLevel::Active)?, ElectricalLevel::Low);
//! # Ok::<(), pindefs::PinError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;
#[macro_use]
mod macros;

pub mod error;
pub mod gpio;
pub mod level;
pub mod mode;
pub mod model;
pub mod vocabulary;

// Re-export key types at crate root for convenience
pub use error::{InvalidOrdinal, ParseNameError, PinError};
pub use gpio::LogicPin;
pub use level::{ActiveLevel, ElectricalLevel, LogicLevel};
pub use mode::{PinMode, Pull};
pub use model::{configure, is_compatible, to_electrical, to_logic, PinConfig};
