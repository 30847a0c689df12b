//! Host-side pin declaration files for pindefs
//!
//! Loads a TOML file that names the pins a firmware uses, validates every
//! entry against the pin state model and generates Rust constants for it.
//!
//! - [`declarations`] - parsing and validation ([`PinDeclarations`])
//! - [`pin_string`] - `"!PA5"` style pin strings
//! - [`codegen`] - `pub const` generation guarded against vocabulary
//!   collisions
//! - [`build`] - `build.rs` helpers with boxed diagnostics

pub mod build;
pub mod codegen;
pub mod declarations;
pub mod error;
pub mod pin_string;

pub use codegen::generate_module;
pub use declarations::{PinDeclaration, PinDeclarations};
pub use error::{ConfigError, PinIssue};
pub use pin_string::{PinRef, PinString};
