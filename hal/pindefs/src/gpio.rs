//! Logic-level view over `embedded-hal` digital pins
//!
//! [`LogicPin`] owns a chip-specific pin together with its [`PinConfig`] and
//! lets application code speak in terms of [`LogicLevel`]. The polarity is
//! applied on every access, so an active-low enable line is driven low by
//! `set_active()` without the caller knowing.

use core::fmt;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::error::PinError;
use crate::level::{ActiveLevel, ElectricalLevel, LogicLevel};
use crate::mode::PinMode;
use crate::model::{configure, PinConfig};

/// Error from a [`LogicPin`] operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Rejected by the pin state model
    Pin(PinError),
    /// Underlying hardware access failed
    Io(E),
}

impl<E> From<PinError> for Error<E> {
    fn from(err: PinError) -> Self {
        Error::Pin(err)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "pin i/o error: {:?}", err),
        }
    }
}

impl<E: digital::Error> digital::Error for Error<E> {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::Pin(_) => ErrorKind::Other,
            Error::Io(err) => err.kind(),
        }
    }
}

/// Digital pin driven and read in logical terms
pub struct LogicPin<P> {
    io: P,
    config: PinConfig,
}

impl<P> LogicPin<P> {
    /// Wrap `io` with a validated configuration
    pub fn new(io: P, mode: PinMode, active_level: ActiveLevel) -> Result<Self, PinError> {
        let config = configure(mode, active_level)?;
        Ok(Self { io, config })
    }

    /// Wrap `io` with an already validated configuration
    pub fn with_config(io: P, config: PinConfig) -> Self {
        Self { io, config }
    }

    pub fn config(&self) -> PinConfig {
        self.config
    }

    pub fn mode(&self) -> PinMode {
        self.config.mode()
    }

    pub fn active_level(&self) -> ActiveLevel {
        self.config.active_level()
    }

    /// Change mode and polarity
    ///
    /// This is the only way the configuration changes after construction.
    /// The chip-specific pin is not touched; callers switching between
    /// input and output must also reconfigure the hardware.
    pub fn reconfigure(
        &mut self,
        mode: PinMode,
        active_level: ActiveLevel,
    ) -> Result<(), PinError> {
        match self.config.reconfigure(mode, active_level) {
            Ok(()) => {
                debug!(
                    "pin reconfigured: mode={} active_level={}",
                    mode.as_u8(),
                    active_level.as_u8()
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "pin reconfigure rejected: mode={} active_level={}",
                    mode.as_u8(),
                    active_level.as_u8()
                );
                Err(err)
            }
        }
    }

    /// Give back the underlying pin
    pub fn release(self) -> P {
        self.io
    }

    /// Reject the operation unless the current mode is `capable`
    fn require(&self, capable: fn(PinMode) -> bool) -> Result<(), PinError> {
        if capable(self.config.mode()) {
            Ok(())
        } else {
            Err(PinError::InvalidConfiguration)
        }
    }
}

impl<P: ErrorType> ErrorType for LogicPin<P> {
    type Error = Error<P::Error>;
}

impl<P: OutputPin> LogicPin<P> {
    /// Drive the pin to the electrical level representing `logic`
    pub fn set_logic(&mut self, logic: LogicLevel) -> Result<(), Error<P::Error>> {
        self.require(PinMode::is_output)?;
        let level = self.config.to_electrical(logic)?;
        self.io.set_state(level.into()).map_err(Error::Io)
    }

    pub fn set_active(&mut self) -> Result<(), Error<P::Error>> {
        self.set_logic(LogicLevel::Active)
    }

    pub fn set_inactive(&mut self) -> Result<(), Error<P::Error>> {
        self.set_logic(LogicLevel::Inactive)
    }
}

impl<P: StatefulOutputPin> LogicPin<P> {
    /// Logical state currently being driven
    pub fn output_logic(&mut self) -> Result<LogicLevel, Error<P::Error>> {
        self.require(PinMode::is_output)?;
        let high = self.io.is_set_high().map_err(Error::Io)?;
        Ok(self.config.to_logic(ElectricalLevel::from(high))?)
    }

    pub fn is_set_active(&mut self) -> Result<bool, Error<P::Error>> {
        Ok(self.output_logic()?.is_active())
    }

    /// Invert the driven logical state
    pub fn toggle(&mut self) -> Result<(), Error<P::Error>> {
        let current = self.output_logic()?;
        self.set_logic(current.invert())
    }
}

impl<P: InputPin> LogicPin<P> {
    /// Sample the pin and translate it to logical intent
    pub fn read_logic(&mut self) -> Result<LogicLevel, Error<P::Error>> {
        self.require(PinMode::is_input)?;
        let high = self.io.is_high().map_err(Error::Io)?;
        Ok(self.config.to_logic(ElectricalLevel::from(high))?)
    }

    pub fn is_active(&mut self) -> Result<bool, Error<P::Error>> {
        Ok(self.read_logic()?.is_active())
    }
}
