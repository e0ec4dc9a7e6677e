//! Unified error type for the control panel firmware.
//!
//! The die actuators themselves never fail: a trigger is either accepted or
//! ignored. Errors only come from the surfaces around them (configuration,
//! bank bookkeeping, peripheral initialisation). All variants are `Copy` so
//! they pass through the service layer without allocation.

use core::fmt;

use crate::actuator::bank::DieId;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
    /// The actuator bank has no free slot.
    BankFull,
    /// A command referenced a die that was never registered.
    UnknownDie(DieId),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::BankFull => write!(f, "actuator bank full"),
            Self::UnknownDie(die) => write!(f, "unknown die #{die}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
