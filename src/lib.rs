//! Control panel firmware library.
//!
//! Exposes the pure-logic modules (timed die actuators, panel service,
//! button debouncing) for integration testing and host simulation. All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod actuator;
pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;

pub use actuator::{ActuatorState, CycleEvent, SettlePolicy, TimedActuator};
pub use error::{Error, Result};
