//! Application core — panel logic, zero direct I/O.
//!
//! The [`service`] maps commands and button presses onto die triggers and
//! forwards cycle transitions as events. Time and event output go through
//! the [`ports`] traits, keeping this layer testable without real pins.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
