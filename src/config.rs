//! Control panel configuration
//!
//! Timing parameters for the dice actuators and the host polling loop.
//! Values default to what the game host expects (a 3 s auto-roll) and can be
//! overridden from a JSON document at build or boot time.

use embassy_time::Duration;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::actuator::SettlePolicy;
use crate::error::{Error, Result};

/// Core panel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    // --- Dice ---
    /// How long a die output stays energised per roll (milliseconds)
    pub roll_duration_ms: u32,
    /// Hold the die off after each roll so it can come to rest
    pub settle_enabled: bool,
    /// Settling period after the output is released (milliseconds)
    pub settle_duration_ms: u32,

    // --- Timing ---
    /// Host loop polling interval (milliseconds)
    pub tick_interval_ms: u32,
    /// Roll button debounce window (milliseconds)
    pub debounce_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            // Dice
            roll_duration_ms: 3000,
            settle_enabled: true,
            settle_duration_ms: 5000,

            // Timing
            tick_interval_ms: 10, // 100 Hz
            debounce_ms: 50,
        }
    }
}

impl PanelConfig {
    /// Parse a JSON document and validate it. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            warn!("config: rejected JSON ({})", e);
            Error::Config("malformed JSON")
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Range checks. Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("tick interval must be non-zero"));
        }
        if self.roll_duration_ms <= self.tick_interval_ms {
            return Err(Error::Config("roll duration must exceed the tick interval"));
        }
        if self.debounce_ms >= self.roll_duration_ms {
            return Err(Error::Config("debounce must be shorter than a roll"));
        }
        Ok(())
    }

    pub fn roll_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.roll_duration_ms))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }

    /// Settling behaviour applied to every die built from this config.
    pub fn settle_policy(&self) -> SettlePolicy {
        if self.settle_enabled {
            SettlePolicy::Hold(Duration::from_millis(u64::from(self.settle_duration_ms)))
        } else {
            SettlePolicy::Immediate
        }
    }
}
