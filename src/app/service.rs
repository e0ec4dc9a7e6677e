//! Panel service — the hexagonal core.
//!
//! [`PanelService`] owns the dice bank and the live configuration. It turns
//! commands and button presses into actuator triggers and reports every
//! transition through an [`EventSink`]. Pins and the clock are injected as
//! generics, so the whole service runs against simulated hardware in tests.
//!
//! ```text
//!  PanelCommand ──▶ ┌────────────────────────┐ ──▶ EventSink
//!  ButtonEvent  ──▶ │      PanelService       │
//!                   │  ActuatorBank<N>        │ ──▶ OutputPin × N
//!                   └────────────────────────┘
//! ```

use embassy_time::Duration;
use embedded_hal::digital::OutputPin;
use log::{info, warn};

use crate::actuator::TimedActuator;
use crate::actuator::bank::{ActuatorBank, DieId};
use crate::config::PanelConfig;
use crate::drivers::button::ButtonEvent;
use crate::error::Result;

use super::commands::PanelCommand;
use super::events::PanelEvent;
use super::ports::{Clock, EventSink};

pub struct PanelService<P, C, const N: usize> {
    bank: ActuatorBank<P, C, N>,
    config: PanelConfig,
}

impl<P: OutputPin, C: Clock, const N: usize> PanelService<P, C, N> {
    /// Construct the service with an empty bank. Register dice with
    /// [`add_die`](Self::add_die), then call [`start`](Self::start).
    pub fn new(config: PanelConfig) -> Self {
        Self {
            bank: ActuatorBank::new(),
            config,
        }
    }

    /// Wire one output as a die, using the configured settling policy.
    pub fn add_die(&mut self, output: P, clock: C) -> Result<DieId> {
        let die = self.bank.push(TimedActuator::with_policy(
            output,
            clock,
            self.config.settle_policy(),
        ))?;
        info!("die #{} registered ({:?})", die, self.config.settle_policy());
        Ok(die)
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&PanelEvent::Started {
            dice: self.bank.len(),
        });
        info!(
            "PanelService started: {} dice, roll={}ms, tick={}ms",
            self.bank.len(),
            self.config.roll_duration_ms,
            self.config.tick_interval_ms
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Advance every die. Call once per host-loop pass.
    pub fn tick(&mut self, sink: &mut impl EventSink) {
        self.bank.tick_all(sink);
    }

    // ── Command handling ──────────────────────────────────────

    pub fn handle_command(&mut self, cmd: PanelCommand, sink: &mut impl EventSink) -> Result<()> {
        match cmd {
            PanelCommand::Roll { die } => {
                self.roll(die, self.config.roll_duration(), sink)?;
            }
            PanelCommand::RollFor { die, duration_ms } => {
                self.roll(die, Duration::from_millis(u64::from(duration_ms)), sink)?;
            }
            PanelCommand::RollAll => {
                let duration = self.config.roll_duration();
                for die in 0..self.bank.len() {
                    self.roll(die, duration, sink)?;
                }
            }
        }
        Ok(())
    }

    /// Map a roll-button gesture onto its die.
    pub fn on_button(
        &mut self,
        die: DieId,
        event: ButtonEvent,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        match event {
            ButtonEvent::Pressed => self.handle_command(PanelCommand::Roll { die }, sink),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn bank(&self) -> &ActuatorBank<P, C, N> {
        &self.bank
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn roll(&mut self, die: DieId, duration: Duration, sink: &mut impl EventSink) -> Result<()> {
        let accepted = self.bank.trigger(die, duration).inspect_err(|e| {
            warn!("roll rejected: {}", e);
        })?;

        if accepted {
            let until_ms = self
                .bank
                .get(die)
                .and_then(TimedActuator::active_until)
                .map_or(0, |t| t.as_millis());
            sink.emit(&PanelEvent::RollStarted { die, until_ms });
        } else {
            sink.emit(&PanelEvent::RollRejected { die });
        }
        Ok(())
    }
}
