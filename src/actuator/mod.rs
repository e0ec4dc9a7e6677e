//! Timed die actuator.
//!
//! Drives one binary output (solenoid shaker or LED) for a bounded active
//! period, optionally holds it off for a settling period so the physical die
//! can come to rest, and counts completed cycles.
//!
//! ```text
//!            trigger(d)              now >= active_until
//!   Idle ─────────────────▶ Active ─────────────────────▶ Settling
//!    ▲                        │ (SettlePolicy::Immediate)     │
//!    └────────────────────────┴───────────────────────────────┘
//!                                        now >= settle_until
//! ```
//!
//! ## Polling contract
//!
//! The host loop calls [`TimedActuator::tick`] on every pass. Both `tick()`
//! and [`TimedActuator::trigger`] do bounded work and never block, so any
//! number of independent actuators can share one cooperative loop.
//!
//! The output is HIGH if and only if the actuator is in
//! [`ActuatorState::Active`].

use embassy_time::{Duration, Instant};
use embedded_hal::digital::OutputPin;
use log::{debug, warn};

use crate::app::ports::Clock;

pub mod bank;

/// Settling period used when none is configured.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(5000);

/// What happens once the active period ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlePolicy {
    /// Return straight to `Idle` (no settling phase).
    Immediate,
    /// Keep the output low for this long before accepting a new trigger.
    Hold(Duration),
}

impl Default for SettlePolicy {
    fn default() -> Self {
        Self::Hold(DEFAULT_SETTLE)
    }
}

/// Phase of the current cycle. Deadlines are carried by the phase that
/// owns them, so a finished cycle cannot leak stale deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorState {
    Idle,
    Active {
        active_until: Instant,
    },
    Settling {
        active_until: Instant,
        settle_until: Instant,
    },
}

/// Transition reported by [`TimedActuator::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent {
    /// The output was released and the die is settling.
    Released,
    /// The cycle finished; `cycles` is the new completed-cycle count.
    Completed { cycles: u64 },
}

/// Non-blocking timed actuator bound to one exclusively owned output.
pub struct TimedActuator<P, C> {
    output: P,
    clock: C,
    state: ActuatorState,
    policy: SettlePolicy,
    completed_cycles: u64,
}

impl<P: OutputPin, C: Clock> TimedActuator<P, C> {
    /// Actuator with the default settling period.
    ///
    /// The output is not written until the first trigger; the caller owns
    /// putting the line low at wiring time.
    pub fn new(output: P, clock: C) -> Self {
        Self::with_policy(output, clock, SettlePolicy::default())
    }

    /// Actuator that returns to `Idle` as soon as the active period ends.
    pub fn without_settle(output: P, clock: C) -> Self {
        Self::with_policy(output, clock, SettlePolicy::Immediate)
    }

    pub fn with_policy(output: P, clock: C, policy: SettlePolicy) -> Self {
        Self {
            output,
            clock,
            state: ActuatorState::Idle,
            policy,
            completed_cycles: 0,
        }
    }

    /// `true` while a cycle is in flight (active or settling).
    pub fn is_active(&self) -> bool {
        !matches!(self.state, ActuatorState::Idle)
    }

    /// Start a cycle of `duration`. Returns `false` and changes nothing if a
    /// cycle is already in flight: a running cycle can be neither restarted
    /// nor extended.
    ///
    /// A zero duration completes on the next `tick()`.
    pub fn trigger(&mut self, duration: Duration) -> bool {
        if self.is_active() {
            debug!("die: trigger ignored, cycle in flight ({:?})", self.state);
            return false;
        }

        let active_until = self
            .clock
            .now()
            .checked_add(duration)
            .unwrap_or(Instant::MAX);

        self.drive(true);
        self.state = ActuatorState::Active { active_until };
        true
    }

    /// Advance the cycle. Call on every pass of the host loop.
    pub fn tick(&mut self) -> Option<CycleEvent> {
        match self.state {
            ActuatorState::Idle => None,

            ActuatorState::Active { active_until } => {
                if self.clock.now() < active_until {
                    return None;
                }

                self.drive(false);
                match self.policy {
                    SettlePolicy::Immediate => Some(self.complete()),
                    SettlePolicy::Hold(settle) => {
                        // Measured from the deadline, not from this tick, so
                        // a late poll does not stretch the settling period.
                        let settle_until = active_until
                            .checked_add(settle)
                            .unwrap_or(Instant::MAX);
                        self.state = ActuatorState::Settling {
                            active_until,
                            settle_until,
                        };
                        Some(CycleEvent::Released)
                    }
                }
            }

            ActuatorState::Settling { settle_until, .. } => {
                if self.clock.now() < settle_until {
                    None
                } else {
                    Some(self.complete())
                }
            }
        }
    }

    pub fn state(&self) -> ActuatorState {
        self.state
    }

    pub fn policy(&self) -> SettlePolicy {
        self.policy
    }

    /// End of the active period; `None` when idle.
    pub fn active_until(&self) -> Option<Instant> {
        match self.state {
            ActuatorState::Idle => None,
            ActuatorState::Active { active_until }
            | ActuatorState::Settling { active_until, .. } => Some(active_until),
        }
    }

    /// End of the settling period; `None` unless settling.
    pub fn settle_until(&self) -> Option<Instant> {
        match self.state {
            ActuatorState::Settling { settle_until, .. } => Some(settle_until),
            _ => None,
        }
    }

    /// Cycles that have run back to `Idle`. 64 bits wide, so the count cannot
    /// reach its ceiling within any realistic uptime.
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// Borrow the output, e.g. to inspect a simulated pin.
    pub fn output(&self) -> &P {
        &self.output
    }

    fn complete(&mut self) -> CycleEvent {
        self.state = ActuatorState::Idle;
        self.completed_cycles = self.completed_cycles.saturating_add(1);
        CycleEvent::Completed {
            cycles: self.completed_cycles,
        }
    }

    // Pin faults are logged, not propagated: the cycle timing stays authoritative.
    fn drive(&mut self, high: bool) {
        let result = if high {
            self.output.set_high()
        } else {
            self.output.set_low()
        };
        if let Err(e) = result {
            warn!("die: output write ({}) failed: {:?}", if high { "HIGH" } else { "LOW" }, e);
        }
    }
}
