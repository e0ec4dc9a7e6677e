//! Fixed-capacity bank of independent die actuators.
//!
//! The bank only saves the host loop from juggling N actuators by hand:
//! members share a pin type and a clock type, but each keeps its own
//! timers and cycle count. Nothing here coordinates one die with another.

use embassy_time::Duration;
use embedded_hal::digital::OutputPin;
use heapless::Vec;

use super::{CycleEvent, TimedActuator};
use crate::app::events::PanelEvent;
use crate::app::ports::{Clock, EventSink};
use crate::error::{Error, Result};

/// Index of a die within its bank, assigned in registration order.
pub type DieId = usize;

pub struct ActuatorBank<P, C, const N: usize> {
    dice: Vec<TimedActuator<P, C>, N>,
}

impl<P: OutputPin, C: Clock, const N: usize> Default for ActuatorBank<P, C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: OutputPin, C: Clock, const N: usize> ActuatorBank<P, C, N> {
    pub const fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Register a die and return its id.
    pub fn push(&mut self, die: TimedActuator<P, C>) -> Result<DieId> {
        let id = self.dice.len();
        self.dice.push(die).map_err(|_| Error::BankFull)?;
        Ok(id)
    }

    /// Trigger one die. `Ok(false)` means a cycle was already in flight.
    pub fn trigger(&mut self, die: DieId, duration: Duration) -> Result<bool> {
        let actuator = self.dice.get_mut(die).ok_or(Error::UnknownDie(die))?;
        Ok(actuator.trigger(duration))
    }

    /// Tick every die in registration order and report transitions.
    pub fn tick_all(&mut self, sink: &mut impl EventSink) {
        for (die, actuator) in self.dice.iter_mut().enumerate() {
            match actuator.tick() {
                Some(CycleEvent::Released) => sink.emit(&PanelEvent::DieReleased { die }),
                Some(CycleEvent::Completed { cycles }) => {
                    sink.emit(&PanelEvent::RollCompleted { die, cycles });
                }
                None => {}
            }
        }
    }

    pub fn get(&self, die: DieId) -> Option<&TimedActuator<P, C>> {
        self.dice.get(die)
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn any_active(&self) -> bool {
        self.dice.iter().any(TimedActuator::is_active)
    }

    /// Completed cycles summed over every die.
    pub fn total_cycles(&self) -> u64 {
        self.dice
            .iter()
            .fold(0, |acc: u64, d| acc.saturating_add(d.completed_cycles()))
    }
}
