//! Outbound panel events.
//!
//! The [`PanelService`](super::service::PanelService) and the
//! [`ActuatorBank`](crate::actuator::bank::ActuatorBank) emit these through
//! the [`EventSink`](super::ports::EventSink) port.

use crate::actuator::bank::DieId;

/// Structured events emitted by the panel core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The service has started (carries the number of registered dice).
    Started { dice: usize },

    /// A die output went high; it stays high until `until_ms` on the panel clock.
    RollStarted { die: DieId, until_ms: u64 },

    /// A roll was requested while that die was still busy.
    RollRejected { die: DieId },

    /// The output went low and the die is settling.
    DieReleased { die: DieId },

    /// The die is idle again after its `cycles`-th roll.
    RollCompleted { die: DieId, cycles: u64 },
}
