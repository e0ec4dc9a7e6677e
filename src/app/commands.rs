//! Inbound commands to the panel service.
//!
//! These represent actions requested by the outside world (roll buttons,
//! a debug console) that the [`PanelService`](super::service::PanelService)
//! turns into actuator triggers.

use crate::actuator::bank::DieId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    /// Roll one die for the configured duration.
    Roll { die: DieId },

    /// Roll one die for an explicit duration.
    RollFor { die: DieId, duration_ms: u32 },

    /// Roll every idle die for the configured duration.
    RollAll,
}
