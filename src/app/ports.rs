//! Port traits — the hexagonal boundary between the dice logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PanelService / TimedActuator (domain)
//! ```
//!
//! Die outputs and the roll button go through the `embedded-hal` digital
//! traits directly; the ports here cover what `embedded-hal` does not.

use embassy_time::Instant;

use super::events::PanelEvent;

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: hardware timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic time source shared read-only by every actuator.
///
/// Implementations must never go backwards within one run.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`PanelEvent`]s through this port. Adapters decide
/// where they go (serial log, test recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &PanelEvent);
}
