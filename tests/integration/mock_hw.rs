//! Mock hardware for integration tests.
//!
//! Records every pin write so tests can assert on the full output history
//! without touching real GPIO registers, and provides a hand-driven clock.

use core::cell::Cell;

use dicepanel::app::events::PanelEvent;
use dicepanel::app::ports::{Clock, EventSink};
use embassy_time::Instant;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

// ── ManualClock ───────────────────────────────────────────────

#[derive(Default)]
pub struct ManualClock {
    now_ms: Cell<u64>,
}

#[allow(dead_code)]
impl ManualClock {
    pub fn set(&self, ms: u64) {
        self.now_ms.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }

    pub fn millis(&self) -> u64 {
        self.now_ms.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now_ms.get())
    }
}

// ── MockPin ───────────────────────────────────────────────────

/// Output pin that keeps every level it was driven to.
#[derive(Debug, Default)]
pub struct MockPin {
    pub writes: Vec<bool>,
}

#[allow(dead_code)]
impl MockPin {
    pub fn is_high(&self) -> bool {
        self.writes.last().copied().unwrap_or(false)
    }
}

impl ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.writes.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.writes.push(true);
        Ok(())
    }
}

// ── BrokenPin ─────────────────────────────────────────────────

/// Output pin whose every write fails (e.g. a disconnected expander).
#[derive(Debug, Default)]
pub struct BrokenPin {
    pub attempts: u32,
}

#[derive(Debug)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = PinFault;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err(PinFault)
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<PanelEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn completions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PanelEvent::RollCompleted { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &PanelEvent) {
        self.events.push(*event);
    }
}
