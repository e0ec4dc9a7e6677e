//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing panel events to the logger (UART /
//! USB-CDC in production, stderr on the host).

use log::info;

use crate::app::events::PanelEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`PanelEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &PanelEvent) {
        match event {
            PanelEvent::Started { dice } => {
                info!("START | dice={}", dice);
            }
            PanelEvent::RollStarted { die, until_ms } => {
                info!("ROLL  | die={} | high until t={}ms", die, until_ms);
            }
            PanelEvent::RollRejected { die } => {
                info!("ROLL  | die={} | busy, ignored", die);
            }
            PanelEvent::DieReleased { die } => {
                info!("ROLL  | die={} | released, settling", die);
            }
            PanelEvent::RollCompleted { die, cycles } => {
                info!("ROLL  | die={} | done, cycles={}", die, cycles);
            }
        }
    }
}
