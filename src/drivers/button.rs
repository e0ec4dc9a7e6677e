//! Polled, debounced roll button driver.
//!
//! ## Hardware
//!
//! Active-low momentary switch with external pull-up, one per die. The
//! `tick()` method (called from the main loop at tick rate) samples the
//! input and runs the debounce state machine; no interrupt is needed at a
//! 10 ms polling cadence.
//!
//! | Phase      | Leaves when                             | Event     |
//! |------------|-----------------------------------------|-----------|
//! | Released   | input reads pressed                     | —         |
//! | Bouncing   | still pressed after the debounce window | `Pressed` |
//! | Held       | input reads released                    | —         |
//!
//! A release during `Bouncing` drops back to `Released` without an event.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

/// Default debounce window.
pub const DEBOUNCE: Duration = Duration::from_millis(50);

/// Button events emitted after debouncing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    Released,
    Bouncing { since: Instant },
    Held,
}

pub struct ButtonDriver<I> {
    input: I,
    debounce: Duration,
    state: DebounceState,
}

impl<I: InputPin> ButtonDriver<I> {
    pub fn new(input: I, debounce: Duration) -> Self {
        Self {
            input,
            debounce,
            state: DebounceState::Released,
        }
    }

    /// Call from the main loop at each tick.
    /// Returns `Pressed` once per debounced press, on the leading edge.
    pub fn tick(&mut self, now: Instant) -> Option<ButtonEvent> {
        let pressed = self.is_pressed();

        match self.state {
            DebounceState::Released => {
                if pressed {
                    self.state = DebounceState::Bouncing { since: now };
                }
                None
            }

            DebounceState::Bouncing { since } => {
                if !pressed {
                    self.state = DebounceState::Released;
                    return None;
                }
                let settled_at = since.checked_add(self.debounce).unwrap_or(Instant::MAX);
                if now >= settled_at {
                    self.state = DebounceState::Held;
                    return Some(ButtonEvent::Pressed);
                }
                None
            }

            DebounceState::Held => {
                if !pressed {
                    self.state = DebounceState::Released;
                }
                None
            }
        }
    }

    // Active-low. A failed read counts as "not pressed".
    fn is_pressed(&mut self) -> bool {
        self.input.is_low().unwrap_or(false)
    }
}
