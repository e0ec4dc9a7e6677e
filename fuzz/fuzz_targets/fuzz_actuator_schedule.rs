//! Fuzz target: `TimedActuator` under arbitrary trigger/tick/time schedules
//!
//! Each input byte pair is one operation. After every operation the output
//! must be high exactly while the die is active, and the cycle counter may
//! only move forward by one.
//!
//! cargo fuzz run fuzz_actuator_schedule

#![no_main]

use core::cell::Cell;
use core::convert::Infallible;

use dicepanel::app::ports::Clock;
use dicepanel::{ActuatorState, SettlePolicy, TimedActuator};
use embassy_time::{Duration, Instant};
use embedded_hal::digital::{ErrorType, OutputPin};
use libfuzzer_sys::fuzz_target;

struct FuzzClock(Cell<u64>);

impl Clock for FuzzClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.0.get())
    }
}

#[derive(Default)]
struct Level(bool);

impl ErrorType for Level {
    type Error = Infallible;
}

impl OutputPin for Level {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0 = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0 = true;
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&first, ops)) = data.split_first() else {
        return;
    };
    let policy = if first & 1 == 0 {
        SettlePolicy::Immediate
    } else {
        SettlePolicy::Hold(Duration::from_millis(u64::from(first) * 20))
    };

    let clock = FuzzClock(Cell::new(0));
    let mut die = TimedActuator::with_policy(Level::default(), &clock, policy);

    for op in ops.chunks(2) {
        let arg = u64::from(op.get(1).copied().unwrap_or(0));
        let before = die.completed_cycles();
        match op[0] % 3 {
            0 => {
                die.trigger(Duration::from_millis(arg * 10));
            }
            1 => clock.0.set(clock.0.get() + arg * 7),
            _ => {
                die.tick();
            }
        }

        let cycles = die.completed_cycles();
        assert!(cycles == before || cycles == before + 1);
        assert_eq!(die.output().0, matches!(die.state(), ActuatorState::Active { .. }));
    }
});
