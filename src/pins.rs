//! GPIO pin assignments for the control panel board.
//!
//! Single source of truth — `main` wires dice and buttons from these tables
//! rather than hard-coding pin numbers. Die `i` is rolled by button `i`.

/// Number of dice fitted to the panel.
pub const DIE_COUNT: usize = 2;

// ---------------------------------------------------------------------------
// Die actuators (logic-level MOSFET gate, active HIGH)
// ---------------------------------------------------------------------------

/// Digital outputs driving each die shaker / LED.
pub const DIE_GPIOS: [i32; DIE_COUNT] = [4, 5];

// ---------------------------------------------------------------------------
// Roll buttons (active-low with external pull-up)
// ---------------------------------------------------------------------------

pub const ROLL_BUTTON_GPIOS: [i32; DIE_COUNT] = [16, 17];
