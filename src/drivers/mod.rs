//! Input drivers for the control panel.

pub mod button;
