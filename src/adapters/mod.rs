//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements | Connects to                    |
//! |------------|------------|--------------------------------|
//! | `log_sink` | EventSink  | Serial log output              |
//! | `time`     | Clock      | ESP32 system timer / host time |
//!
//! Die outputs and roll buttons need no adapter: ESP-IDF `PinDriver`s
//! implement the `embedded-hal` digital traits directly.

pub mod log_sink;
pub mod time;
