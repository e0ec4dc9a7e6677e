//! Control Panel Firmware — Main Entry Point
//!
//! Cooperative polling loop: every pass samples the roll buttons, ticks
//! every die, then sleeps for the configured tick interval.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  PinDriver<Output> × N   PinDriver<Input> × N                │
//! │  (die outputs)           (roll buttons → ButtonDriver)       │
//! │  SystemClock (Clock)     LogEventSink (EventSink)            │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ─────────────────       │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │        PanelService  ·  ActuatorBank<TimedActuator>     │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyInputPin, AnyOutputPin, Input, Output, PinDriver};
use log::{info, warn};

use dicepanel::Error;
use dicepanel::adapters::log_sink::LogEventSink;
use dicepanel::adapters::time::SystemClock;
use dicepanel::app::ports::Clock;
use dicepanel::app::service::PanelService;
use dicepanel::config::PanelConfig;
use dicepanel::drivers::button::ButtonDriver;
use dicepanel::pins;

type DieOutput = PinDriver<'static, AnyOutputPin, Output>;
type RollButton = ButtonDriver<PinDriver<'static, AnyInputPin, Input>>;

/// Build-time override, e.g. `PANEL_CONFIG_JSON='{"roll_duration_ms":2000}'`.
const CONFIG_JSON: Option<&str> = option_env!("PANEL_CONFIG_JSON");

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Dice panel v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config (build-time JSON or defaults) ───────────────
    let config = load_config();
    let clock = SystemClock::new();
    let mut sink = LogEventSink::new();

    // ── 3. Wire dice and roll buttons ─────────────────────────
    let mut service: PanelService<DieOutput, &SystemClock, { pins::DIE_COUNT }> =
        PanelService::new(config.clone());
    let mut buttons: heapless::Vec<RollButton, { pins::DIE_COUNT }> = heapless::Vec::new();

    for (&die_gpio, &button_gpio) in pins::DIE_GPIOS.iter().zip(pins::ROLL_BUTTON_GPIOS.iter()) {
        // SAFETY: each GPIO listed in `pins` is claimed exactly once, here.
        let mut output = PinDriver::output(unsafe { AnyOutputPin::new(die_gpio) })
            .with_context(|| format!("die output on GPIO{die_gpio}"))?;
        output.set_low()?;
        let die = service.add_die(output, &clock)?;

        // SAFETY: as above.
        let input = PinDriver::input(unsafe { AnyInputPin::new(button_gpio) })
            .with_context(|| format!("roll button on GPIO{button_gpio}"))?;
        buttons
            .push(ButtonDriver::new(input, config.debounce()))
            .map_err(|_| Error::Init("roll button table full"))?;

        info!("die #{} on GPIO{} (button GPIO{})", die, die_gpio, button_gpio);
    }

    service.start(&mut sink);

    // ── 4. Main loop ──────────────────────────────────────────
    loop {
        let now = clock.now();
        for (die, button) in buttons.iter_mut().enumerate() {
            if let Some(event) = button.tick(now) {
                if let Err(e) = service.on_button(die, event, &mut sink) {
                    warn!("button {}: {}", die, e);
                }
            }
        }

        service.tick(&mut sink);
        FreeRtos::delay_ms(config.tick_interval_ms);
    }
}

fn load_config() -> PanelConfig {
    match CONFIG_JSON.map(PanelConfig::from_json) {
        Some(Ok(cfg)) => {
            info!("Config loaded from PANEL_CONFIG_JSON");
            cfg
        }
        Some(Err(e)) => {
            warn!("PANEL_CONFIG_JSON rejected ({}), using defaults", e);
            PanelConfig::default()
        }
        None => PanelConfig::default(),
    }
}
