//! Fuzz target: `PanelConfig::from_json`
//!
//! Feeds arbitrary bytes to the config parser and asserts that anything it
//! accepts also passes validation.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use dicepanel::config::PanelConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = PanelConfig::from_json(text) {
        assert!(config.validate().is_ok(), "accepted config must validate");
        assert!(config.tick_interval_ms > 0);
    }
});
