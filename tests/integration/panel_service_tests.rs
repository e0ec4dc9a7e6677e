//! Integration tests for the PanelService → ActuatorBank → pins pipeline.

use dicepanel::Error;
use dicepanel::app::commands::PanelCommand;
use dicepanel::app::events::PanelEvent;
use dicepanel::app::service::PanelService;
use dicepanel::config::PanelConfig;
use dicepanel::drivers::button::ButtonEvent;

use crate::mock_hw::{ManualClock, MockPin, RecordingSink};

type Panel<'c> = PanelService<MockPin, &'c ManualClock, 4>;

fn make_panel(clock: &ManualClock, dice: usize, config: PanelConfig) -> (Panel<'_>, RecordingSink) {
    let mut panel = Panel::new(config);
    for _ in 0..dice {
        panel.add_die(MockPin::default(), clock).unwrap();
    }
    let mut sink = RecordingSink::default();
    panel.start(&mut sink);
    (panel, sink)
}

#[test]
fn start_reports_registered_dice() {
    let clock = ManualClock::default();
    let (_panel, sink) = make_panel(&clock, 3, PanelConfig::default());
    assert_eq!(sink.events, [PanelEvent::Started { dice: 3 }]);
}

#[test]
fn bank_rejects_fifth_die() {
    let clock = ManualClock::default();
    let (mut panel, _sink) = make_panel(&clock, 4, PanelConfig::default());
    assert_eq!(panel.add_die(MockPin::default(), &clock), Err(Error::BankFull));
}

#[test]
fn button_press_runs_a_full_roll() {
    let clock = ManualClock::default();
    let (mut panel, mut sink) = make_panel(&clock, 1, PanelConfig::default());

    panel.on_button(0, ButtonEvent::Pressed, &mut sink).unwrap();
    assert!(panel.bank().get(0).unwrap().output().is_high());

    // 10 ms host loop until the die is back to idle.
    while panel.bank().any_active() {
        clock.advance(10);
        panel.tick(&mut sink);
    }

    assert_eq!(clock.millis(), 3000 + 5000);
    assert_eq!(
        sink.events[1..],
        [
            PanelEvent::RollStarted { die: 0, until_ms: 3000 },
            PanelEvent::DieReleased { die: 0 },
            PanelEvent::RollCompleted { die: 0, cycles: 1 },
        ]
    );
}

#[test]
fn roll_all_only_starts_idle_dice() {
    let clock = ManualClock::default();
    let config = PanelConfig {
        settle_enabled: false,
        ..PanelConfig::default()
    };
    let (mut panel, mut sink) = make_panel(&clock, 3, config);

    panel
        .handle_command(PanelCommand::RollFor { die: 1, duration_ms: 10_000 }, &mut sink)
        .unwrap();
    clock.set(100);
    panel.handle_command(PanelCommand::RollAll, &mut sink).unwrap();

    assert_eq!(
        sink.events[1..],
        [
            PanelEvent::RollStarted { die: 1, until_ms: 10_000 },
            PanelEvent::RollStarted { die: 0, until_ms: 3_100 },
            PanelEvent::RollRejected { die: 1 },
            PanelEvent::RollStarted { die: 2, until_ms: 3_100 },
        ]
    );

    clock.set(3_100);
    panel.tick(&mut sink);
    assert_eq!(sink.completions(), 2);
    assert!(panel.bank().get(1).unwrap().is_active());
    assert_eq!(panel.bank().total_cycles(), 2);
}

#[test]
fn dice_keep_independent_counters() {
    let clock = ManualClock::default();
    let config = PanelConfig {
        settle_enabled: false,
        ..PanelConfig::default()
    };
    let (mut panel, mut sink) = make_panel(&clock, 2, config);

    for _ in 0..3 {
        panel.handle_command(PanelCommand::Roll { die: 0 }, &mut sink).unwrap();
        clock.advance(3_000);
        panel.tick(&mut sink);
    }

    assert_eq!(panel.bank().get(0).unwrap().completed_cycles(), 3);
    assert_eq!(panel.bank().get(1).unwrap().completed_cycles(), 0);
    assert!(panel.bank().get(1).unwrap().output().writes.is_empty());
}

#[test]
fn unknown_die_emits_nothing() {
    let clock = ManualClock::default();
    let (mut panel, mut sink) = make_panel(&clock, 1, PanelConfig::default());
    assert_eq!(
        panel.on_button(2, ButtonEvent::Pressed, &mut sink),
        Err(Error::UnknownDie(2))
    );
    assert_eq!(sink.events.len(), 1);
}
