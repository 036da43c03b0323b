//! Controller integration tests: button press → classified event →
//! dispatched collaborator call, plus the shutdown guarantee.

use std::sync::atomic::{AtomicBool, Ordering};

use netra::app::service::AppService;
use netra::config::SystemConfig;
use netra::controller::Controller;
use netra::drivers::button::Level;

use crate::mock_ports::{MockActions, MockRecognition, MockSpeech, RecordingSink, ScriptedInput};

// Channel slots in declaration order (see the channel table).
const SLOT_A_ENROLL: usize = 0;
const SLOT_B_RECOGNIZE: usize = 1;
const SLOT_C_IMAGE: usize = 2;
const SLOT_D_VIDEO: usize = 3;

/// Timings shrunk so tests run in milliseconds; the classification
/// semantics are unchanged.
fn test_config(long_press_ms: u64) -> SystemConfig {
    let mut cfg = SystemConfig::default();
    cfg.debounce_ms = 0;
    cfg.hold_poll_ms = 1;
    cfg.idle_interval_ms = 1;
    cfg.long_press_ms = long_press_ms;
    cfg
}

struct Rig {
    controller: Controller,
    input: ScriptedInput,
    actions: MockActions,
    recognition: MockRecognition,
    speech: MockSpeech,
    sink: RecordingSink,
    shutdown: AtomicBool,
}

impl Rig {
    fn new(cfg: &SystemConfig) -> Self {
        Self {
            controller: Controller::new(cfg, AppService::new()),
            input: ScriptedInput::new(4),
            actions: MockActions::default(),
            recognition: MockRecognition::default(),
            speech: MockSpeech::default(),
            sink: RecordingSink::default(),
            shutdown: AtomicBool::new(false),
        }
    }

    fn step(&mut self) {
        self.controller.step(
            &self.input,
            &mut self.actions,
            &mut self.recognition,
            &mut self.speech,
            &mut self.sink,
            &self.shutdown,
        );
    }
}

#[test]
fn single_shot_press_dispatches_its_action() {
    let cfg = test_config(3000);
    let mut rig = Rig::new(&cfg);

    rig.input.script(SLOT_C_IMAGE, &[Level::Low]);
    rig.step();

    assert_eq!(rig.actions.calls, vec!["image"]);
    assert!(rig.sink.contains("DescribeImage"));
    assert!(rig.speech.phrases.iter().any(|p| p == "Image analysis complete"));
}

#[test]
fn idle_levels_dispatch_nothing() {
    let cfg = test_config(3000);
    let mut rig = Rig::new(&cfg);

    rig.step();
    rig.step();

    assert!(rig.actions.calls.is_empty());
    assert!(rig.sink.events.is_empty());
}

#[test]
fn recognize_button_toggles_background_task() {
    let cfg = test_config(3000);
    let mut rig = Rig::new(&cfg);

    // First press: task launches, handle recorded.
    rig.input.script(SLOT_B_RECOGNIZE, &[Level::Low]);
    rig.step();
    assert!(rig.controller.service().recognition_running());
    assert_eq!(rig.recognition.launches, 1);

    // Second press: task terminated, handle cleared.
    rig.input.script(SLOT_B_RECOGNIZE, &[Level::Low]);
    rig.step();
    assert!(!rig.controller.service().recognition_running());
    assert_eq!(rig.recognition.terminations(), 1);

    assert!(rig.sink.contains("RecognitionStarted"));
    assert!(rig.sink.contains("RecognitionStopped"));
}

#[test]
fn short_hold_on_dual_channel_dispatches_video() {
    // Threshold far above anything the 1 ms hold poll can reach.
    let cfg = test_config(60_000);
    let mut rig = Rig::new(&cfg);

    // Active for one sample, released on the next poll.
    rig.input.script(SLOT_D_VIDEO, &[Level::Low, Level::High]);
    rig.step();

    assert_eq!(rig.actions.calls, vec!["video"]);
    assert!(rig.sink.contains("DescribeVideo"));
}

#[test]
fn long_hold_on_dual_channel_dispatches_alert() {
    // Zero threshold: every hold qualifies as long (boundary-inclusive).
    let cfg = test_config(0);
    let mut rig = Rig::new(&cfg);

    rig.input.script(SLOT_D_VIDEO, &[Level::Low, Level::Low, Level::High]);
    rig.step();

    assert_eq!(rig.actions.calls, vec!["alert"]);
    assert!(rig.sink.contains("TriggerEmergencyAlert"));
}

#[test]
fn dispatch_failure_keeps_servicing_later_presses() {
    let cfg = test_config(3000);
    let mut rig = Rig::new(&cfg);
    rig.actions.fail_image = true;

    rig.input.script(SLOT_C_IMAGE, &[Level::Low]);
    rig.step();
    assert!(rig.sink.contains("ActionFailed"));

    // The next press on another channel is still serviced.
    rig.input.script(SLOT_A_ENROLL, &[Level::Low]);
    rig.step();
    assert_eq!(rig.actions.calls, vec!["image", "enroll"]);
}

#[test]
fn simultaneous_presses_service_in_declaration_order() {
    let cfg = test_config(3000);
    let mut rig = Rig::new(&cfg);

    rig.input.script(SLOT_A_ENROLL, &[Level::Low]);
    rig.input.script(SLOT_C_IMAGE, &[Level::Low]);
    rig.step();

    assert_eq!(rig.actions.calls, vec!["enroll", "image"]);
}

#[test]
fn run_with_shutdown_set_terminates_running_task() {
    let cfg = test_config(3000);
    let mut rig = Rig::new(&cfg);

    // Start recognition via a normal press.
    rig.input.script(SLOT_B_RECOGNIZE, &[Level::Low]);
    rig.step();
    assert!(rig.controller.service().recognition_running());

    // Operator interrupt: run() drains straight into cleanup.
    rig.shutdown.store(true, Ordering::SeqCst);
    rig.controller.run(
        &rig.input,
        &mut rig.actions,
        &mut rig.recognition,
        &mut rig.speech,
        &mut rig.sink,
        &rig.shutdown,
    );

    assert!(!rig.controller.service().recognition_running());
    assert_eq!(rig.recognition.terminations(), 1);
    assert!(rig.sink.contains("ShutdownRequested"));
}
