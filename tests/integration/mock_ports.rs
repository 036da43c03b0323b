//! Mock port adapters for integration tests.
//!
//! Records every collaborator call and emitted event so tests can
//! assert on the full dispatch history without touching real I/O.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use netra::app::events::AppEvent;
use netra::app::ports::{
    ActionPort, EventSink, InputPort, RecognitionPort, RecognitionTask, SpeechPort,
};
use netra::drivers::button::Level;
use netra::error::ActionError;

// ── Scripted input ────────────────────────────────────────────

/// Replays a scripted level sequence per slot; once a slot's script is
/// exhausted it reads inactive (HIGH).
pub struct ScriptedInput {
    slots: Vec<RefCell<VecDeque<Level>>>,
}

impl ScriptedInput {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: (0..slot_count).map(|_| RefCell::new(VecDeque::new())).collect(),
        }
    }

    pub fn script(&mut self, slot: usize, levels: &[Level]) {
        self.slots[slot].borrow_mut().extend(levels.iter().copied());
    }
}

impl InputPort for ScriptedInput {
    fn level(&self, slot: usize) -> Level {
        self.slots[slot].borrow_mut().pop_front().unwrap_or(Level::High)
    }
}

// ── Action port ───────────────────────────────────────────────

#[derive(Default)]
pub struct MockActions {
    pub calls: Vec<&'static str>,
    pub fail_image: bool,
}

impl ActionPort for MockActions {
    fn enroll_and_train(&mut self) -> Result<(), ActionError> {
        self.calls.push("enroll");
        Ok(())
    }

    fn describe_image(&mut self) -> Result<(), ActionError> {
        self.calls.push("image");
        if self.fail_image {
            Err(ActionError::HttpTransport {
                message: "network unreachable".into(),
            })
        } else {
            Ok(())
        }
    }

    fn describe_video(&mut self) -> Result<(), ActionError> {
        self.calls.push("video");
        Ok(())
    }

    fn trigger_emergency_alert(&mut self) -> Result<(), ActionError> {
        self.calls.push("alert");
        Ok(())
    }
}

// ── Recognition port ──────────────────────────────────────────

struct MockTask {
    terminated: Arc<AtomicUsize>,
}

impl RecognitionTask for MockTask {
    fn terminate(&mut self) -> Result<(), ActionError> {
        self.terminated.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockRecognition {
    pub launches: usize,
    pub terminated: Arc<AtomicUsize>,
}

impl MockRecognition {
    pub fn terminations(&self) -> usize {
        self.terminated.load(Ordering::SeqCst)
    }
}

impl RecognitionPort for MockRecognition {
    fn launch(&mut self) -> Result<Box<dyn RecognitionTask>, ActionError> {
        self.launches += 1;
        Ok(Box::new(MockTask {
            terminated: Arc::clone(&self.terminated),
        }))
    }
}

// ── Speech + event sink ───────────────────────────────────────

#[derive(Default)]
pub struct MockSpeech {
    pub phrases: Vec<String>,
}

impl SpeechPort for MockSpeech {
    fn announce(&mut self, phrase: &str) {
        self.phrases.push(phrase.to_string());
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<String>,
}

impl RecordingSink {
    pub fn contains(&self, needle: &str) -> bool {
        self.events.iter().any(|e| e.contains(needle))
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(format!("{event:?}"));
    }
}
