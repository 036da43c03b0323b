//! Application service — the dispatch core.
//!
//! [`AppService`] owns the background-task registry and maps each
//! classified [`ActionRequest`] to exactly one collaborator operation.
//! All I/O flows through port traits injected at call sites, so the
//! whole dispatch chain is testable with mock adapters.
//!
//! Error policy: every collaborator outcome is reduced to a
//! success/failure signal here. Failures are emitted on the event sink
//! and announced, then returned to the control loop, which logs them
//! and continues — nothing escapes to crash the loop.

use log::info;

use crate::error::ActionError;

use super::commands::ActionRequest;
use super::events::AppEvent;
use super::ports::{ActionPort, EventSink, RecognitionPort, SpeechPort};
use super::registry::{RecognitionRegistry, ToggleOutcome};

pub struct AppService {
    registry: RecognitionRegistry,
    dispatch_count: u64,
}

impl AppService {
    pub fn new() -> Self {
        Self {
            registry: RecognitionRegistry::new(),
            dispatch_count: 0,
        }
    }

    /// Whether the background recognition task is running.
    pub fn recognition_running(&self) -> bool {
        self.registry.is_running()
    }

    /// Total actions dispatched since startup.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }

    /// Invoke the collaborator operation mapped to `action`.
    ///
    /// Synchronous for everything except `ToggleRecognition`, which
    /// delegates to the registry and returns as soon as the task is
    /// launched or reaped.
    pub fn dispatch(
        &mut self,
        action: ActionRequest,
        channel: &'static str,
        actions: &mut impl ActionPort,
        recognition: &mut dyn RecognitionPort,
        speech: &mut impl SpeechPort,
        sink: &mut impl EventSink,
    ) -> Result<(), ActionError> {
        self.dispatch_count += 1;
        info!("channel {channel}: dispatching {}", action.label());
        sink.emit(&AppEvent::ActionDispatched { action, channel });

        let result = self.invoke(action, actions, recognition, speech, sink);
        match &result {
            Ok(()) => sink.emit(&AppEvent::ActionCompleted(action)),
            Err(e) => {
                sink.emit(&AppEvent::ActionFailed {
                    action,
                    reason: e.to_string(),
                });
                speech.announce(failure_phrase(action));
            }
        }
        result
    }

    fn invoke(
        &mut self,
        action: ActionRequest,
        actions: &mut impl ActionPort,
        recognition: &mut dyn RecognitionPort,
        speech: &mut impl SpeechPort,
        sink: &mut impl EventSink,
    ) -> Result<(), ActionError> {
        match action {
            ActionRequest::EnrollAndTrain => {
                speech.announce("Starting face capture and training");
                actions.enroll_and_train()?;
                speech.announce("Training completed successfully");
            }
            ActionRequest::ToggleRecognition => match self.registry.toggle(recognition)? {
                ToggleOutcome::Started => {
                    sink.emit(&AppEvent::RecognitionStarted);
                    speech.announce("Starting real time recognition");
                }
                ToggleOutcome::Stopped => {
                    sink.emit(&AppEvent::RecognitionStopped);
                    speech.announce("Recognition ended");
                }
            },
            ActionRequest::DescribeImage => {
                speech.announce("Capturing image for analysis");
                actions.describe_image()?;
                speech.announce("Image analysis complete");
            }
            ActionRequest::DescribeVideo => {
                speech.announce("Recording video for analysis");
                actions.describe_video()?;
                speech.announce("Video analysis finished");
            }
            ActionRequest::TriggerEmergencyAlert => {
                speech.announce("Emergency alert triggered");
                actions.trigger_emergency_alert()?;
                speech.announce("Emergency message sent successfully");
            }
        }
        Ok(())
    }

    /// Guaranteed cleanup at process termination: stop the background
    /// task if one is running.
    pub fn shutdown(&mut self, sink: &mut impl EventSink) {
        if self.registry.is_running() {
            sink.emit(&AppEvent::RecognitionStopped);
        }
        self.registry.shutdown();
    }
}

impl Default for AppService {
    fn default() -> Self {
        Self::new()
    }
}

fn failure_phrase(action: ActionRequest) -> &'static str {
    match action {
        ActionRequest::EnrollAndTrain => "Face training failed",
        ActionRequest::ToggleRecognition => "Recognition unavailable",
        ActionRequest::DescribeImage => "Image analysis failed",
        ActionRequest::DescribeVideo => "Video analysis failed",
        ActionRequest::TriggerEmergencyAlert => "Emergency service unavailable",
    }
}
