//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) and the control loop
//! emit these through the [`EventSink`](super::ports::EventSink) port.
//! Adapters on the other side decide what to do with them — the shipped
//! adapter writes log lines; tests record them for assertions.

use super::commands::ActionRequest;

/// Structured events emitted by the controller core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The control loop entered its running state.
    Started,

    /// A classified button event resolved to an action.
    ActionDispatched { action: ActionRequest, channel: &'static str },

    /// The dispatched operation reported success.
    ActionCompleted(ActionRequest),

    /// The dispatched operation failed; the loop continues.
    ActionFailed { action: ActionRequest, reason: String },

    /// The background recognition task was launched.
    RecognitionStarted,

    /// The background recognition task was asked to stop and reaped.
    RecognitionStopped,

    /// An interrupt signal was observed; the loop is shutting down.
    ShutdownRequested,
}
