//! Port traits — the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService / Controller (domain)
//! ```
//!
//! Driven adapters (GPIO, subprocesses, the alert endpoint, the speaker,
//! the log sink) implement these traits. The core consumes them via
//! generics, so every piece of dispatch and lifecycle logic is testable
//! with mock adapters on the host.

use crate::drivers::button::Level;
use crate::error::ActionError;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Input port (hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Instantaneous logic level of one configured input channel.
///
/// `slot` is the channel's index in the compiled-in channel table.
/// Reads are pure state queries with no memory; a read cannot fail —
/// an unavailable GPIO interface is a fatal startup error, caught when
/// the adapter is constructed, never per-sample.
pub trait InputPort {
    fn level(&self, slot: usize) -> Level;
}

// ───────────────────────────────────────────────────────────────
// Action port (domain → collaborators)
// ───────────────────────────────────────────────────────────────

/// The synchronous collaborator operations.
///
/// Each call blocks until the operation completes or fails; none of
/// them are cancellable once started. The dispatcher reduces every
/// outcome to this `Result` — no collaborator failure may escape to
/// crash the control loop.
pub trait ActionPort {
    /// Prompt for an identity, capture reference samples, retrain the
    /// model. May take tens of seconds.
    fn enroll_and_train(&mut self) -> Result<(), ActionError>;

    /// Capture one still frame, describe it via the cloud service,
    /// render the result audibly.
    fn describe_image(&mut self) -> Result<(), ActionError>;

    /// Capture a fixed-duration clip and describe it likewise.
    fn describe_video(&mut self) -> Result<(), ActionError>;

    /// Issue one outbound alert request to the notification endpoint.
    fn trigger_emergency_alert(&mut self) -> Result<(), ActionError>;
}

// ───────────────────────────────────────────────────────────────
// Recognition port (domain → background task)
// ───────────────────────────────────────────────────────────────

/// Launches the single permitted long-running recognition task.
///
/// The returned handle is owned by the
/// [`RecognitionRegistry`](super::registry::RecognitionRegistry); the
/// port itself keeps no record of running tasks.
pub trait RecognitionPort {
    fn launch(&mut self) -> Result<Box<dyn RecognitionTask>, ActionError>;
}

/// An opaque handle to the running recognition task.
pub trait RecognitionTask {
    /// Cooperative termination request. Blocks until the task has been
    /// reaped; no kill-on-timeout escalation in this design.
    fn terminate(&mut self) -> Result<(), ActionError>;
}

// ───────────────────────────────────────────────────────────────
// Speech port (domain → audible feedback)
// ───────────────────────────────────────────────────────────────

/// Audible announcements for the (sight-impaired) operator.
///
/// Announcements are feedback, not control flow: implementations must
/// swallow playback failures after logging them.
pub trait SpeechPort {
    fn announce(&mut self, phrase: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
