//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the process logger. A future telemetry adapter would implement the
//! same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => info!("EVENT | controller running"),
            AppEvent::ActionDispatched { action, channel } => {
                info!("EVENT | channel {channel} -> {}", action.label());
            }
            AppEvent::ActionCompleted(action) => {
                info!("EVENT | {} completed", action.label());
            }
            AppEvent::ActionFailed { action, reason } => {
                warn!("EVENT | {} failed: {reason}", action.label());
            }
            AppEvent::RecognitionStarted => info!("EVENT | recognition started"),
            AppEvent::RecognitionStopped => info!("EVENT | recognition stopped"),
            AppEvent::ShutdownRequested => info!("EVENT | shutdown requested"),
        }
    }
}
