//! Background task registry — lifecycle of the single recognition task.
//!
//! Tracks at most one running task. `toggle()` starts it when stopped
//! and stops it when started; `shutdown()` is the guaranteed-cleanup
//! path invoked on every process exit, with a `Drop` backstop so an
//! abnormal unwind cannot orphan the child process.
//!
//! Mutation is confined to the single control-loop thread, so the
//! flag/handle pair needs no lock.

use std::time::Instant;

use log::{info, warn};

use crate::error::ActionError;

use super::ports::{RecognitionPort, RecognitionTask};

/// Outcome of a [`RecognitionRegistry::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Started,
    Stopped,
}

/// Ownership record for the running task. Created on start, destroyed
/// on stop — no reference to a dead task is ever retained.
struct RecognitionHandle {
    task: Box<dyn RecognitionTask>,
    started_at: Instant,
}

/// Owns the one permitted [`RecognitionHandle`].
#[derive(Default)]
pub struct RecognitionRegistry {
    handle: Option<RecognitionHandle>,
}

impl RecognitionRegistry {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Whether a recognition task is currently running.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start timestamp of the running task, if any.
    pub fn started_at(&self) -> Option<Instant> {
        self.handle.as_ref().map(|h| h.started_at)
    }

    /// Launch the task if stopped, or request termination if running.
    ///
    /// On a failed termination the handle is still cleared — the task
    /// reference is dead either way, and retaining it would only let a
    /// later toggle signal a stale process.
    pub fn toggle(&mut self, port: &mut dyn RecognitionPort) -> Result<ToggleOutcome, ActionError> {
        match self.handle.take() {
            Some(mut running) => {
                info!(
                    "stopping recognition task (ran {:?})",
                    running.started_at.elapsed()
                );
                running.task.terminate()?;
                Ok(ToggleOutcome::Stopped)
            }
            None => {
                let task = port.launch()?;
                self.handle = Some(RecognitionHandle {
                    task,
                    started_at: Instant::now(),
                });
                info!("recognition task started");
                Ok(ToggleOutcome::Started)
            }
        }
    }

    /// Terminate the running task unconditionally. Called exactly once
    /// at process termination; a no-op when nothing is running.
    pub fn shutdown(&mut self) {
        if let Some(mut running) = self.handle.take() {
            info!("shutdown: terminating recognition task");
            if let Err(e) = running.task.terminate() {
                warn!("shutdown: recognition task did not stop cleanly: {e}");
            }
        }
    }
}

impl Drop for RecognitionRegistry {
    fn drop(&mut self) {
        // Backstop for abnormal exits; the normal path has already
        // cleared the handle via shutdown().
        self.shutdown();
    }
}
