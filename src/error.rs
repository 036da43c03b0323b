//! Unified error types for the Netra controller.
//!
//! Two categories, matching how failures propagate:
//!
//! - [`StartupError`] — fatal. Raised before the control loop enters its
//!   running state (GPIO interface unavailable, invalid channel config).
//!   Aborts the process.
//! - [`ActionError`] — transient. A dispatched collaborator operation
//!   could not be invoked or reported failure. Logged and announced; the
//!   control loop continues to the next iteration.

use std::fmt;
use std::io;

// ---------------------------------------------------------------------------
// Fatal startup errors
// ---------------------------------------------------------------------------

/// Failures that abort before the loop enters `Running`.
#[derive(Debug)]
pub enum StartupError {
    /// The digital-I/O interface could not be opened at all.
    GpioUnavailable(rppal::gpio::Error),
    /// One configured pin could not be acquired as an input.
    PinAcquire { pin: u8, source: rppal::gpio::Error },
    /// The configuration file exists but does not parse.
    Config(String),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioUnavailable(e) => write!(f, "GPIO interface unavailable: {e}"),
            Self::PinAcquire { pin, source } => {
                write!(f, "cannot acquire BCM pin {pin} as input: {source}")
            }
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for StartupError {}

// ---------------------------------------------------------------------------
// Transient action errors
// ---------------------------------------------------------------------------

/// A dispatched collaborator operation failed.
///
/// `what` names the operation (e.g. `"face capture"`) so log lines and
/// spoken feedback stay meaningful without carrying the whole command.
#[derive(Debug)]
pub enum ActionError {
    /// The external command could not be spawned.
    Launch { what: &'static str, source: io::Error },
    /// The external command ran but exited unsuccessfully.
    /// `code` is `None` when the process was killed by a signal.
    Exited { what: &'static str, code: Option<i32> },
    /// Signalling the background task failed.
    Signal { what: &'static str, errno: i32 },
    /// The remote endpoint answered with a non-success status.
    HttpStatus { status: u16 },
    /// The HTTP request never completed (DNS, connect, timeout).
    HttpTransport { message: String },
    /// The operation has an empty command configured.
    NotConfigured { what: &'static str },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Launch { what, source } => write!(f, "{what}: failed to launch: {source}"),
            Self::Exited { what, code: Some(c) } => write!(f, "{what}: exited with status {c}"),
            Self::Exited { what, code: None } => write!(f, "{what}: terminated by signal"),
            Self::Signal { what, errno } => write!(f, "{what}: signal delivery failed (errno {errno})"),
            Self::HttpStatus { status } => write!(f, "endpoint returned HTTP {status}"),
            Self::HttpTransport { message } => write!(f, "request failed: {message}"),
            Self::NotConfigured { what } => write!(f, "{what}: no command configured"),
        }
    }
}

impl std::error::Error for ActionError {}
