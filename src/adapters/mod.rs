//! Adapters — implementations of the port traits against real I/O:
//! Raspberry Pi GPIO, collaborator subprocesses, the alert endpoint,
//! the speech renderer, and the logging event sink.

pub mod alert;
pub mod collaborators;
pub mod gpio;
pub mod log_sink;
pub mod recognition;
pub mod speech;
