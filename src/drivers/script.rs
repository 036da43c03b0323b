//! External-command runner for collaborator operations.
//!
//! Every collaborator (capture/train, describers, recognition, TTS
//! playback) is an external program configured as an argv vector. This
//! module owns the spawn/exit-status plumbing so the adapters stay
//! declarative.

use std::process::{Child, Command, Stdio};

use log::debug;

use crate::error::ActionError;

/// One configured external command.
#[derive(Debug, Clone)]
pub struct ScriptCommand {
    argv: Vec<String>,
}

impl ScriptCommand {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    fn command(&self, what: &'static str) -> Result<Command, ActionError> {
        let (program, args) = self
            .argv
            .split_first()
            .ok_or(ActionError::NotConfigured { what })?;
        let mut cmd = Command::new(program);
        cmd.args(args);
        Ok(cmd)
    }

    /// Run to completion. Success means exit status zero; anything else
    /// is a transient action failure.
    pub fn run(&self, what: &'static str) -> Result<(), ActionError> {
        debug!("running {what}: {:?}", self.argv);
        let status = self
            .command(what)?
            .status()
            .map_err(|source| ActionError::Launch { what, source })?;
        if status.success() {
            Ok(())
        } else {
            Err(ActionError::Exited {
                what,
                code: status.code(),
            })
        }
    }

    /// Run with extra trailing arguments (e.g. the phrase for TTS).
    pub fn run_with_args(&self, what: &'static str, extra: &[&str]) -> Result<(), ActionError> {
        debug!("running {what}: {:?} + {:?}", self.argv, extra);
        let status = self
            .command(what)?
            .args(extra)
            .status()
            .map_err(|source| ActionError::Launch { what, source })?;
        if status.success() {
            Ok(())
        } else {
            Err(ActionError::Exited {
                what,
                code: status.code(),
            })
        }
    }

    /// Spawn without waiting — used only for the background recognition
    /// task, whose lifecycle the registry tracks.
    pub fn spawn(&self, what: &'static str) -> Result<Child, ActionError> {
        debug!("spawning {what}: {:?}", self.argv);
        self.command(what)?
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| ActionError::Launch { what, source })
    }
}
