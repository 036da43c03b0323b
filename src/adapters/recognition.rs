//! Process-backed recognition adapter.
//!
//! Launches the continuous recognition collaborator as a child process
//! and wraps it in a [`RecognitionTask`]. Termination is cooperative:
//! SIGTERM, then reap — no kill-on-timeout escalation, mirroring the
//! collaborator's own clean-exit handling.

use std::process::Child;

use log::info;

use crate::app::ports::{RecognitionPort, RecognitionTask};
use crate::config::SystemConfig;
use crate::drivers::script::ScriptCommand;
use crate::error::ActionError;

pub struct ProcessRecognition {
    command: ScriptCommand,
}

impl ProcessRecognition {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            command: ScriptCommand::new(config.recognize_command.clone()),
        }
    }
}

impl RecognitionPort for ProcessRecognition {
    fn launch(&mut self) -> Result<Box<dyn RecognitionTask>, ActionError> {
        let child = self.command.spawn("recognition")?;
        info!("recognition process spawned (pid {})", child.id());
        Ok(Box::new(ChildTask { child }))
    }
}

struct ChildTask {
    child: Child,
}

impl RecognitionTask for ChildTask {
    fn terminate(&mut self) -> Result<(), ActionError> {
        // Child::kill would send SIGKILL; the collaborator needs SIGTERM
        // to release the camera and exit cleanly.
        let pid = self.child.id() as libc::pid_t;
        let rc = unsafe { libc::kill(pid, libc::SIGTERM) };
        if rc != 0 {
            let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
            return Err(ActionError::Signal {
                what: "recognition",
                errno,
            });
        }
        // Reap so the child does not linger as a zombie.
        match self.child.wait() {
            Ok(status) => {
                info!("recognition process exited ({status})");
                Ok(())
            }
            Err(source) => Err(ActionError::Launch {
                what: "recognition reap",
                source,
            }),
        }
    }
}
