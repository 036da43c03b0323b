//! Speech announcement adapter.
//!
//! Renders each phrase by running the configured speech command with
//! the phrase appended as the last argument (`espeak-ng` by default;
//! any TTS wrapper with the same calling convention works).
//!
//! Announcements are operator feedback only: playback failures are
//! logged and swallowed, and a disabled speaker is a silent no-op with
//! identical dispatch behaviour.

use log::{debug, warn};

use crate::app::ports::SpeechPort;
use crate::config::SystemConfig;
use crate::drivers::script::ScriptCommand;

pub struct Speaker {
    command: ScriptCommand,
    enabled: bool,
}

impl Speaker {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            command: ScriptCommand::new(config.speech_command.clone()),
            enabled: config.speech_enabled,
        }
    }
}

impl SpeechPort for Speaker {
    fn announce(&mut self, phrase: &str) {
        if !self.enabled {
            debug!("speech disabled, skipping: {phrase}");
            return;
        }
        if let Err(e) = self.command.run_with_args("speech", &[phrase]) {
            warn!("announcement failed: {e}");
        }
    }
}
