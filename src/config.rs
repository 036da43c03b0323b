//! System configuration parameters.
//!
//! All tunable parameters for the Netra controller: loop timings, the
//! long-press threshold, collaborator command lines, the alert endpoint
//! and the speech switch. Values can be overridden by a `netra.json`
//! file next to the binary; the channel-to-pin-to-action table itself is
//! compiled in.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::commands::ActionRequest;
use crate::drivers::button::{ChannelAction, InputChannel, Level};
use crate::error::StartupError;
use crate::pins;

/// Core system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Timing ---
    /// Refractory window after a dispatched action completes (ms).
    pub debounce_ms: u64,
    /// Minimum hold for the long-press action on channel D (ms).
    pub long_press_ms: u64,
    /// Poll granularity while waiting for a dual-action release (ms).
    pub hold_poll_ms: u64,
    /// Idle sleep per control-loop iteration (ms).
    pub idle_interval_ms: u64,

    // --- Feedback ---
    /// Announce action progress audibly.
    pub speech_enabled: bool,
    /// Command that renders one phrase (phrase appended as last arg).
    pub speech_command: Vec<String>,

    // --- Emergency alert ---
    /// Remote notification endpoint (one POST per long press).
    pub alert_endpoint: String,
    /// Overall timeout budget for the alert request (seconds).
    pub alert_timeout_secs: u64,

    // --- Collaborator commands ---
    pub capture_command: Vec<String>,
    pub train_command: Vec<String>,
    pub recognize_command: Vec<String>,
    pub describe_image_command: Vec<String>,
    pub describe_video_command: Vec<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            long_press_ms: 3000,
            hold_poll_ms: 10,
            idle_interval_ms: 100,

            speech_enabled: true,
            speech_command: vec!["espeak-ng".into()],

            alert_endpoint: "https://emergency-alert-system.onrender.com/data".into(),
            alert_timeout_secs: 5,

            capture_command: cmd(&["python3", "face_rec.py", "capture"]),
            train_command: cmd(&["python3", "face_rec.py", "train"]),
            recognize_command: cmd(&["python3", "face_rec.py", "recognize"]),
            describe_image_command: cmd(&["python3", "gemini_image_describer.py"]),
            describe_video_command: cmd(&["python3", "gemini_video_describer.py"]),
        }
    }
}

fn cmd(argv: &[&str]) -> Vec<String> {
    argv.iter().map(|s| (*s).to_string()).collect()
}

impl SystemConfig {
    /// Load from `path` if it exists, defaults otherwise. A file that
    /// exists but does not parse is a fatal configuration error.
    pub fn load_or_default(path: &Path) -> Result<Self, StartupError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| StartupError::Config(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| StartupError::Config(format!("{}: {e}", path.display())))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    pub fn hold_poll(&self) -> Duration {
        Duration::from_millis(self.hold_poll_ms)
    }

    pub fn idle_interval(&self) -> Duration {
        Duration::from_millis(self.idle_interval_ms)
    }

    /// The compiled-in channel table, in declaration (service) order.
    pub fn channels(&self) -> [InputChannel; 4] {
        let debounce = self.debounce();
        [
            InputChannel {
                name: "A",
                pin: pins::ENROLL_BUTTON_PIN,
                active_level: Level::Low,
                debounce,
                action: ChannelAction::SingleShot(ActionRequest::EnrollAndTrain),
            },
            InputChannel {
                name: "B",
                pin: pins::RECOGNIZE_BUTTON_PIN,
                active_level: Level::Low,
                debounce,
                action: ChannelAction::SingleShot(ActionRequest::ToggleRecognition),
            },
            InputChannel {
                name: "C",
                pin: pins::DESCRIBE_IMAGE_PIN,
                active_level: Level::Low,
                debounce,
                action: ChannelAction::SingleShot(ActionRequest::DescribeImage),
            },
            InputChannel {
                name: "D",
                pin: pins::DESCRIBE_VIDEO_PIN,
                active_level: Level::Low,
                debounce,
                action: ChannelAction::DualAction {
                    short: ActionRequest::DescribeVideo,
                    long: ActionRequest::TriggerEmergencyAlert,
                    long_press: self.long_press(),
                },
            },
        ]
    }
}
