//! Collaborator adapter — the synchronous external operations.
//!
//! Implements [`ActionPort`] by composing the configured external
//! commands with the HTTP alert client. Enrollment is two sequential
//! commands (capture, then train), matching the collaborator's CLI.

use std::time::Duration;

use log::info;

use crate::app::ports::ActionPort;
use crate::config::SystemConfig;
use crate::drivers::script::ScriptCommand;
use crate::error::ActionError;

use super::alert::AlertClient;

pub struct CollaboratorAdapter {
    capture: ScriptCommand,
    train: ScriptCommand,
    describe_image: ScriptCommand,
    describe_video: ScriptCommand,
    alert: AlertClient,
}

impl CollaboratorAdapter {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            capture: ScriptCommand::new(config.capture_command.clone()),
            train: ScriptCommand::new(config.train_command.clone()),
            describe_image: ScriptCommand::new(config.describe_image_command.clone()),
            describe_video: ScriptCommand::new(config.describe_video_command.clone()),
            alert: AlertClient::new(
                config.alert_endpoint.clone(),
                Duration::from_secs(config.alert_timeout_secs),
            ),
        }
    }
}

impl ActionPort for CollaboratorAdapter {
    fn enroll_and_train(&mut self) -> Result<(), ActionError> {
        self.capture.run("face capture")?;
        info!("capture done, training model");
        self.train.run("model training")
    }

    fn describe_image(&mut self) -> Result<(), ActionError> {
        self.describe_image.run("image description")
    }

    fn describe_video(&mut self) -> Result<(), ActionError> {
        self.describe_video.run("video description")
    }

    fn trigger_emergency_alert(&mut self) -> Result<(), ActionError> {
        self.alert.send()
    }
}
