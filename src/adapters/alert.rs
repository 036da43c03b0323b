//! Emergency alert client.
//!
//! One POST to the configured notification endpoint per long press.
//! The endpoint fans the alert out (SMS to the emergency contact); this
//! side only cares about reachability and the response status.

use std::time::Duration;

use log::info;

use crate::error::ActionError;

pub struct AlertClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl AlertClient {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .build();
        Self { agent, endpoint }
    }

    /// Send the alert request. Success is any 2xx response.
    pub fn send(&self) -> Result<(), ActionError> {
        info!("sending emergency alert to {}", self.endpoint);
        match self.agent.post(&self.endpoint).call() {
            Ok(response) => {
                info!("alert endpoint answered HTTP {}", response.status());
                Ok(())
            }
            Err(ureq::Error::Status(status, _)) => Err(ActionError::HttpStatus { status }),
            Err(ureq::Error::Transport(t)) => Err(ActionError::HttpTransport {
                message: t.to_string(),
            }),
        }
    }
}
