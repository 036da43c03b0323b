//! Inbound action requests.
//!
//! A classified button event resolves to exactly one of these, and the
//! [`AppService`](super::service::AppService) maps each to one
//! collaborator operation. The mapping is static and total.

/// The five actions a button press can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRequest {
    /// Capture reference face samples, then retrain the model.
    EnrollAndTrain,

    /// Start the background recognition task, or stop it if running.
    ToggleRecognition,

    /// Capture one still frame and describe it via the cloud service.
    DescribeImage,

    /// Capture a short clip and describe it via the cloud service.
    DescribeVideo,

    /// Send one alert request to the remote notification endpoint.
    TriggerEmergencyAlert,
}

impl ActionRequest {
    /// Short human-readable label, used in logs and event lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnrollAndTrain => "enroll-and-train",
            Self::ToggleRecognition => "toggle-recognition",
            Self::DescribeImage => "describe-image",
            Self::DescribeVideo => "describe-video",
            Self::TriggerEmergencyAlert => "emergency-alert",
        }
    }
}
