//! BCM GPIO pin assignments for the Netra button board.
//!
//! Single source of truth — the channel table in [`crate::config`]
//! references this module rather than hard-coding pin numbers.
//!
//! All four buttons are momentary switches wired between the pin and
//! ground, using the SoC's internal pull-ups (active-low).

/// Button A — capture face samples and retrain the model.
pub const ENROLL_BUTTON_PIN: u8 = 17;

/// Button B — toggle continuous face recognition on/off.
pub const RECOGNIZE_BUTTON_PIN: u8 = 18;

/// Button C — capture a still frame and describe it via the cloud.
pub const DESCRIBE_IMAGE_PIN: u8 = 22;

/// Button D — dual action: short press records and describes a clip,
/// holding for the long-press threshold triggers the emergency alert.
pub const DESCRIBE_VIDEO_PIN: u8 = 23;
