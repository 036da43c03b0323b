//! Per-channel button monitor: refractory debounce + press-duration
//! classification.
//!
//! ## Hardware
//!
//! Active-low momentary switches with internal pull-ups. The monitor is
//! polled from the control loop; `tick()` takes the sampled level and
//! the current time, so the whole state machine runs unchanged on the
//! host in tests.
//!
//! ## Debounce policy
//!
//! A refractory window, not a majority filter: once an active level
//! triggers, the channel is blind until the window elapses. The window
//! is wall-clock time from *action completion* — the control loop calls
//! [`ChannelMonitor::rearm`] after the dispatched operation returns, so
//! a long-running action naturally re-arms the button only afterwards.
//!
//! ## Duration classification
//!
//! | Channel kind | Trigger                        | Classified as        |
//! |--------------|--------------------------------|----------------------|
//! | single-shot  | active level observed          | the one action       |
//! | dual-action  | release after hold < threshold | short-press action   |
//! | dual-action  | release after hold ≥ threshold | long-press action    |

use std::time::{Duration, Instant};

use crate::app::commands::ActionRequest;

/// Digital input level as sampled from the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

/// What a channel does when it fires.
#[derive(Debug, Clone, Copy)]
pub enum ChannelAction {
    /// Fires its action as soon as the active level is observed.
    SingleShot(ActionRequest),
    /// Measures hold time and classifies on release.
    DualAction {
        short: ActionRequest,
        long: ActionRequest,
        /// Hold at least this long for the long-press action
        /// (boundary-inclusive on the long side).
        long_press: Duration,
    },
}

/// One physical button, immutable after configuration.
#[derive(Debug, Clone, Copy)]
pub struct InputChannel {
    pub name: &'static str,
    /// BCM pin number.
    pub pin: u8,
    /// Level interpreted as "pressed" (LOW on this board).
    pub active_level: Level,
    /// Refractory window after a dispatched action completes.
    pub debounce: Duration,
    pub action: ChannelAction,
}

/// Semantic press event derived from consecutive samples.
///
/// Dual-action channels emit `Pressed` on the active edge and `Released`
/// on release, strictly alternating. Single-shot channels fire on the
/// active level and never observe the release, so they emit `Pressed`
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressEvent {
    Pressed { at: Instant },
    Released { at: Instant, held: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MonitorState {
    /// Eligible to trigger.
    Ready,
    /// Active edge confirmed on a dual-action channel; waiting for the
    /// release edge.
    Holding { pressed_at: Instant },
    /// Blind until `until` (debounce window).
    Refractory { until: Instant },
}

/// Debounce + classification state machine for one channel.
pub struct ChannelMonitor {
    channel: InputChannel,
    state: MonitorState,
}

impl ChannelMonitor {
    pub fn new(channel: InputChannel) -> Self {
        Self {
            channel,
            state: MonitorState::Ready,
        }
    }

    pub fn channel(&self) -> &InputChannel {
        &self.channel
    }

    /// Whether the monitor is between the active edge and the release
    /// edge of a dual-action press. While this holds, the control loop
    /// polls this channel at fine granularity to catch the release
    /// promptly.
    pub fn is_holding(&self) -> bool {
        matches!(self.state, MonitorState::Holding { .. })
    }

    /// Advance the state machine with one sampled level.
    pub fn tick(&mut self, level: Level, now: Instant) -> Option<PressEvent> {
        if let MonitorState::Refractory { until } = self.state {
            if now < until {
                return None;
            }
            self.state = MonitorState::Ready;
        }

        match self.state {
            MonitorState::Ready => {
                if level != self.channel.active_level {
                    return None;
                }
                match self.channel.action {
                    ChannelAction::SingleShot(_) => {
                        // Provisional window from the trigger; rearm()
                        // pushes it out to completion + debounce.
                        self.state = MonitorState::Refractory {
                            until: now + self.channel.debounce,
                        };
                        Some(PressEvent::Pressed { at: now })
                    }
                    ChannelAction::DualAction { .. } => {
                        self.state = MonitorState::Holding { pressed_at: now };
                        Some(PressEvent::Pressed { at: now })
                    }
                }
            }

            MonitorState::Holding { pressed_at } => {
                if level == self.channel.active_level {
                    return None;
                }
                let held = now.duration_since(pressed_at);
                self.state = MonitorState::Refractory {
                    until: now + self.channel.debounce,
                };
                Some(PressEvent::Released { at: now, held })
            }

            MonitorState::Refractory { .. } => None,
        }
    }

    /// Resolve a press event to the action it requests, if any.
    pub fn classify(&self, event: PressEvent) -> Option<ActionRequest> {
        match (self.channel.action, event) {
            (ChannelAction::SingleShot(action), PressEvent::Pressed { .. }) => Some(action),
            (ChannelAction::DualAction { short, long, long_press }, PressEvent::Released { held, .. }) => {
                Some(if held >= long_press { long } else { short })
            }
            _ => None,
        }
    }

    /// Restart the refractory window, measured from `now`. Called by the
    /// control loop once the dispatched action has returned.
    pub fn rearm(&mut self, now: Instant) {
        self.state = MonitorState::Refractory {
            until: now + self.channel.debounce,
        };
    }
}
