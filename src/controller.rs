//! Main control loop.
//!
//! The only component whose lifecycle spans the whole process. Each
//! iteration samples every configured channel in declaration order,
//! advances its monitor, dispatches at most one qualifying event per
//! channel, then sleeps the idle interval to bound CPU usage.
//!
//! The loop is deliberately single-threaded and synchronous: a
//! dispatched operation blocks every other button until it returns, and
//! a dual-action hold parks the loop in a fine-grained polling sub-loop
//! on that one channel until release. The sole concurrent activity is
//! the background recognition process, owned by the registry.
//!
//! Shutdown: an interrupt signal flips the shared flag; the loop drains
//! out of its current iteration, stops the background task, and returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::{ActionPort, EventSink, InputPort, RecognitionPort, SpeechPort};
use crate::app::service::AppService;
use crate::config::SystemConfig;
use crate::drivers::button::ChannelMonitor;

pub struct Controller {
    monitors: Vec<ChannelMonitor>,
    service: AppService,
    hold_poll: Duration,
    idle_interval: Duration,
}

impl Controller {
    pub fn new(config: &SystemConfig, service: AppService) -> Self {
        Self {
            monitors: config.channels().into_iter().map(ChannelMonitor::new).collect(),
            service,
            hold_poll: config.hold_poll(),
            idle_interval: config.idle_interval(),
        }
    }

    pub fn service(&self) -> &AppService {
        &self.service
    }

    /// Run until `shutdown` is set, then perform guaranteed cleanup.
    pub fn run(
        &mut self,
        io: &impl InputPort,
        actions: &mut impl ActionPort,
        recognition: &mut dyn RecognitionPort,
        speech: &mut impl SpeechPort,
        sink: &mut impl EventSink,
        shutdown: &AtomicBool,
    ) {
        sink.emit(&AppEvent::Started);
        info!("control loop running; waiting for button presses");

        while !shutdown.load(Ordering::Relaxed) {
            self.step(io, actions, recognition, speech, sink, shutdown);
            thread::sleep(self.idle_interval);
        }

        sink.emit(&AppEvent::ShutdownRequested);
        self.service.shutdown(sink);
        info!("control loop stopped");
    }

    /// One control cycle: sample → debounce → classify → dispatch, for
    /// every channel in declaration order.
    ///
    /// While a dual-action channel is held, this blocks polling that one
    /// channel at the configured granularity — other buttons are
    /// unresponsive for the duration of the hold.
    pub fn step(
        &mut self,
        io: &impl InputPort,
        actions: &mut impl ActionPort,
        recognition: &mut dyn RecognitionPort,
        speech: &mut impl SpeechPort,
        sink: &mut impl EventSink,
        shutdown: &AtomicBool,
    ) {
        for slot in 0..self.monitors.len() {
            let mut event = self.monitors[slot].tick(io.level(slot), Instant::now());

            while self.monitors[slot].is_holding() && !shutdown.load(Ordering::Relaxed) {
                thread::sleep(self.hold_poll);
                event = self.monitors[slot].tick(io.level(slot), Instant::now());
            }

            let Some(event) = event else { continue };
            let Some(action) = self.monitors[slot].classify(event) else {
                continue;
            };

            let channel = self.monitors[slot].channel().name;
            if let Err(e) =
                self.service
                    .dispatch(action, channel, actions, recognition, speech, sink)
            {
                warn!("channel {channel}: {} failed: {e}", action.label());
            }

            // Refractory window counts from action completion, so a
            // long-running action re-arms the button only on return.
            self.monitors[slot].rearm(Instant::now());
        }
    }
}
