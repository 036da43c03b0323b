//! Netra controller — main entry point.
//!
//! Bootstrap order: logger → configuration → signal handlers → adapter
//! construction (GPIO acquisition is fail-fast) → control loop. The
//! loop performs its own guaranteed cleanup on the way out; by the time
//! `main` returns, no background task survives and the pins have been
//! released.

#![deny(unused_must_use)]

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use log::{info, warn};

use netra::adapters::collaborators::CollaboratorAdapter;
use netra::adapters::gpio::GpioInput;
use netra::adapters::log_sink::LogEventSink;
use netra::adapters::recognition::ProcessRecognition;
use netra::adapters::speech::Speaker;
use netra::app::service::AppService;
use netra::config::SystemConfig;
use netra::controller::Controller;

/// Set from the signal handler, polled by the control loop.
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_shutdown(_: libc::c_int) {
    SHUTDOWN.store(true, Ordering::SeqCst);
}

fn install_signal_handlers() {
    let handler = handle_shutdown as *const () as libc::sighandler_t;
    unsafe {
        if libc::signal(libc::SIGINT, handler) == libc::SIG_ERR {
            warn!("failed to install SIGINT handler");
        }
        if libc::signal(libc::SIGTERM, handler) == libc::SIG_ERR {
            warn!("failed to install SIGTERM handler");
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("netra controller v{}", env!("CARGO_PKG_VERSION"));

    let config = SystemConfig::load_or_default(Path::new("netra.json"))
        .context("loading configuration")?;

    install_signal_handlers();

    // GPIO acquisition is the fail-fast gate: an unavailable interface
    // aborts here, before the loop enters Running.
    let channels = config.channels();
    let io = GpioInput::new(&channels).context("acquiring button inputs")?;

    let mut actions = CollaboratorAdapter::new(&config);
    let mut recognition = ProcessRecognition::new(&config);
    let mut speech = Speaker::new(&config);
    let mut sink = LogEventSink::new();

    let mut controller = Controller::new(&config, AppService::new());
    controller.run(
        &io,
        &mut actions,
        &mut recognition,
        &mut speech,
        &mut sink,
        &SHUTDOWN,
    );

    info!("inputs released, exiting");
    Ok(())
}
