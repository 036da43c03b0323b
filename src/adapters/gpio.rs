//! Raspberry Pi GPIO input adapter (rppal).
//!
//! Acquires every configured button pin as an input with the internal
//! pull-up enabled (buttons are wired to ground, active-low). Both the
//! interface open and each pin acquisition are fail-fast: any failure
//! here is a fatal startup error, never a per-sample one.
//!
//! rppal resets the pins to their default state when the adapter is
//! dropped, which covers the "release the input-hardware interface"
//! step of shutdown.

use rppal::gpio::{Gpio, InputPin};

use crate::app::ports::InputPort;
use crate::drivers::button::{InputChannel, Level};
use crate::error::StartupError;

pub struct GpioInput {
    pins: Vec<InputPin>,
}

impl GpioInput {
    /// Open the GPIO interface and acquire one input per channel, in
    /// channel-table order (`slot` indexes match).
    pub fn new(channels: &[InputChannel]) -> Result<Self, StartupError> {
        let gpio = Gpio::new().map_err(StartupError::GpioUnavailable)?;
        let mut pins = Vec::with_capacity(channels.len());
        for ch in channels {
            let pin = gpio
                .get(ch.pin)
                .map_err(|source| StartupError::PinAcquire { pin: ch.pin, source })?
                .into_input_pullup();
            pins.push(pin);
        }
        Ok(Self { pins })
    }
}

impl InputPort for GpioInput {
    fn level(&self, slot: usize) -> Level {
        match self.pins[slot].read() {
            rppal::gpio::Level::High => Level::High,
            rppal::gpio::Level::Low => Level::Low,
        }
    }
}
