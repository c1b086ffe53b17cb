//! Raspberry Pi GPIO backend.

use std::convert::Infallible;

use rppal::gpio::{
    Gpio,
    OutputPin,
};

use crate::line::OutputLine;

/// A GPIO output pin, addressed by its BCM number.
///
/// The pin is driven low when it is acquired, so the line starts out idle
/// no matter what state the pin was left in, and it keeps its last driven
/// level when the line is dropped.
#[derive(Debug)]
pub struct GpioLine {
    pin: OutputPin,
}

impl GpioLine {
    /// Acquires the pin and drives it low.
    ///
    /// Fails when the GPIO peripheral can't be accessed (not a Pi, missing
    /// permissions) or the pin doesn't exist.
    pub fn open(bcm_pin: u8) -> Result<Self, rppal::gpio::Error> {
        let mut pin = Gpio::new()?.get(bcm_pin)?.into_output_low();
        // without this rppal restores the pin's pre-acquisition mode on
        // drop, un-driving the final low write as soon as the line is
        // released. BCM 0-8 power up with pull-ups, so a reset pin can
        // even float back high.
        pin.set_reset_on_drop(false);
        Ok(Self { pin })
    }
}

impl OutputLine for GpioLine {
    // rppal writes the level register directly, that can't fail once the
    // pin is acquired
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.pin.set_low();
        Ok(())
    }
}
