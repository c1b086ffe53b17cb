//! The output line the transmitter drives.

use std::fmt;

#[cfg(feature = "gpio")]
mod gpio;
pub mod test;

#[cfg(feature = "gpio")]
pub use self::gpio::GpioLine;

/// Logical state of the output line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// The level a transmitted bit drives the line to.
    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit { Level::High } else { Level::Low }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Low => "low",
            Level::High => "high",
        })
    }
}

/// A single digital output.
///
/// This is all the transmitter needs from the hardware: drive the line
/// high, drive it low. The line is write-only and is never read back, so
/// callers have to track the last level they set if they care.
pub trait OutputLine {
    /// Error for a state change that failed at the hardware.
    type Error: std::error::Error + Send + Sync + 'static;

    fn set_high(&mut self) -> Result<(), Self::Error>;

    fn set_low(&mut self) -> Result<(), Self::Error>;

    fn set(&mut self, level: Level) -> Result<(), Self::Error> {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }
}
