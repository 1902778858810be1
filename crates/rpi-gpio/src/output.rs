use rppal::gpio::{Gpio, Level, OutputPin};
use tracing::{debug, info};

use crate::{board, PinError};

/// Logic level a digital output can be driven to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLevel {
    High,
    Low,
}

impl OutputLevel {
    /// Parse the level tokens accepted on the command line.
    ///
    /// Only the exact lowercase words `high` and `low` are recognized.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "high" => Some(Self::High),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl From<OutputLevel> for Level {
    fn from(level: OutputLevel) -> Self {
        match level {
            OutputLevel::High => Self::High,
            OutputLevel::Low => Self::Low,
        }
    }
}

/// A source of output pins, addressed by BCM GPIO number.
pub trait GpioPort {
    type Output: OutputLine;

    /// Configure `bcm` as a digital output without changing its level.
    ///
    /// # Errors
    /// Returns a `PinError` if the pin can't be configured.
    fn output(&self, bcm: u8) -> Result<Self::Output, PinError>;
}

/// A pin configured as a digital output.
pub trait OutputLine {
    fn write(&mut self, level: OutputLevel);
}

impl GpioPort for Gpio {
    type Output = OutputPin;

    fn output(&self, bcm: u8) -> Result<OutputPin, PinError> {
        let mut pin = self.get(bcm)?.into_output();
        // The level has to outlive the process.
        pin.set_reset_on_drop(false);
        Ok(pin)
    }
}

impl OutputLine for OutputPin {
    fn write(&mut self, level: OutputLevel) {
        Self::write(self, level.into());
    }
}

/// Drives header pins, numbered by their physical position on the board.
///
/// Holds the opened GPIO port for its whole lifetime; dropping the controller
/// releases it.
#[derive(Debug)]
pub struct PinController<P> {
    port: P,
}

impl PinController<Gpio> {
    /// Open the Raspberry Pi GPIO peripheral.
    ///
    /// # Errors
    /// Returns a `PinError` if the board isn't recognized or the GPIO memory
    /// can't be accessed.
    pub fn open() -> Result<Self, PinError> {
        let gpio = Gpio::new()?;
        debug!("GPIO opened");
        Ok(Self::new(gpio))
    }
}

impl<P: GpioPort> PinController<P> {
    #[must_use]
    pub const fn new(port: P) -> Self {
        Self { port }
    }

    /// Configure the header pin `pin` as an output and drive it to `level`.
    ///
    /// With no level the pin is left configured as an output and not written.
    ///
    /// # Errors
    /// Returns a `PinError` if `pin` is not a GPIO pin on the header or it
    /// can't be configured.
    pub fn set_pin(&self, pin: i64, level: Option<OutputLevel>) -> Result<(), PinError> {
        let bcm = board::to_bcm(pin)?;
        let mut output = self.port.output(bcm)?;
        debug!("pin {pin} (GPIO {bcm}) configured as output");

        match level {
            Some(level) => {
                output.write(level);
                info!("pin {pin} driven {level:?}");
            }
            None => info!("pin {pin} configured, level left unchanged"),
        }
        Ok(())
    }
}
