pub mod board;
pub mod output;

pub use output::{GpioPort, OutputLevel, OutputLine, PinController};

/// Errors that may occur when driving a pin.
#[derive(Debug, thiserror::Error)]
pub enum PinError {
    /// Occurs if the physical pin is not a GPIO pin on the 40-pin header.
    #[error("pin {0} is not a valid GPIO pin on the board header")]
    InvalidPin(i64),

    /// Occurs if the BCM GPIO is not exposed by the detected board.
    #[error("GPIO {0} is not available on this board")]
    Unavailable(u8),

    /// Occurs if the Raspberry Pi model could not be identified.
    #[error("unknown Raspberry Pi model")]
    UnknownModel,

    /// Occurs if the process is not allowed to access the GPIO interface.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Any other problem accessing gpio itself on the Raspberry PI.
    #[error(transparent)]
    Gpio(rppal::gpio::Error),
}

impl PinError {
    /// Whether the error comes from the board or pin configuration rather than
    /// from access rights or I/O.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidPin(_) | Self::Unavailable(_) | Self::UnknownModel
        )
    }
}

impl From<rppal::gpio::Error> for PinError {
    fn from(err: rppal::gpio::Error) -> Self {
        match err {
            rppal::gpio::Error::PinNotAvailable(bcm) => Self::Unavailable(bcm),
            rppal::gpio::Error::UnknownModel => Self::UnknownModel,
            rppal::gpio::Error::PermissionDenied(path) => Self::PermissionDenied(path),
            rppal::gpio::Error::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Self::PermissionDenied(e.to_string())
            }
            other => Self::Gpio(other),
        }
    }
}
