use crate::Register;

/// Errors reported by the MCP23008 driver.
///
/// `E` is the error type of the underlying I2C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The I2C bus reported an error.
    Bus(E),
    /// Pin index outside of `0..=7`.  No bus transaction was issued.
    InvalidPin(u8),
    /// A verified write read back a different value than the one written.
    VerifyMismatch {
        register: Register,
        expected: u8,
        actual: u8,
    },
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Bus(error)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "i2c bus error: {:?}", e),
            Error::InvalidPin(pin) => write!(f, "invalid pin index {} (must be 0..=7)", pin),
            Error::VerifyMismatch {
                register,
                expected,
                actual,
            } => write!(
                f,
                "verify failed for {:?}: wrote {:#04x}, read back {:#04x}",
                register, expected, actual
            ),
        }
    }
}

impl<E: core::fmt::Debug> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}
