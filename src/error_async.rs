//! Error types for the async flavour of the driver.
//!
//! Same shape as [`crate::error`], bound on `embedded_hal_async::i2c::I2c` instead.

use core::fmt::{Debug, Display, Formatter};
use embedded_hal_async::i2c::I2c;

/// Error during async bring-up. Contains the bus so it can be recovered.
pub struct InitError<I>
where
    I: I2c,
{
    pub i2c: I,
    pub error: Error<I>,
}

impl<I> Debug for InitError<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(&self.error, f)
    }
}

impl<I> Display for InitError<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "sensor initialization failed: {}", self.error)
    }
}

/// Async bus transport failure.
pub enum Error<I>
where
    I: I2c,
{
    /// Error occurred during an I2C write operation
    WriteError(I::Error),
    /// Error occurred during an I2C write-read operation
    WriteReadError(I::Error),
}

impl<I> Debug for Error<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::WriteReadError(e) => f.debug_tuple("WriteReadError").field(e).finish(),
            Self::WriteError(e) => f.debug_tuple("WriteError").field(e).finish(),
        }
    }
}

impl<I> Display for Error<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WriteReadError(e) => write!(f, "i2c register read failed: {e:?}"),
            Self::WriteError(e) => write!(f, "i2c register write failed: {e:?}"),
        }
    }
}
