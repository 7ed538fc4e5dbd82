use core::fmt::{Debug, Display, Formatter};
use embedded_hal::i2c::I2c;

/// Error during bring-up of the sensor. Hands the bus back so the caller can reuse it.
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

/// Bus transport failure. Aborts whatever operation was running; nothing is retried.
pub enum Error<I>
where
    I: I2c,
{
    /// Register write rejected by the bus
    WriteError(I::Error),
    /// Register pointer write followed by read failed
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
