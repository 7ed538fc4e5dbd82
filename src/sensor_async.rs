//! MPU-6050 register interface, async flavour.
//!
//! Mirrors [`crate::sensor`] on top of `embedded-hal-async`, for firmware running on an
//! async executor. Same register traffic, same decoding.

use crate::{
    address::Address,
    aggregator_async::CalibratedMpu6050,
    calibration::{CalibrationOffsets, CalibrationParameters},
    calibration_async::calibrate,
    config::SensorRange,
    error_async::{Error, InitError},
    registers::Register,
    sample::{decode_axis_pair, RawSample},
};

use embedded_hal_async::{delay::DelayNs, i2c::I2c};

const WAKE_DELAY_MS: u32 = 100;

/// InvenSense MPU-6050 register interface (async).
pub struct Mpu6050<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
    range: SensorRange,
}

impl<I> Mpu6050<I>
where
    I: I2c,
{
    /// Wake the sensor and program its full-scale ranges.
    pub async fn new(
        i2c: I,
        address: Address,
        range: SensorRange,
        delay: &mut impl DelayNs,
    ) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
            range,
        };

        if let Err(error) = sensor.configure(delay).await {
            Err(InitError {
                error,
                i2c: sensor.i2c,
            })
        } else {
            Ok(sensor)
        }
    }

    async fn configure(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.write_register(Register::PwrMgmt1, 0x00).await?;
        delay.delay_ms(WAKE_DELAY_MS).await;
        self.write_register(
            Register::AccelConfig,
            (self.range.accel as u8) << Register::FS_SEL_SHIFT,
        )
        .await?;
        self.write_register(
            Register::GyroConfig,
            (self.range.gyro as u8) << Register::FS_SEL_SHIFT,
        )
        .await?;
        debug!("mpu6050 awake at {=u8:#x}", self.address);
        Ok(())
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.i2c
    }

    pub fn range(&self) -> SensorRange {
        self.range
    }

    pub(crate) async fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .await
            .map_err(Error::WriteReadError)
    }

    pub(crate) async fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, bytes)
            .await
            .map_err(Error::WriteError)
    }

    pub(crate) async fn write_register(
        &mut self,
        reg: Register,
        value: u8,
    ) -> Result<(), Error<I>> {
        self.write(&[reg as u8, value]).await
    }

    /// Read the signed 16-bit value stored big-endian at `reg` and `reg + 1`.
    pub async fn read_axis_pair(&mut self, reg: Register) -> Result<i16, Error<I>> {
        let mut buf = [0; 2];
        self.read(&[reg as u8], &mut buf).await?;
        Ok(decode_axis_pair(buf))
    }

    /// Read all six axes plus temperature, one register pair at a time.
    pub async fn raw_sample(&mut self) -> Result<RawSample, Error<I>> {
        let mut values = [0i16; 7];
        for (value, reg) in values.iter_mut().zip(Register::SAMPLE) {
            *value = self.read_axis_pair(reg).await?;
        }
        Ok(RawSample::from_values(values))
    }

    /// Measure per-axis bias of the stationary, level sensor. See
    /// [`crate::sensor::Mpu6050::calibrate`].
    pub async fn calibrate(
        &mut self,
        delay: &mut impl DelayNs,
        parameters: &CalibrationParameters,
    ) -> Result<CalibrationOffsets, Error<I>> {
        calibrate(self, delay, parameters).await
    }

    pub fn into_calibrated(self, offsets: CalibrationOffsets) -> CalibratedMpu6050<I> {
        CalibratedMpu6050::new(self, offsets)
    }
}
