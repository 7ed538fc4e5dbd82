use crate::{
    calibration::CalibrationOffsets,
    error_async::Error,
    reading::{ReadingAccumulator, ScaledReading},
    sensor_async::Mpu6050,
};
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

/// MPU-6050 with calibration offsets attached (async).
pub struct CalibratedMpu6050<I>
where
    I: I2c,
{
    sensor: Mpu6050<I>,
    offsets: CalibrationOffsets,
}

impl<I> CalibratedMpu6050<I>
where
    I: I2c,
{
    pub fn new(sensor: Mpu6050<I>, offsets: CalibrationOffsets) -> Self {
        Self { sensor, offsets }
    }

    pub fn offsets(&self) -> CalibrationOffsets {
        self.offsets
    }

    pub fn release(self) -> I {
        self.sensor.release()
    }

    /// Average `samples` offset-corrected raw samples into one reading.
    pub async fn scaled_reading(
        &mut self,
        delay: &mut impl DelayNs,
        samples: usize,
        delay_ms: u32,
    ) -> Result<ScaledReading, Error<I>> {
        let mut accumulator = ReadingAccumulator::new(self.sensor.range(), self.offsets);
        for _ in 0..samples.max(1) {
            let sample = self.sensor.raw_sample().await?;
            accumulator.add(&sample);
            delay.delay_ms(delay_ms).await;
        }
        Ok(accumulator.reading())
    }
}
