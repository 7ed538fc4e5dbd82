use crate::{
    calibration::CalibrationOffsets,
    error::Error,
    reading::{ReadingAccumulator, ScaledReading},
    sensor::Mpu6050,
};
use embedded_hal::{delay::DelayNs, i2c::I2c};

/// MPU-6050 with calibration offsets attached (blocking).
///
/// Obtained from [`Mpu6050::into_calibrated`]. Owns the offsets for the rest of the run.
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

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.sensor.release()
    }

    /// Average `samples` offset-corrected raw samples into one reading, pausing
    /// `delay_ms` after each.
    pub fn scaled_reading(
        &mut self,
        delay: &mut impl DelayNs,
        samples: usize,
        delay_ms: u32,
    ) -> Result<ScaledReading, Error<I>> {
        let mut accumulator = ReadingAccumulator::new(self.sensor.range(), self.offsets);
        for _ in 0..samples.max(1) {
            let sample = self.sensor.raw_sample()?;
            accumulator.add(&sample);
            delay.delay_ms(delay_ms);
        }
        Ok(accumulator.reading())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        address::Address,
        calibration::CalibrationParameters,
        config::SensorRange,
        mock::{MockDelay, MockI2c},
    };
    use approx::assert_relative_eq;

    #[test]
    fn calibrated_rest_reads_one_g_on_z() {
        let mut i2c = MockI2c::new();
        i2c.set_sample([200, -100, 16484, 50, -20, 10, 0]);
        let mut delay = MockDelay::default();
        let mut mpu =
            Mpu6050::new(i2c, Address::default(), SensorRange::default(), &mut delay).unwrap();
        let offsets = mpu
            .calibrate(&mut delay, &CalibrationParameters::default().with_samples(10, 0))
            .unwrap();
        let mut mpu = mpu.into_calibrated(offsets);

        let reading = mpu.scaled_reading(&mut delay, 5, 10).unwrap();

        assert_relative_eq!(reading.accel.x, 0.0);
        assert_relative_eq!(reading.accel.y, 0.0);
        assert_relative_eq!(reading.accel.z, 1.0);
        assert_relative_eq!(reading.gyro.z, 0.0);
        assert_relative_eq!(reading.accel_counts.z, 16384.0);
    }

    #[test]
    fn reading_uses_requested_sample_count() {
        let mut delay = MockDelay::default();
        let mpu = Mpu6050::new(
            MockI2c::at_rest(),
            Address::default(),
            SensorRange::default(),
            &mut delay,
        )
        .unwrap();
        let mut mpu = mpu.into_calibrated(CalibrationOffsets::default());
        let before = delay.total_ns;

        mpu.scaled_reading(&mut delay, 3, 10).unwrap();

        assert_eq!(delay.total_ns - before, 30_000_000);
        assert_eq!(mpu.release().transactions().len(), 3 + 3 * 7);
    }
}
