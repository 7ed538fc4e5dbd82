//! Blocking calibration.
//!
//! Samples the resting sensor `parameters.samples` times and averages the readings into
//! per-axis offsets. A single failed read fails the whole run.

use crate::{
    calibration::{CalibrationOffsets, CalibrationParameters, OffsetAccumulator},
    error::Error,
    sensor::Mpu6050,
};
use embedded_hal::{delay::DelayNs, i2c::I2c};

/// Collect samples and return their gravity-compensated means
pub fn calibrate<I>(
    mpu: &mut Mpu6050<I>,
    delay: &mut impl DelayNs,
    parameters: &CalibrationParameters,
) -> Result<CalibrationOffsets, Error<I>>
where
    I: I2c,
{
    let samples = parameters.effective_samples();
    info!("calibrating over {=usize} samples, keep the hand still", samples);

    let mut accumulator = OffsetAccumulator::new(mpu.range().accel, parameters.gravity);
    for _ in 0..samples {
        let sample = mpu.raw_sample()?;
        accumulator.add(&sample.accel, &sample.gyro);
        delay.delay_ms(parameters.delay_ms);
    }

    let offsets = accumulator.offsets();
    info!(
        "calibration offsets: accel {} gyro {}",
        offsets.accel(),
        offsets.gyro()
    );
    Ok(offsets)
}
