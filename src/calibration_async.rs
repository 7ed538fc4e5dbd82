//! Async calibration.
//!
//! Same sampling run as [`crate::calibration_blocking`], awaiting the bus and the pause
//! between samples.

use crate::{
    calibration::{CalibrationOffsets, CalibrationParameters, OffsetAccumulator},
    error_async::Error,
    sensor_async::Mpu6050,
};
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

/// Collect samples and return their gravity-compensated means
pub async fn calibrate<I>(
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
        let sample = mpu.raw_sample().await?;
        accumulator.add(&sample.accel, &sample.gyro);
        delay.delay_ms(parameters.delay_ms).await;
    }

    let offsets = accumulator.offsets();
    info!(
        "calibration offsets: accel {} gyro {}",
        offsets.accel(),
        offsets.gyro()
    );
    Ok(offsets)
}
