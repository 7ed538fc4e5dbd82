//! Blocking control loop.
//!
//! One cycle: measure `dt`, read an averaged reading, step the tracker, hand the report
//! to the caller, sleep. Single threaded, and all state is local to the loop.

use core::ops::ControlFlow;

use crate::{
    aggregator::CalibratedMpu6050,
    calibration::CalibrationParameters,
    config::TrackerConfig,
    error::InitError,
    sensor::Mpu6050,
    tracker::{elapsed_secs, Clock, HandTracker, Report},
};
use embedded_hal::{delay::DelayNs, i2c::I2c};

/// Calibrate with the configured parameters and attach the offsets.
///
/// On failure the bus is handed back inside the error and no offsets are kept.
pub fn calibrate<I>(
    mut sensor: Mpu6050<I>,
    delay: &mut impl DelayNs,
    config: &TrackerConfig,
) -> Result<CalibratedMpu6050<I>, InitError<I>>
where
    I: I2c,
{
    let parameters = CalibrationParameters::new(config.gravity)
        .with_samples(config.calibration_samples, config.calibration_delay_ms);
    match sensor.calibrate(delay, &parameters) {
        Ok(offsets) => Ok(sensor.into_calibrated(offsets)),
        Err(error) => {
            warn!("calibration aborted");
            Err(InitError {
                i2c: sensor.release(),
                error,
            })
        }
    }
}

/// Run the tracking loop until `emit` breaks or the bus fails.
///
/// `emit` sees every cycle's report; [`Report::confirmed`] tells whether it is one to
/// display. The sensor stays borrowed so the caller can release the bus on any exit.
pub fn run<I, F>(
    mpu: &mut CalibratedMpu6050<I>,
    delay: &mut impl DelayNs,
    clock: &mut impl Clock,
    config: &TrackerConfig,
    mut emit: F,
) -> Result<(), crate::error::Error<I>>
where
    I: I2c,
    F: FnMut(&Report) -> ControlFlow<()>,
{
    let mut tracker = HandTracker::new(config);
    let mut previous = clock.now_ms();
    info!("tracking started");

    loop {
        let now = clock.now_ms();
        let dt = elapsed_secs(previous, now);
        previous = now;

        let reading =
            mpu.scaled_reading(delay, config.samples_per_reading, config.sample_delay_ms)?;
        let report = tracker.step(&reading, dt);

        if emit(&report).is_break() {
            info!("tracking stopped");
            return Ok(());
        }
        delay.delay_ms(config.cycle_period_ms);
    }
}
