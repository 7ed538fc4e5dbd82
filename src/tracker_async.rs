//! Async control loop, same cycle as [`crate::tracker_blocking`].

use core::ops::ControlFlow;

use crate::{
    aggregator_async::CalibratedMpu6050,
    calibration::CalibrationParameters,
    config::TrackerConfig,
    error_async::{Error, InitError},
    sensor_async::Mpu6050,
    tracker::{elapsed_secs, Clock, HandTracker, Report},
};
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

/// Calibrate with the configured parameters and attach the offsets.
pub async fn calibrate<I>(
    mut sensor: Mpu6050<I>,
    delay: &mut impl DelayNs,
    config: &TrackerConfig,
) -> Result<CalibratedMpu6050<I>, InitError<I>>
where
    I: I2c,
{
    let parameters = CalibrationParameters::new(config.gravity)
        .with_samples(config.calibration_samples, config.calibration_delay_ms);
    match sensor.calibrate(delay, &parameters).await {
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
/// Dropping the returned future between cycles is also a clean stop: no register is
/// left half written.
pub async fn run<I, F>(
    mpu: &mut CalibratedMpu6050<I>,
    delay: &mut impl DelayNs,
    clock: &mut impl Clock,
    config: &TrackerConfig,
    mut emit: F,
) -> Result<(), Error<I>>
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

        let reading = mpu
            .scaled_reading(delay, config.samples_per_reading, config.sample_delay_ms)
            .await?;
        let report = tracker.step(&reading, dt);

        if emit(&report).is_break() {
            info!("tracking stopped");
            return Ok(());
        }
        delay.delay_ms(config.cycle_period_ms).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        address::Address,
        config::SensorRange,
        direction::Direction,
        mock::{MockDelay, MockI2c, StepClock},
        registers::Register,
    };
    use std::vec::Vec;

    async fn calibrated(i2c: MockI2c, config: &TrackerConfig) -> CalibratedMpu6050<MockI2c> {
        let mut delay = MockDelay::default();
        let sensor = Mpu6050::new(i2c, Address::default(), SensorRange::default(), &mut delay)
            .await
            .unwrap();
        calibrate(sensor, &mut delay, config).await.unwrap()
    }

    #[tokio::test]
    async fn forward_pitch_surfaces_after_two_cycles() {
        let config = TrackerConfig::default()
            .with_calibration(5, 0)
            .with_smoothing_alpha(0.0)
            .with_complementary_beta(0.0);
        let mpu = calibrated(MockI2c::at_rest(), &config).await;

        // gravity with the hand pitched 30 degrees forward: ax = -sin(30), az = cos(30)
        let offsets = mpu.offsets();
        let mut i2c = mpu.release();
        i2c.set_value(Register::AccelX_H, -8192);
        i2c.set_value(Register::AccelZ_H, 14189);
        let mut mpu = Mpu6050::new(
            i2c,
            Address::default(),
            SensorRange::default(),
            &mut MockDelay::default(),
        )
        .await
        .unwrap()
        .into_calibrated(offsets);

        let mut reports = Vec::new();
        run(
            &mut mpu,
            &mut MockDelay::default(),
            &mut StepClock { now: 10, step: 100 },
            &config,
            |r| {
                reports.push(*r);
                if reports.len() == 2 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            },
        )
        .await
        .unwrap();

        assert_eq!(reports[0].direction, Direction::Forward);
        assert!(!reports[0].confirmed);
        assert_eq!(reports[0].stable, Direction::Stop);
        assert!(reports[1].confirmed);
        assert_eq!(reports[1].stable, Direction::Forward);
        assert!((reports[1].angles.y - 30.0).abs() < 0.1);
    }

    #[tokio::test]
    async fn transport_error_ends_the_loop() {
        let config = TrackerConfig::default().with_calibration(1, 0);
        let mut i2c = MockI2c::at_rest();
        i2c.fail_after(3 + 7 + 4);
        let mut mpu = calibrated(i2c, &config).await;

        let result = run(
            &mut mpu,
            &mut MockDelay::default(),
            &mut StepClock { now: 0, step: 100 },
            &config,
            |_| ControlFlow::Continue(()),
        )
        .await;

        assert!(matches!(result, Err(Error::WriteReadError(_))));
    }
}
