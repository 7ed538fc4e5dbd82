//! Sensor range and pipeline tuning.
//!
//! Everything that shapes the pipeline's behaviour and stays fixed for the life of a
//! run is gathered here:
//! - the configured full-scale ranges, which also fix the unit conversions
//! - sample counts and pacing for calibration and per-cycle aggregation
//! - filter coefficients
//! - classification thresholds and debounce length

use crate::{
    accel::AccelFullScale, calibration::ReferenceGravity, direction::Thresholds,
    gyro::GyroFullScale,
};

/// Full-scale ranges programmed into the sensor.
///
/// The accelerometer and gyroscope modifiers used for unit conversion, and the gravity
/// unit removed during calibration, all derive from this one value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorRange {
    pub accel: AccelFullScale,
    pub gyro: GyroFullScale,
}

impl SensorRange {
    pub const fn new(accel: AccelFullScale, gyro: GyroFullScale) -> Self {
        Self { accel, gyro }
    }
}

/// Calibration samples taken while the hand rests level.
pub const CALIBRATION_SAMPLES: usize = 100;
/// Pause between calibration samples
pub const CALIBRATION_DELAY_MS: u32 = 10;
/// Raw samples averaged into one scaled reading.
pub const SAMPLES_PER_READING: usize = 5;
/// Pause between samples of one reading
pub const SAMPLE_DELAY_MS: u32 = 10;
/// Low-pass weight given to the previous reading.
pub const SMOOTHING_ALPHA: f32 = 0.8;
/// Complementary filter weight given to the integrated gyro angle.
pub const COMPLEMENTARY_BETA: f32 = 0.95;
/// Consecutive identical labels needed before a direction is reported.
pub const DEBOUNCE_CYCLES: u8 = 2;
/// Idle time at the end of every cycle.
pub const CYCLE_PERIOD_MS: u32 = 100;

/// Complete tracker configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerConfig {
    pub range: SensorRange,
    /// Axis gravity acts on while calibrating
    pub gravity: ReferenceGravity,
    pub calibration_samples: usize,
    pub calibration_delay_ms: u32,
    pub samples_per_reading: usize,
    pub sample_delay_ms: u32,
    pub smoothing_alpha: f32,
    pub complementary_beta: f32,
    pub thresholds: Thresholds,
    pub debounce_cycles: u8,
    pub cycle_period_ms: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            range: SensorRange::default(),
            gravity: ReferenceGravity::default(),
            calibration_samples: CALIBRATION_SAMPLES,
            calibration_delay_ms: CALIBRATION_DELAY_MS,
            samples_per_reading: SAMPLES_PER_READING,
            sample_delay_ms: SAMPLE_DELAY_MS,
            smoothing_alpha: SMOOTHING_ALPHA,
            complementary_beta: COMPLEMENTARY_BETA,
            thresholds: Thresholds::default(),
            debounce_cycles: DEBOUNCE_CYCLES,
            cycle_period_ms: CYCLE_PERIOD_MS,
        }
    }
}

impl TrackerConfig {
    /// Change the sensor range
    /// (consumes and returns `Self` to be callable in a "builder-like" pattern)
    pub fn with_range(self, range: SensorRange) -> Self {
        Self { range, ..self }
    }

    pub fn with_gravity(self, gravity: ReferenceGravity) -> Self {
        Self { gravity, ..self }
    }

    /// Change calibration sample count and pacing
    pub fn with_calibration(self, samples: usize, delay_ms: u32) -> Self {
        Self {
            calibration_samples: samples,
            calibration_delay_ms: delay_ms,
            ..self
        }
    }

    /// Change how many raw samples are averaged per cycle, and their pacing
    pub fn with_sampling(self, samples: usize, delay_ms: u32) -> Self {
        Self {
            samples_per_reading: samples,
            sample_delay_ms: delay_ms,
            ..self
        }
    }

    pub fn with_smoothing_alpha(self, smoothing_alpha: f32) -> Self {
        Self {
            smoothing_alpha,
            ..self
        }
    }

    pub fn with_complementary_beta(self, complementary_beta: f32) -> Self {
        Self {
            complementary_beta,
            ..self
        }
    }

    pub fn with_thresholds(self, thresholds: Thresholds) -> Self {
        Self { thresholds, ..self }
    }

    pub fn with_debounce_cycles(self, debounce_cycles: u8) -> Self {
        Self {
            debounce_cycles,
            ..self
        }
    }

    pub fn with_cycle_period_ms(self, cycle_period_ms: u32) -> Self {
        Self {
            cycle_period_ms,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_tuned_values() {
        let config = TrackerConfig::default();
        assert_eq!(config.range.accel, AccelFullScale::G2);
        assert_eq!(config.range.gyro, GyroFullScale::Deg250);
        assert_eq!(config.gravity, ReferenceGravity::ZP);
        assert_eq!(config.calibration_samples, 100);
        assert_eq!(config.samples_per_reading, 5);
        assert_eq!(config.smoothing_alpha, 0.8);
        assert_eq!(config.complementary_beta, 0.95);
        assert_eq!(config.debounce_cycles, 2);
        assert_eq!(config.cycle_period_ms, 100);
    }

    #[test]
    fn builders_only_touch_their_field() {
        let config = TrackerConfig::default()
            .with_sampling(8, 2)
            .with_range(SensorRange::new(AccelFullScale::G4, GyroFullScale::Deg500));
        assert_eq!(config.samples_per_reading, 8);
        assert_eq!(config.sample_delay_ms, 2);
        assert_eq!(config.range.accel, AccelFullScale::G4);
        assert_eq!(config.calibration_samples, CALIBRATION_SAMPLES);
        assert_eq!(config.thresholds, Thresholds::default());
    }
}
