//! Calibrated, averaged readings in physical units.

use crate::{
    calibration::CalibrationOffsets, config::SensorRange, sample::RawSample, vector::Vector3,
};

/// One averaged reading.
///
/// Carries offset-corrected counts next to the converted values for consumers that
/// still expect raw units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ScaledReading {
    /// Offset-corrected accelerometer counts
    pub accel_counts: Vector3,
    /// Offset-corrected gyroscope counts
    pub gyro_counts: Vector3,
    /// Acceleration in g
    pub accel: Vector3,
    /// Angular rate in degrees/second
    pub gyro: Vector3,
    /// Die temperature in °C
    pub temperature: f32,
}

impl ScaledReading {
    /// Combines two readings field by field.
    pub fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self {
            accel_counts: self.accel_counts.zip_with(other.accel_counts, &f),
            gyro_counts: self.gyro_counts.zip_with(other.gyro_counts, &f),
            accel: self.accel.zip_with(other.accel, &f),
            gyro: self.gyro.zip_with(other.gyro, &f),
            temperature: f(self.temperature, other.temperature),
        }
    }
}

/// Running sums for one [`ScaledReading`].
///
/// Only constructible with offsets in hand, so an uncalibrated reading cannot exist.
#[derive(Debug)]
pub struct ReadingAccumulator {
    range: SensorRange,
    offsets: CalibrationOffsets,
    sum: ScaledReading,
    count: usize,
}

impl ReadingAccumulator {
    pub fn new(range: SensorRange, offsets: CalibrationOffsets) -> Self {
        Self {
            range,
            offsets,
            sum: ScaledReading::default(),
            count: 0,
        }
    }

    pub fn add(&mut self, sample: &RawSample) {
        let accel_counts = sample.accel.counts() - self.offsets.accel();
        let gyro_counts = sample.gyro.counts() - self.offsets.gyro();

        self.sum.accel_counts = self.sum.accel_counts + accel_counts;
        self.sum.gyro_counts = self.sum.gyro_counts + gyro_counts;
        self.sum.accel = self.sum.accel + self.range.accel.to_g(accel_counts);
        self.sum.gyro = self.sum.gyro + self.range.gyro.to_deg_per_sec(gyro_counts);
        self.sum.temperature += sample.temperature.celsius();
        self.count += 1;
    }

    /// Average of everything added (consumes `self` because the computation is done)
    pub fn reading(self) -> ScaledReading {
        let n = self.count.max(1) as f32;
        let s = self.sum;
        ScaledReading {
            accel_counts: s.accel_counts / n,
            gyro_counts: s.gyro_counts / n,
            accel: s.accel / n,
            gyro: s.gyro / n,
            temperature: s.temperature / n,
        }
    }
}
