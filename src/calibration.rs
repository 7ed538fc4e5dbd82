use crate::{
    accel::{Accel, AccelFullScale},
    config::{CALIBRATION_DELAY_MS, CALIBRATION_SAMPLES},
    gyro::Gyro,
    vector::Vector3,
};

/// Symbolic representation of a gravity vector aligned to one of the axes
/// (gravity must be subtracted from acceleration readings during calibration).
///
/// `ZP` is a level board with the chip facing up: accel Z reads +1 g at rest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceGravity {
    Zero,
    XN,
    XP,
    YN,
    YP,
    ZN,
    #[default]
    ZP,
}

impl ReferenceGravity {
    /// Acceleration vector representing gravity compensation in the given direction
    pub fn gravity_compensation(self, scale: AccelFullScale) -> Accel {
        let g = scale.gravity_counts();
        match self {
            Self::Zero => Accel::new(0, 0, 0),
            Self::XN => Accel::new(-g, 0, 0),
            Self::XP => Accel::new(g, 0, 0),
            Self::YN => Accel::new(0, -g, 0),
            Self::YP => Accel::new(0, g, 0),
            Self::ZN => Accel::new(0, 0, -g),
            Self::ZP => Accel::new(0, 0, g),
        }
    }
}

/// Per-axis bias of a stationary sensor, in raw counts.
///
/// Produced once by calibration and then handed to the aggregator, which owns it for
/// the rest of the run. There is no way to change it afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationOffsets {
    accel: Vector3,
    gyro: Vector3,
}

impl CalibrationOffsets {
    /// Offsets from a previous calibration run, e.g. hardcoded after printing them once.
    pub const fn new(accel: Vector3, gyro: Vector3) -> Self {
        Self { accel, gyro }
    }

    /// Accelerometer bias in counts, gravity already removed
    pub fn accel(&self) -> Vector3 {
        self.accel
    }

    /// Gyroscope bias in counts
    pub fn gyro(&self) -> Vector3 {
        self.gyro
    }
}

/// Calibration parameters.
/// (all the values that influence calibration and do not change during the run)
///
/// The size of the gravity unit is not part of this: it always comes from the range the
/// sensor was programmed with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct CalibrationParameters {
    /// Reference gravity (will be subtracted from acceleration readings)
    pub gravity: ReferenceGravity,
    /// Number of samples averaged
    pub samples: usize,
    /// Delay between samples
    pub delay_ms: u32,
}

impl CalibrationParameters {
    /// Create calibration parameters for a reference gravity
    /// (sensible defaults are used for sample count and pacing)
    pub fn new(gravity: ReferenceGravity) -> Self {
        Self {
            gravity,
            samples: CALIBRATION_SAMPLES,
            delay_ms: CALIBRATION_DELAY_MS,
        }
    }

    /// Change sample count and pacing
    /// (consumes and returns `Self` to be callable in a "builder-like" pattern)
    pub fn with_samples(self, samples: usize, delay_ms: u32) -> Self {
        Self {
            samples,
            delay_ms,
            ..self
        }
    }

    /// Sample count actually used; zero is treated as one.
    pub(crate) fn effective_samples(&self) -> usize {
        self.samples.max(1)
    }
}

impl Default for CalibrationParameters {
    fn default() -> Self {
        Self::new(ReferenceGravity::default())
    }
}

/// Holds running sums during offset computation
/// (includes the reference gravity compensation for simplicity)
#[derive(Debug)]
pub struct OffsetAccumulator {
    accel: [i64; 3],
    gyro: [i64; 3],
    count: usize,
    gravity_compensation: Accel,
}

impl OffsetAccumulator {
    /// Starts from zero sums and fixes the gravity compensation
    pub fn new(accel_scale: AccelFullScale, gravity: ReferenceGravity) -> Self {
        Self {
            accel: [0; 3],
            gyro: [0; 3],
            count: 0,
            gravity_compensation: gravity.gravity_compensation(accel_scale),
        }
    }

    /// Adds a new sample (subtracting the reference gravity)
    pub fn add(&mut self, accel: &Accel, gyro: &Gyro) {
        let g = &self.gravity_compensation;
        self.accel[0] += accel.x() as i64 - g.x() as i64;
        self.accel[1] += accel.y() as i64 - g.y() as i64;
        self.accel[2] += accel.z() as i64 - g.z() as i64;
        self.gyro[0] += gyro.x() as i64;
        self.gyro[1] += gyro.y() as i64;
        self.gyro[2] += gyro.z() as i64;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of everything added so far (consumes `self` because the computation is done)
    pub fn offsets(self) -> CalibrationOffsets {
        let n = self.count.max(1) as f64;
        let mean = |sums: [i64; 3]| {
            Vector3::new(
                (sums[0] as f64 / n) as f32,
                (sums[1] as f64 / n) as f32,
                (sums[2] as f64 / n) as f32,
            )
        };
        CalibrationOffsets {
            accel: mean(self.accel),
            gyro: mean(self.gyro),
        }
    }
}
