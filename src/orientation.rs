//! Complementary-filter orientation estimate.
//!
//! Two estimates are blended on every cycle:
//! - tilt from gravity: absolute and drift-free, but disturbed by linear acceleration
//! - integrated gyro rate: smooth over short spans, but accumulates bias
//!
//! Roll (`x`) and pitch (`y`) blend both. Gravity carries no information about rotation
//! around the vertical axis, so yaw (`z`) is gyro integration alone and drifts without
//! bound over long runs. That is an accepted limitation of a 6-axis sensor without a
//! magnetometer.

use crate::{reading::ScaledReading, vector::Vector3};

/// Orientation in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angles {
    /// Roll-like, around the X axis
    pub x: f32,
    /// Pitch-like, around the Y axis
    pub y: f32,
    /// Integrated yaw, around the Z axis
    pub z: f32,
}

impl Angles {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Roll and pitch implied by the gravity vector, in degrees.
///
/// `x = atan2(ay, az)`, `y = atan2(-ax, sqrt(ay² + az²))`.
pub fn tilt_angles(accel: Vector3) -> (f32, f32) {
    let x = libm::atan2f(accel.y, accel.z).to_degrees();
    let y = libm::atan2f(-accel.x, libm::sqrtf(accel.y * accel.y + accel.z * accel.z))
        .to_degrees();
    (x, y)
}

/// Stateless blend step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ComplementaryFilter {
    beta: f32,
}

impl ComplementaryFilter {
    /// `beta` is the weight of the integrated gyro angle.
    pub const fn new(beta: f32) -> Self {
        Self { beta }
    }

    pub fn beta(&self) -> f32 {
        self.beta
    }

    /// Next orientation from the previous one, a reading and the elapsed seconds.
    pub fn update(&self, previous: Angles, reading: &ScaledReading, dt: f32) -> Angles {
        let (tilt_x, tilt_y) = tilt_angles(reading.accel);
        let blend = |prev: f32, rate: f32, tilt: f32| {
            self.beta * (prev + rate * dt) + (1.0 - self.beta) * tilt
        };
        Angles {
            x: blend(previous.x, reading.gyro.x, tilt_x),
            y: blend(previous.y, reading.gyro.y, tilt_y),
            z: previous.z + reading.gyro.z * dt,
        }
    }
}

/// Orientation state carried across cycles. Starts at zero.
#[derive(Copy, Clone, Debug)]
pub struct OrientationEstimator {
    filter: ComplementaryFilter,
    angles: Angles,
}

impl OrientationEstimator {
    pub fn new(beta: f32) -> Self {
        Self {
            filter: ComplementaryFilter::new(beta),
            angles: Angles::default(),
        }
    }

    pub fn angles(&self) -> Angles {
        self.angles
    }

    /// `dt` is wall-clock seconds since the previous update; it need not be regular.
    pub fn update(&mut self, reading: &ScaledReading, dt: f32) -> Angles {
        self.angles = self.filter.update(self.angles, reading, dt);
        self.angles
    }
}
