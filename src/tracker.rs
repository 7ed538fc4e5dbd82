//! Per-cycle processing shared by the blocking and async control loops.
//!
//! [`HandTracker`] owns all state that survives from one cycle to the next (last
//! filtered reading, orientation, debounce counters). The loops in
//! [`tracker_blocking`](crate::tracker_blocking) and [`tracker_async`](crate::tracker_async)
//! only add bus access, timing and pacing around it.

use core::fmt::{Display, Formatter};

use crate::{
    config::TrackerConfig,
    direction::{classify, Debouncer, Direction, Thresholds},
    orientation::{Angles, OrientationEstimator},
    reading::ScaledReading,
    smoothing::LowPassFilter,
};

/// Monotonic millisecond counter used to time cycles.
pub trait Clock {
    /// Must never go backwards.
    fn now_ms(&mut self) -> u64;
}

/// Seconds between two clock readings. A clock that steps back yields zero.
pub fn elapsed_secs(previous_ms: u64, now_ms: u64) -> f32 {
    now_ms.saturating_sub(previous_ms) as f32 / 1000.0
}

/// Outcome of one cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Report {
    /// Label computed from this cycle's angles alone
    pub direction: Direction,
    /// Debounced label currently in effect
    pub stable: Direction,
    /// Whether this cycle confirmed `stable`, i.e. it is worth displaying
    pub confirmed: bool,
    pub angles: Angles,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Direction: {} {} | Angles: X={:.1}°, Y={:.1}°, Z={:.1}°",
            self.stable,
            self.stable.indicator(),
            self.angles.x,
            self.angles.y,
            self.angles.z
        )
    }
}

/// Smoothing, orientation and classification state for one hand.
#[derive(Copy, Clone, Debug)]
pub struct HandTracker {
    filter: LowPassFilter,
    orientation: OrientationEstimator,
    thresholds: Thresholds,
    debouncer: Debouncer,
}

impl HandTracker {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            filter: LowPassFilter::new(config.smoothing_alpha),
            orientation: OrientationEstimator::new(config.complementary_beta),
            thresholds: config.thresholds,
            debouncer: Debouncer::new(config.debounce_cycles),
        }
    }

    pub fn angles(&self) -> Angles {
        self.orientation.angles()
    }

    pub fn stable(&self) -> Direction {
        self.debouncer.stable()
    }

    /// Run one reading through the pipeline. `dt` is seconds since the previous step.
    pub fn step(&mut self, reading: &ScaledReading, dt: f32) -> Report {
        let filtered = self.filter.apply(*reading);
        let angles = self.orientation.update(&filtered, dt);
        let direction = classify(angles, &self.thresholds);
        let confirmed = self.debouncer.update(direction).is_some();
        debug!(
            "angles x={} y={} z={} dt={} -> {}",
            angles.x,
            angles.y,
            angles.z,
            dt,
            direction
        );

        Report {
            direction,
            stable: self.debouncer.stable(),
            confirmed,
            angles,
        }
    }
}
