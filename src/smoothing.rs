//! Exponential low-pass filter across successive readings.

use crate::reading::ScaledReading;

/// `alpha * previous + (1 - alpha) * current`.
///
/// `alpha = 0` passes `current` through, `alpha = 1` holds `previous`.
pub fn smooth(current: f32, previous: f32, alpha: f32) -> f32 {
    alpha * previous + (1.0 - alpha) * current
}

/// Low-pass filter state: the last output reading.
///
/// The first reading passes through unchanged since there is nothing to blend with.
#[derive(Copy, Clone, Debug)]
pub struct LowPassFilter {
    alpha: f32,
    previous: Option<ScaledReading>,
}

impl LowPassFilter {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            previous: None,
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Last filtered reading, if any.
    pub fn previous(&self) -> Option<&ScaledReading> {
        self.previous.as_ref()
    }

    pub fn apply(&mut self, current: ScaledReading) -> ScaledReading {
        let alpha = self.alpha;
        let filtered = match &self.previous {
            Some(previous) => current.zip_with(previous, |c, p| smooth(c, p, alpha)),
            None => current,
        };
        self.previous = Some(filtered);
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3;
    use approx::assert_relative_eq;

    fn reading(v: f32) -> ScaledReading {
        ScaledReading {
            accel_counts: Vector3::new(v, v, v),
            gyro_counts: Vector3::new(v, v, v),
            accel: Vector3::new(v, v, v),
            gyro: Vector3::new(v, v, v),
            temperature: v,
        }
    }

    #[test]
    fn alpha_extremes() {
        for (current, previous) in [(1.5, -3.0), (0.0, 7.25), (-100.0, 100.0)] {
            assert_eq!(smooth(current, previous, 0.0), current);
            assert_eq!(smooth(current, previous, 1.0), previous);
        }
    }

    #[test]
    fn blends_toward_previous() {
        assert_relative_eq!(smooth(10.0, 0.0, 0.8), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn first_reading_passes_through() {
        let mut filter = LowPassFilter::new(0.8);
        assert!(filter.previous().is_none());
        assert_eq!(filter.apply(reading(4.0)), reading(4.0));
    }

    #[test]
    fn later_readings_blend_every_field() {
        let mut filter = LowPassFilter::new(0.5);
        filter.apply(reading(0.0));
        let out = filter.apply(reading(8.0));
        assert_eq!(out, reading(4.0));
        let out = filter.apply(reading(8.0));
        assert_eq!(out, reading(6.0));
        assert_eq!(filter.previous(), Some(&reading(6.0)));
    }
}
