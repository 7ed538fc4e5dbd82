/// Die temperature reading from the MPU-6050.
///
/// This is the chip's own temperature, a few degrees above ambient once the device
/// has been powered for a while. It is carried through the pipeline for diagnostics
/// only and plays no part in orientation.
///
/// # Example
/// ```
/// # use mpu6050_gesture::temperature::Temperature;
/// let temp = Temperature::new(3990);
/// assert!((temp.celsius() - 48.265).abs() < 1e-3);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Temperature {
    pub(crate) raw: i16,
}

impl Temperature {
    pub const fn new(raw: i16) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> i16 {
        self.raw
    }

    /// Datasheet conversion: `TEMP_OUT / 340 + 36.53`.
    pub fn celsius(&self) -> f32 {
        (self.raw as f32) / 340.0 + 36.53
    }
}
