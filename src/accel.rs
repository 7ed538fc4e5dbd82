use crate::vector::Vector3;

/// Raw accelerometer counts, one signed 16-bit value per axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Accel {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Accel {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    /// Widens to floating point counts (no scaling).
    pub fn counts(&self) -> Vector3 {
        Vector3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

/// Accelerometer full-scale range, encoded as the `AFS_SEL` field of `ACCEL_CONFIG`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccelFullScale {
    #[default]
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl AccelFullScale {
    /// Counts per g.
    pub const fn scale(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }

    /// One g expressed in counts at this range.
    pub const fn gravity_counts(self) -> i16 {
        match self {
            Self::G2 => 16384,
            Self::G4 => 8192,
            Self::G8 => 4096,
            Self::G16 => 2048,
        }
    }

    /// Converts offset-corrected counts to g.
    pub fn to_g(self, counts: Vector3) -> Vector3 {
        counts / self.scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_matches_gravity_counts() {
        for scale in [
            AccelFullScale::G2,
            AccelFullScale::G4,
            AccelFullScale::G8,
            AccelFullScale::G16,
        ] {
            assert_eq!(scale.scale(), scale.gravity_counts() as f32);
        }
    }

    #[test]
    fn one_g_at_default_range() {
        let g = AccelFullScale::default().to_g(Vector3::new(0.0, -8192.0, 16384.0));
        assert_eq!(g, Vector3::new(0.0, -0.5, 1.0));
    }
}
