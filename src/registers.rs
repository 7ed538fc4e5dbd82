//! MPU-6050 registers used by the gesture pipeline.
//!
//! Only the power, range and measurement registers are touched. Each measurement is a
//! big-endian high/low pair, so only the high-byte address is listed: the pipeline
//! always reads two bytes starting there.

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Gyroscope configuration (0x1B), full-scale select in bits 4:3
    GyroConfig = 0x1B,
    /// Accelerometer configuration (0x1C), full-scale select in bits 4:3
    AccelConfig = 0x1C,

    /// X-axis acceleration, high byte
    AccelX_H = 0x3B,
    /// Y-axis acceleration, high byte
    AccelY_H = 0x3D,
    /// Z-axis acceleration, high byte
    AccelZ_H = 0x3F,

    /// Die temperature, high byte
    TempOut_H = 0x41,

    /// X-axis angular rate, high byte
    GyroX_H = 0x43,
    /// Y-axis angular rate, high byte
    GyroY_H = 0x45,
    /// Z-axis angular rate, high byte
    GyroZ_H = 0x47,

    /// Power Management 1 (0x6B); writing zero clears SLEEP and selects the internal clock
    PwrMgmt1 = 0x6B,
}

impl Register {
    /// Bit position of the full-scale select field in the range registers.
    pub(crate) const FS_SEL_SHIFT: u8 = 3;

    /// Measurement registers read for one raw sample, in [`RawSample`](crate::sample::RawSample)
    /// field order.
    pub(crate) const SAMPLE: [Register; 7] = [
        Register::AccelX_H,
        Register::AccelY_H,
        Register::AccelZ_H,
        Register::GyroX_H,
        Register::GyroY_H,
        Register::GyroZ_H,
        Register::TempOut_H,
    ];
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg as u8
    }
}
