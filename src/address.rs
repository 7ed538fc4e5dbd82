//! I2C address selection for the MPU-6050 on a hand-mounted board.
//!
//! The AD0 pin picks one of two 7-bit addresses, which lets a glove carry two
//! sensors on one bus (for instance back of hand and forearm).

/// 7-bit I2C address of the motion sensor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(pub u8);

impl Address {
    /// AD0 tied low (or floating, the pin has an internal pulldown).
    pub const PRIMARY: Self = Self(0x68);
    /// AD0 tied high.
    pub const SECONDARY: Self = Self(0x69);
}

impl Default for Address {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}
