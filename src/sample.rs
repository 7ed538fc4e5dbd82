//! Raw register decoding.

use crate::{accel::Accel, gyro::Gyro, temperature::Temperature};

/// Combines a big-endian register pair into a signed value.
///
/// `(hi << 8) | lo`, with values from 32768 upward wrapping to negative through
/// two's complement.
pub const fn decode_axis_pair(bytes: [u8; 2]) -> i16 {
    i16::from_be_bytes(bytes)
}

/// Inverse of [`decode_axis_pair`], as the sensor would put a value on the wire.
pub const fn encode_axis_pair(value: i16) -> [u8; 2] {
    value.to_be_bytes()
}

/// One uncalibrated read of all seven measurement registers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RawSample {
    pub accel: Accel,
    pub gyro: Gyro,
    pub temperature: Temperature,
}

impl RawSample {
    /// Builds a sample from values in [`Register::SAMPLE`](crate::registers::Register) order.
    pub(crate) fn from_values(v: [i16; 7]) -> Self {
        Self {
            accel: Accel::new(v[0], v[1], v[2]),
            gyro: Gyro::new(v[3], v[4], v[5]),
            temperature: Temperature::new(v[6]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sign_boundaries() {
        assert_eq!(decode_axis_pair([0xFF, 0xFF]), -1);
        assert_eq!(decode_axis_pair([0x7F, 0xFF]), 32767);
        assert_eq!(decode_axis_pair([0x80, 0x00]), -32768);
        assert_eq!(decode_axis_pair([0x00, 0x00]), 0);
        assert_eq!(decode_axis_pair([0x40, 0x00]), 16384);
    }

    #[test]
    fn decode_matches_wrapping_formula() {
        for hi in 0..=255u8 {
            for lo in [0x00u8, 0x01, 0x7F, 0x80, 0xFE, 0xFF] {
                let value = ((hi as i32) << 8) | lo as i32;
                let expected = if value > 32767 { value - 65536 } else { value };
                assert_eq!(decode_axis_pair([hi, lo]) as i32, expected);
            }
        }
    }

    #[test]
    fn every_value_survives_the_wire() {
        for value in i16::MIN..=i16::MAX {
            assert_eq!(decode_axis_pair(encode_axis_pair(value)), value);
        }
    }
}
