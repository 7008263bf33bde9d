//! Infrared channel brightness.

use serde::{Deserialize, Serialize};

use super::hsbk::rescale;
use crate::errors::{Error, check_range};

pub const IR_MINIMUM_RAW: u16 = 0;
pub const IR_MAXIMUM_RAW: u16 = 65535;
pub const IR_MINIMUM_BRIGHTNESS: u8 = 0;
pub const IR_MAXIMUM_BRIGHTNESS: u8 = 100;

/// Infrared brightness as a percentage (0-100).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct NormalisedInfrared {
    brightness: u8,
}

impl NormalisedInfrared {
    /// Returns an error if brightness exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_packets_rs::NormalisedInfrared;
    ///
    /// assert_eq!(NormalisedInfrared::create(100).unwrap().to_packet(), 65535);
    /// assert!(NormalisedInfrared::create(101).is_err());
    /// ```
    pub fn create(brightness: u8) -> Result<Self, Error> {
        check_range(
            "normalised infrared",
            "brightness",
            brightness,
            IR_MINIMUM_BRIGHTNESS,
            IR_MAXIMUM_BRIGHTNESS,
        )?;
        Ok(Self { brightness })
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn to_packet(&self) -> u16 {
        rescale(
            self.brightness.into(),
            IR_MAXIMUM_BRIGHTNESS.into(),
            IR_MAXIMUM_RAW.into(),
        ) as u16
    }

    pub fn from_packet(brightness: u16) -> Self {
        Self {
            brightness: rescale(
                brightness.into(),
                IR_MAXIMUM_RAW.into(),
                IR_MAXIMUM_BRIGHTNESS.into(),
            ) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrared_round_trip() {
        for brightness in IR_MINIMUM_BRIGHTNESS..=IR_MAXIMUM_BRIGHTNESS {
            let ir = NormalisedInfrared::create(brightness).unwrap();
            assert_eq!(NormalisedInfrared::from_packet(ir.to_packet()), ir);
        }
    }

    #[test]
    fn test_infrared_half() {
        assert_eq!(NormalisedInfrared::from_packet(32768).brightness(), 50);
        assert_eq!(NormalisedInfrared::from_packet(IR_MINIMUM_RAW).brightness(), 0);
    }
}
