//! Hue/Saturation/Brightness/Kelvin color in wire and normalized form.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, check_range};

type Result<T> = std::result::Result<T, Error>;

pub const HSBK_MINIMUM_RAW: u16 = 0;
pub const HSBK_MAXIMUM_RAW: u16 = 65535;
pub const HSBK_MINIMUM_KELVIN: u16 = 1500;
pub const HSBK_MAXIMUM_KELVIN: u16 = 9000;
pub const HSBK_DEFAULT_KELVIN: u16 = 3500;

pub const HSBK_MINIMUM_HUE: u16 = 0;
pub const HSBK_MAXIMUM_HUE: u16 = 360;
pub const HSBK_MINIMUM_SATURATION: u8 = 0;
pub const HSBK_MAXIMUM_SATURATION: u8 = 100;
pub const HSBK_MINIMUM_BRIGHTNESS: u8 = 0;
pub const HSBK_MAXIMUM_BRIGHTNESS: u8 = 100;

/// A color as carried on the wire: four little-endian `u16` fields.
///
/// Hue, saturation and brightness span the full `0..=65535` range. Kelvin is
/// in degrees and is valid from 1500K to 9000K; a kelvin of zero stands for
/// "unset" and is replaced with [`HSBK_DEFAULT_KELVIN`] when encoding.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsbk {
    pub hue: u16,
    pub saturation: u16,
    pub brightness: u16,
    pub kelvin: u16,
}

impl Hsbk {
    /// Size of a color block on the wire.
    pub const WIRE_SIZE: usize = 8;

    pub fn new(hue: u16, saturation: u16, brightness: u16, kelvin: u16) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            kelvin,
        }
    }

    /// Returns the color with an unset kelvin replaced by the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_packets_rs::{Hsbk, HSBK_DEFAULT_KELVIN};
    ///
    /// assert_eq!(Hsbk::new(0, 0, 0, 0).with_default_kelvin().kelvin, HSBK_DEFAULT_KELVIN);
    /// assert_eq!(Hsbk::new(0, 0, 0, 2700).with_default_kelvin().kelvin, 2700);
    /// ```
    pub fn with_default_kelvin(self) -> Self {
        if self.kelvin == 0 {
            Self {
                kelvin: HSBK_DEFAULT_KELVIN,
                ..self
            }
        } else {
            self
        }
    }

    /// Validates the color for encoding and returns the value to write.
    ///
    /// Channels are checked in wire order. Kelvin is defaulted before its
    /// range check, so zero is accepted and written as 3500. `prefix` is
    /// prepended to field names in errors, e.g. `"color[2]."`.
    pub(crate) fn checked(self, packet: &'static str, prefix: &str) -> Result<Self> {
        check_range(
            packet,
            format!("{prefix}hue"),
            self.hue,
            HSBK_MINIMUM_RAW,
            HSBK_MAXIMUM_RAW,
        )?;
        check_range(
            packet,
            format!("{prefix}saturation"),
            self.saturation,
            HSBK_MINIMUM_RAW,
            HSBK_MAXIMUM_RAW,
        )?;
        check_range(
            packet,
            format!("{prefix}brightness"),
            self.brightness,
            HSBK_MINIMUM_RAW,
            HSBK_MAXIMUM_RAW,
        )?;
        let color = self.with_default_kelvin();
        check_range(
            packet,
            format!("{prefix}kelvin"),
            color.kelvin,
            HSBK_MINIMUM_KELVIN,
            HSBK_MAXIMUM_KELVIN,
        )?;
        Ok(color)
    }

    /// Reads a color block. The caller guarantees 8 bytes remain.
    pub(crate) fn read(buf: &mut impl Buf) -> Self {
        Self {
            hue: buf.get_u16_le(),
            saturation: buf.get_u16_le(),
            brightness: buf.get_u16_le(),
            kelvin: buf.get_u16_le(),
        }
    }

    pub(crate) fn write(&self, buf: &mut impl BufMut) {
        buf.put_u16_le(self.hue);
        buf.put_u16_le(self.saturation);
        buf.put_u16_le(self.brightness);
        buf.put_u16_le(self.kelvin);
    }
}

impl From<&NormalisedHsbk> for Hsbk {
    fn from(color: &NormalisedHsbk) -> Self {
        Hsbk {
            hue: rescale(
                color.hue.into(),
                HSBK_MAXIMUM_HUE.into(),
                HSBK_MAXIMUM_RAW.into(),
            ) as u16,
            saturation: rescale(
                color.saturation.into(),
                HSBK_MAXIMUM_SATURATION.into(),
                HSBK_MAXIMUM_RAW.into(),
            ) as u16,
            brightness: rescale(
                color.brightness.into(),
                HSBK_MAXIMUM_BRIGHTNESS.into(),
                HSBK_MAXIMUM_RAW.into(),
            ) as u16,
            kelvin: color.kelvin,
        }
    }
}

/// A color in human-facing units: hue in degrees, saturation and brightness
/// in percent, kelvin in degrees.
///
/// Values are validated on construction, so converting to [`Hsbk`] never
/// produces an out-of-range wire value.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalisedHsbk {
    hue: u16,
    saturation: u8,
    brightness: u8,
    kelvin: u16,
}

impl NormalisedHsbk {
    /// Create a normalized color.
    ///
    /// # Arguments
    ///
    /// * `hue` - Hue angle in degrees (0-360)
    /// * `saturation` - Saturation percentage (0-100)
    /// * `brightness` - Brightness percentage (0-100)
    /// * `kelvin` - Color temperature (1500-9000)
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_packets_rs::NormalisedHsbk;
    ///
    /// assert!(NormalisedHsbk::create(360, 100, 100, 3500).is_ok());
    /// assert!(NormalisedHsbk::create(361, 100, 100, 3500).is_err());
    /// assert!(NormalisedHsbk::create(0, 101, 100, 3500).is_err());
    /// assert!(NormalisedHsbk::create(0, 0, 0, 1499).is_err());
    /// ```
    pub fn create(hue: u16, saturation: u8, brightness: u8, kelvin: u16) -> Result<Self> {
        const CONTEXT: &str = "normalised color";
        check_range(CONTEXT, "hue", hue, HSBK_MINIMUM_HUE, HSBK_MAXIMUM_HUE)?;
        check_range(
            CONTEXT,
            "saturation",
            saturation,
            HSBK_MINIMUM_SATURATION,
            HSBK_MAXIMUM_SATURATION,
        )?;
        check_range(
            CONTEXT,
            "brightness",
            brightness,
            HSBK_MINIMUM_BRIGHTNESS,
            HSBK_MAXIMUM_BRIGHTNESS,
        )?;
        check_range(
            CONTEXT,
            "kelvin",
            kelvin,
            HSBK_MINIMUM_KELVIN,
            HSBK_MAXIMUM_KELVIN,
        )?;
        Ok(Self {
            hue,
            saturation,
            brightness,
            kelvin,
        })
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn kelvin(&self) -> u16 {
        self.kelvin
    }

    /// Convert to the wire representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx_packets_rs::NormalisedHsbk;
    ///
    /// let color = NormalisedHsbk::create(180, 100, 50, 3500).unwrap().to_packet();
    /// assert_eq!(color.hue, 32768);
    /// assert_eq!(color.saturation, 65535);
    /// assert_eq!(color.brightness, 32768);
    /// assert_eq!(color.kelvin, 3500);
    /// ```
    pub fn to_packet(&self) -> Hsbk {
        Hsbk::from(self)
    }
}

impl From<&Hsbk> for NormalisedHsbk {
    /// Rescale a wire color into human-facing units.
    ///
    /// Kelvin is carried over unchanged, including an unset zero.
    fn from(color: &Hsbk) -> Self {
        NormalisedHsbk {
            hue: rescale(
                color.hue.into(),
                HSBK_MAXIMUM_RAW.into(),
                HSBK_MAXIMUM_HUE.into(),
            ) as u16,
            saturation: rescale(
                color.saturation.into(),
                HSBK_MAXIMUM_RAW.into(),
                HSBK_MAXIMUM_SATURATION.into(),
            ) as u8,
            brightness: rescale(
                color.brightness.into(),
                HSBK_MAXIMUM_RAW.into(),
                HSBK_MAXIMUM_BRIGHTNESS.into(),
            ) as u8,
            kelvin: color.kelvin,
        }
    }
}

/// Linear rescale of `value` from `0..=from_max` onto `0..=to_max`, rounded
/// to the nearest integer.
pub(crate) fn rescale(value: u32, from_max: u32, to_max: u32) -> u32 {
    (f64::from(value) / f64::from(from_max) * f64::from(to_max)).round() as u32
}
