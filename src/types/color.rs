//! RGB color channels.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

pub const RGB_MINIMUM_VALUE: u16 = 0;
pub const RGB_MAXIMUM_VALUE: u16 = 255;

/// An RGB color with red, green, and blue components (0-255 each).
///
/// Channels are accepted as `u16` so that values read from wider sources
/// are validated instead of truncated.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Rgb {
    /// # Examples
    ///
    /// ```
    /// use lifx_packets_rs::Rgb;
    ///
    /// assert!(Rgb::create(255, 128, 0).is_ok());
    /// assert!(Rgb::create(256, 0, 0).is_err());
    /// ```
    pub fn create(red: u16, green: u16, blue: u16) -> Result<Self, Error> {
        Ok(Self {
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
        })
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}

fn channel(field: &str, value: u16) -> Result<u8, Error> {
    u8::try_from(value).map_err(|_| {
        Error::color_range(
            "normalised rgb",
            field,
            value,
            RGB_MINIMUM_VALUE,
            RGB_MAXIMUM_VALUE,
        )
    })
}
