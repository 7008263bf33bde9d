//! Power level for light control.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

pub const POWER_MINIMUM_RAW: u16 = 0;
pub const POWER_MAXIMUM_RAW: u16 = 65535;

/// Power state of a device. The wire only accepts the two extremes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PowerLevel {
    /// The light is off
    Standby,
    /// The light is on
    Enabled,
}

impl PowerLevel {
    pub fn level(self) -> u16 {
        match self {
            PowerLevel::Standby => POWER_MINIMUM_RAW,
            PowerLevel::Enabled => POWER_MAXIMUM_RAW,
        }
    }

    /// Devices report any non-zero level as powered.
    pub fn from_level(level: u16) -> Self {
        if level == POWER_MINIMUM_RAW {
            PowerLevel::Standby
        } else {
            PowerLevel::Enabled
        }
    }
}

impl From<bool> for PowerLevel {
    fn from(on: bool) -> Self {
        if on {
            PowerLevel::Enabled
        } else {
            PowerLevel::Standby
        }
    }
}

/// Rejects a level that is neither fully off nor fully on.
pub(crate) fn check_power_level(packet: &'static str, field: &str, level: u16) -> Result<(), Error> {
    if level == POWER_MINIMUM_RAW || level == POWER_MAXIMUM_RAW {
        Ok(())
    } else {
        Err(Error::color_range(
            packet,
            format!("{field} (only the bounds are accepted)"),
            level,
            POWER_MINIMUM_RAW,
            POWER_MAXIMUM_RAW,
        ))
    }
}
