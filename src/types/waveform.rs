//! Waveform shapes for transient color effects.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

pub const WAVEFORM_MINIMUM_VALUE: u8 = 0;
pub const WAVEFORM_MAXIMUM_VALUE: u8 = 5;

/// The shape a device follows when cycling towards a waveform's target color.
///
/// The wire selector accepts the range
/// [`WAVEFORM_MINIMUM_VALUE`]..=[`WAVEFORM_MAXIMUM_VALUE`]; selectors without
/// a named shape are carried as raw bytes by the waveform packets.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, EnumIter, Display, PartialEq, Eq)]
pub enum Waveform {
    Saw = 0,
    Sine = 1,
    HalfSine = 2,
    Triangle = 3,
    Pulse = 4,
}

impl Waveform {
    /// # Examples
    ///
    /// ```
    /// use lifx_packets_rs::Waveform;
    ///
    /// assert_eq!(Waveform::create(1), Some(Waveform::Sine));
    /// assert_eq!(Waveform::create(6), None);
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        Waveform::iter().find(|shape| shape.id() == value)
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }
}
