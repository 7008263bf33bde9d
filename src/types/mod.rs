//! Value types and field range constants shared by the packet codecs.

mod color;
mod hsbk;
mod infrared;
mod power;
mod waveform;
mod zone;

pub use color::{RGB_MAXIMUM_VALUE, RGB_MINIMUM_VALUE, Rgb};
pub use hsbk::{
    HSBK_DEFAULT_KELVIN, HSBK_MAXIMUM_BRIGHTNESS, HSBK_MAXIMUM_HUE, HSBK_MAXIMUM_KELVIN,
    HSBK_MAXIMUM_RAW, HSBK_MAXIMUM_SATURATION, HSBK_MINIMUM_BRIGHTNESS, HSBK_MINIMUM_HUE,
    HSBK_MINIMUM_KELVIN, HSBK_MINIMUM_RAW, HSBK_MINIMUM_SATURATION, Hsbk, NormalisedHsbk,
};
pub use infrared::{
    IR_MAXIMUM_BRIGHTNESS, IR_MAXIMUM_RAW, IR_MINIMUM_BRIGHTNESS, IR_MINIMUM_RAW,
    NormalisedInfrared,
};
pub use power::{POWER_MAXIMUM_RAW, POWER_MINIMUM_RAW, PowerLevel};
pub use waveform::{WAVEFORM_MAXIMUM_VALUE, WAVEFORM_MINIMUM_VALUE, Waveform};
pub use zone::{ApplyRequest, ZONE_INDEX_MAXIMUM_VALUE, ZONE_INDEX_MINIMUM_VALUE};

pub(crate) use power::check_power_level;
pub(crate) use zone::check_zone_index;
