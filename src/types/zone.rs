//! Zone addressing for multi-zone (strip-like) devices.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::errors::{Error, check_range};

pub const ZONE_INDEX_MINIMUM_VALUE: u8 = 0;
pub const ZONE_INDEX_MAXIMUM_VALUE: u8 = 255;

/// Validates a zone index or zone count field.
pub(crate) fn check_zone_index(packet: &'static str, field: &str, value: u8) -> Result<(), Error> {
    check_range(
        packet,
        field,
        value,
        ZONE_INDEX_MINIMUM_VALUE,
        ZONE_INDEX_MAXIMUM_VALUE,
    )
}

/// Whether a set-color-zones request is applied immediately or buffered.
///
/// Multiple `NoApply` requests may be queued on the device and then flushed
/// together by a final `Apply`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, EnumIter, Display, PartialEq, Eq, Default)]
pub enum ApplyRequest {
    /// Buffer the change without applying it.
    NoApply = 0,
    /// Apply this change and all buffered changes.
    #[default]
    Apply = 1,
    /// Apply buffered changes only and ignore this request's color.
    ApplyOnly = 2,
}

impl ApplyRequest {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 2;

    /// # Examples
    ///
    /// ```
    /// use lifx_packets_rs::ApplyRequest;
    ///
    /// assert_eq!(ApplyRequest::create(2), Some(ApplyRequest::ApplyOnly));
    /// assert_eq!(ApplyRequest::create(3), None);
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        ApplyRequest::iter().find(|apply| apply.id() == value)
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_ids() {
        for apply in ApplyRequest::iter() {
            assert_eq!(ApplyRequest::create(apply.id()), Some(apply));
            assert!((ApplyRequest::MIN..=ApplyRequest::MAX).contains(&apply.id()));
        }
    }

    #[test]
    fn test_zone_bounds() {
        assert!(check_zone_index("stateZone", "index", ZONE_INDEX_MINIMUM_VALUE).is_ok());
        assert!(check_zone_index("stateZone", "index", ZONE_INDEX_MAXIMUM_VALUE).is_ok());
    }
}
