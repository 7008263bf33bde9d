use std::fmt;

/// Size requirement of a packet body on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketSize {
    /// The body must be exactly this many bytes long.
    Fixed(usize),
    /// The body must be at least this many bytes long.
    Minimum(usize),
}

impl PacketSize {
    /// The number of bytes carried by the requirement.
    pub const fn bytes(self) -> usize {
        match self {
            PacketSize::Fixed(n) | PacketSize::Minimum(n) => n,
        }
    }

    /// The exact size, or `None` for variable-length packets.
    pub const fn fixed(self) -> Option<usize> {
        match self {
            PacketSize::Fixed(n) => Some(n),
            PacketSize::Minimum(_) => None,
        }
    }

    /// Whether a body of `len` bytes satisfies the requirement.
    pub const fn accepts(self, len: usize) -> bool {
        match self {
            PacketSize::Fixed(n) => len == n,
            PacketSize::Minimum(n) => len >= n,
        }
    }

    pub(crate) fn check(self, packet: &'static str, len: usize) -> Result<(), Error> {
        if self.accepts(len) {
            Ok(())
        } else {
            Err(Error::InvalidSize {
                packet,
                expected: self,
                actual: len,
            })
        }
    }
}

impl fmt::Display for PacketSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketSize::Fixed(n) => write!(f, "{n}"),
            PacketSize::Minimum(n) => write!(f, "minimum {n}"),
        }
    }
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A buffer length or array cardinality did not match the layout.
    Size,
    /// A field value fell outside its documented range.
    Range,
    /// A registry lookup or dispatch did not resolve to a packet.
    Lookup,
}

/// All error types that can occur while encoding or decoding packets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The buffer handed to a decoder has the wrong length.
    #[error("invalid length for {packet} packet, expected {expected} but received {actual}")]
    InvalidSize {
        packet: &'static str,
        expected: PacketSize,
        actual: usize,
    },

    /// A device chain was encoded with a tile list of the wrong length.
    #[error("invalid tile count for {packet} packet, expected {expected} but received {actual}")]
    InvalidTileCount {
        packet: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A field value is outside its valid range.
    #[error("invalid {field} value {value} given for {packet}, must be a number between {min} and {max}")]
    ColorRange {
        packet: &'static str,
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A multi-zone packet was encoded with too few or too many colors.
    #[error(
        "invalid set of color values given for {packet} packet, must be an array of {min} to {max} objects but received {actual}"
    )]
    InvalidColorCount {
        packet: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    /// No packet is registered under this type code.
    #[error("unknown packet type {0}")]
    UnknownPacketType(u16),

    /// No packet is registered under this name.
    #[error("unknown packet name {0}")]
    UnknownPacketName(String),

    /// A [`crate::PacketBody`] was handed to another packet's encoder.
    #[error("{expected} packet cannot encode a {actual} body")]
    BodyMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl Error {
    /// Create a new range error for `field` of `packet`.
    pub fn color_range(
        packet: &'static str,
        field: impl Into<String>,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Error::ColorRange {
            packet,
            field: field.into(),
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Create a new tile count error
    pub fn tile_count(packet: &'static str, expected: usize, actual: usize) -> Self {
        Error::InvalidTileCount {
            packet,
            expected,
            actual,
        }
    }

    /// Create a new color count error
    pub fn color_count(packet: &'static str, min: usize, max: usize, actual: usize) -> Self {
        Error::InvalidColorCount {
            packet,
            min,
            max,
            actual,
        }
    }

    /// Which of the error families this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidSize { .. } | Error::InvalidTileCount { .. } => ErrorKind::Size,
            Error::ColorRange { .. } | Error::InvalidColorCount { .. } => ErrorKind::Range,
            Error::UnknownPacketType(_)
            | Error::UnknownPacketName(_)
            | Error::BodyMismatch { .. } => ErrorKind::Lookup,
        }
    }
}

/// Checks `value` against an inclusive range, naming `field` on failure.
pub(crate) fn check_range<T>(
    packet: &'static str,
    field: impl Into<String>,
    value: T,
    min: T,
    max: T,
) -> Result<(), Error>
where
    T: PartialOrd + Into<i64> + Copy,
{
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::color_range(packet, field, value, min, max))
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_accepts() {
        assert!(PacketSize::Fixed(10).accepts(10));
        assert!(!PacketSize::Fixed(10).accepts(11));
        assert!(PacketSize::Minimum(10).accepts(18));
        assert!(!PacketSize::Minimum(10).accepts(9));
        assert_eq!(PacketSize::Minimum(10).fixed(), None);
        assert_eq!(PacketSize::Fixed(21).fixed(), Some(21));
    }

    #[test]
    fn test_size_message() {
        let err = PacketSize::Minimum(10).check("stateColorMultiZone", 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid length for stateColorMultiZone packet, expected minimum 10 but received 4"
        );
        assert_eq!(err.kind(), ErrorKind::Size);
    }

    #[test]
    fn test_check_range_bounds() {
        assert!(check_range("setWaveform", "waveform", 0u8, 0, 5).is_ok());
        assert!(check_range("setWaveform", "waveform", 5u8, 0, 5).is_ok());
        let err = check_range("setWaveform", "waveform", 6u8, 0, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            err.to_string(),
            "invalid waveform value 6 given for setWaveform, must be a number between 0 and 5"
        );
    }

    #[test]
    fn test_tile_count_is_size_kind() {
        assert_eq!(Error::tile_count("stateDeviceChain", 16, 15).kind(), ErrorKind::Size);
        assert_eq!(Error::color_count("stateColorMultiZone", 1, 8, 9).kind(), ErrorKind::Range);
        assert_eq!(Error::UnknownPacketType(9999).kind(), ErrorKind::Lookup);
    }
}
