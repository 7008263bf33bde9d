//! Lookup table from packet identity to codec.
//!
//! The table is a `static` array indexed by [`PacketKind`], so resolving a
//! kind is a single index and resolving a type code or name is a scan over
//! two dozen entries.
//!
//! Every packet has two names. The registry key is the [`PacketKind`]
//! string, e.g. `stateZone`. The packet name, [`PacketDefinition::name`],
//! is what error messages carry, e.g. `stateColorZone`. They differ only for
//! the zone state packets, and [`by_name`] accepts either.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use log::{debug, trace};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::errors::{Error, PacketSize};
use crate::packets::*;

type Result<T> = std::result::Result<T, Error>;

/// Registry key of every supported packet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum PacketKind {
    GetService,
    StateService,
    GetPowerLegacy,
    SetPowerLegacy,
    StatePowerLegacy,
    GetLight,
    SetColor,
    SetWaveform,
    SetDimRelative,
    StateLight,
    GetPower,
    SetPower,
    StatePower,
    SetWaveformOptional,
    GetInfrared,
    StateInfrared,
    SetInfrared,
    SetColorZone,
    GetColorZone,
    #[strum(to_string = "stateZone", serialize = "stateColorZone")]
    StateZone,
    #[strum(to_string = "stateMultiZone", serialize = "stateColorMultiZone")]
    StateMultiZone,
    GetDeviceChain,
    StateDeviceChain,
    SetUserPosition,
}

impl PacketKind {
    /// ```
    /// use lifx_packets_rs::PacketKind;
    ///
    /// let definition = PacketKind::SetWaveform.definition();
    /// assert_eq!(definition.type_code, 103);
    /// assert_eq!(definition.fixed_size(), Some(21));
    /// ```
    pub fn definition(self) -> &'static PacketDefinition {
        &DEFINITIONS[self as usize]
    }
}

/// Identity and codec functions of one packet.
#[derive(Clone, Copy)]
pub struct PacketDefinition {
    pub kind: PacketKind,
    pub type_code: u16,
    pub name: &'static str,
    pub legacy: bool,
    pub tagged: bool,
    pub size: PacketSize,
    decode: fn(&[u8]) -> Result<PacketBody>,
    encode: fn(&PacketBody) -> Result<Bytes>,
}

fn decode_as<P: Packet>(buf: &[u8]) -> Result<PacketBody> {
    P::decode(buf).map(P::into_body)
}

fn encode_as<P: Packet>(body: &PacketBody) -> Result<Bytes> {
    match P::from_body(body) {
        Some(packet) => packet.encode(),
        None => Err(Error::BodyMismatch {
            expected: P::NAME,
            actual: body.definition().name,
        }),
    }
}

impl PacketDefinition {
    pub const fn of<P: Packet>() -> Self {
        PacketDefinition {
            kind: P::KIND,
            type_code: P::TYPE,
            name: P::NAME,
            legacy: P::LEGACY,
            tagged: P::TAGGED,
            size: P::SIZE,
            decode: decode_as::<P>,
            encode: encode_as::<P>,
        }
    }

    /// The exact body length, or `None` for variable-length packets.
    pub fn fixed_size(&self) -> Option<usize> {
        self.size.fixed()
    }

    pub fn decode(&self, buf: &[u8]) -> Result<PacketBody> {
        trace!("decoding {} packet from {} bytes", self.name, buf.len());
        (self.decode)(buf)
    }

    /// Encodes `body`, which must belong to this packet.
    pub fn encode(&self, body: &PacketBody) -> Result<Bytes> {
        let buf = (self.encode)(body)?;
        trace!("encoded {} packet into {} bytes", self.name, buf.len());
        Ok(buf)
    }
}

impl fmt::Debug for PacketDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PacketDefinition")
            .field("kind", &self.kind)
            .field("type_code", &self.type_code)
            .field("name", &self.name)
            .field("legacy", &self.legacy)
            .field("tagged", &self.tagged)
            .field("size", &self.size)
            .finish()
    }
}

static DEFINITIONS: [PacketDefinition; 24] = [
    PacketDefinition::of::<GetService>(),
    PacketDefinition::of::<StateService>(),
    PacketDefinition::of::<GetPowerLegacy>(),
    PacketDefinition::of::<SetPowerLegacy>(),
    PacketDefinition::of::<StatePowerLegacy>(),
    PacketDefinition::of::<GetLight>(),
    PacketDefinition::of::<SetColor>(),
    PacketDefinition::of::<SetWaveform>(),
    PacketDefinition::of::<SetDimRelative>(),
    PacketDefinition::of::<StateLight>(),
    PacketDefinition::of::<GetPower>(),
    PacketDefinition::of::<SetPower>(),
    PacketDefinition::of::<StatePower>(),
    PacketDefinition::of::<SetWaveformOptional>(),
    PacketDefinition::of::<GetInfrared>(),
    PacketDefinition::of::<StateInfrared>(),
    PacketDefinition::of::<SetInfrared>(),
    PacketDefinition::of::<SetColorZone>(),
    PacketDefinition::of::<GetColorZone>(),
    PacketDefinition::of::<StateZone>(),
    PacketDefinition::of::<StateMultiZone>(),
    PacketDefinition::of::<GetDeviceChain>(),
    PacketDefinition::of::<StateDeviceChain>(),
    PacketDefinition::of::<SetUserPosition>(),
];

/// All registered packets, in [`PacketKind`] order.
pub fn definitions() -> &'static [PacketDefinition] {
    &DEFINITIONS
}

/// Finds the packet carrying `type_code`.
///
/// ```
/// use lifx_packets_rs::{PacketKind, registry};
///
/// assert_eq!(registry::by_type(506).unwrap().kind, PacketKind::StateMultiZone);
/// assert!(registry::by_type(9999).is_err());
/// ```
pub fn by_type(type_code: u16) -> Result<&'static PacketDefinition> {
    match DEFINITIONS.iter().find(|d| d.type_code == type_code) {
        Some(definition) => Ok(definition),
        None => {
            debug!("no packet registered for type {}", type_code);
            Err(Error::UnknownPacketType(type_code))
        }
    }
}

/// Finds a packet by its registry key or its packet name.
///
/// ```
/// use lifx_packets_rs::{PacketKind, registry};
///
/// assert_eq!(registry::by_name("stateZone").unwrap().kind, PacketKind::StateZone);
/// assert_eq!(registry::by_name("stateColorZone").unwrap().kind, PacketKind::StateZone);
/// ```
pub fn by_name(name: &str) -> Result<&'static PacketDefinition> {
    match PacketKind::from_str(name) {
        Ok(kind) => Ok(kind.definition()),
        Err(_) => {
            debug!("no packet registered under name {}", name);
            Err(Error::UnknownPacketName(name.to_string()))
        }
    }
}

/// Decodes a body received with `type_code` in its header.
pub fn decode(type_code: u16, buf: &[u8]) -> Result<PacketBody> {
    by_type(type_code)?.decode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::types::Hsbk;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    /// A definition with a body of a length it accepts and arbitrary content.
    fn sized_body() -> impl Strategy<Value = (&'static PacketDefinition, Vec<u8>)> {
        (0..DEFINITIONS.len()).prop_flat_map(|i| {
            let definition = &DEFINITIONS[i];
            let len = definition.size.bytes();
            let extra = if definition.fixed_size().is_some() { 0 } else { 64 };
            (Just(definition), vec(any::<u8>(), len..=len + extra))
        })
    }

    #[test]
    fn test_table_is_indexed_by_kind() {
        assert_eq!(PacketKind::iter().count(), DEFINITIONS.len());
        for kind in PacketKind::iter() {
            let definition = kind.definition();
            assert_eq!(definition.kind, kind);
            assert_eq!(by_type(definition.type_code).unwrap().kind, kind);
            assert_eq!(by_name(definition.name).unwrap().kind, kind);
            assert_eq!(by_name(&kind.to_string()).unwrap().kind, kind);
            assert_eq!(PacketKind::from_str(definition.name).unwrap(), kind);
        }
    }

    #[test]
    fn test_zone_state_names() {
        for (name, kind) in [
            ("stateZone", PacketKind::StateZone),
            ("stateColorZone", PacketKind::StateZone),
            ("stateMultiZone", PacketKind::StateMultiZone),
            ("stateColorMultiZone", PacketKind::StateMultiZone),
        ] {
            assert_eq!(by_name(name).unwrap().kind, kind, "{name}");
        }
        assert_eq!(PacketKind::StateZone.to_string(), "stateZone");
        assert_eq!(PacketKind::StateZone.definition().name, "stateColorZone");
        assert_eq!(PacketKind::StateMultiZone.definition().name, "stateColorMultiZone");
    }

    #[test]
    fn test_names_match_keys_elsewhere() {
        for kind in PacketKind::iter() {
            if !matches!(kind, PacketKind::StateZone | PacketKind::StateMultiZone) {
                assert_eq!(kind.to_string(), kind.definition().name);
            }
        }
    }

    #[test]
    fn test_type_codes_are_unique() {
        let codes: HashSet<u16> = DEFINITIONS.iter().map(|d| d.type_code).collect();
        assert_eq!(codes.len(), DEFINITIONS.len());
    }

    #[test]
    fn test_flags() {
        let legacy: Vec<_> = DEFINITIONS.iter().filter(|d| d.legacy).map(|d| d.type_code).collect();
        assert_eq!(legacy, [20, 21, 22]);
        let tagged: Vec<_> = DEFINITIONS.iter().filter(|d| d.tagged).map(|d| d.name).collect();
        assert_eq!(tagged, ["getService"]);
        assert_eq!(by_name("stateMultiZone").unwrap().fixed_size(), None);
    }

    #[test]
    fn test_exact_size_buffers_decode() {
        for definition in definitions() {
            let len = definition.size.bytes();
            assert!(definition.decode(&vec![0u8; len]).is_ok(), "{}", definition.name);
            if len > 0 {
                let err = definition.decode(&vec![0u8; len - 1]).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::Size);
            }
        }
    }

    #[test]
    fn test_dispatch_round_trip() {
        let body = StateZone {
            count: 5,
            index: 2,
            color: Hsbk::new(0, 65535, 32768, 3500),
        }
        .into_body();
        let buf = body.encode().unwrap();
        assert_eq!(decode(503, &buf).unwrap(), body);
    }

    #[test]
    fn test_body_mismatch() {
        let body = GetLight.into_body();
        let err = PacketKind::GetPower.definition().encode(&body).unwrap_err();
        assert_eq!(
            err,
            Error::BodyMismatch {
                expected: "getPower",
                actual: "getLight",
            }
        );
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_unknown_lookups() {
        assert_eq!(by_type(0).unwrap_err(), Error::UnknownPacketType(0));
        assert_eq!(
            by_name("setLightPower").unwrap_err(),
            Error::UnknownPacketName("setLightPower".to_string())
        );
    }

    proptest! {
        #[test]
        fn accepted_sizes_always_decode((definition, buf) in sized_body()) {
            let body = definition.decode(&buf);
            prop_assert!(body.is_ok(), "{}: {:?}", definition.name, body);
            prop_assert_eq!(body.unwrap().kind(), definition.kind);
        }
    }
}
