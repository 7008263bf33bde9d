//! Per-message codecs.
//!
//! Every wire message is a struct implementing [`Packet`], which carries the
//! message's identity as associated constants next to its decode and encode
//! functions. [`PacketBody`] wraps any of them for code that handles packets
//! generically, such as the [`crate::registry`].

mod dimmer;
mod infrared;
mod light;
mod power;
mod service;
mod tile;
mod waveform;
mod zone;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, PacketSize};
use crate::registry::{PacketDefinition, PacketKind};

pub use dimmer::SetDimRelative;
pub use infrared::{GetInfrared, SetInfrared, StateInfrared};
pub use light::{GetLight, SetColor, StateLight};
pub use power::{GetPower, GetPowerLegacy, SetPower, SetPowerLegacy, StatePower, StatePowerLegacy};
pub use service::{GetService, StateService};
pub use tile::{GetDeviceChain, SetUserPosition, StateDeviceChain, Tile};
pub use waveform::{SetWaveform, SetWaveformOptional};
pub use zone::{GetColorZone, SetColorZone, StateMultiZone, StateZone};

type Result<T> = std::result::Result<T, Error>;

/// A wire message body with a fixed identity.
pub trait Packet: Sized {
    /// Registry key of the packet.
    const KIND: PacketKind;
    /// Numeric type code carried by the protocol header.
    const TYPE: u16;
    /// Name used in error messages and lookups.
    const NAME: &'static str;
    /// Length requirement on the body.
    const SIZE: PacketSize;
    /// Whether the message belongs to the legacy device-level power set.
    const LEGACY: bool = false;
    /// Whether the message is sent tagged, i.e. to all devices.
    const TAGGED: bool = false;

    /// Decodes a body, failing if its length violates [`Packet::SIZE`].
    fn decode(buf: &[u8]) -> Result<Self>;

    /// Validates every field and encodes the body.
    fn encode(&self) -> Result<Bytes>;

    fn into_body(self) -> PacketBody;

    fn from_body(body: &PacketBody) -> Option<&Self>;
}

/// Any decoded packet body.
///
/// Serializes as `{"type": "<registry key>", "body": {...}}`; the packet
/// name is accepted as the tag when deserializing.
///
/// ```
/// use lifx_packets_rs::{Hsbk, Packet, PacketBody, PacketKind, StateZone};
///
/// let body = StateZone {
///     count: 5,
///     index: 2,
///     color: Hsbk::new(0, 65535, 32768, 3500),
/// }
/// .into_body();
/// assert_eq!(body.kind(), PacketKind::StateZone);
/// assert_eq!(body.definition().type_code, 503);
/// assert_eq!(body.encode().unwrap().len(), 10);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", content = "body", rename_all = "camelCase")]
pub enum PacketBody {
    GetService(GetService),
    StateService(StateService),
    GetPowerLegacy(GetPowerLegacy),
    SetPowerLegacy(SetPowerLegacy),
    StatePowerLegacy(StatePowerLegacy),
    GetLight(GetLight),
    SetColor(SetColor),
    SetWaveform(SetWaveform),
    SetDimRelative(SetDimRelative),
    StateLight(StateLight),
    GetPower(GetPower),
    SetPower(SetPower),
    StatePower(StatePower),
    SetWaveformOptional(SetWaveformOptional),
    GetInfrared(GetInfrared),
    StateInfrared(StateInfrared),
    SetInfrared(SetInfrared),
    SetColorZone(SetColorZone),
    GetColorZone(GetColorZone),
    #[serde(alias = "stateColorZone")]
    StateZone(StateZone),
    #[serde(alias = "stateColorMultiZone")]
    StateMultiZone(StateMultiZone),
    GetDeviceChain(GetDeviceChain),
    StateDeviceChain(StateDeviceChain),
    SetUserPosition(SetUserPosition),
}

impl PacketBody {
    pub fn kind(&self) -> PacketKind {
        match self {
            PacketBody::GetService(_) => GetService::KIND,
            PacketBody::StateService(_) => StateService::KIND,
            PacketBody::GetPowerLegacy(_) => GetPowerLegacy::KIND,
            PacketBody::SetPowerLegacy(_) => SetPowerLegacy::KIND,
            PacketBody::StatePowerLegacy(_) => StatePowerLegacy::KIND,
            PacketBody::GetLight(_) => GetLight::KIND,
            PacketBody::SetColor(_) => SetColor::KIND,
            PacketBody::SetWaveform(_) => SetWaveform::KIND,
            PacketBody::SetDimRelative(_) => SetDimRelative::KIND,
            PacketBody::StateLight(_) => StateLight::KIND,
            PacketBody::GetPower(_) => GetPower::KIND,
            PacketBody::SetPower(_) => SetPower::KIND,
            PacketBody::StatePower(_) => StatePower::KIND,
            PacketBody::SetWaveformOptional(_) => SetWaveformOptional::KIND,
            PacketBody::GetInfrared(_) => GetInfrared::KIND,
            PacketBody::StateInfrared(_) => StateInfrared::KIND,
            PacketBody::SetInfrared(_) => SetInfrared::KIND,
            PacketBody::SetColorZone(_) => SetColorZone::KIND,
            PacketBody::GetColorZone(_) => GetColorZone::KIND,
            PacketBody::StateZone(_) => StateZone::KIND,
            PacketBody::StateMultiZone(_) => StateMultiZone::KIND,
            PacketBody::GetDeviceChain(_) => GetDeviceChain::KIND,
            PacketBody::StateDeviceChain(_) => StateDeviceChain::KIND,
            PacketBody::SetUserPosition(_) => SetUserPosition::KIND,
        }
    }

    pub fn definition(&self) -> &'static PacketDefinition {
        self.kind().definition()
    }

    /// Encodes the body with its own packet's encoder.
    pub fn encode(&self) -> Result<Bytes> {
        self.definition().encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hsbk;

    #[test]
    fn test_body_json_shape() {
        let body = StatePower { level: 65535 }.into_body();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "statePower", "body": {"level": 65535}})
        );
        let back: PacketBody = serde_json::from_value(json).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn test_state_zone_body_tags() {
        let body = StateZone {
            count: 1,
            index: 0,
            color: Hsbk::new(0, 0, 0, 3500),
        }
        .into_body();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], PacketKind::StateZone.to_string());

        let mut renamed = json.clone();
        renamed["type"] = serde_json::json!(StateZone::NAME);
        let back: PacketBody = serde_json::from_value(renamed).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn test_body_fields_are_camel_case() {
        let body = GetColorZone {
            start_index: 0,
            end_index: 7,
        }
        .into_body();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "getColorZone", "body": {"startIndex": 0, "endIndex": 7}})
        );

        let json = serde_json::to_value(SetWaveform::default().into_body()).unwrap();
        assert_eq!(json["body"]["isTransient"], false);
        assert_eq!(json["body"]["skewRatio"], 0);
    }

    #[test]
    fn test_from_body() {
        let body = GetService.into_body();
        assert!(GetService::from_body(&body).is_some());
        assert!(GetLight::from_body(&body).is_none());
        assert!(body.definition().tagged);
    }
}
