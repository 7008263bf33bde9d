//! Power packets, in both the light-level and the legacy device-level
//! flavour.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use super::{Packet, PacketBody};
use crate::errors::{Error, PacketSize};
use crate::registry::PacketKind;
use crate::types::{PowerLevel, check_power_level};

type Result<T> = std::result::Result<T, Error>;

/// Requests a [`StatePower`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetPower;

impl Packet for GetPower {
    const KIND: PacketKind = PacketKind::GetPower;
    const TYPE: u16 = 116;
    const NAME: &'static str = "getPower";
    const SIZE: PacketSize = PacketSize::Fixed(0);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        Ok(GetPower)
    }

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::new())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::GetPower(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::GetPower(p) => Some(p),
            _ => None,
        }
    }
}

/// Turns a light on or off over `duration` milliseconds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetPower {
    pub level: u16,
    pub duration: u32,
}

impl SetPower {
    pub fn new(power: PowerLevel, duration: u32) -> Self {
        Self {
            level: power.level(),
            duration,
        }
    }
}

impl Packet for SetPower {
    const KIND: PacketKind = PacketKind::SetPower;
    const TYPE: u16 = 117;
    const NAME: &'static str = "setPower";
    const SIZE: PacketSize = PacketSize::Fixed(6);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(SetPower {
            level: buf.get_u16_le(),
            duration: buf.get_u32_le(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        check_power_level(Self::NAME, "level", self.level)?;

        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        buf.put_u16_le(self.level);
        buf.put_u32_le(self.duration);
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::SetPower(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::SetPower(p) => Some(p),
            _ => None,
        }
    }
}

/// The power level reported by a light.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatePower {
    pub level: u16,
}

impl StatePower {
    pub fn power_level(&self) -> PowerLevel {
        PowerLevel::from_level(self.level)
    }
}

impl Packet for StatePower {
    const KIND: PacketKind = PacketKind::StatePower;
    const TYPE: u16 = 118;
    const NAME: &'static str = "statePower";
    const SIZE: PacketSize = PacketSize::Fixed(2);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(StatePower {
            level: buf.get_u16_le(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(&self.level.to_le_bytes()))
    }

    fn into_body(self) -> PacketBody {
        PacketBody::StatePower(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::StatePower(p) => Some(p),
            _ => None,
        }
    }
}

/// Device-level power request used by older firmware.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetPowerLegacy;

impl Packet for GetPowerLegacy {
    const KIND: PacketKind = PacketKind::GetPowerLegacy;
    const TYPE: u16 = 20;
    const NAME: &'static str = "getPowerLegacy";
    const SIZE: PacketSize = PacketSize::Fixed(0);
    const LEGACY: bool = true;

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        Ok(GetPowerLegacy)
    }

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::new())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::GetPowerLegacy(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::GetPowerLegacy(p) => Some(p),
            _ => None,
        }
    }
}

/// Device-level power change; carries no transition duration.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetPowerLegacy {
    pub level: u16,
}

impl Packet for SetPowerLegacy {
    const KIND: PacketKind = PacketKind::SetPowerLegacy;
    const TYPE: u16 = 21;
    const NAME: &'static str = "setPowerLegacy";
    const SIZE: PacketSize = PacketSize::Fixed(2);
    const LEGACY: bool = true;

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(SetPowerLegacy {
            level: buf.get_u16_le(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        check_power_level(Self::NAME, "level", self.level)?;
        Ok(Bytes::copy_from_slice(&self.level.to_le_bytes()))
    }

    fn into_body(self) -> PacketBody {
        PacketBody::SetPowerLegacy(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::SetPowerLegacy(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatePowerLegacy {
    pub level: u16,
}

impl Packet for StatePowerLegacy {
    const KIND: PacketKind = PacketKind::StatePowerLegacy;
    const TYPE: u16 = 22;
    const NAME: &'static str = "statePowerLegacy";
    const SIZE: PacketSize = PacketSize::Fixed(2);
    const LEGACY: bool = true;

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(StatePowerLegacy {
            level: buf.get_u16_le(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(&self.level.to_le_bytes()))
    }

    fn into_body(self) -> PacketBody {
        PacketBody::StatePowerLegacy(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::StatePowerLegacy(p) => Some(p),
            _ => None,
        }
    }
}
