//! Infrared (night vision) channel packets.

use bytes::{Buf, Bytes};
use serde::{Deserialize, Serialize};

use super::{Packet, PacketBody};
use crate::errors::{Error, PacketSize, check_range};
use crate::registry::PacketKind;
use crate::types::{IR_MAXIMUM_RAW, IR_MINIMUM_RAW, NormalisedInfrared};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetInfrared;

impl Packet for GetInfrared {
    const KIND: PacketKind = PacketKind::GetInfrared;
    const TYPE: u16 = 120;
    const NAME: &'static str = "getInfrared";
    const SIZE: PacketSize = PacketSize::Fixed(0);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        Ok(GetInfrared)
    }

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::new())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::GetInfrared(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::GetInfrared(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StateInfrared {
    pub brightness: u16,
}

impl StateInfrared {
    pub fn normalised(&self) -> NormalisedInfrared {
        NormalisedInfrared::from_packet(self.brightness)
    }
}

impl Packet for StateInfrared {
    const KIND: PacketKind = PacketKind::StateInfrared;
    const TYPE: u16 = 121;
    const NAME: &'static str = "stateInfrared";
    const SIZE: PacketSize = PacketSize::Fixed(2);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(StateInfrared {
            brightness: buf.get_u16_le(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(&self.brightness.to_le_bytes()))
    }

    fn into_body(self) -> PacketBody {
        PacketBody::StateInfrared(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::StateInfrared(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetInfrared {
    pub brightness: u16,
}

impl From<&NormalisedInfrared> for SetInfrared {
    fn from(infrared: &NormalisedInfrared) -> Self {
        SetInfrared {
            brightness: infrared.to_packet(),
        }
    }
}

impl Packet for SetInfrared {
    const KIND: PacketKind = PacketKind::SetInfrared;
    const TYPE: u16 = 122;
    const NAME: &'static str = "setInfrared";
    const SIZE: PacketSize = PacketSize::Fixed(2);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(SetInfrared {
            brightness: buf.get_u16_le(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        check_range(
            Self::NAME,
            "brightness",
            self.brightness,
            IR_MINIMUM_RAW,
            IR_MAXIMUM_RAW,
        )?;
        Ok(Bytes::copy_from_slice(&self.brightness.to_le_bytes()))
    }

    fn into_body(self) -> PacketBody {
        PacketBody::SetInfrared(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::SetInfrared(p) => Some(p),
            _ => None,
        }
    }
}
