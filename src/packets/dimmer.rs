//! Dimmer packets.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use super::{Packet, PacketBody};
use crate::errors::{Error, PacketSize};
use crate::registry::PacketKind;
use crate::types::{HSBK_MAXIMUM_RAW, HSBK_MINIMUM_RAW};

type Result<T> = std::result::Result<T, Error>;

/// Steps brightness to one of its extremes over `fade_time` milliseconds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetDimRelative {
    pub brightness: u16,
    pub fade_time: u32,
}

impl Packet for SetDimRelative {
    const KIND: PacketKind = PacketKind::SetDimRelative;
    const TYPE: u16 = 105;
    const NAME: &'static str = "setDimRelative";
    const SIZE: PacketSize = PacketSize::Fixed(6);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(SetDimRelative {
            brightness: buf.get_u16_le(),
            fade_time: buf.get_u32_le(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        if self.brightness != HSBK_MINIMUM_RAW && self.brightness != HSBK_MAXIMUM_RAW {
            return Err(Error::color_range(
                Self::NAME,
                "brightness (only the bounds are accepted)",
                self.brightness,
                HSBK_MINIMUM_RAW,
                HSBK_MAXIMUM_RAW,
            ));
        }

        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        buf.put_u16_le(self.brightness);
        buf.put_u32_le(self.fade_time);
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::SetDimRelative(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::SetDimRelative(p) => Some(p),
            _ => None,
        }
    }
}
