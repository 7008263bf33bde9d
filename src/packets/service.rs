//! Service discovery packets.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use super::{Packet, PacketBody};
use crate::errors::{Error, PacketSize};
use crate::registry::PacketKind;

type Result<T> = std::result::Result<T, Error>;

/// Broadcast probe answered by every device with a [`StateService`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetService;

impl Packet for GetService {
    const KIND: PacketKind = PacketKind::GetService;
    const TYPE: u16 = 2;
    const NAME: &'static str = "getService";
    const SIZE: PacketSize = PacketSize::Fixed(0);
    const TAGGED: bool = true;

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        Ok(GetService)
    }

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::new())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::GetService(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::GetService(p) => Some(p),
            _ => None,
        }
    }
}

/// A service a device exposes and the port it listens on.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StateService {
    /// 1 is UDP; other values are reserved.
    pub service: u8,
    pub port: u32,
}

impl StateService {
    pub const SERVICE_UDP: u8 = 1;
}

impl Packet for StateService {
    const KIND: PacketKind = PacketKind::StateService;
    const TYPE: u16 = 3;
    const NAME: &'static str = "stateService";
    const SIZE: PacketSize = PacketSize::Fixed(5);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(StateService {
            service: buf.get_u8(),
            port: buf.get_u32_le(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        buf.put_u8(self.service);
        buf.put_u32_le(self.port);
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::StateService(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::StateService(p) => Some(p),
            _ => None,
        }
    }
}
