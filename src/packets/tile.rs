//! Tile device chain packets.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use super::{Packet, PacketBody};
use crate::config::Product;
use crate::errors::{Error, PacketSize};
use crate::registry::PacketKind;

type Result<T> = std::result::Result<T, Error>;

/// One tile of a device chain.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub accel_meas_x: i16,
    pub accel_meas_y: i16,
    pub accel_meas_z: i16,
    pub user_x: f32,
    pub user_y: f32,
    pub width: u8,
    pub height: u8,
    pub device_version_vendor: u32,
    pub device_version_product: u32,
    pub device_version_version: u32,
    pub firmware_build: u64,
    pub firmware_version_minor: u16,
    pub firmware_version_major: u16,
}

impl Tile {
    /// Size of one tile record on the wire.
    pub const WIRE_SIZE: usize = 55;

    /// Catalogue entry for the tile's vendor and product ids, if known.
    pub fn product(&self) -> Option<&'static Product> {
        Product::lookup(self.device_version_vendor, self.device_version_product)
    }

    fn read(buf: &mut impl Buf) -> Self {
        let accel_meas_x = buf.get_i16_le();
        let accel_meas_y = buf.get_i16_le();
        let accel_meas_z = buf.get_i16_le();
        buf.advance(2);
        let user_x = buf.get_f32_le();
        let user_y = buf.get_f32_le();
        let width = buf.get_u8();
        let height = buf.get_u8();
        buf.advance(1);
        let device_version_vendor = buf.get_u32_le();
        let device_version_product = buf.get_u32_le();
        let device_version_version = buf.get_u32_le();
        let firmware_build = buf.get_u64_le();
        buf.advance(8);
        let firmware_version_minor = buf.get_u16_le();
        let firmware_version_major = buf.get_u16_le();
        buf.advance(4);

        Tile {
            accel_meas_x,
            accel_meas_y,
            accel_meas_z,
            user_x,
            user_y,
            width,
            height,
            device_version_vendor,
            device_version_product,
            device_version_version,
            firmware_build,
            firmware_version_minor,
            firmware_version_major,
        }
    }

    fn write(&self, buf: &mut impl BufMut) {
        buf.put_i16_le(self.accel_meas_x);
        buf.put_i16_le(self.accel_meas_y);
        buf.put_i16_le(self.accel_meas_z);
        buf.put_bytes(0, 2);
        buf.put_f32_le(self.user_x);
        buf.put_f32_le(self.user_y);
        buf.put_u8(self.width);
        buf.put_u8(self.height);
        buf.put_u8(0);
        buf.put_u32_le(self.device_version_vendor);
        buf.put_u32_le(self.device_version_product);
        buf.put_u32_le(self.device_version_version);
        buf.put_u64_le(self.firmware_build);
        buf.put_u64_le(0);
        buf.put_u16_le(self.firmware_version_minor);
        buf.put_u16_le(self.firmware_version_major);
        buf.put_u32_le(0);
    }
}

/// Requests a [`StateDeviceChain`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetDeviceChain;

impl Packet for GetDeviceChain {
    const KIND: PacketKind = PacketKind::GetDeviceChain;
    const TYPE: u16 = 701;
    const NAME: &'static str = "getDeviceChain";
    const SIZE: PacketSize = PacketSize::Fixed(0);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        Ok(GetDeviceChain)
    }

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::new())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::GetDeviceChain(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::GetDeviceChain(p) => Some(p),
            _ => None,
        }
    }
}

/// The full chain of tiles attached to a controller.
///
/// The wire record always carries [`StateDeviceChain::MAX_TILES`] slots;
/// `total_count` says how many of them are populated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StateDeviceChain {
    pub start_index: u8,
    pub tile_devices: Vec<Tile>,
    pub total_count: u8,
}

impl StateDeviceChain {
    pub const MAX_TILES: usize = 16;

    /// The populated tiles, as reported by `total_count`.
    pub fn tiles(&self) -> &[Tile] {
        let count = usize::from(self.total_count).min(self.tile_devices.len());
        &self.tile_devices[..count]
    }
}

impl Packet for StateDeviceChain {
    const KIND: PacketKind = PacketKind::StateDeviceChain;
    const TYPE: u16 = 702;
    const NAME: &'static str = "stateDeviceChain";
    const SIZE: PacketSize = PacketSize::Fixed(2 + Self::MAX_TILES * Tile::WIRE_SIZE);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        let start_index = buf.get_u8();
        let tile_devices = (0..Self::MAX_TILES).map(|_| Tile::read(&mut buf)).collect();
        let total_count = buf.get_u8();
        Ok(StateDeviceChain {
            start_index,
            tile_devices,
            total_count,
        })
    }

    fn encode(&self) -> Result<Bytes> {
        if self.tile_devices.len() != Self::MAX_TILES {
            return Err(Error::tile_count(
                Self::NAME,
                Self::MAX_TILES,
                self.tile_devices.len(),
            ));
        }

        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        buf.put_u8(self.start_index);
        for tile in &self.tile_devices {
            tile.write(&mut buf);
        }
        buf.put_u8(self.total_count);
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::StateDeviceChain(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::StateDeviceChain(p) => Some(p),
            _ => None,
        }
    }
}

/// Records where a tile sits in the user's arrangement.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetUserPosition {
    pub tile_index: u8,
    pub user_x: f32,
    pub user_y: f32,
}

impl Packet for SetUserPosition {
    const KIND: PacketKind = PacketKind::SetUserPosition;
    const TYPE: u16 = 703;
    const NAME: &'static str = "setUserPosition";
    const SIZE: PacketSize = PacketSize::Fixed(11);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        let tile_index = buf.get_u8();
        buf.advance(2);
        Ok(SetUserPosition {
            tile_index,
            user_x: buf.get_f32_le(),
            user_y: buf.get_f32_le(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        buf.put_u8(self.tile_index);
        buf.put_u16_le(0);
        buf.put_f32_le(self.user_x);
        buf.put_f32_le(self.user_y);
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::SetUserPosition(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::SetUserPosition(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn tile() -> impl Strategy<Value = Tile> {
        (
            (any::<i16>(), any::<i16>(), any::<i16>()),
            (-1000.0f32..1000.0, -1000.0f32..1000.0),
            (any::<u8>(), any::<u8>()),
            (any::<u32>(), any::<u32>(), any::<u32>()),
            any::<u64>(),
            (any::<u16>(), any::<u16>()),
        )
            .prop_map(|(accel, user, size, version, build, firmware)| Tile {
                accel_meas_x: accel.0,
                accel_meas_y: accel.1,
                accel_meas_z: accel.2,
                user_x: user.0,
                user_y: user.1,
                width: size.0,
                height: size.1,
                device_version_vendor: version.0,
                device_version_product: version.1,
                device_version_version: version.2,
                firmware_build: build,
                firmware_version_minor: firmware.0,
                firmware_version_major: firmware.1,
            })
    }

    fn chain(tile_devices: Vec<Tile>) -> StateDeviceChain {
        StateDeviceChain {
            start_index: 0,
            tile_devices,
            total_count: 5,
        }
    }

    #[test]
    fn test_device_chain_size() {
        assert_eq!(StateDeviceChain::SIZE, PacketSize::Fixed(882));
        let state = StateDeviceChain::decode(&[0u8; 882]).unwrap();
        assert_eq!(state.tile_devices.len(), 16);
        assert!(state.tiles().is_empty());
        assert_eq!(
            StateDeviceChain::decode(&[0u8; 881]).unwrap_err().kind(),
            ErrorKind::Size
        );
    }

    #[test]
    fn test_device_chain_tile_count() {
        for count in [0, 15, 17] {
            let err = chain(vec![Tile::default(); count]).encode().unwrap_err();
            assert_eq!(err, Error::tile_count("stateDeviceChain", 16, count));
            assert_eq!(err.kind(), ErrorKind::Size);
        }
        let buf = chain(vec![Tile::default(); 16]).encode().unwrap();
        assert_eq!(buf.len(), 882);
        assert_eq!(buf[881], 5);
    }

    #[test]
    fn test_device_chain_firmware_build_max() {
        let tile = Tile {
            firmware_build: u64::MAX,
            ..Tile::default()
        };
        let state = chain(vec![tile; 16]);
        let decoded = StateDeviceChain::decode(&state.encode().unwrap()).unwrap();
        assert!(decoded.tile_devices.iter().all(|t| t.firmware_build == u64::MAX));
    }

    #[test]
    fn test_tile_record_offsets() {
        let mut tiles = vec![Tile::default(); 16];
        tiles[0] = Tile {
            accel_meas_x: -1,
            width: 8,
            height: 8,
            device_version_vendor: 1,
            device_version_product: 55,
            firmware_version_major: 3,
            ..Tile::default()
        };
        let buf = chain(tiles).encode().unwrap();
        let record = &buf[1..1 + Tile::WIRE_SIZE];
        assert_eq!(record[..2], [0xFF, 0xFF]);
        assert_eq!(record[16..18], [8, 8]);
        assert_eq!(record[19], 1);
        assert_eq!(record[23], 55);
        assert_eq!(record[49..51], [3, 0]);

        let decoded = StateDeviceChain::decode(&buf).unwrap();
        let product = decoded.tile_devices[0].product().unwrap();
        assert_eq!(product.name, "Tile");
        assert!(product.features.chain);
    }

    #[test]
    fn test_set_user_position_layout() {
        let packet = SetUserPosition {
            tile_index: 2,
            user_x: 1.0,
            user_y: -0.5,
        };
        let buf = packet.encode().unwrap();
        assert_eq!(
            buf.as_ref(),
            [2, 0, 0, 0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0xBF]
        );
        assert_eq!(SetUserPosition::decode(&buf).unwrap(), packet);
    }

    proptest! {
        #[test]
        fn device_chain_round_trip(
            start_index in any::<u8>(),
            tile_devices in vec(tile(), 16),
            total_count in 0u8..=16,
        ) {
            let state = StateDeviceChain { start_index, tile_devices, total_count };
            prop_assert_eq!(StateDeviceChain::decode(&state.encode().unwrap()).unwrap(), state);
        }

        #[test]
        fn set_user_position_round_trip(
            tile_index in any::<u8>(),
            user_x in -1000.0f32..1000.0,
            user_y in -1000.0f32..1000.0,
        ) {
            let packet = SetUserPosition { tile_index, user_x, user_y };
            prop_assert_eq!(SetUserPosition::decode(&packet.encode().unwrap()).unwrap(), packet);
        }
    }
}
