//! Multi-zone color packets.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use log::debug;
use serde::{Deserialize, Serialize};

use super::{Packet, PacketBody};
use crate::errors::{Error, PacketSize, check_range};
use crate::registry::PacketKind;
use crate::types::{ApplyRequest, Hsbk, check_zone_index};

type Result<T> = std::result::Result<T, Error>;

/// Sets a contiguous range of zones to one color.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetColorZone {
    pub start_index: u8,
    pub end_index: u8,
    pub color: Hsbk,
    /// Transition time in milliseconds.
    pub duration: u32,
    /// Raw [`ApplyRequest`] selector.
    pub apply: u8,
}

impl SetColorZone {
    pub fn apply_request(&self) -> Option<ApplyRequest> {
        ApplyRequest::create(self.apply)
    }
}

impl Packet for SetColorZone {
    const KIND: PacketKind = PacketKind::SetColorZone;
    const TYPE: u16 = 501;
    const NAME: &'static str = "setColorZone";
    const SIZE: PacketSize = PacketSize::Fixed(15);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(SetColorZone {
            start_index: buf.get_u8(),
            end_index: buf.get_u8(),
            color: Hsbk::read(&mut buf),
            duration: buf.get_u32_le(),
            apply: buf.get_u8(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        check_zone_index(Self::NAME, "startIndex", self.start_index)?;
        check_zone_index(Self::NAME, "endIndex", self.end_index)?;
        let color = self.color.checked(Self::NAME, "color.")?;
        check_range(
            Self::NAME,
            "apply",
            self.apply,
            ApplyRequest::MIN,
            ApplyRequest::MAX,
        )?;

        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        buf.put_u8(self.start_index);
        buf.put_u8(self.end_index);
        color.write(&mut buf);
        buf.put_u32_le(self.duration);
        buf.put_u8(self.apply);
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::SetColorZone(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::SetColorZone(p) => Some(p),
            _ => None,
        }
    }
}

/// Requests the colors of a range of zones.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetColorZone {
    pub start_index: u8,
    pub end_index: u8,
}

impl Packet for GetColorZone {
    const KIND: PacketKind = PacketKind::GetColorZone;
    const TYPE: u16 = 502;
    const NAME: &'static str = "getColorZone";
    const SIZE: PacketSize = PacketSize::Fixed(2);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(GetColorZone {
            start_index: buf.get_u8(),
            end_index: buf.get_u8(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        check_zone_index(Self::NAME, "startIndex", self.start_index)?;
        check_zone_index(Self::NAME, "endIndex", self.end_index)?;
        Ok(Bytes::copy_from_slice(&[self.start_index, self.end_index]))
    }

    fn into_body(self) -> PacketBody {
        PacketBody::GetColorZone(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::GetColorZone(p) => Some(p),
            _ => None,
        }
    }
}

/// The color of a single zone, `index`, out of `count` zones on the device.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StateZone {
    pub count: u8,
    pub index: u8,
    pub color: Hsbk,
}

impl Packet for StateZone {
    const KIND: PacketKind = PacketKind::StateZone;
    const TYPE: u16 = 503;
    const NAME: &'static str = "stateColorZone";
    const SIZE: PacketSize = PacketSize::Fixed(10);

    /// # Examples
    ///
    /// ```
    /// use lifx_packets_rs::{Hsbk, Packet, StateZone};
    ///
    /// let buf = [0x05, 0x02, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x80, 0xAC, 0x0D];
    /// let state = StateZone::decode(&buf).unwrap();
    /// assert_eq!(state.count, 5);
    /// assert_eq!(state.index, 2);
    /// assert_eq!(state.color, Hsbk::new(0, 65535, 32768, 3500));
    ///
    /// assert!(StateZone::decode(&buf[..9]).is_err());
    /// ```
    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(StateZone {
            count: buf.get_u8(),
            index: buf.get_u8(),
            color: Hsbk::read(&mut buf),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        check_zone_index(Self::NAME, "count", self.count)?;
        check_zone_index(Self::NAME, "index", self.index)?;
        let color = self.color.checked(Self::NAME, "color.")?;

        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        buf.put_u8(self.count);
        buf.put_u8(self.index);
        color.write(&mut buf);
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::StateZone(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::StateZone(p) => Some(p),
            _ => None,
        }
    }
}

/// The colors of up to eight consecutive zones starting at `index`.
///
/// `count` is the total number of zones on the device, not the length of
/// `color`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StateMultiZone {
    pub count: u8,
    pub index: u8,
    pub color: Vec<Hsbk>,
}

impl StateMultiZone {
    pub const MIN_COLORS: usize = 1;
    pub const MAX_COLORS: usize = 8;
    const HEADER_SIZE: usize = 2;
}

impl Packet for StateMultiZone {
    const KIND: PacketKind = PacketKind::StateMultiZone;
    const TYPE: u16 = 506;
    const NAME: &'static str = "stateColorMultiZone";
    const SIZE: PacketSize = PacketSize::Minimum(10);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        let count = buf.get_u8();
        let index = buf.get_u8();
        let mut color = Vec::with_capacity(buf.remaining() / Hsbk::WIRE_SIZE);
        while buf.remaining() >= Hsbk::WIRE_SIZE {
            color.push(Hsbk::read(&mut buf));
        }
        if buf.has_remaining() {
            debug!(
                "ignoring {} trailing bytes in {} packet",
                buf.remaining(),
                Self::NAME
            );
        }
        Ok(StateMultiZone {
            count,
            index,
            color,
        })
    }

    /// The buffer holds exactly the colors given (`2 + 8 * n` bytes), which
    /// is the 10-byte minimum for a single color.
    fn encode(&self) -> Result<Bytes> {
        check_zone_index(Self::NAME, "count", self.count)?;
        check_zone_index(Self::NAME, "index", self.index)?;
        if !(Self::MIN_COLORS..=Self::MAX_COLORS).contains(&self.color.len()) {
            return Err(Error::color_count(
                Self::NAME,
                Self::MIN_COLORS,
                Self::MAX_COLORS,
                self.color.len(),
            ));
        }
        let colors = self
            .color
            .iter()
            .enumerate()
            .map(|(i, color)| color.checked(Self::NAME, &format!("color[{i}].")))
            .collect::<Result<Vec<_>>>()?;

        let len = Self::HEADER_SIZE + colors.len() * Hsbk::WIRE_SIZE;
        let mut buf = BytesMut::with_capacity(len);
        buf.put_u8(self.count);
        buf.put_u8(self.index);
        for color in &colors {
            color.write(&mut buf);
        }
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::StateMultiZone(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::StateMultiZone(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::types::HSBK_DEFAULT_KELVIN;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn hsbk() -> impl Strategy<Value = Hsbk> {
        (any::<u16>(), any::<u16>(), any::<u16>(), 1500u16..=9000)
            .prop_map(|(h, s, b, k)| Hsbk::new(h, s, b, k))
    }

    #[test]
    fn test_state_zone_wire_bytes() {
        let state = StateZone {
            count: 5,
            index: 2,
            color: Hsbk::new(0, 65535, 32768, 3500),
        };
        let buf = state.encode().unwrap();
        assert_eq!(
            buf.as_ref(),
            [0x05, 0x02, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x80, 0xAC, 0x0D]
        );
        assert_eq!(StateZone::decode(&buf).unwrap(), state);
    }

    #[test]
    fn test_state_zone_size() {
        for len in [0, 9, 11, 18] {
            let err = StateZone::decode(&vec![0u8; len]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Size);
        }
    }

    #[test]
    fn test_state_zone_defaults_kelvin() {
        let state = StateZone {
            count: 1,
            index: 0,
            color: Hsbk::new(10, 20, 30, 0),
        };
        let decoded = StateZone::decode(&state.encode().unwrap()).unwrap();
        assert_eq!(decoded.color.kelvin, HSBK_DEFAULT_KELVIN);
        assert_eq!(state.color.kelvin, 0);
    }

    #[test]
    fn test_state_zone_kelvin_range() {
        let state = StateZone {
            count: 1,
            index: 0,
            color: Hsbk::new(0, 0, 0, 9001),
        };
        let err = state.encode().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid color.kelvin value 9001 given for stateColorZone, must be a number between 1500 and 9000"
        );
    }

    #[test]
    fn test_multi_zone_color_count() {
        let mut state = StateMultiZone {
            count: 16,
            index: 8,
            color: vec![],
        };
        let err = state.encode().unwrap_err();
        assert_eq!(err, Error::color_count(StateMultiZone::NAME, 1, 8, 0));

        state.color = vec![Hsbk::new(1, 2, 3, 4000); 9];
        let err = state.encode().unwrap_err();
        assert_eq!(err, Error::color_count(StateMultiZone::NAME, 1, 8, 9));
        assert_eq!(err.kind(), ErrorKind::Range);

        state.color = vec![Hsbk::new(1, 2, 3, 4000)];
        assert_eq!(state.encode().unwrap().len(), 10);

        state.color = vec![Hsbk::new(1, 2, 3, 4000); 8];
        assert_eq!(state.encode().unwrap().len(), 66);
    }

    #[test]
    fn test_multi_zone_error_names_element() {
        let mut color = vec![Hsbk::new(0, 0, 0, 3500); 4];
        color[3].kelvin = 100;
        let state = StateMultiZone {
            count: 4,
            index: 0,
            color,
        };
        let err = state.encode().unwrap_err();
        assert!(err.to_string().contains("color[3].kelvin value 100"));
    }

    #[test]
    fn test_multi_zone_minimum_size() {
        assert_eq!(
            StateMultiZone::decode(&[0u8; 9]).unwrap_err().kind(),
            ErrorKind::Size
        );
        let state = StateMultiZone::decode(&[0u8; 10]).unwrap();
        assert_eq!(state.color.len(), 1);
        // Partial trailing blocks are dropped.
        let state = StateMultiZone::decode(&[0u8; 25]).unwrap();
        assert_eq!(state.color.len(), 2);
        let state = StateMultiZone::decode(&[0u8; 66]).unwrap();
        assert_eq!(state.color.len(), 8);
    }

    #[test]
    fn test_set_color_zone_apply_range() {
        let mut packet = SetColorZone {
            start_index: 0,
            end_index: 7,
            color: Hsbk::new(100, 200, 300, 2700),
            duration: 1000,
            apply: ApplyRequest::ApplyOnly.id(),
        };
        let buf = packet.encode().unwrap();
        assert_eq!(buf.len(), 15);
        assert_eq!(buf[14], 2);
        assert_eq!(SetColorZone::decode(&buf).unwrap(), packet);
        assert_eq!(packet.apply_request(), Some(ApplyRequest::ApplyOnly));

        packet.apply = 3;
        assert!(packet.encode().unwrap_err().to_string().contains("between 0 and 2"));
    }

    #[test]
    fn test_get_color_zone_layout() {
        let packet = GetColorZone {
            start_index: 3,
            end_index: 9,
        };
        assert_eq!(packet.encode().unwrap().as_ref(), [3, 9]);
        assert_eq!(GetColorZone::decode(&[3, 9]).unwrap(), packet);
    }

    proptest! {
        #[test]
        fn state_zone_round_trip(count in any::<u8>(), index in any::<u8>(), color in hsbk()) {
            let state = StateZone { count, index, color };
            prop_assert_eq!(StateZone::decode(&state.encode().unwrap()).unwrap(), state);
        }

        #[test]
        fn state_zone_exact_size_always_decodes(buf in vec(any::<u8>(), 10)) {
            prop_assert!(StateZone::decode(&buf).is_ok());
        }

        #[test]
        fn multi_zone_round_trip(
            count in any::<u8>(),
            index in any::<u8>(),
            color in vec(hsbk(), 1..=8),
        ) {
            let state = StateMultiZone { count, index, color };
            prop_assert_eq!(StateMultiZone::decode(&state.encode().unwrap()).unwrap(), state);
        }

        #[test]
        fn set_color_zone_round_trip(
            start_index in any::<u8>(),
            end_index in any::<u8>(),
            color in hsbk(),
            duration in any::<u32>(),
            apply in 0u8..=2,
        ) {
            let packet = SetColorZone { start_index, end_index, color, duration, apply };
            prop_assert_eq!(SetColorZone::decode(&packet.encode().unwrap()).unwrap(), packet);
        }
    }
}
