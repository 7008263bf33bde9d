//! Whole-light color packets.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use super::{Packet, PacketBody};
use crate::errors::{Error, PacketSize};
use crate::registry::PacketKind;
use crate::types::{Hsbk, PowerLevel};

type Result<T> = std::result::Result<T, Error>;

/// Requests a [`StateLight`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct GetLight;

impl Packet for GetLight {
    const KIND: PacketKind = PacketKind::GetLight;
    const TYPE: u16 = 101;
    const NAME: &'static str = "getLight";
    const SIZE: PacketSize = PacketSize::Fixed(0);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        Ok(GetLight)
    }

    fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::new())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::GetLight(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::GetLight(p) => Some(p),
            _ => None,
        }
    }
}

/// Sets the whole light to one color over `duration` milliseconds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetColor {
    pub color: Hsbk,
    pub duration: u32,
}

impl Packet for SetColor {
    const KIND: PacketKind = PacketKind::SetColor;
    const TYPE: u16 = 102;
    const NAME: &'static str = "setColor";
    const SIZE: PacketSize = PacketSize::Fixed(13);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        buf.advance(1);
        Ok(SetColor {
            color: Hsbk::read(&mut buf),
            duration: buf.get_u32_le(),
        })
    }

    fn encode(&self) -> Result<Bytes> {
        let color = self.color.checked(Self::NAME, "color.")?;

        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        buf.put_u8(0);
        color.write(&mut buf);
        buf.put_u32_le(self.duration);
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::SetColor(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::SetColor(p) => Some(p),
            _ => None,
        }
    }
}

/// Color, power and label of a light.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StateLight {
    pub color: Hsbk,
    pub power: u16,
    pub label: String,
}

impl StateLight {
    pub const LABEL_SIZE: usize = 32;

    pub fn power_level(&self) -> PowerLevel {
        PowerLevel::from_level(self.power)
    }
}

impl Packet for StateLight {
    const KIND: PacketKind = PacketKind::StateLight;
    const TYPE: u16 = 107;
    const NAME: &'static str = "stateLight";
    const SIZE: PacketSize = PacketSize::Fixed(52);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        let color = Hsbk::read(&mut buf);
        buf.advance(2);
        let power = buf.get_u16_le();
        let label = &buf[..Self::LABEL_SIZE];
        let end = label.iter().position(|&b| b == 0).unwrap_or(Self::LABEL_SIZE);
        let label = String::from_utf8_lossy(&label[..end]).into_owned();
        Ok(StateLight {
            color,
            power,
            label,
        })
    }

    fn encode(&self) -> Result<Bytes> {
        let color = self.color.checked(Self::NAME, "color.")?;
        let label = self.label.as_bytes();
        if label.len() > Self::LABEL_SIZE {
            return Err(Error::color_range(
                Self::NAME,
                "label length",
                u32::try_from(label.len()).unwrap_or(u32::MAX),
                0u32,
                u32::try_from(Self::LABEL_SIZE).unwrap_or(u32::MAX),
            ));
        }
        // Decode stops at the first NUL.
        if let Some(i) = label.iter().position(|&b| b == 0) {
            return Err(Error::color_range(
                Self::NAME,
                format!("label[{i}]"),
                0u8,
                1u8,
                u8::MAX,
            ));
        }

        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        color.write(&mut buf);
        buf.put_u16_le(0);
        buf.put_u16_le(self.power);
        buf.put_slice(label);
        buf.put_bytes(0, Self::LABEL_SIZE - label.len());
        buf.put_u64_le(0);
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::StateLight(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::StateLight(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use proptest::prelude::*;

    fn hsbk() -> impl Strategy<Value = Hsbk> {
        (any::<u16>(), any::<u16>(), any::<u16>(), 1500u16..=9000)
            .prop_map(|(h, s, b, k)| Hsbk::new(h, s, b, k))
    }

    #[test]
    fn test_get_light_is_empty() {
        assert!(GetLight.encode().unwrap().is_empty());
        assert_eq!(GetLight::decode(&[]).unwrap(), GetLight);
        assert_eq!(GetLight::decode(&[0]).unwrap_err().kind(), ErrorKind::Size);
    }

    #[test]
    fn test_set_color_layout() {
        let packet = SetColor {
            color: Hsbk::new(1, 2, 3, 0),
            duration: 256,
        };
        let buf = packet.encode().unwrap();
        assert_eq!(
            buf.as_ref(),
            [0, 1, 0, 2, 0, 3, 0, 0xAC, 0x0D, 0x00, 0x01, 0x00, 0x00]
        );
        let decoded = SetColor::decode(&buf).unwrap();
        assert_eq!(decoded.color, Hsbk::new(1, 2, 3, 3500));
        assert_eq!(decoded.duration, 256);
    }

    #[test]
    fn test_state_light_label() {
        let state = StateLight {
            color: Hsbk::new(100, 200, 300, 4000),
            power: 65535,
            label: "Kitchen".to_string(),
        };
        let buf = state.encode().unwrap();
        assert_eq!(buf.len(), 52);
        assert_eq!(&buf[12..19], b"Kitchen");
        assert!(buf[19..].iter().all(|&b| b == 0));

        let decoded = StateLight::decode(&buf).unwrap();
        assert_eq!(decoded, state);
        assert_eq!(decoded.power_level(), PowerLevel::Enabled);
    }

    #[test]
    fn test_state_light_full_label() {
        let state = StateLight {
            color: Hsbk::new(0, 0, 0, 3500),
            power: 0,
            label: "x".repeat(32),
        };
        assert_eq!(StateLight::decode(&state.encode().unwrap()).unwrap(), state);

        let long = StateLight {
            label: "x".repeat(33),
            ..state
        };
        assert_eq!(long.encode().unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn test_state_light_rejects_nul_in_label() {
        let state = StateLight {
            color: Hsbk::new(0, 0, 0, 3500),
            power: 0,
            label: "a\0b".to_string(),
        };
        let err = state.encode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err, Error::color_range("stateLight", "label[1]", 0u8, 1u8, 255u8));
        assert!(err.to_string().contains("label"));
    }

    proptest! {
        #[test]
        fn set_color_round_trip(color in hsbk(), duration in any::<u32>()) {
            let packet = SetColor { color, duration };
            prop_assert_eq!(SetColor::decode(&packet.encode().unwrap()).unwrap(), packet);
        }

        #[test]
        fn state_light_round_trip(
            color in hsbk(),
            power in any::<u16>(),
            label in "[^\\x00]{0,8}",
        ) {
            let state = StateLight { color, power, label };
            prop_assert_eq!(StateLight::decode(&state.encode().unwrap()).unwrap(), state);
        }

        #[test]
        fn state_light_exact_size_always_decodes(buf in proptest::collection::vec(any::<u8>(), 52)) {
            prop_assert!(StateLight::decode(&buf).is_ok());
        }
    }
}
