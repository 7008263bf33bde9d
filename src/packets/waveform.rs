//! Transient waveform effects.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use super::{Packet, PacketBody};
use crate::errors::{Error, PacketSize, check_range};
use crate::registry::PacketKind;
use crate::types::{Hsbk, WAVEFORM_MAXIMUM_VALUE, WAVEFORM_MINIMUM_VALUE, Waveform};

type Result<T> = std::result::Result<T, Error>;

/// Cycles a light towards `color` and back following a waveform shape.
///
/// `skew_ratio` spans the full `i16` range, mapped by devices onto `[0, 1]`.
/// `cycles` is an IEEE-754 single, so fractional cycle counts survive the
/// wire but callers should not expect exact decimal round-trips.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetWaveform {
    pub is_transient: bool,
    pub color: Hsbk,
    /// Duration of one cycle in milliseconds.
    pub period: u32,
    pub cycles: f32,
    pub skew_ratio: i16,
    /// Raw waveform selector, valid from 0 to 5.
    pub waveform: u8,
}

impl SetWaveform {
    pub fn shape(&self) -> Option<Waveform> {
        Waveform::create(self.waveform)
    }

    fn read(buf: &mut impl Buf) -> Self {
        buf.advance(1);
        SetWaveform {
            is_transient: buf.get_u8() != 0,
            color: Hsbk::read(buf),
            period: buf.get_u32_le(),
            cycles: buf.get_f32_le(),
            skew_ratio: buf.get_i16_le(),
            waveform: buf.get_u8(),
        }
    }

    /// Validates, then writes the 21 shared bytes.
    fn write(&self, packet: &'static str, buf: &mut impl BufMut) -> Result<()> {
        let color = self.color.checked(packet, "color.")?;
        check_range(
            packet,
            "waveform",
            self.waveform,
            WAVEFORM_MINIMUM_VALUE,
            WAVEFORM_MAXIMUM_VALUE,
        )?;

        buf.put_u8(0);
        buf.put_u8(u8::from(self.is_transient));
        color.write(buf);
        buf.put_u32_le(self.period);
        buf.put_f32_le(self.cycles);
        buf.put_i16_le(self.skew_ratio);
        buf.put_u8(self.waveform);
        Ok(())
    }
}

impl Packet for SetWaveform {
    const KIND: PacketKind = PacketKind::SetWaveform;
    const TYPE: u16 = 103;
    const NAME: &'static str = "setWaveform";
    const SIZE: PacketSize = PacketSize::Fixed(21);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(SetWaveform::read(&mut buf))
    }

    /// # Examples
    ///
    /// ```
    /// use lifx_packets_rs::{Packet, SetWaveform};
    ///
    /// let mut packet = SetWaveform { waveform: 5, ..Default::default() };
    /// assert_eq!(packet.encode().unwrap().len(), 21);
    ///
    /// packet.waveform = 6;
    /// assert!(packet.encode().is_err());
    /// ```
    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        self.write(Self::NAME, &mut buf)?;
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::SetWaveform(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::SetWaveform(p) => Some(p),
            _ => None,
        }
    }
}

/// [`SetWaveform`] with per-channel switches; channels whose flag is unset
/// keep the light's current value.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetWaveformOptional {
    #[serde(flatten)]
    pub waveform: SetWaveform,
    pub set_hue: bool,
    pub set_saturation: bool,
    pub set_brightness: bool,
    pub set_kelvin: bool,
}

impl Packet for SetWaveformOptional {
    const KIND: PacketKind = PacketKind::SetWaveformOptional;
    const TYPE: u16 = 119;
    const NAME: &'static str = "setWaveformOptional";
    const SIZE: PacketSize = PacketSize::Fixed(25);

    fn decode(buf: &[u8]) -> Result<Self> {
        Self::SIZE.check(Self::NAME, buf.len())?;
        let mut buf = buf;
        Ok(SetWaveformOptional {
            waveform: SetWaveform::read(&mut buf),
            set_hue: buf.get_u8() != 0,
            set_saturation: buf.get_u8() != 0,
            set_brightness: buf.get_u8() != 0,
            set_kelvin: buf.get_u8() != 0,
        })
    }

    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(Self::SIZE.bytes());
        self.waveform.write(Self::NAME, &mut buf)?;
        buf.put_u8(u8::from(self.set_hue));
        buf.put_u8(u8::from(self.set_saturation));
        buf.put_u8(u8::from(self.set_brightness));
        buf.put_u8(u8::from(self.set_kelvin));
        Ok(buf.freeze())
    }

    fn into_body(self) -> PacketBody {
        PacketBody::SetWaveformOptional(self)
    }

    fn from_body(body: &PacketBody) -> Option<&Self> {
        match body {
            PacketBody::SetWaveformOptional(p) => Some(p),
            _ => None,
        }
    }
}
