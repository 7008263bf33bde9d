//! # lifx_packets_rs
//!
//! Bit-exact codecs for the message bodies of the LIFX LAN protocol.
//!
//! This crate maps the fixed-layout little-endian packet bodies exchanged with
//! LIFX lights to typed Rust values and back. It does no I/O: transport,
//! headers, and device bookkeeping are left to the caller, which hands the
//! crate a body buffer together with the type code from the header.
//!
//! ## Quick Start
//!
//! ```
//! use lifx_packets_rs::{NormalisedHsbk, Packet, PacketBody, SetColor, registry};
//!
//! // Encode a request
//! let color = NormalisedHsbk::create(240, 100, 50, 3500).unwrap();
//! let request = SetColor { color: color.to_packet(), duration: 1000 };
//! let buf = request.encode().unwrap();
//! assert_eq!(buf.len(), 13);
//!
//! // Decode whatever comes back by type code
//! let body = registry::decode(102, &buf).unwrap();
//! assert_eq!(body, PacketBody::SetColor(request));
//! ```
//!
//! ## Features
//!
//! - **Packets**: one struct per message implementing [`Packet`]
//! - **Registry**: look up any [`PacketDefinition`] by [`PacketKind`], type
//!   code or name through [`registry`]
//! - **Colors**: wire [`Hsbk`] values and their [`NormalisedHsbk`] form
//! - **Zones**: multi-zone packets such as [`StateMultiZone`] and [`SetColorZone`]
//! - **Tiles**: device chains with [`StateDeviceChain`] and [`Tile`]
//! - **Products**: capability lookup with [`Product`]
//!
//! ## Validation
//!
//! Decoding only checks the body length. Encoding checks every ranged field
//! before writing anything, and fills a zero kelvin with
//! [`HSBK_DEFAULT_KELVIN`] on the way out without touching the caller's value.
//!
//! ```
//! use lifx_packets_rs::{ErrorKind, Hsbk, Packet, StateZone};
//!
//! let state = StateZone { count: 1, index: 0, color: Hsbk::new(0, 0, 0, 9001) };
//! assert_eq!(state.encode().unwrap_err().kind(), ErrorKind::Range);
//! ```

mod config;
mod errors;
mod packets;
pub mod registry;
mod types;

// Re-export public API
pub use config::{Features, KelvinRange, Product, VENDOR_LIFX};
pub use errors::{Error, ErrorKind, PacketSize};
pub use packets::*;
pub use registry::{PacketDefinition, PacketKind};
pub use types::{
    ApplyRequest, HSBK_DEFAULT_KELVIN, HSBK_MAXIMUM_BRIGHTNESS, HSBK_MAXIMUM_HUE,
    HSBK_MAXIMUM_KELVIN, HSBK_MAXIMUM_RAW, HSBK_MAXIMUM_SATURATION, HSBK_MINIMUM_BRIGHTNESS,
    HSBK_MINIMUM_HUE, HSBK_MINIMUM_KELVIN, HSBK_MINIMUM_RAW, HSBK_MINIMUM_SATURATION, Hsbk,
    IR_MAXIMUM_BRIGHTNESS, IR_MAXIMUM_RAW, IR_MINIMUM_BRIGHTNESS, IR_MINIMUM_RAW,
    NormalisedHsbk, NormalisedInfrared, POWER_MAXIMUM_RAW, POWER_MINIMUM_RAW, PowerLevel,
    RGB_MAXIMUM_VALUE, RGB_MINIMUM_VALUE, Rgb, WAVEFORM_MAXIMUM_VALUE, WAVEFORM_MINIMUM_VALUE,
    Waveform, ZONE_INDEX_MAXIMUM_VALUE, ZONE_INDEX_MINIMUM_VALUE,
};
