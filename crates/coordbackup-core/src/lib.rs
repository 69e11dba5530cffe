//! Data model and JSON codec for Zigbee open coordinator backups.
//!
//! A backup captures everything needed to restore a Zigbee network onto a
//! fresh coordinator: network identifiers, the network key, and the joined
//! devices with their link keys.
//!
//! - **[`Backup`]**: Root record. Built through chained setters that accept
//!   raw bytes, integers, or loosely formatted hex strings for every
//!   identifier, then written with [`Backup::write_file`] or
//!   [`Backup::encode`] and read back with [`Backup::read_file`].
//!
//! - **[`Device`]**: A joined device: IEEE and NWK addresses, child flag,
//!   optional link key.
//!
//! - **[`hex`]**: The normalization that turns `"0x00:0x12 4B"`-style input
//!   into canonical lowercase, zero-padded hex of a fixed width.

pub mod codec;
pub mod error;
pub mod hex;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;

pub use model::{
    Backup, Device, FORMAT_VERSION, FORMAT_ZIGPY, LinkKey, Metadata, NetworkKey, SecurityLevel,
    StackSpecific, ZStack,
};
