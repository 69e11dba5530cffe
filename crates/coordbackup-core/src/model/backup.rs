// ── Backup document ──

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::device::Device;
use super::keys::NetworkKey;
use super::null_as_default;
use super::security::SecurityLevel;
use super::stack::{StackSpecific, ZStack};
use crate::error::CoreError;
use crate::hex::{self, EUI64_LEN, KEY_LEN, SHORT_ADDR_LEN};

/// Format tag carried in `metadata.format`.
pub const FORMAT_ZIGPY: &str = "zigpy/open-coordinator-backup";

/// Version stamped on newly constructed documents.
pub const FORMAT_VERSION: u32 = 1;

const DEVICE_CAPACITY: usize = 100;

/// Document header: format identity and the producing application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) format: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) version: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) internal: Map<String, Value>,
}

impl Metadata {
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Name of the application that produced the backup.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Free-form data owned by the producing application.
    pub fn internal(&self) -> &Map<String, Value> {
        &self.internal
    }

    /// True when the format tag is the open coordinator backup tag.
    pub fn is_open_coordinator_backup(&self) -> bool {
        self.format == FORMAT_ZIGPY
    }
}

/// Root record of an open coordinator backup.
///
/// Construct with [`Backup::new`] and fill in with the chained setters:
///
/// ```
/// use coordbackup_core::{Backup, Device, SecurityLevel};
///
/// let mut backup = Backup::new("my-app", Default::default());
/// backup
///     .set_pan_id("1A62")
///     .set_extended_pan_id("DD:DD:DD:DD:DD:DD:DD:DD")
///     .set_channel(15)
///     .add_channels([15, 20, 25])
///     .set_security_level(SecurityLevel::EncMic32)
///     .add_device(Device::create("00:11:22:33:44:55:66:77", "1234", true));
///
/// assert_eq!(backup.pan_id(), "1a62");
/// assert_eq!(backup.devices().len(), 1);
/// ```
///
/// `Backup::default()` is the zero-valued document a decoder produces from
/// `{}`; it carries no format tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Backup {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) stack_specific: Option<StackSpecific>,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) coordinator_ieee: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) pan_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) extended_pan_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) channel: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) channel_mask: Vec<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) security_level: SecurityLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) nwk_update_id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) network_key: NetworkKey,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub(crate) devices: Vec<Device>,
}

impl Backup {
    /// New document tagged with the current format and version.
    pub fn new(source: impl Into<String>, internal: Map<String, Value>) -> Self {
        Self {
            metadata: Metadata {
                format: FORMAT_ZIGPY.to_owned(),
                version: FORMAT_VERSION,
                source: source.into(),
                internal,
            },
            devices: Vec::with_capacity(DEVICE_CAPACITY),
            ..Self::default()
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    // ── Stack-specific data ──────────────────────────────────────────

    pub fn stack_specific(&self) -> Option<&StackSpecific> {
        self.stack_specific.as_ref()
    }

    pub fn set_stack_specific(&mut self, ext: StackSpecific) -> &mut Self {
        self.stack_specific = Some(ext);
        self
    }

    /// Store a Z-Stack trust-center link-key seed, normalized like a key.
    pub fn set_zstack_tclk_seed(&mut self, seed: impl AsRef<str>) -> &mut Self {
        let seed = hex::normalize(seed.as_ref(), KEY_LEN * 2);
        self.set_stack_specific(StackSpecific::ZStack(ZStack::new(seed)))
    }

    // ── Coordinator IEEE address ─────────────────────────────────────

    pub fn coordinator_ieee(&self) -> &str {
        &self.coordinator_ieee
    }

    pub fn set_coordinator_ieee(&mut self, addr: impl AsRef<str>) -> &mut Self {
        self.coordinator_ieee = hex::normalize(addr.as_ref(), EUI64_LEN * 2);
        self
    }

    pub fn set_coordinator_ieee_bytes(&mut self, addr: &[u8]) -> Result<&mut Self, CoreError> {
        self.coordinator_ieee = hex::encode_fixed("coordinator_ieee", addr, EUI64_LEN)?;
        Ok(self)
    }

    pub fn set_coordinator_ieee_int(&mut self, addr: u64) -> &mut Self {
        self.coordinator_ieee = ::hex::encode(addr.to_be_bytes());
        self
    }

    pub fn coordinator_ieee_bytes(&self) -> Result<Vec<u8>, CoreError> {
        hex::decode("coordinator_ieee", &self.coordinator_ieee)
    }

    // ── PAN ID ───────────────────────────────────────────────────────

    pub fn pan_id(&self) -> &str {
        &self.pan_id
    }

    pub fn set_pan_id(&mut self, pan_id: impl AsRef<str>) -> &mut Self {
        self.pan_id = hex::normalize(pan_id.as_ref(), SHORT_ADDR_LEN * 2);
        self
    }

    pub fn set_pan_id_bytes(&mut self, pan_id: &[u8]) -> Result<&mut Self, CoreError> {
        self.pan_id = hex::encode_fixed("pan_id", pan_id, SHORT_ADDR_LEN)?;
        Ok(self)
    }

    pub fn set_pan_id_int(&mut self, pan_id: u16) -> &mut Self {
        self.pan_id = ::hex::encode(pan_id.to_be_bytes());
        self
    }

    pub fn pan_id_bytes(&self) -> Result<Vec<u8>, CoreError> {
        hex::decode("pan_id", &self.pan_id)
    }

    // ── Extended PAN ID ──────────────────────────────────────────────

    pub fn extended_pan_id(&self) -> &str {
        &self.extended_pan_id
    }

    pub fn set_extended_pan_id(&mut self, ext_pan_id: impl AsRef<str>) -> &mut Self {
        self.extended_pan_id = hex::normalize(ext_pan_id.as_ref(), EUI64_LEN * 2);
        self
    }

    pub fn set_extended_pan_id_bytes(&mut self, ext_pan_id: &[u8]) -> Result<&mut Self, CoreError> {
        self.extended_pan_id = hex::encode_fixed("extended_pan_id", ext_pan_id, EUI64_LEN)?;
        Ok(self)
    }

    pub fn set_extended_pan_id_int(&mut self, ext_pan_id: u64) -> &mut Self {
        self.extended_pan_id = ::hex::encode(ext_pan_id.to_be_bytes());
        self
    }

    pub fn extended_pan_id_bytes(&self) -> Result<Vec<u8>, CoreError> {
        hex::decode("extended_pan_id", &self.extended_pan_id)
    }

    // ── Radio ────────────────────────────────────────────────────────

    pub fn channel(&self) -> u32 {
        self.channel
    }

    pub fn set_channel(&mut self, channel: u32) -> &mut Self {
        self.channel = channel;
        self
    }

    pub fn channel_mask(&self) -> &[u32] {
        &self.channel_mask
    }

    /// Append channels to the mask as given, duplicates included.
    pub fn add_channels(&mut self, channels: impl IntoIterator<Item = u32>) -> &mut Self {
        self.channel_mask.extend(channels);
        self
    }

    pub fn nwk_update_id(&self) -> u32 {
        self.nwk_update_id
    }

    pub fn set_nwk_update_id(&mut self, id: u32) -> &mut Self {
        self.nwk_update_id = id;
        self
    }

    // ── Security ─────────────────────────────────────────────────────

    pub fn security_level(&self) -> SecurityLevel {
        self.security_level
    }

    pub fn set_security_level(&mut self, level: SecurityLevel) -> &mut Self {
        self.security_level = level;
        self
    }

    pub fn network_key(&self) -> &NetworkKey {
        &self.network_key
    }

    pub fn set_network_key(
        &mut self,
        key: impl AsRef<str>,
        sequence_number: u8,
        frame_counter: u32,
    ) -> &mut Self {
        self.network_key = NetworkKey {
            key: hex::normalize(key.as_ref(), KEY_LEN * 2),
            sequence_number,
            frame_counter,
        };
        self
    }

    pub fn set_network_key_bytes(
        &mut self,
        key: &[u8],
        sequence_number: u8,
        frame_counter: u32,
    ) -> Result<&mut Self, CoreError> {
        self.network_key = NetworkKey {
            key: hex::encode_fixed("network_key", key, KEY_LEN)?,
            sequence_number,
            frame_counter,
        };
        Ok(self)
    }

    pub fn network_key_bytes(&self) -> Result<Vec<u8>, CoreError> {
        hex::decode("network_key", &self.network_key.key)
    }

    // ── Devices ──────────────────────────────────────────────────────

    /// Devices in the order they were added.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn add_device(&mut self, device: Device) -> &mut Self {
        self.devices.push(device);
        self
    }
}
