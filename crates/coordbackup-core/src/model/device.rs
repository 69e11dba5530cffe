// ── Device domain types ──

use serde::{Deserialize, Serialize};

use super::keys::LinkKey;
use super::null_as_default;
use crate::error::CoreError;
use crate::hex::{self, EUI64_LEN, KEY_LEN, SHORT_ADDR_LEN};

/// A device joined to the backed-up network.
///
/// Built with [`Device::new`] or [`Device::create`] and then refined through
/// the chained setters. Every string setter normalizes its input, so the
/// stored addresses are always canonical lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Device {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) ieee_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) nwk_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) is_child: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) link_key: Option<LinkKey>,
}

impl Default for Device {
    fn default() -> Self {
        Self::new()
    }
}

impl Device {
    /// Empty device. New devices are children until told otherwise.
    pub fn new() -> Self {
        Self {
            ieee_address: String::new(),
            nwk_address: String::new(),
            is_child: true,
            link_key: None,
        }
    }

    /// Device with both addresses and the child flag set in one call.
    pub fn create(ieee_address: impl AsRef<str>, nwk_address: impl AsRef<str>, is_child: bool) -> Self {
        let mut device = Self::new();
        device
            .set_nwk_address(nwk_address)
            .set_ieee_address(ieee_address)
            .set_is_child(is_child);
        device
    }

    // ── IEEE address ─────────────────────────────────────────────────

    pub fn ieee_address(&self) -> &str {
        &self.ieee_address
    }

    pub fn set_ieee_address(&mut self, addr: impl AsRef<str>) -> &mut Self {
        self.ieee_address = hex::normalize(addr.as_ref(), EUI64_LEN * 2);
        self
    }

    pub fn set_ieee_address_bytes(&mut self, addr: &[u8]) -> Result<&mut Self, CoreError> {
        self.ieee_address = hex::encode_fixed("ieee_address", addr, EUI64_LEN)?;
        Ok(self)
    }

    pub fn set_ieee_address_int(&mut self, addr: u64) -> &mut Self {
        self.ieee_address = ::hex::encode(addr.to_be_bytes());
        self
    }

    pub fn ieee_address_bytes(&self) -> Result<Vec<u8>, CoreError> {
        hex::decode("ieee_address", &self.ieee_address)
    }

    // ── NWK address ──────────────────────────────────────────────────

    pub fn nwk_address(&self) -> &str {
        &self.nwk_address
    }

    pub fn set_nwk_address(&mut self, addr: impl AsRef<str>) -> &mut Self {
        self.nwk_address = hex::normalize(addr.as_ref(), SHORT_ADDR_LEN * 2);
        self
    }

    pub fn set_nwk_address_bytes(&mut self, addr: &[u8]) -> Result<&mut Self, CoreError> {
        self.nwk_address = hex::encode_fixed("nwk_address", addr, SHORT_ADDR_LEN)?;
        Ok(self)
    }

    pub fn set_nwk_address_int(&mut self, addr: u16) -> &mut Self {
        self.nwk_address = ::hex::encode(addr.to_be_bytes());
        self
    }

    pub fn nwk_address_bytes(&self) -> Result<Vec<u8>, CoreError> {
        hex::decode("nwk_address", &self.nwk_address)
    }

    // ── Role ─────────────────────────────────────────────────────────

    pub fn is_child(&self) -> bool {
        self.is_child
    }

    pub fn set_is_child(&mut self, yes: bool) -> &mut Self {
        self.is_child = yes;
        self
    }

    // ── Link key ─────────────────────────────────────────────────────

    pub fn link_key(&self) -> Option<&LinkKey> {
        self.link_key.as_ref()
    }

    pub fn set_link_key(&mut self, key: impl AsRef<str>, rx_counter: u32, tx_counter: u32) -> &mut Self {
        self.link_key = Some(LinkKey {
            key: hex::normalize(key.as_ref(), KEY_LEN * 2),
            rx_counter,
            tx_counter,
        });
        self
    }

    /// Decoded link key, or `None` when the device has no link key.
    pub fn link_key_bytes(&self) -> Result<Option<Vec<u8>>, CoreError> {
        self.link_key
            .as_ref()
            .map(|lk| hex::decode("link_key", &lk.key))
            .transpose()
    }
}
