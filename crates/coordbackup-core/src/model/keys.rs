// ── Key material ──

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Network key with its sequence number and outgoing frame counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkKey {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) sequence_number: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) frame_counter: u32,
}

impl NetworkKey {
    /// Canonical 32-character hex key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn sequence_number(&self) -> u8 {
        self.sequence_number
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }
}

/// Per-device trust-center link key with its frame counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkKey {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) rx_counter: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) tx_counter: u32,
}

impl LinkKey {
    /// Canonical 32-character hex key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn rx_counter(&self) -> u32 {
        self.rx_counter
    }

    pub fn tx_counter(&self) -> u32 {
        self.tx_counter
    }
}
