// ── Network security level ──

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoEnumIterator};

use crate::error::CoreError;

/// Zigbee NWK security level, stored in a backup as its numeric value (0-7).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, FromRepr,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum SecurityLevel {
    #[default]
    None = 0,
    Mic32 = 1,
    Mic64 = 2,
    Mic128 = 3,
    Enc = 4,
    EncMic32 = 5,
    EncMic64 = 6,
    EncMic128 = 7,
}

impl SecurityLevel {
    /// Canonical name as used by Zigbee stacks (`ENC_MIC32`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mic32 => "MIC32",
            Self::Mic64 => "MIC64",
            Self::Mic128 => "MIC128",
            Self::Enc => "ENC",
            Self::EncMic32 => "ENC_MIC32",
            Self::EncMic64 => "ENC_MIC64",
            Self::EncMic128 => "ENC_MIC128",
        }
    }

    /// True for the levels that encrypt the payload.
    pub fn is_encrypted(self) -> bool {
        u8::from(self) >= u8::from(Self::Enc)
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SecurityLevel> for u8 {
    fn from(level: SecurityLevel) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for SecurityLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| CoreError::UnknownSecurityLevel(value.to_string()))
    }
}

/// Accepts either the numeric value or the level name, case-insensitively.
impl FromStr for SecurityLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::try_from(n);
        }
        Self::iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownSecurityLevel(s.to_owned()))
    }
}
