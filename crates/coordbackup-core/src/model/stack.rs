// ── Stack-specific extensions ──
//
// Vendor data that only one coordinator firmware family understands.
// Serialized externally tagged: `{"zstack": {...}}`.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Stack-vendor extension block of a backup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StackSpecific {
    /// Texas Instruments Z-Stack.
    #[serde(rename = "zstack")]
    ZStack(ZStack),
}

impl StackSpecific {
    pub fn as_zstack(&self) -> Option<&ZStack> {
        match self {
            Self::ZStack(z) => Some(z),
        }
    }

    /// Tag name used for this variant in the document.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ZStack(_) => "zstack",
        }
    }
}

/// Z-Stack extension data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ZStack {
    #[serde(deserialize_with = "null_as_default")]
    pub(crate) tclk_seed: String,
}

impl ZStack {
    pub fn new(tclk_seed: impl Into<String>) -> Self {
        Self {
            tclk_seed: tclk_seed.into(),
        }
    }

    /// Seed from which Z-Stack derives per-device trust-center link keys.
    pub fn tclk_seed(&self) -> &str {
        &self.tclk_seed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zstack_is_externally_tagged() {
        let ext = StackSpecific::ZStack(ZStack::new("c927e9ce1544c9aa42340e4d5dc4c257"));
        let json = serde_json::to_value(&ext).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"zstack": {"tclk_seed": "c927e9ce1544c9aa42340e4d5dc4c257"}})
        );
        assert_eq!(ext.tag(), "zstack");
    }

    #[test]
    fn missing_seed_decodes_empty() {
        let ext: StackSpecific = serde_json::from_str(r#"{"zstack": {}}"#).unwrap();
        assert_eq!(ext.as_zstack().unwrap().tclk_seed(), "");
    }

    #[test]
    fn unknown_vendor_is_rejected() {
        assert!(serde_json::from_str::<StackSpecific>(r#"{"ezsp": {}}"#).is_err());
    }
}
