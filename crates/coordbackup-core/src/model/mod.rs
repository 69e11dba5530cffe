// ── Domain model ──
//
// Backup owns its devices by value. All identifier fields are canonical
// hex strings; setters are the only way to change them.

pub mod backup;
pub mod device;
pub mod keys;
pub mod security;
pub mod stack;

pub use backup::{Backup, FORMAT_VERSION, FORMAT_ZIGPY, Metadata};
pub use device::Device;
pub use keys::{LinkKey, NetworkKey};
pub use security::SecurityLevel;
pub use stack::{StackSpecific, ZStack};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
