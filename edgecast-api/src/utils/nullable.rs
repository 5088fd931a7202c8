//! Null-tolerant collection deserialization
//!
//! The legacy DNS API sends `null` instead of `[]` for empty record lists,
//! route groups and group compositions. Paired with a container-level
//! `#[serde(default)]`, this treats a missing key and a `null` value alike.

use serde::{Deserialize, Deserializer};

/// Deserialize `T`, mapping JSON `null` to `T::default()`.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
