//! Value encoding
//!
//! The single serialization boundary between typed values and the bytes a
//! backend stores. Every provider sees opaque bytes; every caller sees `T`.
//!
//! Values are stored as JSON. A value that serializes to JSON `null`
//! (`None`, `()`) counts as absent: [`encode`] returns `Ok(None)` and the
//! facade skips the write.

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encode a value for storage
///
/// Returns `None` when the value is absent.
pub fn encode<T>(value: &T) -> Result<Option<Vec<u8>>>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_value(value)?;
    if json.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_vec(&json)?))
}

/// Decode a stored value
pub fn decode<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_slice(bytes)?)
}
