//! JSON text helpers. Serialization keeps `null` fields.

use crate::error::{ConvertError, ConvertErrorExt};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// # Errors
/// Returns [`ConvertError::Json`] when `value` cannot be serialized.
pub fn to_json_str<T: Serialize + ?Sized>(value: &T) -> Result<String, ConvertError> {
    Ok(serde_json::to_string(value)?)
}

/// # Errors
/// Returns [`ConvertError::Json`] for malformed JSON or a shape mismatch.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T, ConvertError> {
    serde_json::from_str(json).context("Failed to parse JSON text")
}

/// Parses a JSON array of `T`.
///
/// # Errors
/// Returns [`ConvertError::Json`] when `json` is not an array of `T`.
pub fn json_str_to_list<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, ConvertError> {
    from_json_str(json)
}

/// Converts each element of an already parsed JSON array.
///
/// # Errors
/// Returns [`ConvertError::Json`] on the first element that does not fit `T`.
pub fn json_arr_to_list<T: DeserializeOwned>(
    items: &[serde_json::Value],
) -> Result<Vec<T>, ConvertError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            T::deserialize(item).with_context(|| format!("Array element {i} has the wrong shape"))
        })
        .collect()
}
