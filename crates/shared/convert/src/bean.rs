//! Struct <-> [`Value`] bridging through serde.

use crate::error::ConvertError;
use crate::value::Value;
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Field name to a list of values, the shape of form-encoded request bodies.
pub type MultiValueMap = IndexMap<String, Vec<Value>>;

/// # Errors
/// Returns [`ConvertError::Json`] when `bean` cannot be serialized.
pub fn to_value<T: Serialize + ?Sized>(bean: &T) -> Result<Value, ConvertError> {
    Ok(Value::from(serde_json::to_value(bean)?))
}

/// Serializes `bean` into an ordered field map. Fields keep their declaration order.
///
/// # Errors
/// Returns [`ConvertError::Unsupported`] when `bean` does not serialize to a map.
pub fn to_map<T: Serialize + ?Sized>(bean: &T) -> Result<IndexMap<String, Value>, ConvertError> {
    match to_value(bean)? {
        Value::Map(map) => Ok(map),
        other => Err(ConvertError::unsupported(format!("[{}] is not a bean", other.kind()))),
    }
}

/// [`to_map`] with every field wrapped in a one-element list.
///
/// # Errors
/// Same as [`to_map`].
pub fn to_multi_value_map<T: Serialize + ?Sized>(bean: &T) -> Result<MultiValueMap, ConvertError> {
    Ok(to_map(bean)?.into_iter().map(|(k, v)| (k, vec![v])).collect())
}

/// # Errors
/// Returns [`ConvertError::Json`] when `value` does not fit `T`.
pub fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T, ConvertError> {
    Ok(serde_json::from_value(value.to_json())?)
}
