use satchel_convert::{Value, json};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

#[must_use]
pub fn clone<T: Clone>(obj: &T) -> T {
    obj.clone()
}

/// Deep copy through a JSON round trip, for values that serialize but do not implement `Clone`.
///
/// Returns `None` when either direction fails.
#[must_use]
pub fn clone_by_json<T: Serialize + DeserializeOwned>(obj: &T) -> Option<T> {
    json::to_json_str(obj)
        .and_then(|text| json::from_json_str(&text))
        .inspect_err(|e| debug!(error = %e, "JSON clone failed"))
        .ok()
}

#[must_use]
pub const fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// `Null`, or an empty string, byte array, list or map.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Str(s) => s.is_empty(),
        Value::Bytes(b) => b.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Map(map) => map.is_empty(),
        _ => false,
    }
}
