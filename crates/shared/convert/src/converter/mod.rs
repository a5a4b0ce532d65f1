//! Built-in converters.
//!
//! A [`Converter`] turns an arbitrary [`Value`] into a value of its [`Converter::target`] type.
//! Only [`Converter::convert_internal`] has to be written; the provided
//! [`Converter::convert`] handles `Null`, pass-through and the fallback to a default.

mod date;
mod number;
mod other;
mod primitive;

pub use date::{DateConverter, TimeZoneConverter, parse_time_zone};
pub use number::NumberConverter;
pub use other::{BytesConverter, CharsetConverter, PathConverter};
pub use primitive::{BoolConverter, CharConverter, StringConverter};

use crate::error::ConvertError;
use crate::target::TargetType;
use crate::value::Value;
use std::fmt::Debug;
use tracing::debug;

pub trait Converter: Send + Sync + Debug {
    fn target(&self) -> TargetType;

    /// Performs the actual conversion. `Ok(None)` means "no result", e.g. for blank text.
    ///
    /// # Errors
    /// Any [`ConvertError`]; [`Converter::convert`] turns it into the default value.
    fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError>;

    /// Converts `value`, falling back to `default` when the input is `Null` or the conversion
    /// yields nothing or fails. Values already of the target type are returned unchanged.
    fn convert(&self, value: &Value, default: Option<Value>) -> Option<Value> {
        if value.is_null() {
            return default;
        }
        let target = self.target();
        if value.kind() == target {
            return Some(value.clone());
        }
        match self.convert_internal(value) {
            Ok(Some(converted)) => Some(converted),
            Ok(None) => default,
            Err(e) => {
                debug!(to = %target, input = %value, error = %e, "Conversion failed, using default");
                default
            },
        }
    }
}

/// Text form of `value` used as the input of string-based converters.
///
/// Strings are returned as is, chars become one-char strings, lists render as `[a, b]` and
/// anything else through its `Display`.
#[must_use]
pub fn convert_to_str(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        Value::Char(c) => c.to_string(),
        other => other.to_string(),
    }
}
