use crate::error::ConvertError;
use crate::from_value::{FromValue, IntoValue};
use crate::registry::ConverterRegistry;
use crate::target::TargetType;
use crate::value::Value;
use chrono::{FixedOffset, NaiveDateTime};
use satchel_text::Charset;
use std::collections::HashSet;
use std::hash::Hash;
use std::path::PathBuf;
use tracing::debug;

/// Quiet conversions through the global [`ConverterRegistry`].
///
/// Every `to_*` helper returns `None` instead of failing.
///
/// ```rust
/// use satchel_convert::Convert;
///
/// assert_eq!(Convert::to_i32("12.7"), Some(12));
/// assert_eq!(Convert::to_bool("yes"), Some(true));
/// assert_eq!(Convert::to_list::<i64>("1,2,3"), Some(vec![1, 2, 3]));
/// assert_eq!(Convert::to_i32("n/a").unwrap_or(-1), -1);
/// ```
#[derive(Debug)]
pub struct Convert;

macro_rules! quiet_conversions {
    ($($(#[$meta:meta])* $name:ident => $ty:ty),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $name(value: impl IntoValue) -> Option<$ty> {
                Self::convert_quietly(value, None)
            }
        )+
    };
}

impl Convert {
    /// Converts `value` to `T`.
    ///
    /// # Errors
    /// Returns [`ConvertError::NoConverter`] when no conversion path to `T` exists.
    pub fn convert<T: FromValue>(value: impl IntoValue) -> Result<Option<T>, ConvertError> {
        ConverterRegistry::global().convert_to(&value.into_value(), None)
    }

    /// Converts `value` to `T`, returning `default` on any failure.
    pub fn convert_quietly<T: FromValue>(value: impl IntoValue, default: Option<T>) -> Option<T> {
        let value = value.into_value();
        let registry = ConverterRegistry::global();
        match registry.convert(&T::target(), &value, None, registry.custom_first()) {
            Ok(converted) => T::from_value(converted).or(default),
            Err(e) => {
                debug!(to = %T::target(), error = %e, "Quiet conversion failed");
                default
            },
        }
    }

    quiet_conversions! {
        to_str => String,
        to_char => char,
        to_bool => bool,
        to_i8 => i8,
        to_i16 => i16,
        to_i32 => i32,
        to_i64 => i64,
        /// Widest integer; stands in for arbitrary-precision integers.
        to_i128 => i128,
        to_u8 => u8,
        to_u16 => u16,
        to_u32 => u32,
        to_u64 => u64,
        to_f32 => f32,
        to_f64 => f64,
        /// Epoch millis or any layout understood by [`satchel_date::parse`].
        to_date => NaiveDateTime,
        to_time_zone => FixedOffset,
        to_charset => Charset,
        to_path => PathBuf,
    }

    /// Any number: integral input stays integral, everything else becomes `f64`.
    #[must_use]
    pub fn to_number(value: impl IntoValue) -> Option<Value> {
        let value = value.into_value();
        let registry = ConverterRegistry::global();
        registry
            .convert(&TargetType::Number, &value, None, registry.custom_first())
            .ok()
            .filter(|v| !v.is_null())
    }

    #[must_use]
    pub fn to_bytes(value: impl IntoValue) -> Option<Vec<u8>> {
        let value = value.into_value();
        let registry = ConverterRegistry::global();
        match registry.convert(&TargetType::Bytes, &value, None, registry.custom_first()) {
            Ok(Value::Bytes(bytes)) => Some(bytes),
            _ => None,
        }
    }

    /// Text is split on `,`. `None` if any element fails to convert.
    #[must_use]
    pub fn to_list<T: FromValue>(value: impl IntoValue) -> Option<Vec<T>> {
        Self::convert_quietly(value, None)
    }

    #[must_use]
    pub fn to_set<T: FromValue + Eq + Hash>(value: impl IntoValue) -> Option<HashSet<T>> {
        Self::convert_quietly(value, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_helpers() {
        assert_eq!(Convert::to_str(12_i32), Some("12".to_owned()));
        assert_eq!(Convert::to_char("xyz"), Some('x'));
        assert_eq!(Convert::to_i64("0x10"), Some(16));
        assert_eq!(Convert::to_f64("2.5"), Some(2.5));
        assert_eq!(Convert::to_u8(300_i32), Some(44));
        assert_eq!(Convert::to_i32(Value::Null), None);
        assert_eq!(Convert::to_charset("utf8"), Some(Charset::Utf8));
    }

    #[test]
    fn test_number_and_bytes() {
        assert_eq!(Convert::to_number("3"), Some(Value::I64(3)));
        assert_eq!(Convert::to_number("3.5"), Some(Value::F64(3.5)));
        assert_eq!(Convert::to_number("three"), None);
        assert_eq!(Convert::to_bytes("ab"), Some(vec![b'a', b'b']));
    }

    #[test]
    fn test_collections() {
        assert_eq!(Convert::to_list::<String>("a, b"), Some(vec!["a".to_owned(), "b".to_owned()]));
        assert_eq!(Convert::to_list::<i32>("1,oops"), None);
        assert_eq!(Convert::to_set::<i32>("1,1,2").map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_unconvertible_input_falls_back() {
        let opaque = Convert::convert::<Vec<u8>>(Value::Object(crate::Object::new(1_u8)));
        assert_eq!(opaque.unwrap(), None);
        assert_eq!(Convert::convert_quietly::<i32>("nope", Some(9)), Some(9));
        assert_eq!(Convert::convert::<i32>(" 5 ").unwrap(), Some(5));
    }
}
