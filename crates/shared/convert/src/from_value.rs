use crate::target::TargetType;
use crate::value::Value;
use chrono::{FixedOffset, NaiveDateTime};
use satchel_text::Charset;
use std::collections::HashSet;
use std::hash::Hash;
use std::path::PathBuf;

/// Extracts a typed Rust value from a [`Value`] that has already been converted to
/// [`FromValue::target`].
pub trait FromValue: Sized {
    fn target() -> TargetType;

    /// `None` when `value` is not of the target's variant.
    fn from_value(value: Value) -> Option<Self>;
}

/// Anything that can enter the registry as a [`Value`].
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl<T: Into<Value>> IntoValue for T {
    fn into_value(self) -> Value {
        self.into()
    }
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn target() -> TargetType {
                    TargetType::$variant
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_from_value! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
    NaiveDateTime => Date,
    FixedOffset => TimeZone,
    Charset => Charset,
    PathBuf => Path,
}

impl FromValue for Value {
    fn target() -> TargetType {
        TargetType::Any
    }

    fn from_value(value: Value) -> Option<Self> {
        Some(value)
    }
}

/// Every element must convert; a single `Null` hole rejects the whole list.
impl<T: FromValue> FromValue for Vec<T> {
    fn target() -> TargetType {
        TargetType::List(Box::new(T::target()))
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl<T: FromValue + Eq + Hash> FromValue for HashSet<T> {
    fn target() -> TargetType {
        TargetType::Set(Box::new(T::target()))
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_matching_variant_only() {
        assert_eq!(i32::from_value(Value::I32(7)), Some(7));
        assert_eq!(i32::from_value(Value::I64(7)), None);
        assert_eq!(String::from_value(Value::from("a")), Some("a".to_owned()));
    }

    #[test]
    fn test_collections_reject_holes() {
        let list = Value::List(vec![Value::I64(1), Value::I64(2)]);
        assert_eq!(Vec::<i64>::from_value(list), Some(vec![1, 2]));

        let holed = Value::List(vec![Value::I64(1), Value::Null]);
        assert_eq!(Vec::<i64>::from_value(holed), None);

        let set = HashSet::<i64>::from_value(Value::List(vec![Value::I64(1), Value::I64(1)]));
        assert_eq!(set.map(|s| s.len()), Some(1));
    }
}
