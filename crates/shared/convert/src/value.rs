use crate::target::TargetType;
use chrono::{FixedOffset, NaiveDateTime};
use indexmap::IndexMap;
use satchel_text::Charset;
use serde::{Serialize, Serializer};
use std::any::{Any, TypeId};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Layout used when a date is rendered as text.
pub const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A dynamically typed value flowing through the conversion registry.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Bytes(Vec<u8>),
    Date(NaiveDateTime),
    TimeZone(FixedOffset),
    Charset(Charset),
    Path(PathBuf),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Object(Object),
}

/// An opaque, shareable user value tagged with its runtime type.
#[derive(Clone)]
pub struct Object {
    inner: Arc<dyn Any + Send + Sync>,
    id: TypeId,
    name: &'static str,
}

impl Object {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self { inner: Arc::new(value), id: TypeId::of::<T>(), name: std::any::type_name::<T>() }
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.id
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn target(&self) -> TargetType {
        TargetType::Object { id: self.id, name: self.name }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object").field("type", &self.name).finish_non_exhaustive()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value as V;
        match (self, other) {
            (V::Null, V::Null) => true,
            (V::Bool(a), V::Bool(b)) => a == b,
            (V::Char(a), V::Char(b)) => a == b,
            (V::I8(a), V::I8(b)) => a == b,
            (V::I16(a), V::I16(b)) => a == b,
            (V::I32(a), V::I32(b)) => a == b,
            (V::I64(a), V::I64(b)) => a == b,
            (V::I128(a), V::I128(b)) => a == b,
            (V::U8(a), V::U8(b)) => a == b,
            (V::U16(a), V::U16(b)) => a == b,
            (V::U32(a), V::U32(b)) => a == b,
            (V::U64(a), V::U64(b)) => a == b,
            (V::F32(a), V::F32(b)) => a.to_bits() == b.to_bits(),
            (V::F64(a), V::F64(b)) => a.to_bits() == b.to_bits(),
            (V::Str(a), V::Str(b)) => a == b,
            (V::Bytes(a), V::Bytes(b)) => a == b,
            (V::Date(a), V::Date(b)) => a == b,
            (V::TimeZone(a), V::TimeZone(b)) => a == b,
            (V::Charset(a), V::Charset(b)) => a == b,
            (V::Path(a), V::Path(b)) => a == b,
            (V::List(a), V::List(b)) => a == b,
            (V::Map(a), V::Map(b)) => a == b,
            (V::Object(a), V::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Runtime type of this value. Lists report `list<any>`.
    #[must_use]
    pub fn kind(&self) -> TargetType {
        match self {
            Self::Null => TargetType::Any,
            Self::Bool(_) => TargetType::Bool,
            Self::Char(_) => TargetType::Char,
            Self::I8(_) => TargetType::I8,
            Self::I16(_) => TargetType::I16,
            Self::I32(_) => TargetType::I32,
            Self::I64(_) => TargetType::I64,
            Self::I128(_) => TargetType::I128,
            Self::U8(_) => TargetType::U8,
            Self::U16(_) => TargetType::U16,
            Self::U32(_) => TargetType::U32,
            Self::U64(_) => TargetType::U64,
            Self::F32(_) => TargetType::F32,
            Self::F64(_) => TargetType::F64,
            Self::Str(_) => TargetType::Str,
            Self::Bytes(_) => TargetType::Bytes,
            Self::Date(_) => TargetType::Date,
            Self::TimeZone(_) => TargetType::TimeZone,
            Self::Charset(_) => TargetType::Charset,
            Self::Path(_) => TargetType::Path,
            Self::List(_) => TargetType::List(Box::new(TargetType::Any)),
            Self::Map(_) => TargetType::Map,
            Self::Object(o) => o.target(),
        }
    }

    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            Self::I8(_)
                | Self::I16(_)
                | Self::I32(_)
                | Self::I64(_)
                | Self::I128(_)
                | Self::U8(_)
                | Self::U16(_)
                | Self::U32(_)
                | Self::U64(_)
                | Self::F32(_)
                | Self::F64(_)
        )
    }

    /// Integral value of an integer variant.
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v.into()),
            Self::I128(v) => Some(v),
            Self::U8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::U64(v) => Some(v.into()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(v.into()),
            Self::F64(v) => Some(v),
            _ => self.as_i128().map(|v| v as f64),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// JSON view of the value. Dates become `yyyy-MM-dd HH:mm:ss` strings and objects their
    /// type name.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as J;
        match self {
            Self::Null => J::Null,
            Self::Bool(b) => J::Bool(*b),
            Self::F32(v) => serde_json::Number::from_f64(f64::from(*v)).map_or(J::Null, J::Number),
            Self::F64(v) => serde_json::Number::from_f64(*v).map_or(J::Null, J::Number),
            Self::U64(v) => J::from(*v),
            Self::I128(v) => i64::try_from(*v).map_or_else(|_| J::String(v.to_string()), J::from),
            Self::Bytes(bytes) => J::Array(bytes.iter().map(|&b| J::from(b)).collect()),
            Self::List(items) => J::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(map) => J::Object(map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()),
            other => match other.as_i128().and_then(|v| i64::try_from(v).ok()) {
                Some(v) => J::from(v),
                None => J::String(other.to_string()),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::I128(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::Bytes(bytes) => write_joined(f, bytes.iter(), ('[', ']')),
            Self::Date(d) => write!(f, "{}", d.format(DATE_DISPLAY_FORMAT)),
            Self::TimeZone(tz) => write!(f, "{tz}"),
            Self::Charset(cs) => f.write_str(cs.name()),
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::List(items) => write_joined(f, items.iter(), ('[', ']')),
            Self::Map(map) => {
                write_joined(f, map.iter().map(|(k, v)| MapEntry(k, v)), ('{', '}'))
            },
            Self::Object(o) => f.write_str(o.type_name()),
        }
    }
}

struct MapEntry<'a>(&'a String, &'a Value);

impl fmt::Display for MapEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.0, self.1)
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
    (open, close): (char, char),
) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as J;
        match json {
            J::Null => Self::Null,
            J::Bool(b) => Self::Bool(b),
            J::Number(n) => n
                .as_i64()
                .map(Self::I64)
                .or_else(|| n.as_u64().map(Self::U64))
                .or_else(|| n.as_f64().map(Self::F64))
                .unwrap_or(Self::Null),
            J::String(s) => Self::Str(s),
            J::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            J::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )+
    };
}

impl_from_scalar! {
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
    Vec<u8> => Bytes,
    NaiveDateTime => Date,
    FixedOffset => TimeZone,
    Charset => Charset,
    PathBuf => Path,
    Vec<Value> => List,
    IndexMap<String, Value> => Map,
    Object => Object,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Value::from(1_i32).kind(), TargetType::I32);
        assert_eq!(Value::from("x").kind(), TargetType::Str);
        assert_eq!(Value::Null.kind(), TargetType::Any);
        assert_eq!(
            Value::from_iter([1, 2]).kind(),
            TargetType::List(Box::new(TargetType::Any))
        );
    }

    #[test]
    fn test_display_is_java_like() {
        let list: Value = ["a", "b"].into_iter().collect();
        assert_eq!(list.to_string(), "[a, b]");

        let mut map = IndexMap::new();
        map.insert("k".to_owned(), Value::from(1));
        map.insert("n".to_owned(), Value::Null);
        assert_eq!(Value::Map(map).to_string(), "{k=1, n=null}");
        assert_eq!(Value::Bytes(vec![1, 2]).to_string(), "[1, 2]");
    }

    #[test]
    fn test_objects_compare_by_identity() {
        let obj = Object::new(vec![1_u8]);
        let same = obj.clone();
        assert_eq!(Value::Object(obj.clone()), Value::Object(same));
        assert_ne!(Value::Object(obj.clone()), Value::Object(Object::new(vec![1_u8])));
        assert_eq!(obj.downcast_ref::<Vec<u8>>(), Some(&vec![1]));
        assert!(obj.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_json_bridge() {
        let value = Value::from(json!({ "a": [1, 2.5, "x"], "b": null, "c": true }));
        let Value::Map(map) = &value else { panic!("expected map") };
        assert_eq!(map["a"], Value::List(vec![Value::I64(1), Value::F64(2.5), Value::from("x")]));
        assert_eq!(value.to_json(), json!({ "a": [1, 2.5, "x"], "b": null, "c": true }));
        assert_eq!(Value::I128(i128::MAX).to_json(), json!(i128::MAX.to_string()));
    }
}
