use chrono::NaiveDateTime;
use indexmap::IndexMap;
use satchel_convert::{Convert, FromValue, IntoValue, Value, bean};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::ops::Deref;
use tracing::debug;

/// Ordered string-keyed dictionary of loosely typed [`Value`]s.
///
/// Typed getters convert through the global conversion registry and return `None` when the key
/// is missing or the stored value does not convert. A case-insensitive dictionary folds keys to
/// lowercase on both write and read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dic {
    map: IndexMap<String, Value>,
    case_insensitive: bool,
}

macro_rules! typed_getters {
    ($($name:ident => $ty:ty),+ $(,)?) => {
        $(
            #[must_use]
            pub fn $name(&self, attr: &str) -> Option<$ty> {
                self.get_converted(attr)
            }
        )+
    };
}

impl Dic {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn case_insensitive() -> Self {
        Self { map: IndexMap::new(), case_insensitive: true }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { map: IndexMap::with_capacity(capacity), case_insensitive: false }
    }

    /// Wraps an existing map. Keys are kept as given.
    #[must_use]
    pub const fn from_map(map: IndexMap<String, Value>) -> Self {
        Self { map, case_insensitive: false }
    }

    #[must_use]
    pub const fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    fn key<'k>(&self, attr: &'k str) -> Cow<'k, str> {
        if self.case_insensitive { Cow::Owned(attr.to_lowercase()) } else { Cow::Borrowed(attr) }
    }

    /// Copy holding only `keys` that are present, in the order given.
    #[must_use]
    pub fn filter(&self, keys: &[&str]) -> Self {
        let mut out = Self { map: IndexMap::new(), case_insensitive: self.case_insensitive };
        for key in keys {
            let key = self.key(key);
            if let Some(value) = self.map.get(key.as_ref()) {
                out.map.insert(key.into_owned(), value.clone());
            }
        }
        out
    }

    pub fn set(&mut self, attr: &str, value: impl IntoValue) -> &mut Self {
        let key = self.key(attr).into_owned();
        self.map.insert(key, value.into_value());
        self
    }

    /// Like [`Dic::set`], but a null value leaves the dictionary untouched.
    pub fn set_ignore_null(&mut self, attr: &str, value: impl IntoValue) -> &mut Self {
        let value = value.into_value();
        if !value.is_null() {
            self.set(attr, value);
        }
        self
    }

    /// Inserts and returns the value previously stored under `attr`.
    pub fn put(&mut self, attr: &str, value: impl IntoValue) -> Option<Value> {
        let key = self.key(attr).into_owned();
        self.map.insert(key, value.into_value())
    }

    pub fn remove(&mut self, attr: &str) -> Option<Value> {
        let key = self.key(attr);
        self.map.shift_remove(key.as_ref())
    }

    #[must_use]
    pub fn get_obj(&self, attr: &str) -> Option<&Value> {
        self.map.get(self.key(attr).as_ref())
    }

    #[must_use]
    pub fn get_or<'a>(&'a self, attr: &str, default: &'a Value) -> &'a Value {
        self.get_obj(attr).unwrap_or(default)
    }

    #[must_use]
    pub fn contains_key(&self, attr: &str) -> bool {
        self.map.contains_key(self.key(attr).as_ref())
    }

    fn get_converted<T: FromValue>(&self, attr: &str) -> Option<T> {
        let value = self.get_obj(attr)?;
        Convert::convert_quietly(value.clone(), None)
    }

    typed_getters! {
        get_str => String,
        get_i8 => i8,
        get_i16 => i16,
        get_i32 => i32,
        get_i64 => i64,
        get_i128 => i128,
        get_f32 => f32,
        get_f64 => f64,
        get_char => char,
        get_bool => bool,
        get_date => NaiveDateTime,
    }

    #[must_use]
    pub fn get_bytes(&self, attr: &str) -> Option<Vec<u8>> {
        Convert::to_bytes(self.get_obj(attr)?.clone())
    }

    /// Integral values stay integral, anything else numeric becomes `f64`.
    #[must_use]
    pub fn get_number(&self, attr: &str) -> Option<Value> {
        Convert::to_number(self.get_obj(attr)?.clone())
    }

    /// Deserializes the stored value into `T`.
    #[must_use]
    pub fn get_as<T: DeserializeOwned>(&self, attr: &str) -> Option<T> {
        let value = self.get_obj(attr)?;
        bean::from_value(value)
            .inspect_err(|e| debug!(attr, error = %e, "Dictionary value does not fit"))
            .ok()
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.map
    }
}

impl Deref for Dic {
    type Target = IndexMap<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.map
    }
}

impl<K: Into<String>, V: IntoValue> FromIterator<(K, V)> for Dic {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().map(|(k, v)| (k.into(), v.into_value())).collect())
    }
}

impl From<IndexMap<String, Value>> for Dic {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl From<Dic> for Value {
    fn from(dic: Dic) -> Self {
        Self::Map(dic.map)
    }
}

impl Serialize for Dic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}
