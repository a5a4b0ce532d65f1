use crate::converter::{
    BoolConverter, BytesConverter, CharConverter, CharsetConverter, Converter, DateConverter,
    NumberConverter, PathConverter, StringConverter, TimeZoneConverter,
};
use crate::error::ConvertError;
use crate::from_value::FromValue;
use crate::target::TargetType;
use crate::value::Value;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use satchel_domain::config::ConvertSettings;
use std::sync::{Arc, LazyLock, OnceLock};
use tracing::{debug, trace};

static GLOBAL: LazyLock<ConverterRegistry> = LazyLock::new(ConverterRegistry::new);

const NUMERIC_TARGETS: [TargetType; 12] = [
    TargetType::I8,
    TargetType::I16,
    TargetType::I32,
    TargetType::I64,
    TargetType::I128,
    TargetType::U8,
    TargetType::U16,
    TargetType::U32,
    TargetType::U64,
    TargetType::F32,
    TargetType::F64,
    TargetType::Number,
];

type ConverterMap = FxHashMap<TargetType, Arc<dyn Converter>>;

/// Type-keyed converter lookup with built-in defaults and user overrides.
///
/// Defaults are fixed at construction. Custom converters are added through
/// [`ConverterRegistry::put_custom`] and, depending on `custom_first`, either shadow the
/// defaults or only fill gaps.
///
/// ```rust
/// use satchel_convert::{ConverterRegistry, TargetType, Value};
///
/// let registry = ConverterRegistry::new();
/// let n = registry.convert(&TargetType::I32, &Value::from(" 42 "), None, true).unwrap();
/// assert_eq!(n, Value::I32(42));
///
/// let target = "list<i64>".parse::<TargetType>().unwrap();
/// let list = registry.convert(&target, &Value::from("1, 2"), None, true);
/// assert_eq!(list.unwrap(), Value::List(vec![Value::I64(1), Value::I64(2)]));
/// ```
#[derive(Debug)]
pub struct ConverterRegistry {
    defaults: ConverterMap,
    custom: OnceLock<RwLock<ConverterMap>>,
    custom_first: bool,
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(&ConvertSettings::default())
    }

    /// Registry whose lookup order and date layout follow `settings`.
    #[must_use]
    pub fn with_settings(settings: &ConvertSettings) -> Self {
        let mut defaults: ConverterMap = FxHashMap::default();
        for target in NUMERIC_TARGETS {
            if let Ok(converter) = NumberConverter::new(target.clone()) {
                defaults.insert(target, Arc::new(converter));
            }
        }
        let others: [Arc<dyn Converter>; 8] = [
            Arc::new(BoolConverter),
            Arc::new(CharConverter),
            Arc::new(StringConverter),
            Arc::new(DateConverter::new(settings.date_format.clone())),
            Arc::new(TimeZoneConverter),
            Arc::new(CharsetConverter),
            Arc::new(PathConverter),
            Arc::new(BytesConverter),
        ];
        for converter in others {
            defaults.insert(converter.target(), converter);
        }
        debug!(
            defaults = defaults.len(),
            custom_first = settings.custom_first,
            "Converter registry ready"
        );

        Self { defaults, custom: OnceLock::new(), custom_first: settings.custom_first }
    }

    /// The process-wide registry with default settings.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    #[must_use]
    pub const fn custom_first(&self) -> bool {
        self.custom_first
    }

    /// Registers (or replaces) the custom converter for `target`.
    pub fn put_custom(&self, target: TargetType, converter: Arc<dyn Converter>) -> &Self {
        debug!(to = %target, converter = ?converter, "Registering custom converter");
        self.custom
            .get_or_init(|| RwLock::new(FxHashMap::default()))
            .write()
            .insert(target, converter);
        self
    }

    #[must_use]
    pub fn get_converter(
        &self,
        target: &TargetType,
        custom_first: bool,
    ) -> Option<Arc<dyn Converter>> {
        if custom_first {
            self.get_custom_converter(target).or_else(|| self.get_default_converter(target))
        } else {
            self.get_default_converter(target).or_else(|| self.get_custom_converter(target))
        }
    }

    #[must_use]
    pub fn get_default_converter(&self, target: &TargetType) -> Option<Arc<dyn Converter>> {
        self.defaults.get(target).cloned()
    }

    #[must_use]
    pub fn get_custom_converter(&self, target: &TargetType) -> Option<Arc<dyn Converter>> {
        self.custom.get().and_then(|custom| custom.read().get(target).cloned())
    }

    /// Converts `value` to `target`.
    ///
    /// * An [`TargetType::Any`] target without a default returns `value` untouched; with a
    ///   default, the default's type becomes the target.
    /// * `Null` yields `default` (or `Null`).
    /// * A registered converter wins. Otherwise lists and sets are converted element-wise
    ///   (text is split on `,`), values already of the target type are cloned and arrays
    ///   are converted element-wise with any failure rejecting the array.
    ///
    /// # Errors
    /// Returns [`ConvertError::NoConverter`] when none of the above applies.
    pub fn convert(
        &self,
        target: &TargetType,
        value: &Value,
        default: Option<Value>,
        custom_first: bool,
    ) -> Result<Value, ConvertError> {
        if *target == TargetType::Any && default.is_none() {
            return Ok(value.clone());
        }
        if value.is_null() {
            return Ok(default.unwrap_or_default());
        }
        let target = match (&default, target) {
            (Some(d), TargetType::Any) => d.kind(),
            _ => target.clone(),
        };

        if let Some(converter) = self.get_converter(&target, custom_first) {
            trace!(to = %target, converter = ?converter, "Converter found");
            return Ok(converter.convert(value, default).unwrap_or_default());
        }

        if let Some(converted) = self.convert_special(&target, value, custom_first) {
            return Ok(converted);
        }

        Err(ConvertError::NoConverter { type_name: target.to_string().into(), context: None })
    }

    /// [`ConverterRegistry::convert`] into a Rust type, honouring this registry's lookup
    /// order. Returns `default` when the result cannot be extracted as `T`.
    ///
    /// # Errors
    /// Returns [`ConvertError::NoConverter`] when no conversion path to `T` exists.
    pub fn convert_to<T: FromValue>(
        &self,
        value: &Value,
        default: Option<T>,
    ) -> Result<Option<T>, ConvertError> {
        let converted = self.convert(&T::target(), value, None, self.custom_first)?;
        Ok(T::from_value(converted).or(default))
    }

    fn convert_special(
        &self,
        target: &TargetType,
        value: &Value,
        custom_first: bool,
    ) -> Option<Value> {
        match target {
            TargetType::List(elem) | TargetType::Set(elem) => {
                let mut converted: Vec<Value> = Vec::new();
                for item in split_items(value) {
                    let item = self.convert(elem, &item, None, custom_first).unwrap_or_else(|e| {
                        debug!(to = %elem, error = %e, "Collection element not convertible");
                        Value::Null
                    });
                    if matches!(target, TargetType::Set(_)) && converted.contains(&item) {
                        continue;
                    }
                    converted.push(item);
                }
                return Some(Value::List(converted));
            },
            _ if value.kind() == *target => return Some(value.clone()),
            TargetType::Array(elem) => {
                let converted: Result<Vec<Value>, ConvertError> = split_items(value)
                    .iter()
                    .map(|item| match self.convert(elem, item, None, custom_first)? {
                        Value::Null => {
                            Err(ConvertError::unsupported(format!("[{item}] is not {elem}")))
                        },
                        ok => Ok(ok),
                    })
                    .collect();
                match converted {
                    Ok(items) => return Some(Value::List(items)),
                    Err(e) => debug!(to = %target, error = %e, "Array conversion failed"),
                }
            },
            _ => {},
        }
        None
    }
}

/// Elements of a collection source: lists as is, text split on `,`, anything else as a single
/// element.
fn split_items(value: &Value) -> Vec<Value> {
    match value {
        Value::List(items) => items.clone(),
        Value::Bytes(bytes) => bytes.iter().map(|&b| Value::U8(b)).collect(),
        Value::Str(text) => {
            text.split(',').map(|part| Value::Str(part.trim().to_owned())).collect()
        },
        other => vec![other.clone()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Shouting;

    impl Converter for Shouting {
        fn target(&self) -> TargetType {
            TargetType::Str
        }

        fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError> {
            Ok(Some(Value::Str(value.to_string().to_uppercase())))
        }
    }

    #[test]
    fn test_every_scalar_target_has_a_default() {
        let registry = ConverterRegistry::new();
        for target in NUMERIC_TARGETS.iter().chain(&[
            TargetType::Bool,
            TargetType::Char,
            TargetType::Str,
            TargetType::Date,
            TargetType::TimeZone,
            TargetType::Charset,
            TargetType::Path,
            TargetType::Bytes,
        ]) {
            assert!(registry.get_default_converter(target).is_some(), "{target}");
        }
        assert!(registry.get_custom_converter(&TargetType::Str).is_none());
    }

    #[test]
    fn test_custom_first_ordering() {
        let registry = ConverterRegistry::new();
        registry.put_custom(TargetType::Str, Arc::new(Shouting));

        let shouted = registry.convert(&TargetType::Str, &Value::I32(1), None, true).unwrap();
        assert_eq!(shouted, Value::from("1"));
        let shouted = registry.convert(&TargetType::Str, &Value::Bool(true), None, true).unwrap();
        assert_eq!(shouted, Value::from("TRUE"));
        let plain = registry.convert(&TargetType::Str, &Value::Bool(true), None, false).unwrap();
        assert_eq!(plain, Value::from("true"));
    }

    #[test]
    fn test_any_target() {
        let registry = ConverterRegistry::new();
        let v = Value::from("7");
        assert_eq!(registry.convert(&TargetType::Any, &v, None, true).unwrap(), v);
        assert_eq!(
            registry.convert(&TargetType::Any, &v, Some(Value::I64(0)), true).unwrap(),
            Value::I64(7)
        );
    }

    #[test]
    fn test_null_yields_default() {
        let registry = ConverterRegistry::new();
        assert_eq!(
            registry.convert(&TargetType::I32, &Value::Null, Some(Value::I32(5)), true).unwrap(),
            Value::I32(5)
        );
        let none = registry.convert(&TargetType::I32, &Value::Null, None, true).unwrap();
        assert_eq!(none, Value::Null);
    }

    #[test]
    fn test_collections() {
        let registry = ConverterRegistry::new();
        let list = TargetType::List(Box::new(TargetType::I32));
        assert_eq!(
            registry.convert(&list, &Value::from("1, x ,3"), None, true).unwrap(),
            Value::List(vec![Value::I32(1), Value::Null, Value::I32(3)])
        );
        assert_eq!(
            registry.convert(&list, &Value::F64(2.7), None, true).unwrap(),
            Value::List(vec![Value::I32(2)])
        );

        let set = TargetType::Set(Box::new(TargetType::Str));
        assert_eq!(
            registry.convert(&set, &Value::from_iter([1, 2, 1]), None, true).unwrap(),
            Value::List(vec![Value::from("1"), Value::from("2")])
        );
    }

    #[test]
    fn test_arrays_reject_bad_elements() {
        let registry = ConverterRegistry::new();
        let array = TargetType::Array(Box::new(TargetType::I64));
        assert_eq!(
            registry.convert(&array, &Value::from("4,5"), None, true).unwrap(),
            Value::List(vec![Value::I64(4), Value::I64(5)])
        );
        let err = registry.convert(&array, &Value::from("4,five"), None, true).unwrap_err();
        assert!(matches!(err, ConvertError::NoConverter { .. }));
        assert_eq!(err.to_string(), "No Converter for type [array<i64>]");
    }

    #[test]
    fn test_assignable_and_missing() {
        let registry = ConverterRegistry::new();
        let map = Value::Map(indexmap::IndexMap::new());
        assert_eq!(registry.convert(&TargetType::Map, &map, None, true).unwrap(), map);

        let err = registry.convert(&TargetType::Map, &Value::I32(1), None, true).unwrap_err();
        assert_eq!(err.to_string(), "No Converter for type [map]");
    }

    #[test]
    fn test_convert_to_typed() {
        let registry = ConverterRegistry::global();
        assert_eq!(registry.convert_to::<i64>(&Value::from("12"), None).unwrap(), Some(12));
        assert_eq!(registry.convert_to::<i64>(&Value::from("x"), Some(3)).unwrap(), Some(3));
        assert_eq!(
            registry.convert_to::<Vec<String>>(&Value::from("a,b"), None).unwrap(),
            Some(vec!["a".to_owned(), "b".to_owned()])
        );
        assert_eq!(registry.convert_to::<Vec<i32>>(&Value::from("1,x"), None).unwrap(), None);
    }
}
