use crate::error::ConvertError;
use crate::from_value::FromValue;
use std::any::TypeId;
use std::fmt;
use std::str::FromStr;

/// The type a conversion produces. Keys the converter registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// Unknown target; the registry returns the input or follows the default value's kind.
    Any,
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// Any number; integral text becomes `i64`, everything else `f64`.
    Number,
    Str,
    Date,
    TimeZone,
    Charset,
    Path,
    Bytes,
    Map,
    List(Box<TargetType>),
    Set(Box<TargetType>),
    Array(Box<TargetType>),
    Object { id: TypeId, name: &'static str },
}

impl TargetType {
    /// Target type of a Rust type, e.g. `TargetType::of::<Vec<i64>>()` is `list<i64>`.
    #[must_use]
    pub fn of<T: FromValue>() -> Self {
        T::target()
    }

    /// Target for a user type carried in [`crate::Value::Object`].
    #[must_use]
    pub fn object<T: 'static>() -> Self {
        Self::Object { id: TypeId::of::<T>(), name: std::any::type_name::<T>() }
    }

    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
        )
    }

    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    #[must_use]
    pub const fn is_number(&self) -> bool {
        self.is_integer() || self.is_float() || matches!(self, Self::Number)
    }

    /// Element type of a collection target.
    #[must_use]
    pub fn element(&self) -> Option<&Self> {
        match self {
            Self::List(elem) | Self::Set(elem) | Self::Array(elem) => Some(elem),
            _ => None,
        }
    }

    const fn scalar_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::Any => "any",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Number => "number",
            Self::Str => "string",
            Self::Date => "date",
            Self::TimeZone => "timezone",
            Self::Charset => "charset",
            Self::Path => "path",
            Self::Bytes => "bytes",
            Self::Map => "map",
            _ => return None,
        })
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.scalar_name() {
            return f.write_str(name);
        }
        match self {
            Self::List(elem) => write!(f, "list<{elem}>"),
            Self::Set(elem) => write!(f, "set<{elem}>"),
            Self::Array(elem) => write!(f, "array<{elem}>"),
            Self::Object { name, .. } => f.write_str(name),
            _ => Ok(()),
        }
    }
}

impl FromStr for TargetType {
    type Err = ConvertError;

    /// Parses names such as `i32`, `long`, `string`, `list<i64>`, `set<string>` or `u8[]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        if let Some(elem) = name.strip_suffix("[]") {
            return Ok(Self::Array(Box::new(elem.parse()?)));
        }
        for (prefix, wrap) in [
            ("list<", Self::List as fn(Box<Self>) -> Self),
            ("set<", Self::Set),
            ("array<", Self::Array),
        ] {
            if let Some(inner) = name.strip_prefix(prefix).and_then(|r| r.strip_suffix('>')) {
                return Ok(wrap(Box::new(inner.parse()?)));
            }
        }

        Ok(match name.as_str() {
            "any" | "object" => Self::Any,
            "bool" | "boolean" => Self::Bool,
            "char" | "character" => Self::Char,
            "i8" | "byte" => Self::I8,
            "i16" | "short" => Self::I16,
            "i32" | "int" | "integer" => Self::I32,
            "i64" | "long" => Self::I64,
            "i128" | "biginteger" => Self::I128,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "f32" | "float" => Self::F32,
            "f64" | "double" => Self::F64,
            "number" => Self::Number,
            "str" | "string" => Self::Str,
            "date" | "datetime" => Self::Date,
            "timezone" | "tz" => Self::TimeZone,
            "charset" => Self::Charset,
            "path" => Self::Path,
            "bytes" => Self::Bytes,
            "map" => Self::Map,
            _ => return Err(ConvertError::unsupported(format!("Unknown type name [{s}]"))),
        })
    }
}
