//! # Convert
//!
//! Dynamic values and the type conversion registry.
//!
//! * [`Value`] is the runtime value that flows through conversions.
//! * [`TargetType`] names what a conversion should produce.
//! * [`ConverterRegistry`] maps target types to [`Converter`]s and handles collections.
//! * [`Convert`] is the quiet, typed front door over the global registry.
//!
//! ```rust
//! use satchel_convert::{Convert, ConverterRegistry, TargetType, Value};
//!
//! assert_eq!(Convert::to_i64("100L"), Some(100));
//!
//! let registry = ConverterRegistry::global();
//! let tz = registry.convert(&TargetType::TimeZone, &Value::from("GMT+8"), None, true).unwrap();
//! assert_eq!(tz.to_string(), "+08:00");
//! ```

pub mod bean;
pub mod bool_util;
pub mod codec;
pub mod converter;
mod error;
mod facade;
mod from_value;
pub mod json;
pub mod page_util;
mod registry;
mod target;
mod value;

pub use crate::converter::{Converter, convert_to_str};
pub use crate::error::{ConvertError, ConvertErrorExt};
pub use crate::facade::Convert;
pub use crate::from_value::{FromValue, IntoValue};
pub use crate::registry::ConverterRegistry;
pub use crate::target::TargetType;
pub use crate::value::{DATE_DISPLAY_FORMAT, Object, Value};
pub use indexmap::IndexMap;
