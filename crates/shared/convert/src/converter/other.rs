use super::{Converter, convert_to_str};
use crate::error::ConvertError;
use crate::target::TargetType;
use crate::value::Value;
use satchel_text::Charset;
use satchel_text::str_util::{is_blank, trim};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default)]
pub struct CharsetConverter;

impl Converter for CharsetConverter {
    fn target(&self) -> TargetType {
        TargetType::Charset
    }

    fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError> {
        let name = convert_to_str(value);
        if is_blank(&name) {
            return Ok(None);
        }
        Ok(Some(Value::Charset(Charset::from_name(&name)?)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PathConverter;

impl Converter for PathConverter {
    fn target(&self) -> TargetType {
        TargetType::Path
    }

    fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError> {
        let text = convert_to_str(value);
        let text = trim(&text);
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(Value::Path(PathBuf::from(text))))
    }
}

/// Strings become their UTF-8 bytes; lists of numbers become one byte per element.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesConverter;

impl Converter for BytesConverter {
    fn target(&self) -> TargetType {
        TargetType::Bytes
    }

    fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError> {
        match value {
            Value::Str(s) => Ok(Some(Value::Bytes(s.as_bytes().to_vec()))),
            Value::List(items) => items
                .iter()
                .map(|item| {
                    item.as_i128().map(|n| n as u8).ok_or_else(|| {
                        ConvertError::unsupported(format!("[{item}] is not a byte"))
                    })
                })
                .collect::<Result<Vec<u8>, _>>()
                .map(|bytes| Some(Value::Bytes(bytes))),
            other => Ok(Some(Value::Bytes(convert_to_str(other).into_bytes()))),
        }
    }
}
