use super::{Converter, convert_to_str};
use crate::bool_util::to_boolean;
use crate::error::ConvertError;
use crate::target::TargetType;
use crate::value::Value;
use satchel_text::str_util::is_blank;

#[derive(Debug, Clone, Copy, Default)]
pub struct CharConverter;

impl Converter for CharConverter {
    fn target(&self) -> TargetType {
        TargetType::Char
    }

    fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError> {
        if let Value::Bool(b) = value {
            return Ok(Some(Value::Char(if *b { '\u{1}' } else { '\u{0}' })));
        }
        let text = convert_to_str(value);
        if is_blank(&text) {
            return Ok(None);
        }
        Ok(text.chars().next().map(Value::Char))
    }
}

/// Text is matched against the usual truthy words (see [`to_boolean`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolConverter;

impl Converter for BoolConverter {
    fn target(&self) -> TargetType {
        TargetType::Bool
    }

    fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError> {
        let text = convert_to_str(value);
        if is_blank(&text) {
            return Ok(None);
        }
        Ok(Some(Value::Bool(to_boolean(&text))))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StringConverter;

impl Converter for StringConverter {
    fn target(&self) -> TargetType {
        TargetType::Str
    }

    fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError> {
        Ok(Some(Value::Str(convert_to_str(value))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_takes_first_char() {
        assert_eq!(CharConverter.convert(&Value::from("hello"), None), Some(Value::Char('h')));
        assert_eq!(CharConverter.convert(&Value::I32(65), None), Some(Value::Char('6')));
        assert_eq!(CharConverter.convert(&Value::Bool(true), None), Some(Value::Char('\u{1}')));
        assert_eq!(CharConverter.convert(&Value::from(" "), Some(Value::Char('d'))), Some(Value::Char('d')));
    }

    #[test]
    fn test_bool_words() {
        for yes in ["true", " YES ", "y", "1", "on", "是", "对", "真", "ok"] {
            assert_eq!(BoolConverter.convert(&Value::from(yes), None), Some(Value::Bool(true)), "{yes}");
        }
        assert_eq!(BoolConverter.convert(&Value::from("nope"), None), Some(Value::Bool(false)));
        assert_eq!(BoolConverter.convert(&Value::I32(1), None), Some(Value::Bool(true)));
        assert_eq!(BoolConverter.convert(&Value::I32(2), None), Some(Value::Bool(false)));
        assert_eq!(BoolConverter.convert(&Value::from(""), None), None);
    }

    #[test]
    fn test_string_renders_anything() {
        assert_eq!(StringConverter.convert(&Value::I64(-3), None), Some(Value::from("-3")));
        assert_eq!(
            StringConverter.convert(&Value::from_iter(["a", "b"]), None),
            Some(Value::from("[a, b]"))
        );
    }
}
