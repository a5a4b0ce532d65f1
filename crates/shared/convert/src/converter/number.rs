use super::{Converter, convert_to_str};
use crate::error::ConvertError;
use crate::target::TargetType;
use crate::value::Value;
use satchel_date::to_millis;
use satchel_text::str_util::{is_blank, trim};

const INTEGER_FLAGS: [char; 6] = ['L', 'l', 'D', 'd', 'F', 'f'];
const FLOAT_FLAGS: [char; 4] = ['F', 'f', 'D', 'd'];

/// Converts to one of the numeric targets (or [`TargetType::Number`]).
///
/// Numeric input is cast with `as`, so narrowing wraps. Text is trimmed and parsed leniently:
/// `"12.9"` becomes `12` for integer targets, `"0x1F"` is hexadecimal and trailing type flags
/// such as `L` or `f` are ignored.
#[derive(Debug, Clone)]
pub struct NumberConverter {
    target: TargetType,
}

impl NumberConverter {
    /// # Errors
    /// Returns [`ConvertError::Unsupported`] when `target` is not numeric.
    pub fn new(target: TargetType) -> Result<Self, ConvertError> {
        if target.is_number() {
            Ok(Self { target })
        } else {
            Err(ConvertError::unsupported(format!("[{target}] is not a number type")))
        }
    }

    fn parse(&self, text: &str) -> Result<Value, ConvertError> {
        let fail = || {
            ConvertError::unsupported(format!("Unable to parse [{text}] as {}", self.target))
        };
        match self.target {
            TargetType::F32 => {
                strip_flag(text, &FLOAT_FLAGS).parse::<f32>().map(Value::F32).map_err(|_| fail())
            },
            TargetType::F64 => {
                strip_flag(text, &FLOAT_FLAGS).parse::<f64>().map(Value::F64).map_err(|_| fail())
            },
            TargetType::Number if !is_hex(text) && text.contains(['.', 'e', 'E']) => {
                strip_flag(text, &FLOAT_FLAGS).parse::<f64>().map(Value::F64).map_err(|_| fail())
            },
            TargetType::Number => {
                let n = parse_integer(text).ok_or_else(fail)?;
                Ok(i64::try_from(n).map_or(Value::I128(n), Value::I64))
            },
            _ => {
                let n = parse_integer(text).ok_or_else(fail)?;
                Ok(cast_integer(n, &self.target))
            },
        }
    }
}

impl Converter for NumberConverter {
    fn target(&self) -> TargetType {
        self.target.clone()
    }

    fn convert_internal(&self, value: &Value) -> Result<Option<Value>, ConvertError> {
        if value.is_number() {
            if self.target == TargetType::Number {
                return Ok(Some(value.clone()));
            }
            return Ok(cast_number(value, &self.target));
        }
        match value {
            Value::Bool(b) => Ok(Some(cast_integer(i128::from(*b), &self.target))),
            Value::Date(d) => Ok(Some(cast_integer(i128::from(to_millis(d)), &self.target))),
            other => {
                let text = convert_to_str(other);
                let text = trim(&text);
                if is_blank(text) {
                    return Ok(None);
                }
                self.parse(text).map(Some)
            },
        }
    }
}

fn cast_number(value: &Value, target: &TargetType) -> Option<Value> {
    match *value {
        Value::F32(f) => Some(cast_float(f64::from(f), target)),
        Value::F64(f) => Some(cast_float(f, target)),
        _ => value.as_i128().map(|n| cast_integer(n, target)),
    }
}

fn cast_integer(n: i128, target: &TargetType) -> Value {
    match target {
        TargetType::I8 => Value::I8(n as i8),
        TargetType::I16 => Value::I16(n as i16),
        TargetType::I32 => Value::I32(n as i32),
        TargetType::I128 => Value::I128(n),
        TargetType::U8 => Value::U8(n as u8),
        TargetType::U16 => Value::U16(n as u16),
        TargetType::U32 => Value::U32(n as u32),
        TargetType::U64 => Value::U64(n as u64),
        TargetType::F32 => Value::F32(n as f32),
        TargetType::F64 => Value::F64(n as f64),
        _ => Value::I64(n as i64),
    }
}

fn cast_float(f: f64, target: &TargetType) -> Value {
    match target {
        TargetType::F32 => Value::F32(f as f32),
        TargetType::F64 | TargetType::Number => Value::F64(f),
        other => cast_integer(f as i128, other),
    }
}

fn is_hex(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    digits.starts_with("0x") || digits.starts_with("0X")
}

fn strip_flag<'a>(text: &'a str, flags: &[char]) -> &'a str {
    text.strip_suffix(flags).unwrap_or(text)
}

/// Lenient integer parsing: optional sign, `0x` hex, fraction dropped, type flag ignored.
fn parse_integer(text: &str) -> Option<i128> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let hex = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X"));
    let magnitude = if let Some(hex) = hex {
        i128::from_str_radix(hex, 16).ok()?
    } else {
        let digits = strip_flag(digits, &INTEGER_FLAGS);
        let whole = digits.split_once('.').map_or(digits, |(whole, _)| whole);
        if whole.is_empty() {
            if digits.starts_with('.') { 0 } else { return None }
        } else if whole.bytes().all(|b| b.is_ascii_digit()) {
            whole.parse::<i128>().ok()?
        } else {
            return None;
        }
    };

    Some(if negative { -magnitude } else { magnitude })
}
