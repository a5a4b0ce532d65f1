use satchel_kernel::UtilError;

/// Words (compared trimmed and lowercased) that read as `true`.
const TRUE_WORDS: [&str; 10] = ["true", "yes", "y", "t", "ok", "1", "on", "是", "对", "真"];

const EMPTY_ARRAY: &str = "The Array must not be empty !";

/// `true` for `true`, `yes`, `y`, `t`, `ok`, `1`, `on`, `是`, `对` or `真`; `false` otherwise.
#[must_use]
pub fn to_boolean(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    TRUE_WORDS.contains(&text.as_str())
}

#[must_use]
pub const fn negate(value: bool) -> bool {
    !value
}

#[must_use]
pub fn negate_opt(value: Option<bool>) -> Option<bool> {
    value.map(|b| !b)
}

#[must_use]
pub fn is_true(value: Option<bool>) -> bool {
    value == Some(true)
}

#[must_use]
pub fn is_false(value: Option<bool>) -> bool {
    value == Some(false)
}

#[must_use]
pub const fn to_int(value: bool) -> i32 {
    value as i32
}

#[must_use]
pub const fn to_char(value: bool) -> char {
    if value { '\u{1}' } else { '\u{0}' }
}

#[must_use]
pub const fn to_byte(value: bool) -> i8 {
    value as i8
}

#[must_use]
pub const fn to_long(value: bool) -> i64 {
    value as i64
}

#[must_use]
pub const fn to_short(value: bool) -> i16 {
    value as i16
}

#[must_use]
pub const fn to_float(value: bool) -> f32 {
    to_int(value) as f32
}

#[must_use]
pub const fn to_double(value: bool) -> f64 {
    to_int(value) as f64
}

#[must_use]
pub const fn to_string<'a>(value: bool, true_text: &'a str, false_text: &'a str) -> &'a str {
    if value { true_text } else { false_text }
}

/// # Errors
/// Returns [`UtilError::IllegalArgument`] for an empty slice.
pub fn and(values: &[bool]) -> Result<bool, UtilError> {
    non_empty(values)?;
    Ok(values.iter().all(|&b| b))
}

/// # Errors
/// Returns [`UtilError::IllegalArgument`] for an empty slice.
pub fn or(values: &[bool]) -> Result<bool, UtilError> {
    non_empty(values)?;
    Ok(values.iter().any(|&b| b))
}

/// `true` when an odd number of values are `true`.
///
/// # Errors
/// Returns [`UtilError::IllegalArgument`] for an empty slice.
pub fn xor(values: &[bool]) -> Result<bool, UtilError> {
    non_empty(values)?;
    Ok(values.iter().fold(false, |acc, &b| acc ^ b))
}

/// [`and`] with `None` read as `false`.
///
/// # Errors
/// Returns [`UtilError::IllegalArgument`] for an empty slice.
pub fn and_opt(values: &[Option<bool>]) -> Result<bool, UtilError> {
    and(&unwrap_all(values))
}

/// # Errors
/// Returns [`UtilError::IllegalArgument`] for an empty slice.
pub fn or_opt(values: &[Option<bool>]) -> Result<bool, UtilError> {
    or(&unwrap_all(values))
}

/// # Errors
/// Returns [`UtilError::IllegalArgument`] for an empty slice.
pub fn xor_opt(values: &[Option<bool>]) -> Result<bool, UtilError> {
    xor(&unwrap_all(values))
}

fn unwrap_all(values: &[Option<bool>]) -> Vec<bool> {
    values.iter().map(|v| v.unwrap_or(false)).collect()
}

fn non_empty<T>(values: &[T]) -> Result<(), UtilError> {
    if values.is_empty() { Err(UtilError::illegal_argument(EMPTY_ARRAY)) } else { Ok(()) }
}
