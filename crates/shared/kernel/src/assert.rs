use crate::error::UtilError;
use satchel_text::format::format;
use satchel_text::str_util;
use std::fmt::Display;

pub const NOT_NULL_MESSAGE: &str =
    "[Assertion failed] - this argument is required; it must not be null";

/// Argument assertions returning [`UtilError::IllegalArgument`] instead of panicking.
///
/// Messages are `{}` templates rendered with [`satchel_text::format::format`].
#[derive(Debug)]
pub struct Assert;

impl Assert {
    /// Unwraps `value`, failing with the rendered template when it is `None`.
    ///
    /// # Errors
    /// Returns [`UtilError::IllegalArgument`] when `value` is `None`.
    pub fn not_null<T>(
        value: Option<T>,
        template: &str,
        params: &[&dyn Display],
    ) -> Result<T, UtilError> {
        value.ok_or_else(|| UtilError::illegal_argument(format(template, params)))
    }

    /// [`Assert::not_null`] with the default assertion message.
    ///
    /// # Errors
    /// Returns [`UtilError::IllegalArgument`] when `value` is `None`.
    pub fn require<T>(value: Option<T>) -> Result<T, UtilError> {
        Self::not_null(value, NOT_NULL_MESSAGE, &[])
    }

    /// Checks that `text` contains at least one non-blank character.
    ///
    /// # Errors
    /// Returns [`UtilError::IllegalArgument`] for empty or whitespace-only input.
    pub fn not_blank<'a>(
        text: &'a str,
        template: &str,
        params: &[&dyn Display],
    ) -> Result<&'a str, UtilError> {
        if str_util::is_blank(text) {
            return Err(UtilError::illegal_argument(format(template, params)));
        }
        Ok(text)
    }

    /// # Errors
    /// Returns [`UtilError::IllegalArgument`] when `expression` is false.
    pub fn is_true(expression: bool, template: &str, params: &[&dyn Display]) -> Result<(), UtilError> {
        if expression { Ok(()) } else { Err(UtilError::illegal_argument(format(template, params))) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_null_renders_template() {
        let err = Assert::not_null::<u8>(None, "{} must be set", &[&"timeout"]).unwrap_err();
        assert_eq!(err.to_string(), "Illegal argument: timeout must be set");
        assert_eq!(Assert::not_null(Some(3), "unused", &[]).unwrap(), 3);
    }

    #[test]
    fn test_require_uses_default_message() {
        let err = Assert::require::<()>(None).unwrap_err();
        assert!(err.to_string().ends_with(NOT_NULL_MESSAGE));
    }

    #[test]
    fn test_not_blank() {
        assert_eq!(Assert::not_blank("a", "blank", &[]).unwrap(), "a");
        assert!(Assert::not_blank(" \t\u{3000}", "blank", &[]).is_err());
        assert!(Assert::is_true(1 > 2, "expected {} > {}", &[&1, &2]).is_err());
    }
}
