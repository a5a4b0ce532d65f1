//! Base64 over text in a chosen charset.

use crate::error::ConvertError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use satchel_text::Charset;

/// Encodes `text` (as bytes in `charset`) to standard, padded Base64.
#[must_use]
pub fn base64_encode(text: &str, charset: Charset) -> String {
    STANDARD.encode(charset.encode(text))
}

/// Decodes Base64 and reads the bytes in `charset`.
///
/// # Errors
/// Returns [`ConvertError::Base64`] for invalid input.
pub fn base64_decode(encoded: &str, charset: Charset) -> Result<String, ConvertError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    Ok(charset.decode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_in_charsets() {
        assert_eq!(base64_encode("hello", Charset::Utf8), "aGVsbG8=");
        assert_eq!(base64_decode("aGVsbG8=", Charset::Utf8).unwrap(), "hello");

        let latin = base64_encode("é", Charset::Iso8859_1);
        assert_eq!(latin, "6Q==");
        assert_eq!(base64_decode(&latin, Charset::Iso8859_1).unwrap(), "é");
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(base64_decode("***", Charset::Utf8), Err(ConvertError::Base64 { .. })));
    }
}
