use crate::error::TextError;
use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr};

const REPLACEMENT: u8 = b'?';

/// Character encodings understood by the string, IO and URL helpers.
///
/// Names are matched case-insensitively and accept the usual aliases
/// (`utf8`, `latin1`, `ascii`, ...).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Charset {
    #[default]
    #[strum(to_string = "UTF-8", serialize = "utf8")]
    Utf8,
    #[strum(to_string = "UTF-16BE", serialize = "utf16be", serialize = "UTF-16")]
    Utf16Be,
    #[strum(to_string = "UTF-16LE", serialize = "utf16le")]
    Utf16Le,
    #[strum(to_string = "US-ASCII", serialize = "ascii", serialize = "us_ascii")]
    UsAscii,
    #[strum(to_string = "ISO-8859-1", serialize = "latin1", serialize = "iso8859_1")]
    Iso8859_1,
}

impl Charset {
    /// Looks a charset up by name.
    ///
    /// # Errors
    /// Returns [`TextError::UnsupportedCharset`] for names outside the supported set.
    pub fn from_name(name: &str) -> Result<Self, TextError> {
        Self::from_str(name.trim()).map_err(|_| TextError::UnsupportedCharset {
            message: name.to_owned().into(),
            context: None,
        })
    }

    /// Canonical name, e.g. `UTF-8`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Encodes `text`, replacing characters the charset cannot represent with `?`.
    #[must_use]
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::UsAscii => {
                text.chars().map(|c| if c.is_ascii() { c as u8 } else { REPLACEMENT }).collect()
            },
            Self::Iso8859_1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(REPLACEMENT))
                .collect(),
        }
    }

    /// Decodes `bytes`, substituting `U+FFFD` for malformed input.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
            Self::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
            Self::UsAscii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { char::from(b) } else { char::REPLACEMENT_CHARACTER })
                .collect(),
            Self::Iso8859_1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();
    let units: Vec<u16> = chunks.map(|pair| to_unit([pair[0], pair[1]])).collect();
    let mut text = String::from_utf16_lossy(&units);
    if dangling {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}
