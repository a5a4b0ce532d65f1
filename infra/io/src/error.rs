use std::borrow::Cow;

/// A specialized [`IoError`] enum of this crate.
#[satchel_derive::satchel_error]
pub enum IoError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("JSON stream error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Index out of bounds{}: {message}", format_context(.context))]
    IndexOutOfBounds { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal I/O error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
