use satchel_text::TextError;
use std::borrow::Cow;

#[satchel_derive::satchel_error]
pub enum ConvertError {
    /// Nothing in the registry can produce the requested type.
    #[error("No Converter for type [{type_name}]{}", format_context(.context))]
    NoConverter { type_name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unsupported conversion{}: {message}", format_context(.context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Base64 error{}: {source}", format_context(.context))]
    Base64 { source: base64::DecodeError, context: Option<Cow<'static, str>> },

    #[error("Text error{}: {source}", format_context(.context))]
    Text { source: TextError, context: Option<Cow<'static, str>> },

    #[error("Convert error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ConvertError {
    pub(crate) fn unsupported(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unsupported { message: message.into(), context: None }
    }
}
