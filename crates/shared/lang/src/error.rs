use std::borrow::Cow;

#[satchel_derive::satchel_error(fallback = Invalid)]
pub enum ValidateError {
    /// The value failed a validation rule; `message` is the caller-supplied text.
    #[error("Validation failed{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ValidateError {
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Invalid { message: message.into(), context: None }
    }
}
