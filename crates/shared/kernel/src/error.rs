use std::borrow::Cow;

/// General failure raised by the helper functions (the equivalent of an unchecked utility exception).
#[satchel_derive::satchel_error]
pub enum UtilError {
    /// A caller supplied an argument the helper cannot work with.
    #[error("Illegal argument{}: {message}", format_context(.context))]
    IllegalArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Utility error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl UtilError {
    /// Shorthand for [`UtilError::IllegalArgument`] without context.
    pub fn illegal_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::IllegalArgument { message: message.into(), context: None }
    }
}
