use std::borrow::Cow;

#[satchel_derive::satchel_error]
pub enum DateError {
    /// The input does not match the requested (or any known) layout.
    #[error("Date parse error{}: {message}", format_context(.context))]
    Parse { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Date error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
