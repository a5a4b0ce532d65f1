use std::borrow::Cow;

#[satchel_derive::satchel_error]
pub enum TextError {
    #[error("Unsupported charset{}: {message}", format_context(.context))]
    UnsupportedCharset { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
