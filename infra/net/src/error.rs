use satchel_io::IoError;
use satchel_kernel::UtilError;
use std::borrow::Cow;

/// A specialized [`NetError`] enum of this crate.
#[satchel_derive::satchel_error]
pub enum NetError {
    #[error("URL parse error{}: {source}", format_context(.context))]
    Parse { source: url::ParseError, context: Option<Cow<'static, str>> },

    #[error("URL stream error{}: {source}", format_context(.context))]
    Io { source: IoError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Argument { source: UtilError, context: Option<Cow<'static, str>> },

    #[error("Internal URL error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
