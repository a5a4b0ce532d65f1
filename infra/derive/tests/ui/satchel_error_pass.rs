use satchel_derive::satchel_error;
use std::borrow::Cow;

#[satchel_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("disk")).context("reading")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading): disk");

    let err: DemoError = "boom".into();
    assert!(matches!(err, DemoError::Internal { .. }));
    assert_eq!(err.to_string(), "Internal error: boom");
}
