use satchel_derive::satchel_error;
use std::borrow::Cow;

#[satchel_error(fallback = Invalid)]
pub enum CheckError {
    #[error("Invalid value{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Out of range: {message}")]
    Range { message: Cow<'static, str> },
}

fn main() {
    let err: CheckError = String::from("not a number").into();
    assert!(matches!(err, CheckError::Invalid { .. }));

    let err: Result<(), CheckError> = Err("empty".into());
    let err = err.context("field `age`").unwrap_err();
    assert_eq!(err.to_string(), "Invalid value (field `age`): empty");

    let range = CheckError::Range { message: "too big".into() };
    assert_eq!(range.to_string(), "Out of range: too big");
}
