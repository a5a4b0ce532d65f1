use satchel_derive::satchel_error;
use std::borrow::Cow;

#[satchel_error]
pub enum ParseError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Int {
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },
}

fn parse(raw: &str) -> Result<i32, ParseError> {
    raw.parse::<i32>().with_context(|| format!("parsing `{raw}`"))
}

fn main() {
    assert_eq!(parse("42").ok(), Some(42));
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (parsing `x`):"));
}
