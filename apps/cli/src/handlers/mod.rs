pub mod convert;
pub mod file;
pub mod text;
pub mod url;
pub mod validate;

use serde::Serialize;
use std::fmt::Display;

/// What a subcommand produced: the plain-text rendering and the JSON payload.
#[derive(Debug)]
pub struct Reply {
    pub text: String,
    pub data: serde_json::Value,
}

impl Reply {
    /// Text from `Display`, payload from `Serialize`.
    pub fn of<T: Display + Serialize>(value: &T) -> anyhow::Result<Self> {
        Ok(Self { text: value.to_string(), data: serde_json::to_value(value)? })
    }
}
