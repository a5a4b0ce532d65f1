use serde::{Deserialize, Serialize};

/// Uniform response envelope: a numeric status code, a message and an optional payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultVo<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ResultVo<T> {
    pub fn new(code: i32, message: impl Into<String>, data: Option<T>) -> Self {
        Self { code, message: message.into(), data }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == crate::constants::SUCCESS_CODE
    }
}
