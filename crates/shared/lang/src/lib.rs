//! # Lang
//!
//! Validation rules for common input formats, plus small object and response helpers.
//!
//! Free functions in [`validator`] use the default settings; [`Validator`] carries the
//! configurable ones.
//!
//! ```rust
//! use satchel_lang::{Validator, validator};
//!
//! assert!(validator::is_email("ann@example.com"));
//! assert!(validator::validate_ipv4("10.0.0.300", "bad address").is_err());
//! assert!(!Validator::new(1990).is_birthday("1985-07-01"));
//! ```

mod error;
pub mod obj;
pub mod pattern;
pub mod result;
pub mod validator;

pub use crate::error::{ValidateError, ValidateErrorExt};
pub use crate::validator::Validator;
pub use satchel_kernel::Assert;
