//! Kernel utilities shared across the Satchel crates.
//! Keep this crate lightweight: it hosts config loading, argument assertions and the
//! [`UtilError`] every helper crate falls back to.
//!
//! ## Assertions
//! ```rust
//! use satchel_kernel::Assert;
//!
//! let port = Assert::not_null(Some(8080), "port is required", &[]).unwrap();
//! assert_eq!(port, 8080);
//! assert!(Assert::not_blank("  ", "name of {} is blank", &[&"user"]).is_err());
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use satchel_kernel::config::load_config;
//! use satchel_kernel::domain::config::SatchelConfig;
//!
//! let cfg: SatchelConfig = load_config(Some("config/satchel")).unwrap_or_default();
//! ```
pub mod assert;
pub mod config;
pub mod error;
pub mod exception;

pub use crate::assert::Assert;
pub use crate::error::{UtilError, UtilErrorExt};
pub use satchel_domain as domain;
