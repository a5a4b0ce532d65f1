//! # Text
//!
//! String and character helpers used throughout Satchel:
//!
//! * [`str_util`]: blank/empty checks, char-indexed substrings, null-safe comparison.
//! * [`format`](mod@format): `{}` placeholder templates with backslash escaping.
//! * [`charset::Charset`]: the small set of encodings the IO and URL helpers support.
//! * [`case`] and [`similarity`]: identifier casing and LCS-based string similarity.
//!
//! ## Example
//!
//! ```rust
//! use satchel_text::{strfmt, str_util};
//!
//! assert_eq!(strfmt!("{} + {} = {}", 1, 2, 3), "1 + 2 = 3");
//! assert_eq!(str_util::sub("hello", -3, 10), "llo");
//! assert!(str_util::is_blank(" \u{3000}\t"));
//! ```

pub mod case;
pub mod char_util;
pub mod charset;
mod error;
pub mod format;
pub mod similarity;
pub mod str_util;

pub use crate::charset::Charset;
pub use crate::error::{TextError, TextErrorExt};
