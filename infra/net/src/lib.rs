//! URL helpers on top of the [`url`] crate.
//!
//! ```rust
//! use satchel_net::url_util;
//! use satchel_text::Charset;
//!
//! assert_eq!(url_util::normalize("example.com//docs\\api?v=1", false), "http://example.com/docs/api?v=1");
//! assert_eq!(url_util::encode("a b&c", Charset::Utf8), "a+b%26c");
//! assert_eq!(url_util::decode("a+b%26c", Charset::Utf8).unwrap(), "a b&c");
//! ```

mod error;
pub mod url_util;

pub use crate::error::{NetError, NetErrorExt};
pub use url::Url;
