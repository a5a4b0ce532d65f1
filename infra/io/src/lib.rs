//! Byte buffers and blocking stream helpers.
//!
//! - **[`FastByteBuffer`]** and **[`FastOutputStream`]**: chunked in-memory sinks that never
//!   copy earlier output when growing.
//! - **[`util`]**: copy with progress, charset-aware read/write, hex sniffing and JSON-lines
//!   object streams.
//! - **[`file_util`]**: whole-file text helpers.
//! - **[`batch`]**: upsert-style batch writes through a [`BatchMapper`].
//!
//! # Examples
//!
//! ```rust
//! use satchel_io::{FastOutputStream, util};
//!
//! let mut out = FastOutputStream::new();
//! let copied = util::copy(&mut util::to_utf8_stream("payload"), &mut out).unwrap();
//!
//! assert_eq!(copied, 7);
//! assert_eq!(out.to_string(), "payload");
//! ```

mod buffer;
mod error;
mod stream;

pub mod batch;
pub mod file_util;
pub mod util;

pub use crate::batch::{BatchMapper, Identified, write_batch};
pub use crate::buffer::FastByteBuffer;
pub use crate::error::{IoError, IoErrorExt};
pub use crate::stream::FastOutputStream;
pub use crate::util::StreamProgress;
