//! # Date
//!
//! Calendar helpers over [`chrono::NaiveDateTime`]. Dates are wall-clock values; conversions to
//! and from epoch milliseconds treat them as UTC.
//!
//! Patterns use the familiar `yyyy-MM-dd HH:mm:ss.SSS` notation and are translated to chrono's
//! `strftime` items internally.
//!
//! ```rust
//! use satchel_date::{Quarter, parse, year};
//!
//! let date = parse("2024年03月15日 08:30:00").unwrap();
//! assert_eq!(year(&date), 2024);
//! assert_eq!(Quarter::of_date(&date), Quarter::Q1);
//! ```

mod error;
pub mod pattern;
mod quarter;
mod util;

pub use crate::error::{DateError, DateErrorExt};
pub use crate::quarter::Quarter;
pub use crate::util::{
    format, from_millis, is_leap_year, parse, parse_with_format, this_year, to_millis, year,
};
pub use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
