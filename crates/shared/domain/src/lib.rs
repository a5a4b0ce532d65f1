//! # Domain Models
//!
//! Pure data types shared by every Satchel crate. The only dependency is `serde`;
//! keep it that way: no I/O and no conversion logic, just settings and DTOs.

pub mod config;
pub mod constants;
pub mod result;
