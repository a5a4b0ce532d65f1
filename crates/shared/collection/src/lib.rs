//! # Collection
//!
//! Helpers over slices, lists and maps, plus [`Dic`], an ordered string-keyed dictionary with
//! typed getters backed by the conversion registry.
//!
//! ```rust
//! use satchel_collection::{Dic, coll};
//!
//! let mut dic = Dic::case_insensitive();
//! dic.set("Age", "42").set("Name", "ann");
//! assert_eq!(dic.get_i32("AGE"), Some(42));
//!
//! let pages = coll::split(&[1, 2, 3, 4, 5], 2).unwrap();
//! assert_eq!(pages, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

pub mod array;
pub mod coll;
mod dic;
pub mod map;
pub mod sort;

pub use crate::dic::Dic;
