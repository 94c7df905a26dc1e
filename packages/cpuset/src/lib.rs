#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Utilities for parsing and emitting strings in the `cpuset` format used to describe processor
//! affinity masks and similar lists of numeric hardware identifiers.
//!
//! Example cpuset string: `0-3,7,9-11`
//!
//! # Format
//!
//! The value is a comma-separated list of zero or more items, where each item is either:
//!
//! * a single integer (e.g. `7`)
//! * an inclusive range of integers (e.g. `9-11`, equivalent to `9,10,11`)
//!
//! Whitespace, stride operators or other separators are not allowed anywhere in the string.
//!
//! The identifiers are of type `i64`. Parsing can only ever produce non-negative values because
//! `-` is the range separator, while emitting accepts any `i64` and renders negative values with
//! their sign.
//!
//! Unlike a mathematical set, a cpuset value is a sorted sequence that may contain duplicates.
//! Parsing `0,1,1,3` yields `[0, 1, 1, 3]` and no deduplication takes place in either direction.
//!
//! # Example
//!
//! ```
//! let selected_processors = cpuset::parse("0-3,7,9-11").unwrap();
//! assert_eq!(selected_processors, vec![0, 1, 2, 3, 7, 9, 10, 11]);
//!
//! assert_eq!(cpuset::unparse(selected_processors), "0-3,7,9-11");
//! ```
//!
//! Values do not need to be sorted before emitting them:
//!
//! ```
//! let processors = [11, 3, 9, 0, 10];
//!
//! assert_eq!(cpuset::unparse(processors), "0,3,9-11");
//! ```
//!
//! The [`CpuSet`] type wraps the same conversions in a value that can be stored in configuration
//! structures:
//!
//! ```
//! use cpuset::CpuSet;
//!
//! let cpus: CpuSet = "4-5,0".parse().unwrap();
//! assert_eq!(cpus.as_slice(), &[0, 4, 5]);
//! assert_eq!(cpus.to_string(), "0,4-5");
//! ```

mod cpu_set;
mod error;
mod parse;
mod unparse;

pub use cpu_set::*;
pub use error::*;
pub use parse::*;
pub use unparse::*;

pub(crate) type Item = i64;

/// Returns an empty cpuset value.
///
/// The result is a valid, zero-length sequence, the same value that parsing an empty string
/// produces. It is distinct from the absence of a value (`None`).
///
/// # Example
///
/// ```
/// assert!(cpuset::empty().is_empty());
/// assert_eq!(cpuset::empty(), cpuset::parse("").unwrap());
/// ```
#[must_use]
#[inline]
pub fn empty() -> Vec<Item> {
    Vec::new()
}

/// Copies the values into a new vector and sorts it in ascending order.
pub(crate) fn sorted(values: impl IntoIterator<Item = Item>) -> Vec<Item> {
    let mut values: Vec<Item> = values.into_iter().collect();
    values.sort_unstable();
    values
}
