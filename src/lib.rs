//! # Indexed for-each
//!
//! Visit every element of a sequence together with its zero-based position,
//! without declaring and bumping an index variable next to the loop.
//!
//! ## Usage Example
//!
//! ```
//! let mut report = Vec::new();
//! enumerate::over(["First", "Second"], |item, i| {
//!     report.push(format!("{i}: {item}"));
//! });
//! assert_eq!(report, ["0: First", "1: Second"]);
//! ```
//!
//! ## Entry points
//!
//! - [`over`]: call a task for every `(item, index)` pair
//! - [`try_over`]: fallible task, stops at the first error
//! - [`over_while`]: task returns whether to keep going
//! - [`Enumerator`]: the same operations with a configurable start index
//!
//! Any `IntoIterator` is accepted, so vectors, fixed-size arrays, slices and
//! plain iterators all enumerate identically. Traversal is synchronous and
//! single-pass; indices always follow the sequence's own iteration order.

#![warn(missing_docs, missing_debug_implementations)]

mod enumerate;
mod error;
mod iteration;

pub use enumerate::{over, over_while, try_over, Enumerator};
pub use error::EnumerateError;
pub use iteration::{Flow, Iteration};
