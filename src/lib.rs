//! # Ironlinq
//!
//! **LINQ-style query operators** for in-memory Rust collections. Ironlinq wraps a
//! `Vec<T>` in a [`Sequence<T>`] and gives it a chainable, eager operator set: filtering,
//! projection, ordering, grouping, aggregation, set-like membership and in-place
//! mutation, plus two parallel primitives.
//!
//! ## Key Features
//!
//! - **Eager, chainable operators** - every call materializes a new sequence
//! - **Strict and lenient access** - `first` panics, `try_first` returns an error,
//!   `first_or_default` returns `T::default()`
//! - **Stable ordering** - `order_by` / `order_by_descending` keep equal keys in input order
//! - **Ordered grouping** - `group_by` keeps first-occurrence key order
//! - **Numeric aggregation** - `sum`, `max`, `min` through the [`Numbers`] view
//! - **Parallel evaluation** - order-preserving `select_par` and bounded-concurrency
//!   `for_each_bounded` (feature `parallel`, on by default)
//!
//! ## Quick Start
//!
//! ```
//! use ironlinq::*;
//!
//! let s = from_iter(0..10);
//!
//! assert_eq!(s.filter(|i| i % 2 == 0).as_slice(), &[0, 2, 4, 6, 8]);
//! assert_eq!(s.take_last(3).as_slice(), &[7, 8, 9]);
//! assert_eq!(
//!     s.order_by_descending(|&i| i).as_slice(),
//!     &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]
//! );
//! assert_eq!(s.numbers().sum(|&i| i), 45);
//! ```
//!
//! ## Core Concepts
//!
//! ### Two method groups
//!
//! Operators either **mutate the receiver** (`&mut self`: [`add`](Sequence::add),
//! [`remove`](Sequence::remove), [`remove_range`](Sequence::remove_range),
//! [`clear`](Sequence::clear), ...) and return at most a status, or are **pure**
//! (`&self`) and return a fresh sequence or value. No operator does both.
//!
//! ### Equality
//!
//! Membership operators (`contains`, `remove`, `distinct`, `replace_all`) use the element
//! type's `PartialEq`. Deriving it compares every field recursively.
//!
//! ### Errors
//!
//! Precondition violations (out-of-range counts, empty input, non-unique matches) panic
//! in the strict operators with a message naming the operator, e.g.
//! `ironlinq: take(): count 11 out of range for length 10`. Each strict operator has a
//! `try_*` twin returning [`SeqError`]. [`Sequence::remove_range`] always returns a
//! [`Result`] and leaves the sequence untouched on error.
//!
//! ### Logging
//!
//! Parallel primitives and fail-fast paths emit [`tracing`] events. Install any
//! subscriber to see them; the library installs none.
//!
//! ## Module Overview
//!
//! - [`sequence`] - the `Sequence` type and its mutating group
//! - [`grouped`] - the ordered result of `group_by`
//! - [`numeric`] - `Number` trait and `Numbers` aggregation view
//! - [`parallel`] - `select_par`, `for_each_bounded` and `Parallelism` settings
//! - [`error`] - `SeqError`
//! - [`testing`] - assertions and fixtures for tests

pub mod error;
pub mod grouped;
pub mod helpers;
pub mod numeric;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequence;
pub mod testing;

// General re-exports
pub use error::{Result, SeqError};
pub use grouped::Grouped;
pub use helpers::*;
pub use numeric::{Number, Numbers};
pub use ordered_float::OrderedFloat;
pub use sequence::{Sequence, no_predicate};

// Gated re-exports
#[cfg(feature = "parallel")]
pub use parallel::{DEFAULT_BUFFER, Parallelism, default_limit};
