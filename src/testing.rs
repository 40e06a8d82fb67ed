//! Testing utilities for code built on ironlinq sequences.
//!
//! - **Assertions**: compare operator outputs with expected results, including
//!   order-insensitive comparison for parallel operators and panic-message checks for
//!   the fail-fast operators.
//! - **Fixtures**: small ready-made sequences for common scenarios.
//!
//! # Quick Start
//!
//! ```
//! use ironlinq::testing::*;
//!
//! let evens = digits().filter(|i| i % 2 == 0);
//! assert_sequence_eq(&evens, &[0, 2, 4, 6, 8]);
//!
//! let shuffled = digits().order_by(|i| (i % 3, *i));
//! assert_unordered_eq(&shuffled, &digits());
//!
//! assert_panics_with(
//!     || {
//!         let _ = digits().skip(11);
//!     },
//!     "skip()",
//! );
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
