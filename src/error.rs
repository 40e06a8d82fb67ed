//! Error types for sequence operators.
//!
//! Two tiers are modeled here:
//!
//! - **Precondition violations** (empty input, no match, non-unique match, out-of-range
//!   index or count). The strict operators (`first`, `take`, `element_at`, ...) panic with
//!   the `Display` text of the matching [`SeqError`]; their `try_*` twins hand the same
//!   value back to the caller instead.
//! - **Recoverable argument errors** such as [`Sequence::remove_range`](crate::Sequence::remove_range),
//!   which always return a [`Result`] and never panic.
//!
//! Expected absence (`*_or_default`, `remove`, `remove_all`) never produces an error.

use thiserror::Error;

/// Canonical result for sequence operators.
pub type Result<T> = std::result::Result<T, SeqError>;

#[derive(Debug, Error)]
pub enum SeqError {
    #[error("ironlinq: {op}(): empty sequence")]
    Empty { op: &'static str },

    #[error("ironlinq: {op}(): no element satisfies the predicate")]
    NoMatch { op: &'static str },

    #[error("ironlinq: {op}(): expected exactly one matching element, found {count}")]
    NotUnique { op: &'static str, count: usize },

    #[error("ironlinq: {op}(): index {index} out of range for length {len}")]
    IndexOutOfRange {
        op: &'static str,
        index: isize,
        len: usize,
    },

    #[error("ironlinq: {op}(): count {count} out of range for length {len}")]
    CountOutOfRange {
        op: &'static str,
        count: isize,
        len: usize,
    },

    #[error("ironlinq: remove_range(): range (index {index}, count {count}) out of bounds for length {len}")]
    RangeOutOfBounds {
        index: isize,
        count: isize,
        len: usize,
    },

    #[cfg(feature = "parallel")]
    #[error("ironlinq: failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl SeqError {
    /// Name of the operator that raised the error, when it has one.
    #[must_use]
    pub const fn op(&self) -> Option<&'static str> {
        match self {
            Self::Empty { op }
            | Self::NoMatch { op }
            | Self::NotUnique { op, .. }
            | Self::IndexOutOfRange { op, .. }
            | Self::CountOutOfRange { op, .. } => Some(op),
            Self::RangeOutOfBounds { .. } => Some("remove_range"),
            #[cfg(feature = "parallel")]
            Self::ThreadPool(_) => None,
        }
    }

    /// `true` for the precondition-violation tier (the errors strict operators panic with).
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::Empty { .. }
                | Self::NoMatch { .. }
                | Self::NotUnique { .. }
                | Self::IndexOutOfRange { .. }
                | Self::CountOutOfRange { .. }
        )
    }
}

/// Abort the current call with a precondition violation.
///
/// Strict operators funnel through here so every fatal fault carries the operator name
/// and is logged once before unwinding.
#[track_caller]
pub(crate) fn fail(err: SeqError) -> ! {
    tracing::error!(op = err.op().unwrap_or("unknown"), "{err}");
    panic!("{err}")
}

/// Unwrap a strict operator's result, panicking on a precondition violation.
#[track_caller]
pub(crate) fn strict<T>(res: Result<T>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => fail(e),
    }
}
