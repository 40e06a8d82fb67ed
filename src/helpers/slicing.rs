//! Filtering and slicing: `filter` (LINQ `Where`), `take`, `skip`, their `_last` and
//! `_while` variants.
//!
//! Counts are signed so that a negative request is representable and rejected. One bounds
//! rule applies to all four counted operators: `0 <= count <= len()`. Taking or skipping
//! exactly `len()` elements is allowed.

use crate::error::{Result, SeqError, strict};
use crate::Sequence;

/// Validate a count against `len`, naming `op` in the error.
fn checked_count(op: &'static str, count: isize, len: usize) -> Result<usize> {
    usize::try_from(count)
        .ok()
        .filter(|&n| n <= len)
        .ok_or(SeqError::CountOutOfRange { op, count, len })
}

impl<T: Clone> Sequence<T> {
    /// Elements satisfying `predicate`, in their original order.
    #[doc(alias = "where")]
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|t| predicate(t)).cloned().collect()
    }

    /// The first `count` elements.
    ///
    /// # Errors
    /// [`SeqError::CountOutOfRange`] when `count` is negative or greater than `len()`.
    pub fn try_take(&self, count: isize) -> Result<Self> {
        let n = checked_count("take", count, self.items.len())?;
        Ok(Self::new(self.items[..n].to_vec()))
    }

    /// The first `count` elements.
    ///
    /// # Panics
    /// When `count` is negative or greater than `len()`.
    #[track_caller]
    #[must_use]
    pub fn take(&self, count: isize) -> Self {
        strict(self.try_take(count))
    }

    /// Everything after the first `count` elements.
    ///
    /// # Errors
    /// [`SeqError::CountOutOfRange`] when `count` is negative or greater than `len()`.
    pub fn try_skip(&self, count: isize) -> Result<Self> {
        let n = checked_count("skip", count, self.items.len())?;
        Ok(Self::new(self.items[n..].to_vec()))
    }

    /// Everything after the first `count` elements.
    ///
    /// # Panics
    /// When `count` is negative or greater than `len()`.
    #[track_caller]
    #[must_use]
    pub fn skip(&self, count: isize) -> Self {
        strict(self.try_skip(count))
    }

    /// The last `count` elements.
    ///
    /// # Errors
    /// [`SeqError::CountOutOfRange`] when `count` is negative or greater than `len()`.
    pub fn try_take_last(&self, count: isize) -> Result<Self> {
        let len = self.items.len();
        let n = checked_count("take_last", count, len)?;
        Ok(Self::new(self.items[len - n..].to_vec()))
    }

    /// The last `count` elements.
    ///
    /// # Panics
    /// When `count` is negative or greater than `len()`.
    #[track_caller]
    #[must_use]
    pub fn take_last(&self, count: isize) -> Self {
        strict(self.try_take_last(count))
    }

    /// Everything except the last `count` elements.
    ///
    /// # Errors
    /// [`SeqError::CountOutOfRange`] when `count` is negative or greater than `len()`.
    pub fn try_skip_last(&self, count: isize) -> Result<Self> {
        let len = self.items.len();
        let n = checked_count("skip_last", count, len)?;
        Ok(Self::new(self.items[..len - n].to_vec()))
    }

    /// Everything except the last `count` elements.
    ///
    /// # Panics
    /// When `count` is negative or greater than `len()`.
    #[track_caller]
    #[must_use]
    pub fn skip_last(&self, count: isize) -> Self {
        strict(self.try_skip_last(count))
    }

    /// Leading elements up to (not including) the first one failing `predicate`.
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .take_while(|t| predicate(t))
            .cloned()
            .collect()
    }

    /// Everything from the first element failing `predicate` onwards.
    #[must_use]
    pub fn skip_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .skip_while(|t| predicate(t))
            .cloned()
            .collect()
    }
}
