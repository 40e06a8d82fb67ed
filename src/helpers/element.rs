//! Element access: `element_at`, `first`, `last`, `single`.
//!
//! Each operator comes in three shapes:
//!
//! - strict (`first`) panics on a precondition violation,
//! - `try_*` (`try_first`) returns the same condition as a [`SeqError`],
//! - `*_or_default` (`first_or_default`) returns `T::default()` instead.
//!
//! Returned elements are clones; the receiver is never modified.

use crate::error::{Result, SeqError, strict};
use crate::Sequence;

impl<T: Clone> Sequence<T> {
    /// Element at `index`.
    ///
    /// # Errors
    /// [`SeqError::IndexOutOfRange`] when `index` is negative or not below `len()`.
    pub fn try_element_at(&self, index: isize) -> Result<T> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get(i))
            .cloned()
            .ok_or(SeqError::IndexOutOfRange {
                op: "element_at",
                index,
                len: self.items.len(),
            })
    }

    /// Element at `index`.
    ///
    /// # Panics
    /// When `index` is negative or not below `len()`.
    #[track_caller]
    pub fn element_at(&self, index: isize) -> T {
        strict(self.try_element_at(index))
    }

    /// First element satisfying `predicate`.
    ///
    /// # Errors
    /// [`SeqError::Empty`] on an empty sequence, [`SeqError::NoMatch`] when nothing matches.
    pub fn try_first<P>(&self, predicate: P) -> Result<T>
    where
        P: Fn(&T) -> bool,
    {
        if self.items.is_empty() {
            return Err(SeqError::Empty { op: "first" });
        }
        self.items
            .iter()
            .find(|t| predicate(t))
            .cloned()
            .ok_or(SeqError::NoMatch { op: "first" })
    }

    /// First element satisfying `predicate`.
    ///
    /// # Panics
    /// When the sequence is empty or no element matches.
    #[track_caller]
    pub fn first<P>(&self, predicate: P) -> T
    where
        P: Fn(&T) -> bool,
    {
        strict(self.try_first(predicate))
    }

    /// Last element satisfying `predicate`, searching from the back.
    ///
    /// # Errors
    /// [`SeqError::Empty`] on an empty sequence, [`SeqError::NoMatch`] when nothing matches.
    pub fn try_last<P>(&self, predicate: P) -> Result<T>
    where
        P: Fn(&T) -> bool,
    {
        if self.items.is_empty() {
            return Err(SeqError::Empty { op: "last" });
        }
        self.items
            .iter()
            .rev()
            .find(|t| predicate(t))
            .cloned()
            .ok_or(SeqError::NoMatch { op: "last" })
    }

    /// Last element satisfying `predicate`.
    ///
    /// # Panics
    /// When the sequence is empty or no element matches.
    #[track_caller]
    pub fn last<P>(&self, predicate: P) -> T
    where
        P: Fn(&T) -> bool,
    {
        strict(self.try_last(predicate))
    }

    /// The only element satisfying `predicate`.
    ///
    /// # Errors
    /// [`SeqError::Empty`] on an empty sequence, [`SeqError::NoMatch`] when nothing matches,
    /// [`SeqError::NotUnique`] when more than one element matches.
    pub fn try_single<P>(&self, predicate: P) -> Result<T>
    where
        P: Fn(&T) -> bool,
    {
        if self.items.is_empty() {
            return Err(SeqError::Empty { op: "single" });
        }
        let mut matches = self.items.iter().filter(|t| predicate(t));
        let Some(found) = matches.next() else {
            return Err(SeqError::NoMatch { op: "single" });
        };
        match matches.count() {
            0 => Ok(found.clone()),
            more => Err(SeqError::NotUnique {
                op: "single",
                count: more + 1,
            }),
        }
    }

    /// The only element satisfying `predicate`.
    ///
    /// # Panics
    /// Unless exactly one element matches.
    #[track_caller]
    pub fn single<P>(&self, predicate: P) -> T
    where
        P: Fn(&T) -> bool,
    {
        strict(self.try_single(predicate))
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// Element at `index`, or `T::default()` when `index` is negative or out of range.
    pub fn element_at_or_default(&self, index: isize) -> T {
        self.try_element_at(index).unwrap_or_default()
    }

    /// First element satisfying `predicate`, or `T::default()`.
    pub fn first_or_default<P>(&self, predicate: P) -> T
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .find(|t| predicate(t))
            .cloned()
            .unwrap_or_default()
    }

    /// Last element satisfying `predicate`, or `T::default()`.
    pub fn last_or_default<P>(&self, predicate: P) -> T
    where
        P: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .rev()
            .find(|t| predicate(t))
            .cloned()
            .unwrap_or_default()
    }

    /// The only element satisfying `predicate`, or `T::default()` unless exactly one matches.
    pub fn single_or_default<P>(&self, predicate: P) -> T
    where
        P: Fn(&T) -> bool,
    {
        self.try_single(predicate).unwrap_or_default()
    }
}
