//! The [`Sequence<T>`] container and its in-place mutation group.
//!
//! Operators on a sequence fall into two disjoint groups:
//!
//! - **Mutating** (`&mut self`): [`add`](Sequence::add), [`add_range`](Sequence::add_range),
//!   [`remove`](Sequence::remove), [`remove_all`](Sequence::remove_all),
//!   [`remove_at`](Sequence::remove_at), [`remove_range`](Sequence::remove_range) and
//!   [`clear`](Sequence::clear). These change the receiver and return at most a status.
//! - **Value-returning** (`&self`): everything else, defined across the `helpers` modules.
//!   These never touch the receiver and always hand back a freshly allocated result.

use crate::error::{Result, SeqError};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered, insertion-order-preserving collection of `T`.
///
/// Duplicates are allowed. Membership operators (`contains`, `remove`, `distinct`,
/// `replace_all`) compare elements with `PartialEq`, so deriving it on your element type
/// gives deep structural equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Sequence<T> {
    /// Wrap an existing vector without copying.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// An empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`len`](Self::len).
    #[must_use]
    pub fn length(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the sequence and return the backing vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Run `f` on every element in order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.items.iter().for_each(f);
    }

    /// Number of elements satisfying `predicate`.
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|t| predicate(t)).count()
    }

    /* ------------------------- mutating group ------------------------- */

    /// Append one element to the end of the sequence.
    pub fn add(&mut self, element: T) {
        self.items.push(element);
    }

    /// Append every element of `collection`, preserving its order.
    pub fn add_range<I>(&mut self, collection: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(collection);
    }

    /// Remove every element matching `predicate` and return how many were removed.
    pub fn remove_all<P>(&mut self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|t| !predicate(t));
        before - self.items.len()
    }

    /// Remove and return the element at `index`.
    ///
    /// Returns `None` and leaves the sequence untouched when `index` is negative or past
    /// the end.
    pub fn remove_at(&mut self, index: isize) -> Option<T> {
        let i = usize::try_from(index).ok()?;
        (i < self.items.len()).then(|| self.items.remove(i))
    }

    /// Remove `count` elements starting at `index`.
    ///
    /// # Errors
    /// [`SeqError::RangeOutOfBounds`] when `index` or `count` is negative, or when
    /// `index + count` runs past the end. The sequence is not modified in that case.
    pub fn remove_range(&mut self, index: isize, count: isize) -> Result<()> {
        let len = self.items.len();
        let oob = || SeqError::RangeOutOfBounds { index, count, len };
        let start = usize::try_from(index).map_err(|_| oob())?;
        let n = usize::try_from(count).map_err(|_| oob())?;
        let end = start.checked_add(n).filter(|&e| e <= len).ok_or_else(oob)?;
        self.items.drain(start..end);
        Ok(())
    }

    /// Drop every element.
    ///
    /// The backing storage is released rather than truncated, so no stale slots survive.
    pub fn clear(&mut self) {
        self.items = Vec::new();
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Remove the first element equal to `item`. Returns whether anything was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|t| t == item) {
            Some(i) => {
                self.items.remove(i);
                true
            }
            None => false,
        }
    }
}

impl<T: Clone> Sequence<T> {
    /// Copy the elements out into a new `Vec<T>`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(Vec::from(items))
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(seq: Sequence<T>) -> Self {
        seq.items
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

/// A predicate that accepts every element. Handy with `count`, `first` and friends.
///
/// ```
/// use ironlinq::{no_predicate, Sequence};
///
/// let s = Sequence::from([3, 1, 2]);
/// assert_eq!(s.count(no_predicate()), 3);
/// assert_eq!(s.first(no_predicate()), 3);
/// ```
#[must_use]
pub fn no_predicate<T>() -> impl Fn(&T) -> bool + Copy {
    |_: &T| true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_to_nine() -> Sequence<i32> {
        (1..=9).collect()
    }

    #[test]
    fn remove_range_removes_middle_block() {
        let mut s = one_to_nine();
        s.remove_range(2, 2).unwrap();
        assert_eq!(s.as_slice(), &[1, 2, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn remove_range_rejects_negative_and_overflow_without_mutating() {
        let mut s = one_to_nine();
        assert!(matches!(
            s.remove_range(-1, 3),
            Err(SeqError::RangeOutOfBounds { index: -1, count: 3, len: 9 })
        ));
        assert!(s.remove_range(0, -1).is_err());
        assert!(s.remove_range(8, 2).is_err());
        assert!(s.remove_range(isize::MAX, isize::MAX).is_err());
        assert_eq!(s, one_to_nine());

        s.remove_range(9, 0).unwrap();
        assert_eq!(s.len(), 9);
    }

    #[test]
    fn remove_only_drops_first_match() {
        let mut s = Sequence::from([1, 2, 1, 3]);
        assert!(s.remove(&1));
        assert_eq!(s.as_slice(), &[2, 1, 3]);
        assert!(!s.remove(&9));
    }

    #[test]
    fn remove_at_out_of_range_is_a_no_op() {
        let mut s = Sequence::from(['a', 'b', 'c']);
        assert_eq!(s.remove_at(-1), None);
        assert_eq!(s.remove_at(3), None);
        assert_eq!(s.remove_at(1), Some('b'));
        assert_eq!(s.as_slice(), &['a', 'c']);
    }

    #[test]
    fn clear_leaves_an_empty_sequence() {
        let mut s = one_to_nine();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        s.add(7);
        assert_eq!(s.as_slice(), &[7]);
    }
}
