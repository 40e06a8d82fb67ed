//! Distinct helpers: exact de-duplication keeping the first occurrence of each element.
//!
//! # Overview
//! - [`Sequence::distinct`] - pairwise `PartialEq` comparison, works for any element type
//! - [`Sequence::distinct_hashed`] - hash-assisted, for `Eq + Hash` elements
//!
//! Both return the same sequence for the same input: survivors appear in the order of
//! their first occurrence.

use crate::Sequence;
use std::collections::HashSet;
use std::hash::Hash;

impl<T: Clone + PartialEq> Sequence<T> {
    /// Drop repeated elements, keeping each one where it first appears.
    ///
    /// Quadratic in the number of distinct elements. Prefer
    /// [`distinct_hashed`](Self::distinct_hashed) when `T: Eq + Hash`.
    ///
    /// ```
    /// use ironlinq::Sequence;
    ///
    /// let s = Sequence::from([3, 1, 3, 2, 1]);
    /// assert_eq!(s.distinct().as_slice(), &[3, 1, 2]);
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut out: Vec<T> = Vec::new();
        for t in &self.items {
            if !out.contains(t) {
                out.push(t.clone());
            }
        }
        Self::new(out)
    }
}

impl<T: Clone + Eq + Hash> Sequence<T> {
    /// Same result as [`distinct`](Self::distinct), in linear time.
    #[must_use]
    pub fn distinct_hashed(&self) -> Self {
        let mut seen: HashSet<&T> = HashSet::with_capacity(self.items.len());
        self.items
            .iter()
            .filter(|t| seen.insert(*t))
            .cloned()
            .collect()
    }
}
