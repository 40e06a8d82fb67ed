//! Reordering: `reverse`, `order_by`, `order_by_descending`.
//!
//! Sorting is stable in both directions: elements whose keys compare equal keep their
//! input order. The receiver is left untouched; a sorted copy is returned.
//!
//! Keys must be `Ord`. For floating-point keys wrap them in
//! [`OrderedFloat`](crate::OrderedFloat):
//!
//! ```
//! use ironlinq::{OrderedFloat, Sequence};
//!
//! let prices = Sequence::from([2.5_f64, -1.0, 10.25]);
//! let sorted = prices.order_by(|&p| OrderedFloat(p));
//! assert_eq!(sorted.as_slice(), &[-1.0, 2.5, 10.25]);
//! ```

use crate::Sequence;
use std::cmp::Reverse;

impl<T: Clone> Sequence<T> {
    /// Elements in the opposite order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.items.iter().rev().cloned().collect()
    }

    /// Stable ascending sort by `key`.
    #[must_use]
    pub fn order_by<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut v = self.items.clone();
        v.sort_by_cached_key(|t| key(t));
        Self::new(v)
    }

    /// Stable descending sort by `key`. Equal keys keep their input order.
    #[must_use]
    pub fn order_by_descending<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut v = self.items.clone();
        v.sort_by_cached_key(|t| Reverse(key(t)));
        Self::new(v)
    }
}
