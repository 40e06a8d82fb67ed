use std::collections::HashMap;
use std::hash::Hash;
use crate::{Grouped, Sequence};

impl<T> Sequence<T> {
    /// Partition elements by `key`, storing `element(t)` in each bucket.
    ///
    /// Buckets come out in first-occurrence order of their key; within a bucket elements
    /// keep source order. An empty source gives an empty [`Grouped`].
    ///
    /// ```
    /// use ironlinq::Sequence;
    ///
    /// let s = Sequence::from([("hello", 0), ("world", 9), ("hello", 2)]);
    /// let g = s.group_by(|p| p.0, |p| p.1);
    /// assert_eq!(g.get(&"hello"), Some(&[0, 2][..]));
    /// assert_eq!(g.keys().copied().collect::<Vec<_>>(), vec!["hello", "world"]);
    /// ```
    pub fn group_by<K, E, KF, EF>(&self, key: KF, element: EF) -> Grouped<K, E>
    where
        K: Eq + Hash + Clone,
        KF: Fn(&T) -> K,
        EF: Fn(&T) -> E,
    {
        self.items.iter().map(|t| (key(t), element(t))).collect()
    }

    /// Build a map from `key(t)` to `value(t)`. On key collision the later element wins.
    pub fn to_map_with_key_value<K, V, KF, VF>(&self, key: KF, value: VF) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: Fn(&T) -> K,
        VF: Fn(&T) -> V,
    {
        self.items.iter().map(|t| (key(t), value(t))).collect()
    }
}

impl<T: Clone> Sequence<T> {
    /// Build a map from `key(t)` to the element itself. On key collision the later
    /// element wins.
    pub fn to_map_with_key<K, KF>(&self, key: KF) -> HashMap<K, T>
    where
        K: Eq + Hash,
        KF: Fn(&T) -> K,
    {
        self.to_map_with_key_value(key, T::clone)
    }
}
