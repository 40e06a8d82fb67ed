//! [`Grouped<K, E>`]: the result of [`Sequence::group_by`](crate::Sequence::group_by).
//!
//! Groups are kept in the order their key first appeared in the source, and each group
//! holds its elements in source order. Lookups by key go through a side index.

use crate::Sequence;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Debug)]
pub struct Grouped<K, E> {
    groups: Vec<(K, Vec<E>)>,
    index: HashMap<K, usize>,
}

impl<K, E> Default for Grouped<K, E> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, E> Grouped<K, E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `element` to the bucket for `key`, opening a new bucket on first sight.
    pub fn push(&mut self, key: K, element: E) {
        match self.index.get(&key) {
            Some(&slot) => self.groups[slot].1.push(element),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![element]));
            }
        }
    }

    /// Elements grouped under `key`.
    pub fn get(&self, key: &K) -> Option<&[E]> {
        self.index.get(key).map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Convert into a plain map, dropping key order.
    #[must_use]
    pub fn into_map(self) -> HashMap<K, Vec<E>> {
        self.groups.into_iter().collect()
    }
}

impl<K, E> Grouped<K, E> {
    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(k, _)| k)
    }

    /// `(key, elements)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[E])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// One sequence per group, in first-occurrence order.
    #[must_use]
    pub fn into_sequences(self) -> Sequence<(K, Sequence<E>)> {
        self.groups
            .into_iter()
            .map(|(k, v)| (k, Sequence::new(v)))
            .collect()
    }
}

impl<K: PartialEq, E: PartialEq> PartialEq for Grouped<K, E> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K, E> IntoIterator for Grouped<K, E> {
    type Item = (K, Vec<E>);
    type IntoIter = std::vec::IntoIter<(K, Vec<E>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<K: Eq + Hash + Clone, E> FromIterator<(K, E)> for Grouped<K, E> {
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let mut g = Self::new();
        for (k, e) in iter {
            g.push(k, e);
        }
        g
    }
}
