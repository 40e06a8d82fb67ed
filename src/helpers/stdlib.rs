//! Standard library helpers for constructing [`Sequence`]s.
//!
//! These adapters turn native Rust data into a sequence. They're thin wrappers; the
//! interesting work happens in the operators.
//!
//! ### Overview
//! - [`from_vec`] -- Wraps a `Vec<T>` without copying.
//! - [`from_iter`] -- Collects any `IntoIterator<Item = T>`.
//! - [`from_map`] -- Combines each key/value pair of a map into one element.
//! - [`from_receiver`] -- Drains a channel until every sender is gone.
//!
//! ### Example
//! ```
//! use ironlinq::*;
//! use std::collections::BTreeMap;
//!
//! let numbers = from_iter(1..=5);
//! assert_eq!(numbers.select(|n| n * n).as_slice(), &[1, 4, 9, 16, 25]);
//!
//! let ages = BTreeMap::from([("ann", 12), ("ian", 15)]);
//! let labels = from_map(ages, |name, age| format!("{name}:{age}"));
//! assert_eq!(labels.as_slice(), &["ann:12".to_string(), "ian:15".to_string()]);
//! ```

use crate::Sequence;
use crossbeam_channel::Receiver;

/// Create a [`Sequence<T>`] from a pre-existing [`Vec<T>`].
#[must_use]
pub fn from_vec<T>(data: Vec<T>) -> Sequence<T> {
    Sequence::new(data)
}

/// Create a [`Sequence<T>`] from any iterator or collection implementing [`IntoIterator`].
pub fn from_iter<T, I>(iter: I) -> Sequence<T>
where
    I: IntoIterator<Item = T>,
{
    iter.into_iter().collect()
}

/// Create a [`Sequence<T>`] from an associative map, one element per entry.
///
/// `combiner` receives each key and value and builds the element. Element order follows
/// the map's own iteration order, which is arbitrary for a `HashMap`.
pub fn from_map<K, V, T, M, F>(map: M, mut combiner: F) -> Sequence<T>
where
    M: IntoIterator<Item = (K, V)>,
    F: FnMut(K, V) -> T,
{
    map.into_iter().map(|(k, v)| combiner(k, v)).collect()
}

/// Drain `rx` into a [`Sequence<T>`] in arrival order.
///
/// Blocks until every [`Sender`](crossbeam_channel::Sender) for the channel has been
/// dropped. A sender that is never dropped blocks the caller forever.
pub fn from_receiver<T>(rx: &Receiver<T>) -> Sequence<T> {
    let seq: Sequence<T> = rx.iter().collect();
    tracing::trace!(len = seq.len(), "channel closed; drained into sequence");
    seq
}

impl<T> Sequence<T> {
    /// See [`from_map`].
    pub fn from_map<K, V, M, F>(map: M, combiner: F) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
        F: FnMut(K, V) -> T,
    {
        from_map(map, combiner)
    }

    /// See [`from_receiver`].
    pub fn from_receiver(rx: &Receiver<T>) -> Self {
        from_receiver(rx)
    }
}
