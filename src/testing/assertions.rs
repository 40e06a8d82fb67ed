//! Assertion functions for testing sequence outputs.
//!
//! Every assertion accepts anything that implements `AsRef<[T]>` (`Sequence<T>`, `Vec<T>`,
//! arrays) and panics with the full actual/expected contents on mismatch.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use ironlinq::Sequence;
/// use ironlinq::testing::assert_sequence_eq;
///
/// let actual = Sequence::from([1, 2, 3]);
/// assert_sequence_eq(&actual, &[1, 2, 3]);
/// ```
pub fn assert_sequence_eq<T: Debug + PartialEq>(actual: impl AsRef<[T]>, expected: impl AsRef<[T]>) {
    let (actual, expected) = (actual.as_ref(), expected.as_ref());
    assert_eq!(
        actual.len(),
        expected.len(),
        "Sequence length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Sequence mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections hold the same multiset of elements, ignoring order.
///
/// Duplicates count: `[1, 1, 2]` and `[1, 2, 2]` are not equal.
///
/// # Panics
///
/// Panics if any element occurs a different number of times in the two collections.
///
/// # Example
///
/// ```
/// use ironlinq::testing::assert_unordered_eq;
///
/// assert_unordered_eq(&[3, 1, 2, 1], &[1, 1, 2, 3]);
/// ```
pub fn assert_unordered_eq<T: Debug + Eq + Hash>(actual: impl AsRef<[T]>, expected: impl AsRef<[T]>) {
    let (actual, expected) = (actual.as_ref(), expected.as_ref());
    let (got, want) = (tally(actual), tally(expected));

    if got != want {
        let missing: Vec<_> = want
            .iter()
            .filter(|&(k, &n)| got.get(k).copied().unwrap_or(0) < n)
            .map(|(k, _)| k)
            .collect();
        let extra: Vec<_> = got
            .iter()
            .filter(|&(k, &n)| want.get(k).copied().unwrap_or(0) < n)
            .map(|(k, _)| k)
            .collect();
        panic!(
            "Sequence content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

fn tally<T: Eq + Hash>(xs: &[T]) -> HashMap<&T, usize> {
    let mut m: HashMap<&T, usize> = HashMap::new();
    for x in xs {
        *m.entry(x).or_default() += 1;
    }
    m
}

/// Assert that all elements satisfy a predicate.
///
/// # Panics
///
/// Panics if any element does not satisfy the predicate.
///
/// # Example
///
/// ```
/// use ironlinq::testing::assert_all;
///
/// assert_all(&[2, 4, 6, 8], |x| x % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: impl AsRef<[T]>, predicate: impl Fn(&T) -> bool) {
    let collection = collection.as_ref();
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that no element satisfies a predicate.
///
/// # Panics
///
/// Panics if any element satisfies the predicate.
pub fn assert_none<T: Debug>(collection: impl AsRef<[T]>, predicate: impl Fn(&T) -> bool) {
    let collection = collection.as_ref();
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Run `f` and assert that it panics with a message containing `needle`.
///
/// Meant for the fail-fast operators, whose messages always name the operator.
///
/// # Panics
///
/// Panics if `f` returns normally or panics with a message that lacks `needle`.
///
/// # Example
///
/// ```
/// use ironlinq::Sequence;
/// use ironlinq::testing::assert_panics_with;
///
/// let s = Sequence::from([1, 2, 3]);
/// assert_panics_with(
///     || {
///         let _ = s.take(4);
///     },
///     "take()",
/// );
/// ```
pub fn assert_panics_with<F: FnOnce()>(f: F, needle: &str) {
    let payload = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => panic!("Expected a panic containing {needle:?}, but the call returned normally"),
        Err(payload) => payload,
    };
    let msg = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("<non-string panic payload>");
    assert!(
        msg.contains(needle),
        "Panic message mismatch:\n  Expected to contain: {needle:?}\n  Actual: {msg:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Sequence mismatch at index 1")]
    fn ordered_mismatch_reports_index() {
        assert_sequence_eq(&[1, 2, 3], &[1, 9, 3]);
    }

    #[test]
    #[should_panic(expected = "Sequence content mismatch")]
    fn unordered_counts_duplicates() {
        assert_unordered_eq(&[1, 1, 2], &[1, 2, 2]);
    }

    #[test]
    fn panics_with_accepts_formatted_messages() {
        assert_panics_with(|| panic!("op {}(): boom", "first"), "first(): boom");
    }
}
