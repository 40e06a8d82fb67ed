//! Pre-built test datasets for common operator scenarios.

use crate::Sequence;
use serde::{Deserialize, Serialize};

/// Small record type with a nested field, for exercising structural equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleUser {
    pub name: String,
    pub age: u32,
    pub tags: Vec<String>,
}

impl SampleUser {
    #[must_use]
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
            tags: Vec::new(),
        }
    }
}

/// `0..=9` as a sequence.
///
/// # Example
///
/// ```
/// use ironlinq::testing::digits;
///
/// assert_eq!(digits().len(), 10);
/// ```
#[must_use]
pub fn digits() -> Sequence<i32> {
    (0..10).collect()
}

/// `(key, value)` pairs with interleaved keys, for grouping tests.
///
/// Grouping by key yields `hello: [0, 2, 4]` and `world: [9, 7, 5]`.
#[must_use]
pub fn greeting_pairs() -> Sequence<(String, i32)> {
    [
        ("hello", 0),
        ("hello", 2),
        ("world", 9),
        ("world", 7),
        ("hello", 4),
        ("world", 5),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// A handful of users, some sharing a name prefix and some with duplicate ages.
#[must_use]
pub fn sample_users() -> Sequence<SampleUser> {
    [
        ("A1", 31),
        ("A2", 17),
        ("B1", 45),
        ("C1", 17),
        ("C2", 28),
        ("D1", 62),
        ("A3", 28),
        ("C3", 9),
        ("A99", 40),
    ]
    .into_iter()
    .map(|(n, a)| SampleUser::new(n, a))
    .collect()
}
