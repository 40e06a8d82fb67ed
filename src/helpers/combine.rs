//! Combination and construction: `append`, `prepend`, `replace_all`, `repeat`.

use crate::Sequence;

impl<T: Clone> Sequence<T> {
    /// A copy of this sequence followed by `elements`.
    ///
    /// ```
    /// use ironlinq::Sequence;
    ///
    /// let s = Sequence::from([0, 1]);
    /// assert_eq!(s.append([3, 5, 7]).as_slice(), &[0, 1, 3, 5, 7]);
    /// assert_eq!(s.append([]).as_slice(), &[0, 1]);
    /// ```
    #[must_use]
    pub fn append<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut v = self.items.clone();
        v.extend(elements);
        Self::new(v)
    }

    /// `elements` followed by a copy of this sequence.
    #[must_use]
    pub fn prepend<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut v: Vec<T> = elements.into_iter().collect();
        v.extend_from_slice(&self.items);
        Self::new(v)
    }

    /// `count` copies of `element`. A zero or negative `count` gives an empty sequence.
    #[must_use]
    pub fn repeat(element: T, count: isize) -> Self {
        repeat(element, count)
    }
}

impl<T: Clone + PartialEq> Sequence<T> {
    /// A copy with every element equal to `old` swapped for `new`.
    #[must_use]
    pub fn replace_all(&self, old: &T, new: &T) -> Self {
        self.items
            .iter()
            .map(|t| if t == old { new.clone() } else { t.clone() })
            .collect()
    }
}

/// `count` copies of `element`. A zero or negative `count` gives an empty sequence.
#[must_use]
pub fn repeat<T: Clone>(element: T, count: isize) -> Sequence<T> {
    let n = usize::try_from(count).unwrap_or(0);
    Sequence::new(vec![element; n])
}
