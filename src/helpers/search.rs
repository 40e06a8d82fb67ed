//! Membership and predicate search: `contains`, `any`, `all`, `exists` and the `find*` family.
//!
//! None of these fail. Absence is reported as `false`, `None`, or the element type's
//! default value, and the receiver is never modified.

use crate::Sequence;

impl<T: PartialEq> Sequence<T> {
    /// `true` if some element is equal to `target`.
    ///
    /// Equality is the element type's `PartialEq`, so derived impls compare every field.
    ///
    /// ```
    /// use ironlinq::Sequence;
    ///
    /// #[derive(PartialEq)]
    /// struct User { name: String }
    ///
    /// let users = Sequence::from([User { name: "ann".into() }]);
    /// assert!(users.contains(&User { name: "ann".into() }));
    /// ```
    #[must_use]
    pub fn contains(&self, target: &T) -> bool {
        self.items.iter().any(|t| t == target)
    }
}

impl<T> Sequence<T> {
    /// `true` if at least one element satisfies `predicate`. Stops at the first hit.
    ///
    /// Always `false` on an empty sequence.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// `true` if every element satisfies `predicate`. Stops at the first miss.
    ///
    /// Always `true` on an empty sequence.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// Same as [`any`](Self::any).
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.any(predicate)
    }

    /// Position of the first element satisfying `predicate`.
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Position of the last element satisfying `predicate`.
    pub fn find_last_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().rposition(predicate)
    }
}

impl<T: Clone> Sequence<T> {
    /// Every element satisfying `predicate`, in order. Same as [`filter`](Self::filter).
    #[must_use]
    pub fn find_all<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.filter(predicate)
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// First element satisfying `predicate`, or `T::default()`.
    pub fn find<P>(&self, predicate: P) -> T
    where
        P: Fn(&T) -> bool,
    {
        self.first_or_default(predicate)
    }

    /// Last element satisfying `predicate`, or `T::default()`.
    pub fn find_last<P>(&self, predicate: P) -> T
    where
        P: Fn(&T) -> bool,
    {
        self.last_or_default(predicate)
    }
}
