//! Projection: `select` and `select_many`.

use crate::Sequence;

impl<T> Sequence<T> {
    /// Map every element through `f`. Length and order are preserved.
    ///
    /// ```
    /// use ironlinq::Sequence;
    ///
    /// let names = Sequence::from([("Ann", 12), ("Jack", 11)]).select(|u| u.0);
    /// assert_eq!(names.as_slice(), &["Ann", "Jack"]);
    /// ```
    #[doc(alias = "map")]
    pub fn select<O, F>(&self, f: F) -> Sequence<O>
    where
        F: Fn(&T) -> O,
    {
        self.items.iter().map(f).collect()
    }

    /// Map every element to zero or more outputs and flatten them into one sequence.
    ///
    /// Outputs of earlier elements come first; each element's outputs keep the order
    /// `selector` produced them in.
    #[doc(alias = "flat_map")]
    pub fn select_many<O, I, F>(&self, selector: F) -> Sequence<O>
    where
        I: IntoIterator<Item = O>,
        F: Fn(&T) -> I,
    {
        self.items.iter().flat_map(selector).collect()
    }
}
