//! Numeric aggregation over projected element values: `sum`, `max`, `min`.
//!
//! Aggregation is kept off the core container: call [`Sequence::numbers`] to get a
//! [`Numbers`] view, then project each element to a [`Number`].
//!
//! ```
//! use ironlinq::Sequence;
//!
//! let temps = Sequence::from([("mon", -3_i32), ("tue", -7), ("wed", -1)]);
//! let n = temps.numbers();
//! assert_eq!(n.sum(|t| t.1), -11);
//! assert_eq!(n.max(|t| t.1), Some(-1));
//! assert_eq!(n.min(|t| f64::from(t.1)), Some(-7.0));
//! ```

use crate::Sequence;
use ordered_float::OrderedFloat;
use std::ops::Add;

/// Numeric-like values that can be summed and compared.
///
/// Implemented for every primitive integer and float type, plus the
/// [`OrderedFloat`] wrappers.
pub trait Number: Copy + PartialOrd + Add<Output = Self> + Default {}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(impl Number for $t {})*
    };
}

impl_number!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    OrderedFloat<f32>, OrderedFloat<f64>,
);

/// Aggregation view over a borrowed [`Sequence`].
#[derive(Clone, Copy, Debug)]
pub struct Numbers<'a, T> {
    seq: &'a Sequence<T>,
}

impl<T> Sequence<T> {
    /// Borrow this sequence for numeric aggregation.
    #[must_use]
    pub const fn numbers(&self) -> Numbers<'_, T> {
        Numbers { seq: self }
    }
}

impl<T> Numbers<'_, T> {
    /// Sum of `selector(t)` over all elements, starting from `N::default()` (zero).
    ///
    /// Addition is plain `+` on `N`. Integer overflow panics in debug builds and wraps in
    /// release builds; project into a wider type (e.g. `|&x| i64::from(x)`) when the total
    /// may not fit.
    pub fn sum<N, F>(&self, selector: F) -> N
    where
        N: Number,
        F: Fn(&T) -> N,
    {
        self.seq
            .items
            .iter()
            .fold(N::default(), |acc, t| acc + selector(t))
    }

    /// Largest `selector(t)`, or `None` for an empty sequence.
    ///
    /// Starts from the first element's value, so all-negative inputs are handled. Ties
    /// and incomparable values (NaN) keep the earlier value.
    pub fn max<N, F>(&self, selector: F) -> Option<N>
    where
        N: Number,
        F: Fn(&T) -> N,
    {
        self.extreme(selector, |cand, cur| cand > cur)
    }

    /// Smallest `selector(t)`, or `None` for an empty sequence.
    pub fn min<N, F>(&self, selector: F) -> Option<N>
    where
        N: Number,
        F: Fn(&T) -> N,
    {
        self.extreme(selector, |cand, cur| cand < cur)
    }

    fn extreme<N, F, B>(&self, selector: F, better: B) -> Option<N>
    where
        N: Number,
        F: Fn(&T) -> N,
        B: Fn(N, N) -> bool,
    {
        let mut it = self.seq.items.iter().map(selector);
        let first = it.next()?;
        Some(it.fold(first, |cur, cand| if better(cand, cur) { cand } else { cur }))
    }
}
