//! [`Range`]-related definitions.

use itertools::{Itertools as _, MinMaxResult};

/// Inclusive range of values.
///
/// A [`Range`] with `min` greater than `max` is not rejected, it just
/// contains nothing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Range<T> {
    /// Lower bound of this [`Range`] (inclusive).
    pub min: T,

    /// Upper bound of this [`Range`] (inclusive).
    pub max: T,
}

impl<T> Range<T> {
    /// Creates a new [`Range`] out of the provided bounds.
    #[must_use]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd> Range<T> {
    /// Checks whether the provided `value` lies within this [`Range`].
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

impl<T: PartialOrd + Clone> Range<T> {
    /// Returns the smallest [`Range`] containing all the provided `values`.
    ///
    /// [`None`] is returned if there are no `values`.
    pub fn spanning(values: impl IntoIterator<Item = T>) -> Option<Self> {
        match values.into_iter().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some(Self::new(v.clone(), v)),
            MinMaxResult::MinMax(min, max) => Some(Self::new(min, max)),
        }
    }
}
