//! Abstractions for cumulative ("load more") pagination.

use std::{cmp, num::NonZeroUsize};

/// Cumulative reveal policy.
///
/// The first [`Page`] reveals [`Reveal::initial`] items, and every next
/// [`Page`] reveals [`Reveal::increment`] more items on top of the previous
/// ones, so later pages always include the earlier results.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Reveal {
    /// Number of items revealed on the first [`Page`].
    pub initial: usize,

    /// Number of items added by every [`Page`] after the first one.
    pub increment: usize,
}

impl Reveal {
    /// Creates a new [`Reveal`] policy.
    #[must_use]
    pub const fn new(initial: usize, increment: usize) -> Self {
        Self { initial, increment }
    }

    /// Returns the total number of items to show on the provided [`Page`].
    #[must_use]
    pub fn items_to_show(&self, page: Page) -> usize {
        let extra_pages = page.get() - 1;
        self.initial
            .saturating_add(extra_pages.saturating_mul(self.increment))
    }

    /// Returns the prefix of `items` revealed on the provided [`Page`].
    #[must_use]
    pub fn revealed<'i, T>(&self, page: Page, items: &'i [T]) -> &'i [T] {
        &items[..cmp::min(self.items_to_show(page), items.len())]
    }
}

/// 1-based number of a page.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Page(NonZeroUsize);

impl Page {
    /// The first [`Page`].
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Creates a new [`Page`] out of its 1-based number.
    ///
    /// [`None`] is returned if the number is `0`.
    #[must_use]
    pub const fn new(num: usize) -> Option<Self> {
        match NonZeroUsize::new(num) {
            Some(num) => Some(Self(num)),
            None => None,
        }
    }

    /// Returns the 1-based number of this [`Page`].
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the [`Page`] following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Order of a sorted sequence.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize)
)]
pub enum Order {
    /// Ascending order.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "asc"))]
    Ascending,

    /// Descending order.
    #[cfg_attr(feature = "serde", serde(rename = "desc"))]
    Descending,
}

impl Order {
    /// Applies this [`Order`] to the provided ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: cmp::Ordering) -> cmp::Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}
