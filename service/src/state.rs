//! Mutable state of a [`Service`].

use common::pagination::Page;

#[cfg(doc)]
use crate::Service;
use crate::{
    domain::Apartment,
    read::{FilterCriteria, SortCriteria},
};

/// Mutable state of a [`Service`].
#[derive(Debug, Default)]
pub(crate) struct State {
    /// All the loaded [`Apartment`]s, in load order.
    pub(crate) apartments: Vec<Apartment>,

    /// Current [`FilterCriteria`].
    pub(crate) filters: FilterCriteria,

    /// Current [`SortCriteria`].
    pub(crate) sorting: SortCriteria,

    /// Current [`Page`].
    pub(crate) page: Page,

    /// Number of [`Apartment`]s matching the current [`FilterCriteria`].
    pub(crate) filtered_count: usize,
}
