//! [`Command`] definition.

pub mod clear_sorting;
pub mod load_catalog;
pub mod load_more;
pub mod reset_filters;
pub mod set_sorting;
pub mod update_filters;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    clear_sorting::ClearSorting, load_catalog::LoadCatalog,
    load_more::LoadMore, reset_filters::ResetFilters, set_sorting::SetSorting,
    update_filters::UpdateFilters,
};
