//! Read-side definitions: criteria and derivation of catalog views.

pub mod filter;
pub mod sort;
pub mod view;

pub use self::{
    filter::{FilterCriteria, FilterUpdate},
    sort::{SortCriteria, SortField, SortIndicator, SortUpdate},
};
