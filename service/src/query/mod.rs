//! [`Query`] definition.

pub mod sort_indicator;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::sort_indicator::SortIndicatorOf;
