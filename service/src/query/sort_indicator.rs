//! [`Query`] of a [`SortIndicator`].

use std::convert::Infallible;

use crate::{
    read::{SortField, SortIndicator},
    Service,
};

use super::Query;

/// [`Query`] of the [`SortIndicator`] of the provided [`SortField`].
#[derive(Clone, Copy, Debug)]
pub struct SortIndicatorOf(pub SortField);

impl<Src, C> Query<SortIndicatorOf> for Service<Src, C> {
    type Ok = SortIndicator;
    type Err = Infallible;

    async fn execute(
        &self,
        SortIndicatorOf(field): SortIndicatorOf,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.sorting().indicator(field))
    }
}
