//! [`Command`] for resetting the [`FilterCriteria`].

use std::convert::Infallible;

use tracerr::Traced;

#[cfg(doc)]
use crate::Pacing;
use crate::{
    infra::{cache, Cache},
    read::FilterCriteria,
    Service,
};

use super::Command;

/// [`Command`] for resetting the [`FilterCriteria`] to the unrestricted ones,
/// spanning all the loaded apartments.
///
/// Completes no sooner than [`Pacing::reset_filters`].
#[derive(Clone, Copy, Debug)]
pub struct ResetFilters;

impl<Src, C> Command<ResetFilters> for Service<Src, C>
where
    C: Cache<cache::Get, Ok = Option<String>, Err = Traced<cache::Error>>
        + Cache<cache::Put, Ok = (), Err = Traced<cache::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: ResetFilters) -> Result<Self::Ok, Self::Err> {
        let _loading = self.start_loading();

        crate::pace(self.config().pacing.reset_filters).await;

        let filters = {
            let mut state = self.state.borrow_mut();
            state.filters = FilterCriteria::spanning(&state.apartments);
            state.filters.clone()
        };
        self.rewind();

        self.persist(cache::Key::Filters, &filters).await;
        Ok(())
    }
}
