//! [`Command`] for updating the [`FilterCriteria`].

use std::convert::Infallible;

use tracerr::Traced;

#[cfg(doc)]
use crate::read::FilterCriteria;
use crate::{
    infra::{cache, Cache},
    read::FilterUpdate,
    Service,
};

use super::Command;

/// [`Command`] for updating the [`FilterCriteria`] with the fields present in
/// the provided [`FilterUpdate`].
///
/// Displayed apartments are rewound to the first page.
#[derive(Clone, Debug)]
pub struct UpdateFilters(pub FilterUpdate);

impl<Src, C> Command<UpdateFilters> for Service<Src, C>
where
    C: Cache<cache::Get, Ok = Option<String>, Err = Traced<cache::Error>>
        + Cache<cache::Put, Ok = (), Err = Traced<cache::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        UpdateFilters(update): UpdateFilters,
    ) -> Result<Self::Ok, Self::Err> {
        let _loading = self.start_loading();

        self.state.borrow_mut().filters.merge(update);
        self.rewind();

        let filters = self.filters();
        self.persist(cache::Key::Filters, &filters).await;
        Ok(())
    }
}
