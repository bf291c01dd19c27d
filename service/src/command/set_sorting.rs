//! [`Command`] for toggling sorting by a [`SortField`].

use std::convert::Infallible;

use tracerr::Traced;

#[cfg(doc)]
use crate::{read::SortCriteria, Pacing};
use crate::{
    infra::{cache, Cache},
    read::SortField,
    Service,
};

use super::Command;

/// [`Command`] for toggling sorting by the provided [`SortField`], as
/// [`SortCriteria::toggle()`] does.
///
/// Displayed apartments are rewound to the first page. Completes no sooner
/// than [`Pacing::set_sorting`].
#[derive(Clone, Copy, Debug)]
pub struct SetSorting(pub SortField);

impl<Src, C> Command<SetSorting> for Service<Src, C>
where
    C: Cache<cache::Get, Ok = Option<String>, Err = Traced<cache::Error>>
        + Cache<cache::Put, Ok = (), Err = Traced<cache::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        SetSorting(field): SetSorting,
    ) -> Result<Self::Ok, Self::Err> {
        let _loading = self.start_loading();

        crate::pace(self.config().pacing.set_sorting).await;

        let sorting = {
            let mut state = self.state.borrow_mut();
            state.sorting.toggle(field);
            state.sorting
        };
        self.rewind();

        self.persist(cache::Key::Sort, &sorting).await;
        Ok(())
    }
}
