//! [`Command`] for clearing the [`SortCriteria`].

use std::convert::Infallible;

use tracerr::Traced;

use crate::{
    infra::{cache, Cache},
    read::SortCriteria,
    Service,
};

use super::Command;

/// [`Command`] for clearing the [`SortCriteria`], regardless of their
/// current state.
///
/// Displayed apartments are rewound to the first page.
#[derive(Clone, Copy, Debug)]
pub struct ClearSorting;

impl<Src, C> Command<ClearSorting> for Service<Src, C>
where
    C: Cache<cache::Get, Ok = Option<String>, Err = Traced<cache::Error>>
        + Cache<cache::Put, Ok = (), Err = Traced<cache::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: ClearSorting) -> Result<Self::Ok, Self::Err> {
        self.state.borrow_mut().sorting.clear();
        self.rewind();

        self.persist(cache::Key::Sort, &SortCriteria::default()).await;
        Ok(())
    }
}
