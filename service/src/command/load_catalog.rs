//! [`Command`] for loading the catalog of [`Apartment`]s.

use std::convert::Infallible;

use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::read::FilterCriteria;
use crate::{
    domain::Apartment,
    infra::{
        cache,
        source::{self, FetchAll, FETCH_ALL},
        Cache, Source,
    },
    read::{FilterUpdate, SortUpdate},
    Service,
};

use super::Command;

/// [`Command`] for (re)loading the catalog of [`Apartment`]s from the
/// [`Source`].
///
/// On success, the loaded [`Apartment`]s replace the previous ones, the
/// placeholder ranges of the [`FilterCriteria`] are narrowed to the loaded
/// bounds, and the cached criteria (if enabled) are restored. A cached
/// filters entry without room types lifts the room restriction. On failure,
/// the error is logged and the previous [`Apartment`]s are kept.
#[derive(Clone, Copy, Debug)]
pub struct LoadCatalog;

impl<Src, C> Command<LoadCatalog> for Service<Src, C>
where
    Src: Source<FetchAll, Ok = Vec<Apartment>, Err = Traced<source::Error>>,
    C: Cache<cache::Get, Ok = Option<String>, Err = Traced<cache::Error>>
        + Cache<cache::Put, Ok = (), Err = Traced<cache::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: LoadCatalog) -> Result<Self::Ok, Self::Err> {
        let _loading = self.start_loading();

        let apartments = match self.source().execute(FETCH_ALL).await {
            Ok(apartments) => apartments,
            Err(e) => {
                log::error!("failed to load catalog: {e}");
                return Ok(());
            }
        };
        log::info!("loaded {} apartments", apartments.len());

        {
            let mut state = self.state.borrow_mut();
            state.filters.adopt_bounds(&apartments);
            state.apartments = apartments;
        }

        if self.config().persistence {
            let filters = self.restore::<FilterUpdate>(cache::Key::Filters).await;
            let sorting = self.restore::<SortUpdate>(cache::Key::Sort).await;

            let mut state = self.state.borrow_mut();
            if let Some(update) = filters {
                // Missing room types are restored as no restriction.
                state.filters.merge(FilterUpdate {
                    room_types: Some(update.room_types.unwrap_or_default()),
                    ..update
                });
            }
            if let Some(update) = sorting {
                state.sorting.merge(update);
            }
        }

        self.rewind();
        Ok(())
    }
}
