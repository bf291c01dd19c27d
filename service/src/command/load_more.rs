//! [`Command`] for revealing more [`Apartment`]s.

use std::convert::Infallible;

use tracing as log;

#[cfg(doc)]
use crate::{domain::Apartment, Pacing};
use crate::Service;

use super::Command;

/// [`Command`] for revealing the next page of [`Apartment`]s.
///
/// Does nothing if another operation is in flight, or if all the matching
/// [`Apartment`]s are displayed already. Otherwise, completes no sooner than
/// [`Pacing::load_more`].
#[derive(Clone, Copy, Debug)]
pub struct LoadMore;

impl<Src, C> Command<LoadMore> for Service<Src, C> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: LoadMore) -> Result<Self::Ok, Self::Err> {
        if self.is_loading() {
            log::debug!("`LoadMore` skipped: another operation is in flight");
            return Ok(());
        }
        if !self.can_load_more() {
            log::debug!("`LoadMore` skipped: nothing more to reveal");
            return Ok(());
        }

        let _loading = self.start_loading();
        {
            let mut state = self.state.borrow_mut();
            state.page = state.page.next();
        }
        self.refresh();

        crate::pace(self.config().pacing.load_more).await;
        Ok(())
    }
}
