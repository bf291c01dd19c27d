//! Service contains the catalog state and its business logic.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
mod state;

use std::{
    cell::{Cell, RefCell},
    time,
};

use common::{
    operations::{By, Select, Store},
    pagination::Page,
    Reveal,
};
use serde::{de::DeserializeOwned, Serialize};
use smart_default::SmartDefault;
use tokio::sync::watch;
use tracerr::Traced;
use tracing as log;

#[cfg(test)]
use proptest as _;

use self::{
    domain::Apartment,
    infra::{cache, Cache},
    read::{FilterCriteria, SortCriteria},
    state::State,
};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// [`Reveal`] policy of the displayed [`Apartment`]s.
    #[default(Reveal::new(5, 20))]
    pub reveal: Reveal,

    /// Minimum durations of the paced operations.
    pub pacing: Pacing,

    /// Indicator whether filter and sort criteria are persisted in the
    /// [`Cache`].
    pub persistence: bool,
}

/// Minimum durations of the paced operations.
///
/// Paced operations keep the loading flag raised for at least the
/// configured duration, smoothing out the visible transitions.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Pacing {
    /// Minimum duration of [`command::LoadMore`].
    #[default(time::Duration::from_millis(500))]
    pub load_more: time::Duration,

    /// Minimum duration of [`command::ResetFilters`].
    #[default(time::Duration::from_millis(300))]
    pub reset_filters: time::Duration,

    /// Minimum duration of [`command::SetSorting`].
    #[default(time::Duration::from_millis(200))]
    pub set_sorting: time::Duration,
}

impl Pacing {
    /// [`Pacing`] without any delays.
    pub const NONE: Self = Self {
        load_more: time::Duration::ZERO,
        reset_filters: time::Duration::ZERO,
        set_sorting: time::Duration::ZERO,
    };
}

/// Catalog service, owning the loaded [`Apartment`]s along with the filter,
/// sort and pagination state.
///
/// The [`Service`] is single-threaded: its operations may be awaited
/// concurrently on the same thread, but never in parallel.
#[derive(Debug)]
pub struct Service<Src, C> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`infra::Source`] of the [`Apartment`]s.
    source: Src,

    /// [`Cache`] of the filter and sort criteria.
    cache: C,

    /// Mutable state of this [`Service`].
    state: RefCell<State>,

    /// Number of operations in flight.
    in_flight: Cell<usize>,

    /// Currently displayed [`Apartment`]s.
    displayed: watch::Sender<Vec<Apartment>>,
}

impl<Src, C> Service<Src, C> {
    /// Creates a new [`Service`] with the provided parameters.
    ///
    /// No [`Apartment`]s are loaded until [`command::LoadCatalog`] is
    /// executed.
    pub fn new(config: Config, source: Src, cache: C) -> Self {
        Self {
            config,
            source,
            cache,
            state: RefCell::new(State::default()),
            in_flight: Cell::new(0),
            displayed: watch::Sender::new(Vec::new()),
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`infra::Source`] of this [`Service`].
    #[must_use]
    pub fn source(&self) -> &Src {
        &self.source
    }

    /// Returns [`Cache`] of this [`Service`].
    #[must_use]
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Returns all the loaded [`Apartment`]s, in load order.
    #[must_use]
    pub fn apartments(&self) -> Vec<Apartment> {
        self.state.borrow().apartments.clone()
    }

    /// Returns the currently displayed [`Apartment`]s.
    #[must_use]
    pub fn displayed(&self) -> Vec<Apartment> {
        self.displayed.borrow().clone()
    }

    /// Subscribes to the changes of the displayed [`Apartment`]s.
    ///
    /// Subscribers are notified only when the displayed [`Apartment`]s
    /// actually change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Apartment>> {
        self.displayed.subscribe()
    }

    /// Returns the current [`FilterCriteria`].
    #[must_use]
    pub fn filters(&self) -> FilterCriteria {
        self.state.borrow().filters.clone()
    }

    /// Returns the current [`SortCriteria`].
    #[must_use]
    pub fn sorting(&self) -> SortCriteria {
        self.state.borrow().sorting
    }

    /// Returns the current [`Page`].
    #[must_use]
    pub fn page(&self) -> Page {
        self.state.borrow().page
    }

    /// Indicates whether any operation of this [`Service`] is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    /// Returns the number of [`Apartment`]s matching the current
    /// [`FilterCriteria`].
    #[must_use]
    pub fn total_filtered_count(&self) -> usize {
        self.state.borrow().filtered_count
    }

    /// Indicates whether more [`Apartment`]s can be revealed.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.displayed.borrow().len() < self.total_filtered_count()
    }

    /// Marks an operation in flight until the returned guard is dropped.
    fn start_loading(&self) -> Loading<'_> {
        self.in_flight.set(self.in_flight.get() + 1);
        Loading(&self.in_flight)
    }

    /// Recomputes the displayed [`Apartment`]s out of the current state.
    ///
    /// Subscribers are notified only if the result differs from the
    /// previously displayed [`Apartment`]s.
    fn refresh(&self) {
        let mut state = self.state.borrow_mut();
        let view =
            read::view::derive(&state.apartments, &state.filters, &state.sorting);
        let displayed =
            read::view::displayed(&view, self.config.reveal, state.page);
        state.filtered_count = view.len();

        let shown = displayed.len();
        let changed = self.displayed.send_if_modified(|current| {
            if *current == displayed {
                return false;
            }
            *current = displayed;
            true
        });
        log::debug!(
            "displaying {shown} of {} apartments on page {}{}",
            state.filtered_count,
            state.page.get(),
            if changed { "" } else { " (unchanged)" },
        );
    }

    /// Moves this [`Service`] back to the first [`Page`] and refreshes the
    /// displayed [`Apartment`]s.
    fn rewind(&self) {
        self.state.borrow_mut().page = Page::FIRST;
        self.refresh();
    }
}

impl<Src, C> Service<Src, C>
where
    C: Cache<cache::Get, Ok = Option<String>, Err = Traced<cache::Error>>
        + Cache<cache::Put, Ok = (), Err = Traced<cache::Error>>,
{
    /// Persists the provided `value` in the [`Cache`] under the provided
    /// [`cache::Key`], if persistence is enabled.
    ///
    /// Failures are logged and ignored.
    async fn persist<T: Serialize>(&self, key: cache::Key, value: &T) {
        if !self.config.persistence {
            return;
        }

        let value = match serde_json::to_string(value) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("failed to serialize `{key}` cache entry: {e}");
                return;
            }
        };
        if let Err(e) = self.cache.execute(Store((key, value))).await {
            log::warn!("failed to write `{key}` cache entry: {e}");
        }
    }

    /// Reads the value cached under the provided [`cache::Key`].
    ///
    /// Missing, unreadable and malformed entries are skipped, the latter two
    /// being logged.
    async fn restore<T: DeserializeOwned>(&self, key: cache::Key) -> Option<T> {
        let value = self
            .cache
            .execute(Select(By::new(key)))
            .await
            .map_err(|e| {
                log::warn!("failed to read `{key}` cache entry: {e}");
            })
            .ok()??;

        serde_json::from_str(&value)
            .map_err(|e| {
                log::warn!("ignoring malformed `{key}` cache entry: {e}");
            })
            .ok()
    }
}

/// Guard of an operation in flight.
struct Loading<'s>(&'s Cell<usize>);

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

/// Waits for the provided pacing `duration`.
async fn pace(duration: time::Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
