//! [`Args`] definitions.

use clap::Parser;
use common::Range;
use service::{
    domain::apartment::{Area, Price, RoomType},
    read::{FilterCriteria, FilterUpdate, SortField},
};

/// Browser of the apartments catalog.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Room types to show (comma-separated), all of them if omitted.
    #[arg(long, value_delimiter = ',')]
    pub rooms: Vec<RoomType>,

    /// Minimum price to show.
    #[arg(long)]
    pub price_min: Option<Price>,

    /// Maximum price to show.
    #[arg(long)]
    pub price_max: Option<Price>,

    /// Minimum area to show.
    #[arg(long)]
    pub area_min: Option<Area>,

    /// Maximum area to show.
    #[arg(long)]
    pub area_max: Option<Area>,

    /// Resets filters (including the restored ones) before applying the
    /// provided ones.
    #[arg(long)]
    pub reset: bool,

    /// Clears sorting (including the restored one) before applying the
    /// provided one.
    #[arg(long)]
    pub clear_sort: bool,

    /// Field to toggle sorting by. Every occurrence toggles once more:
    /// ascending, descending, unsorted.
    #[arg(long = "sort")]
    pub sort: Vec<SortField>,

    /// Number of times to load more apartments.
    #[arg(long, default_value_t = 0)]
    pub more: usize,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Returns the [`FilterUpdate`] requested by these [`Args`], completing
    /// half-open ranges with the bounds of the `current` [`FilterCriteria`].
    ///
    /// [`None`] is returned if no filters are requested.
    #[must_use]
    pub fn filter_update(&self, current: &FilterCriteria) -> Option<FilterUpdate> {
        let update = FilterUpdate {
            room_types: (!self.rooms.is_empty())
                .then(|| self.rooms.iter().copied().collect()),
            price_range: complete(
                self.price_min,
                self.price_max,
                current.price_range,
            ),
            area_range: complete(self.area_min, self.area_max, current.area_range),
        };
        (update != FilterUpdate::default()).then_some(update)
    }
}

/// Completes the provided optional bounds with the `current` [`Range`].
///
/// [`None`] is returned if no bounds are provided.
fn complete<T>(min: Option<T>, max: Option<T>, current: Range<T>) -> Option<Range<T>> {
    if min.is_none() && max.is_none() {
        return None;
    }
    Some(Range::new(
        min.unwrap_or(current.min),
        max.unwrap_or(current.max),
    ))
}

#[cfg(test)]
mod spec {
    use std::collections::BTreeSet;

    use clap::Parser as _;
    use common::Range;
    use service::{
        domain::apartment::RoomType,
        read::{FilterCriteria, SortField},
    };

    use super::Args;

    fn current() -> FilterCriteria {
        FilterCriteria {
            room_types: BTreeSet::new(),
            price_range: Range::new(3_000_000, 9_000_000),
            area_range: Range::new(30.0, 90.0),
        }
    }

    #[test]
    fn parses_operations() {
        let args = Args::try_parse_from([
            "catalog", "--rooms", "1,3", "--sort", "price", "--sort", "price",
            "--more", "2",
        ])
        .unwrap();

        assert_eq!(args.rooms, [RoomType::One, RoomType::Three]);
        assert_eq!(args.sort, [SortField::Price, SortField::Price]);
        assert_eq!(args.more, 2);
        assert_eq!(args.config, "config.toml");
    }

    #[test]
    fn rejects_unknown_room_type() {
        assert!(Args::try_parse_from(["catalog", "--rooms", "5"]).is_err());
    }

    #[test]
    fn no_filters_requested() {
        let args = Args::try_parse_from(["catalog", "--more", "1"]).unwrap();

        assert_eq!(args.filter_update(&current()), None);
    }

    #[test]
    fn completes_half_open_ranges() {
        let args = Args::try_parse_from([
            "catalog",
            "--price-min",
            "5000000",
            "--area-max",
            "60.5",
        ])
        .unwrap();

        let update = args.filter_update(&current()).unwrap();

        assert_eq!(update.room_types, None);
        assert_eq!(update.price_range, Some(Range::new(5_000_000, 9_000_000)));
        assert_eq!(update.area_range, Some(Range::new(30.0, 60.5)));
    }
}
