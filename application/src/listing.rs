//! [`Listing`] of the displayed apartments.

use std::fmt;

use itertools::Itertools as _;
use service::{
    domain::Apartment,
    read::{SortField, SortIndicator},
};

/// Printable snapshot of the catalog as the user sees it.
#[derive(Clone, Debug)]
pub struct Listing {
    /// Currently displayed [`Apartment`]s.
    pub displayed: Vec<Apartment>,

    /// Number of [`Apartment`]s matching the current filters.
    pub total: usize,

    /// [`SortIndicator`] of every [`SortField`].
    pub indicators: Vec<(SortField, SortIndicator)>,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "sorting: {}",
            self.indicators
                .iter()
                .format_with(", ", |(field, ind), w| w(&format_args!(
                    "{field} {}",
                    arrow(*ind),
                ))),
        )?;
        for a in &self.displayed {
            writeln!(
                f,
                "#{:<6} {}-room  No. {:<6} {:>7.2} m2  floor {:>2}/{:<2}  {:>11}",
                a.id, a.rooms, a.number, a.area, a.floor, a.total_floors, a.price,
            )?;
        }
        write!(f, "shown {} of {}", self.displayed.len(), self.total)?;
        if self.displayed.len() < self.total {
            write!(f, " (more available)")?;
        }
        Ok(())
    }
}

/// Returns the arrow rendering the provided [`SortIndicator`].
const fn arrow(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::None => "-",
        SortIndicator::Ascending => "↑",
        SortIndicator::Descending => "↓",
    }
}
