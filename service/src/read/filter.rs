//! Filtering of [`Apartment`]s.

use std::collections::BTreeSet;

use common::Range;
use serde::{Deserialize, Serialize};

use crate::domain::{
    apartment::{Area, Price, RoomType},
    Apartment,
};

/// Placeholder price [`Range`] used until real bounds are known.
///
/// A price [`Range`] equal to this one is considered as not customized by
/// the user.
pub const PLACEHOLDER_PRICE_RANGE: Range<Price> =
    Range::new(1_000_000, 100_000_000);

/// Placeholder area [`Range`] used until real bounds are known.
///
/// An area [`Range`] equal to this one is considered as not customized by
/// the user.
pub const PLACEHOLDER_AREA_RANGE: Range<Area> = Range::new(0.0, 300.0);

/// Criteria for filtering [`Apartment`]s.
///
/// All the criteria are combined with AND.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Allowed [`RoomType`]s. Empty set allows any [`RoomType`].
    #[serde(rename = "roomType")]
    pub room_types: BTreeSet<RoomType>,

    /// Allowed [`Price`] [`Range`].
    pub price_range: Range<Price>,

    /// Allowed [`Area`] [`Range`].
    pub area_range: Range<Area>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            room_types: BTreeSet::new(),
            price_range: PLACEHOLDER_PRICE_RANGE,
            area_range: PLACEHOLDER_AREA_RANGE,
        }
    }
}

impl FilterCriteria {
    /// Creates unrestricted [`FilterCriteria`] spanning the bounds observed
    /// in the provided [`Apartment`]s.
    ///
    /// Placeholder bounds are used if there are no [`Apartment`]s.
    #[must_use]
    pub fn spanning(apartments: &[Apartment]) -> Self {
        Self {
            room_types: BTreeSet::new(),
            price_range: Range::spanning(apartments.iter().map(|a| a.price))
                .unwrap_or(PLACEHOLDER_PRICE_RANGE),
            area_range: Range::spanning(apartments.iter().map(|a| a.area))
                .unwrap_or(PLACEHOLDER_AREA_RANGE),
        }
    }

    /// Replaces placeholder ranges of these [`FilterCriteria`] with the
    /// bounds observed in the provided [`Apartment`]s.
    ///
    /// Ranges customized by the user are left untouched.
    pub fn adopt_bounds(&mut self, apartments: &[Apartment]) {
        if self.price_range == PLACEHOLDER_PRICE_RANGE {
            if let Some(range) =
                Range::spanning(apartments.iter().map(|a| a.price))
            {
                self.price_range = range;
            }
        }
        if self.area_range == PLACEHOLDER_AREA_RANGE {
            if let Some(range) =
                Range::spanning(apartments.iter().map(|a| a.area))
            {
                self.area_range = range;
            }
        }
    }

    /// Overwrites these [`FilterCriteria`] with the fields present in the
    /// provided [`FilterUpdate`].
    pub fn merge(&mut self, update: FilterUpdate) {
        let FilterUpdate {
            room_types,
            price_range,
            area_range,
        } = update;

        if let Some(room_types) = room_types {
            self.room_types = room_types;
        }
        if let Some(price_range) = price_range {
            self.price_range = price_range;
        }
        if let Some(area_range) = area_range {
            self.area_range = area_range;
        }
    }

    /// Checks whether the provided [`Apartment`] satisfies these
    /// [`FilterCriteria`].
    #[must_use]
    pub fn matches(&self, apartment: &Apartment) -> bool {
        (self.room_types.is_empty()
            || self.room_types.contains(&apartment.rooms))
            && self.price_range.contains(&apartment.price)
            && self.area_range.contains(&apartment.area)
    }

    /// Filters the provided [`Apartment`]s, preserving their order.
    pub fn apply<'s, 'a: 's>(
        &'s self,
        apartments: &'a [Apartment],
    ) -> impl Iterator<Item = &'a Apartment> + 's {
        apartments.iter().filter(|a| self.matches(a))
    }
}

/// Partial [`FilterCriteria`]: present fields overwrite the current ones.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterUpdate {
    /// New allowed [`RoomType`]s, if any.
    #[serde(rename = "roomType", skip_serializing_if = "Option::is_none")]
    pub room_types: Option<BTreeSet<RoomType>>,

    /// New allowed [`Price`] [`Range`], if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<Range<Price>>,

    /// New allowed [`Area`] [`Range`], if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_range: Option<Range<Area>>,
}

impl From<FilterCriteria> for FilterUpdate {
    fn from(criteria: FilterCriteria) -> Self {
        Self {
            room_types: Some(criteria.room_types),
            price_range: Some(criteria.price_range),
            area_range: Some(criteria.area_range),
        }
    }
}
