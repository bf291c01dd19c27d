//! Sorting of [`Apartment`]s.

use std::cmp::Ordering;

use common::{define_kind, Order};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::Apartment;

define_kind! {
    #[doc = "Numeric field of an [`Apartment`] to sort by."]
    enum SortField {
        #[doc = "Sort by [`Apartment::area`]."]
        Area = "area",

        #[doc = "Sort by [`Apartment::price`]."]
        Price = "price",

        #[doc = "Sort by [`Apartment::floor`]."]
        Floor = "floor",
    }
}

impl SortField {
    /// Compares the provided [`Apartment`]s by this [`SortField`] in
    /// ascending order.
    ///
    /// Incomparable values are considered equal.
    #[must_use]
    pub fn compare(self, a: &Apartment, b: &Apartment) -> Ordering {
        match self {
            Self::Area => a.area.partial_cmp(&b.area).unwrap_or(Ordering::Equal),
            Self::Price => a.price.cmp(&b.price),
            Self::Floor => a.floor.cmp(&b.floor),
        }
    }
}

define_kind! {
    #[doc = "Sorting state of a single [`SortField`], as shown to a user."]
    enum SortIndicator {
        #[doc = "Not sorted by the field."]
        None = "none",

        #[doc = "Sorted by the field in ascending order."]
        Ascending = "ascending",

        #[doc = "Sorted by the field in descending order."]
        Descending = "descending",
    }
}

/// Criteria for sorting [`Apartment`]s.
///
/// Only one [`SortField`] is active at a time. Toggling it cycles through
/// `unset -> ascending -> descending -> unset`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortCriteria {
    /// [`SortField`] to sort by, if any.
    ///
    /// [`None`] preserves the original order.
    pub field: Option<SortField>,

    /// [`Order`] to sort in.
    pub order: Order,
}

impl SortCriteria {
    /// Toggles sorting by the provided [`SortField`].
    ///
    /// Activating another [`SortField`] starts it in ascending [`Order`].
    pub fn toggle(&mut self, field: SortField) {
        if self.field != Some(field) {
            *self = Self {
                field: Some(field),
                order: Order::Ascending,
            };
            return;
        }

        match self.order {
            Order::Ascending => self.order = Order::Descending,
            Order::Descending => self.clear(),
        }
    }

    /// Resets these [`SortCriteria`] to unsorted state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns [`SortIndicator`] of the provided [`SortField`].
    #[must_use]
    pub fn indicator(&self, field: SortField) -> SortIndicator {
        if self.field != Some(field) {
            return SortIndicator::None;
        }
        match self.order {
            Order::Ascending => SortIndicator::Ascending,
            Order::Descending => SortIndicator::Descending,
        }
    }

    /// Overwrites these [`SortCriteria`] with the fields present in the
    /// provided [`SortUpdate`].
    pub fn merge(&mut self, update: SortUpdate) {
        let SortUpdate { field, order } = update;

        if let Some(field) = field {
            self.field = field;
        }
        if let Some(order) = order {
            self.order = order;
        }
    }

    /// Sorts the provided [`Apartment`]s in place.
    ///
    /// The sort is stable, and does nothing if no [`SortField`] is set.
    pub fn apply(&self, apartments: &mut [&Apartment]) {
        let Some(field) = self.field else {
            return;
        };
        apartments.sort_by(|a, b| self.order.apply(field.compare(a, b)));
    }
}

/// Partial [`SortCriteria`]: present fields overwrite the current ones.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct SortUpdate {
    /// New [`SortField`] to sort by, if present.
    ///
    /// `Some(None)` stands for an explicit `null`, unsetting the field.
    #[serde(deserialize_with = "present")]
    pub field: Option<Option<SortField>>,

    /// New [`Order`], if present.
    pub order: Option<Order>,
}

/// Deserializes a present (possibly `null`) value as [`Some`].
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod spec {
    use common::Order;

    use crate::domain::{apartment::RoomType, Apartment};

    use super::{SortCriteria, SortField, SortIndicator, SortUpdate};

    fn apartment(id: u64, price: u64, area: f64, floor: i32) -> Apartment {
        Apartment {
            id: id.into(),
            rooms: RoomType::One,
            number: id.to_string().into(),
            area,
            floor,
            total_floors: 25,
            price,
            plan_image: "plan.svg".into(),
        }
    }

    fn ids(apartments: &[&Apartment]) -> Vec<u64> {
        apartments.iter().map(|a| a.id.into()).collect()
    }

    #[test]
    fn toggle_cycles_same_field() {
        let mut sort = SortCriteria::default();

        sort.toggle(SortField::Price);
        assert_eq!(sort.field, Some(SortField::Price));
        assert_eq!(sort.order, Order::Ascending);

        sort.toggle(SortField::Price);
        assert_eq!(sort.field, Some(SortField::Price));
        assert_eq!(sort.order, Order::Descending);

        sort.toggle(SortField::Price);
        assert_eq!(sort, SortCriteria::default());
    }

    #[test]
    fn toggle_other_field_starts_ascending() {
        let mut sort = SortCriteria {
            field: Some(SortField::Area),
            order: Order::Descending,
        };

        sort.toggle(SortField::Floor);

        assert_eq!(sort.field, Some(SortField::Floor));
        assert_eq!(sort.order, Order::Ascending);
    }

    #[test]
    fn clear_resets_any_state() {
        let mut sort = SortCriteria {
            field: Some(SortField::Area),
            order: Order::Descending,
        };
        sort.clear();
        assert_eq!(sort, SortCriteria::default());

        sort.clear();
        assert_eq!(sort, SortCriteria::default());
    }

    #[test]
    fn indicator() {
        let sort = SortCriteria {
            field: Some(SortField::Price),
            order: Order::Descending,
        };

        assert_eq!(sort.indicator(SortField::Price), SortIndicator::Descending);
        assert_eq!(sort.indicator(SortField::Area), SortIndicator::None);
        assert_eq!(
            SortCriteria::default().indicator(SortField::Price),
            SortIndicator::None,
        );
    }

    #[test]
    fn applies_numeric_order() {
        let apartments = [
            apartment(1, 300, 50.0, 3),
            apartment(2, 100, 70.5, 1),
            apartment(3, 200, 9.5, 2),
        ];

        let mut view = apartments.iter().collect::<Vec<_>>();
        SortCriteria {
            field: Some(SortField::Price),
            order: Order::Ascending,
        }
        .apply(&mut view);
        assert_eq!(ids(&view), [2, 3, 1]);

        SortCriteria {
            field: Some(SortField::Area),
            order: Order::Descending,
        }
        .apply(&mut view);
        assert_eq!(ids(&view), [2, 1, 3]);

        SortCriteria {
            field: Some(SortField::Floor),
            order: Order::Descending,
        }
        .apply(&mut view);
        assert_eq!(ids(&view), [1, 3, 2]);
    }

    #[test]
    fn sort_is_stable_in_both_orders() {
        let apartments = [
            apartment(1, 100, 1.0, 1),
            apartment(2, 100, 1.0, 1),
            apartment(3, 50, 1.0, 1),
        ];

        let mut view = apartments.iter().collect::<Vec<_>>();
        SortCriteria {
            field: Some(SortField::Price),
            order: Order::Descending,
        }
        .apply(&mut view);
        assert_eq!(ids(&view), [1, 2, 3]);

        SortCriteria {
            field: Some(SortField::Price),
            order: Order::Ascending,
        }
        .apply(&mut view);
        assert_eq!(ids(&view), [3, 1, 2]);
    }

    #[test]
    fn unset_field_keeps_order() {
        let apartments = [apartment(1, 3, 1.0, 1), apartment(2, 1, 1.0, 1)];

        let mut view = apartments.iter().collect::<Vec<_>>();
        SortCriteria {
            field: None,
            order: Order::Descending,
        }
        .apply(&mut view);

        assert_eq!(ids(&view), [1, 2]);
    }

    #[test]
    fn update_distinguishes_null_from_absent() {
        let mut sort = SortCriteria {
            field: Some(SortField::Area),
            order: Order::Ascending,
        };

        sort.merge(serde_json::from_str::<SortUpdate>(r#"{"order": "desc"}"#).unwrap());
        assert_eq!(sort.field, Some(SortField::Area));
        assert_eq!(sort.order, Order::Descending);

        sort.merge(serde_json::from_str::<SortUpdate>(r#"{"field": null}"#).unwrap());
        assert_eq!(sort.field, None);
        assert_eq!(sort.order, Order::Descending);
    }

    #[test]
    fn serializes_in_cache_format() {
        let sort = SortCriteria {
            field: Some(SortField::Floor),
            order: Order::Descending,
        };

        assert_eq!(
            serde_json::to_string(&sort).unwrap(),
            r#"{"field":"floor","order":"desc"}"#,
        );
    }
}
