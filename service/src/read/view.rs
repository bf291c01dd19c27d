//! Derivation of the displayed catalog view.

use common::{pagination::Page, Reveal};

use crate::domain::Apartment;

use super::{FilterCriteria, SortCriteria};

/// Derives the sequence of [`Apartment`]s matching the provided
/// [`FilterCriteria`], ordered by the provided [`SortCriteria`].
///
/// The provided [`Apartment`]s are never reordered.
#[must_use]
pub fn derive<'a>(
    apartments: &'a [Apartment],
    filters: &FilterCriteria,
    sorting: &SortCriteria,
) -> Vec<&'a Apartment> {
    let mut view = filters.apply(apartments).collect::<Vec<_>>();
    sorting.apply(&mut view);
    view
}

/// Returns the part of the derived `view` revealed on the provided [`Page`].
#[must_use]
pub fn displayed(view: &[&Apartment], reveal: Reveal, page: Page) -> Vec<Apartment> {
    reveal
        .revealed(page, view)
        .iter()
        .map(|a| (*a).clone())
        .collect()
}

#[cfg(test)]
mod spec {
    use std::collections::BTreeSet;

    use common::{pagination::Page, Order, Range, Reveal};

    use crate::{
        domain::{apartment::RoomType, Apartment},
        read::{FilterCriteria, SortCriteria, SortField},
    };

    use super::{derive, displayed};

    fn catalog() -> Vec<Apartment> {
        [
            RoomType::One,
            RoomType::One,
            RoomType::Two,
            RoomType::Two,
            RoomType::Three,
            RoomType::Three,
            RoomType::Four,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, rooms)| {
            let i = i as u64;
            Apartment {
                id: i.into(),
                rooms,
                number: i.to_string().into(),
                area: 30.0 + (i * 10) as f64,
                floor: 7 - i as i32,
                total_floors: 9,
                price: 5_000_000 + (i % 3) * 1_000_000,
                plan_image: "plan.svg".into(),
            }
        })
        .collect()
    }

    #[test]
    fn filters_by_room_type() {
        let apartments = catalog();
        let filters = FilterCriteria {
            room_types: BTreeSet::from([RoomType::Two]),
            ..FilterCriteria::spanning(&apartments)
        };

        let view = derive(&apartments, &filters, &SortCriteria::default());
        let shown = displayed(&view, Reveal::new(5, 20), Page::FIRST);

        assert_eq!(view.len(), 2);
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|a| a.rooms == RoomType::Two));
    }

    #[test]
    fn sorts_after_filtering() {
        let apartments = catalog();
        let filters = FilterCriteria {
            area_range: Range::new(40.0, 80.0),
            ..FilterCriteria::spanning(&apartments)
        };
        let sorting = SortCriteria {
            field: Some(SortField::Floor),
            order: Order::Ascending,
        };

        let view = derive(&apartments, &filters, &sorting);

        assert_eq!(
            view.iter().map(|a| a.floor).collect::<Vec<_>>(),
            [2, 3, 4, 5, 6],
        );
        assert_eq!(apartments[0].floor, 7);
    }

    #[test]
    fn displayed_is_a_clamped_prefix() {
        let apartments = catalog();
        let view = derive(
            &apartments,
            &FilterCriteria::spanning(&apartments),
            &SortCriteria::default(),
        );

        assert_eq!(displayed(&view, Reveal::new(5, 20), Page::FIRST).len(), 5);
        assert_eq!(
            displayed(&view, Reveal::new(5, 20), Page::FIRST.next()),
            apartments,
        );
    }
}
