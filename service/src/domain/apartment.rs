//! [`Apartment`] definitions.

use common::define_kind;
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Apartment listed in the catalog.
///
/// Immutable once loaded.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    /// ID of this [`Apartment`].
    pub id: Id,

    /// [`RoomType`] of this [`Apartment`].
    pub rooms: RoomType,

    /// [`Number`] of this [`Apartment`] in its building.
    pub number: Number,

    /// [`Area`] of this [`Apartment`].
    pub area: Area,

    /// [`Floor`] this [`Apartment`] is located on.
    pub floor: Floor,

    /// Number of floors in the building of this [`Apartment`].
    pub total_floors: NumFloors,

    /// [`Price`] of this [`Apartment`].
    pub price: Price,

    /// Reference to the floor plan image of this [`Apartment`].
    pub plan_image: PlanImage,
}

/// ID of an [`Apartment`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(u64);

define_kind! {
    #[doc = "Room count category of an [`Apartment`]."]
    enum RoomType {
        #[doc = "Single room apartment."]
        One = "1",

        #[doc = "Two rooms apartment."]
        Two = "2",

        #[doc = "Three rooms apartment."]
        Three = "3",

        #[doc = "Four rooms apartment."]
        Four = "4",
    }
}

/// Number (label) of an [`Apartment`] in its building.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[from(&str, String)]
pub struct Number(String);

/// Reference to a floor plan image of an [`Apartment`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[from(&str, String)]
pub struct PlanImage(String);

/// Floor area of an [`Apartment`], in square meters.
pub type Area = f64;

/// Floor of an [`Apartment`], negative ones being below the ground.
pub type Floor = i32;

/// Number of floors in a building.
pub type NumFloors = u16;

/// Price of an [`Apartment`], in minor-less currency units.
pub type Price = u64;

#[cfg(test)]
mod spec {
    use super::{Apartment, Id, RoomType};

    #[test]
    fn deserializes_json_record() {
        let apartment = serde_json::from_str::<Apartment>(
            r#"{
                "id": 7,
                "rooms": "2",
                "number": "12",
                "area": 54.3,
                "floor": 4,
                "totalFloors": 17,
                "price": 8350000,
                "planImage": "/images/plan-7.svg"
            }"#,
        )
        .unwrap();

        assert_eq!(apartment.id, Id::from(7));
        assert_eq!(apartment.rooms, RoomType::Two);
        assert_eq!(AsRef::<str>::as_ref(&apartment.number), "12");
        assert!((apartment.area - 54.3).abs() < f64::EPSILON);
        assert_eq!(apartment.total_floors, 17);
        assert_eq!(apartment.price, 8_350_000);
        assert_eq!(
            AsRef::<str>::as_ref(&apartment.plan_image),
            "/images/plan-7.svg",
        );
    }

    #[test]
    fn accepts_numeric_room_type() {
        let apartment = serde_json::from_str::<Apartment>(
            r#"{
                "id": 1,
                "rooms": 3,
                "number": "1",
                "area": 80,
                "floor": 1,
                "totalFloors": 5,
                "price": 12000000,
                "planImage": ""
            }"#,
        )
        .unwrap();

        assert_eq!(apartment.rooms, RoomType::Three);
    }

    #[test]
    fn accepts_underground_floor() {
        let apartment = serde_json::from_str::<Apartment>(
            r#"{
                "id": 2,
                "rooms": "1",
                "number": "B1",
                "area": 24.5,
                "floor": -1,
                "totalFloors": 12,
                "price": 3100000,
                "planImage": ""
            }"#,
        )
        .unwrap();

        assert_eq!(apartment.floor, -1);
    }

    #[test]
    fn rejects_unknown_room_type() {
        assert!(serde_json::from_str::<RoomType>(r#""5""#).is_err());
    }
}
