//! Domain definitions.

pub mod apartment;

pub use self::apartment::Apartment;
