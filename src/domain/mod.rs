//! Domain value objects and types.
//!
//! Phone number validation, the static country table and geographic
//! coordinates. Value objects validate at construction time so that invalid
//! data never reaches the deep link or the geocoder.

pub mod coordinates;
pub mod country;
pub mod errors;
pub mod phone;

pub use coordinates::Coordinates;
pub use country::{Country, CountryTable};
pub use errors::ValidationError;
pub use phone::{DialTarget, MIN_DIGITS, WHATSAPP_LINK_BASE};
