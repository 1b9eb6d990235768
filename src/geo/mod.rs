//! Cities and great-circle distance.
//!
//! Cities are stored as an array of structs with a name→index map, so a
//! tour can be a plain sequence of indices into [`CitySet`].

mod city;
mod distance;

pub use city::{City, CityId, CitySet};
pub use distance::{haversine_km, EARTH_RADIUS_KM};
