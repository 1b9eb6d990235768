//! Tour length.

use super::Route;
use crate::geo::CitySet;

/// Total cyclic tour length in kilometers.
///
/// Sums the haversine distance of every consecutive pair plus the leg
/// from the last city back to the first. Routes with fewer than two
/// cities cost `0.0`.
pub fn tour_length(cities: &CitySet, route: &Route) -> f64 {
    route.legs().map(|(a, b)| cities.distance(a, b)).sum()
}
