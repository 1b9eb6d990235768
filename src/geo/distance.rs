//! Haversine distance.

use super::city::City;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two cities in kilometers.
///
/// Coordinates are in degrees. The formula is symmetric in its arguments
/// and yields exactly `0.0` for identical coordinates. Non-finite input
/// is a precondition violation and is not checked here.
///
/// # Examples
///
/// ```
/// use u_tsp_mcmc::geo::{haversine_km, City};
///
/// let a = City::new("A", 0.0, 0.0);
/// let b = City::new("B", 0.0, 1.0);
/// assert!((haversine_km(&a, &b) - 111.19).abs() < 0.01);
/// ```
#[inline]
pub fn haversine_km(a: &City, b: &City) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = lat_b - lat_a;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = haversin(d_lat) + lat_a.cos() * lat_b.cos() * haversin(d_lon);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[inline]
fn haversin(theta: f64) -> f64 {
    let s = (theta / 2.0).sin();
    s * s
}
