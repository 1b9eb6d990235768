//! City records and the indexed city set.

use std::collections::HashMap;

use crate::error::McmcError;

/// Position of a city inside its [`CitySet`].
pub type CityId = usize;

/// An immutable named location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Unique name within a city set.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl City {
    /// Creates a city.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// An ordered, immutable collection of uniquely named cities.
///
/// Load order is preserved: `CityId` `i` is the `i`-th city supplied.
///
/// # Examples
///
/// ```
/// use u_tsp_mcmc::geo::CitySet;
///
/// let cities = CitySet::from_pairs([
///     ("Reno", (39.5296, -119.8138)),
///     ("Fresno", (36.7378, -119.7871)),
/// ])
/// .unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities.index_of("Fresno"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CitySet {
    cities: Vec<City>,
    by_name: HashMap<String, CityId>,
}

impl CitySet {
    /// Builds a city set, rejecting duplicate names and non-finite coordinates.
    pub fn new(cities: Vec<City>) -> Result<Self, McmcError> {
        let mut by_name = HashMap::with_capacity(cities.len());
        for (id, city) in cities.iter().enumerate() {
            if !city.latitude.is_finite() || !city.longitude.is_finite() {
                return Err(McmcError::NonFiniteCoordinate {
                    name: city.name.clone(),
                });
            }
            if by_name.insert(city.name.clone(), id).is_some() {
                return Err(McmcError::DuplicateCity {
                    name: city.name.clone(),
                });
            }
        }
        Ok(Self { cities, by_name })
    }

    /// Builds a city set from ordered `(name, (latitude, longitude))` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, McmcError>
    where
        I: IntoIterator<Item = (S, (f64, f64))>,
        S: Into<String>,
    {
        let cities = pairs
            .into_iter()
            .map(|(name, (lat, lon))| City::new(name, lat, lon))
            .collect();
        Self::new(cities)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns the city with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[inline]
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id]
    }

    pub fn get(&self, id: CityId) -> Option<&City> {
        self.cities.get(id)
    }

    /// Looks up a city id by name.
    pub fn index_of(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Distance in kilometers between two cities of this set.
    #[inline]
    pub fn distance(&self, a: CityId, b: CityId) -> f64 {
        super::haversine_km(&self.cities[a], &self.cities[b])
    }
}
