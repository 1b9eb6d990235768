//! Route representation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::geo::{City, CityId, CitySet};

/// A cyclic tour stored as city indices.
///
/// Routes produced by this crate are always permutations of
/// `0..cities.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route(Vec<CityId>);

impl Route {
    /// The route in load order: `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly shuffled permutation of `0..n`.
    pub fn shuffled<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<CityId> = (0..n).collect();
        order.shuffle(rng);
        Self(order)
    }

    /// Wraps an explicit ordering without validation.
    ///
    /// Use [`Route::is_permutation_of`] to check it against a city set.
    pub fn from_order(order: Vec<CityId>) -> Self {
        Self(order)
    }

    /// Builds a route from city names, or `None` if a name is unknown.
    pub fn from_names<'a, I>(cities: &CitySet, names: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .map(|name| cities.index_of(name))
            .collect::<Option<Vec<_>>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[CityId] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<CityId> {
        self.0
    }

    /// Returns `true` if this route visits each of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &id in &self.0 {
            if id >= n || seen[id] {
                return false;
            }
            seen[id] = true;
        }
        true
    }

    /// Resolves the route to its cities, in visiting order.
    pub fn cities<'a>(&'a self, set: &'a CitySet) -> impl Iterator<Item = &'a City> + 'a {
        self.0.iter().map(move |&id| set.city(id))
    }

    /// Consecutive legs `(from, to)` including the closing leg back to
    /// the start. A single-city route has no legs.
    pub fn legs(&self) -> impl Iterator<Item = (CityId, CityId)> + '_ {
        let n = self.0.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.0[i], self.0[(i + 1) % n]))
    }
}

impl std::ops::Index<usize> for Route {
    type Output = CityId;

    fn index(&self, i: usize) -> &CityId {
        &self.0[i]
    }
}
