//! Pairwise-swap neighborhood.

use rand::Rng;

use super::Route;

/// Draws the two swap positions, each uniform over `0..n`.
///
/// The positions are drawn independently and may coincide. `n` must be
/// positive.
#[inline]
pub fn draw_swap<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    (i, j)
}

/// Returns a copy of `route` with two uniformly chosen positions swapped.
///
/// The input is never modified. When both draws land on the same
/// position the candidate equals the input. An empty route is returned
/// unchanged without consuming randomness.
pub fn swap_neighbor<R: Rng>(route: &Route, rng: &mut R) -> Route {
    let mut order = route.as_slice().to_vec();
    if !order.is_empty() {
        let (i, j) = draw_swap(order.len(), rng);
        order.swap(i, j);
    }
    Route::from_order(order)
}
