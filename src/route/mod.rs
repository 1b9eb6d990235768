//! Tours over a [`CitySet`](crate::geo::CitySet).
//!
//! A [`Route`] is a cyclic ordering of city indices; the last city
//! connects back to the first.

mod cost;
mod neighbor;
mod types;

pub use cost::tour_length;
pub use neighbor::{draw_swap, swap_neighbor};
pub use types::Route;
