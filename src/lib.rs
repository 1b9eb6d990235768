//! Geographic traveling salesman heuristics via Markov Chain Monte Carlo.
//!
//! Provides a single-chain optimizer over cyclic tours of named cities:
//!
//! - **Plain MCMC**: Metropolis acceptance at a fixed temperature `T`.
//!   `T = 0` is pure hill-climbing.
//! - **Simulated Annealing**: the same loop with `T(t) = c / sqrt(t)`.
//!
//! Candidates come from a pairwise-swap neighborhood and tours are scored
//! by total haversine length in kilometers, closing leg included.
//!
//! Around the core sit the collaborators: a CSV [`loader`], a
//! [`harness`] that sweeps the control value across runs, and
//! [`report`] exporters.
//!
//! # Reproducibility
//!
//! Every random decision draws from one caller-owned generator, so a
//! fixed seed reproduces the best route bit for bit.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_tsp_mcmc::geo::CitySet;
//! use u_tsp_mcmc::mcmc::{optimize_with_rng, Schedule};
//! use u_tsp_mcmc::route::tour_length;
//!
//! let cities = CitySet::from_pairs([
//!     ("Sacramento", (38.5816, -121.4944)),
//!     ("Reno", (39.5296, -119.8138)),
//!     ("Fresno", (36.7378, -119.7871)),
//!     ("San Jose", (37.3382, -121.8863)),
//! ])
//! .unwrap();
//!
//! let a = optimize_with_rng(&cities, 1_000, 5.0, Schedule::Annealing, &mut StdRng::seed_from_u64(1)).unwrap();
//! let b = optimize_with_rng(&cities, 1_000, 5.0, Schedule::Annealing, &mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(a, b);
//! assert!(tour_length(&cities, &a) > 0.0);
//! ```

pub mod error;
pub mod geo;
pub mod harness;
pub mod loader;
pub mod mcmc;
pub mod report;
pub mod route;

pub use error::{ExportError, HarnessError, LoadError, McmcError};
pub use geo::{City, CitySet};
pub use mcmc::{optimize, optimize_with_rng, McmcConfig, McmcResult, McmcRunner, Schedule};
pub use route::{tour_length, Route};
