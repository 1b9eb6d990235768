//! Metropolis MCMC and simulated annealing over tours.
//!
//! Both variants share one loop: propose a pairwise swap, evaluate the
//! cyclic tour length, and apply the Metropolis criterion. They differ
//! only in the [`TemperatureSchedule`] that yields `T` for each
//! iteration:
//!
//! - [`Schedule::Fixed`]: `T` is the control value for every iteration.
//! - [`Schedule::Annealing`]: `T(t) = c / sqrt(t)` with `c` the control
//!   value and `t` the 1-based iteration.
//!
//! # References
//!
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod acceptance;
mod config;
mod runner;
mod schedule;

pub use acceptance::metropolis_accept;
pub use config::{McmcConfig, Schedule};
pub use runner::{optimize, optimize_with_rng, McmcResult, McmcRunner, TraceStep};
pub use schedule::{FixedTemperature, InverseSqrtCooling, TemperatureSchedule};
