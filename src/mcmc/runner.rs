//! MCMC execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::acceptance::metropolis_accept;
use super::config::{McmcConfig, Schedule};
use super::schedule::{FixedTemperature, InverseSqrtCooling, TemperatureSchedule};
use crate::error::McmcError;
use crate::geo::CitySet;
use crate::route::{swap_neighbor, tour_length, Route};

/// Chain state after one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceStep {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Temperature used for the acceptance test.
    pub temperature: f64,
    /// Whether the candidate replaced the current route.
    pub accepted: bool,
    /// Current route cost after the step.
    pub current_cost: f64,
    /// Best cost seen up to and including this step.
    pub best_cost: f64,
}

/// Result of an optimizer run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McmcResult {
    /// The best route seen.
    pub best: Route,

    /// Cost of the best route in kilometers.
    pub best_cost: f64,

    /// Iteration at which `best` was recorded (0 = the initial route).
    pub best_iteration: usize,

    /// The chain's route when the budget ran out.
    pub final_route: Route,

    /// Cost of `final_route`.
    pub final_cost: f64,

    /// Iterations executed. Always equals the configured budget.
    pub iterations: usize,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving candidates.
    pub improving_moves: usize,

    /// Temperature at the last iteration.
    pub final_temperature: f64,

    /// Per-iteration trace, empty unless requested.
    pub trace: Vec<TraceStep>,
}

/// Executes the MCMC optimizer.
pub struct McmcRunner;

impl McmcRunner {
    /// Runs the optimizer, seeding a fresh generator from `config.seed`.
    pub fn run(cities: &CitySet, config: &McmcConfig) -> Result<McmcResult, McmcError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(cities, config, &mut rng)
    }

    /// Runs the optimizer on a caller-owned random stream.
    ///
    /// `config.seed` is ignored. The stream is consumed in a fixed order:
    /// the initial shuffle, then per iteration two swap positions followed
    /// by at most one acceptance draw.
    pub fn run_with_rng<R: Rng>(
        cities: &CitySet,
        config: &McmcConfig,
        rng: &mut R,
    ) -> Result<McmcResult, McmcError> {
        config.validate_for(cities)?;
        match config.schedule {
            Schedule::Fixed => Self::run_schedule(
                cities,
                &FixedTemperature(config.control),
                config.max_iterations,
                config.record_trace,
                rng,
            ),
            Schedule::Annealing => Self::run_schedule(
                cities,
                &InverseSqrtCooling { c: config.control },
                config.max_iterations,
                config.record_trace,
                rng,
            ),
        }
    }

    /// Runs the loop with an arbitrary temperature schedule.
    ///
    /// The schedule must yield a non-negative, non-NaN temperature for
    /// every `t` in `1..=max_iterations`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the schedule yields a negative or NaN
    /// temperature.
    pub fn run_schedule<S, R>(
        cities: &CitySet,
        schedule: &S,
        max_iterations: usize,
        record_trace: bool,
        rng: &mut R,
    ) -> Result<McmcResult, McmcError>
    where
        S: TemperatureSchedule + ?Sized,
        R: Rng,
    {
        if cities.is_empty() {
            return Err(McmcError::EmptyCitySet);
        }
        if max_iterations == 0 {
            return Err(McmcError::ZeroIterations);
        }

        let n = cities.len();

        // Best starts from load order; the chain starts from a shuffle.
        let mut best = Route::identity(n);
        let mut best_cost = tour_length(cities, &best);
        let mut current = Route::shuffled(n, rng);
        let mut current_cost = tour_length(cities, &current);
        let mut best_iteration = 0usize;

        debug!(
            cities = n,
            max_iterations,
            initial_cost = current_cost,
            "starting mcmc chain"
        );

        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut temperature = schedule.temperature(1);
        let mut steps = if record_trace {
            Vec::with_capacity(max_iterations)
        } else {
            Vec::new()
        };

        for t in 1..=max_iterations {
            temperature = schedule.temperature(t);
            debug_assert!(
                temperature >= 0.0,
                "schedule yielded temperature {temperature} at iteration {t}"
            );

            let candidate = swap_neighbor(&current, rng);
            let candidate_cost = tour_length(cities, &candidate);
            let delta = candidate_cost - current_cost;

            let accepted = metropolis_accept(delta, temperature, rng);
            if accepted {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;
            }

            // Checked every step, accepted or not.
            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
                best_iteration = t;
                trace!(iteration = t, best_cost, "new best route");
            }

            if record_trace {
                steps.push(TraceStep {
                    iteration: t,
                    temperature,
                    accepted,
                    current_cost,
                    best_cost,
                });
            }
        }

        debug!(
            best_cost,
            best_iteration,
            accepted_moves,
            improving_moves,
            final_temperature = temperature,
            "mcmc chain finished"
        );

        Ok(McmcResult {
            best,
            best_cost,
            best_iteration,
            final_route: current,
            final_cost: current_cost,
            iterations: max_iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            trace: steps,
        })
    }
}

/// Optimizes a tour and returns the best route found.
///
/// `control` is the temperature `T` under [`Schedule::Fixed`] and the
/// annealing constant `c` under [`Schedule::Annealing`]. The generator
/// is seeded from entropy; use [`optimize_with_rng`] for reproducible runs.
///
/// # Examples
///
/// ```
/// use u_tsp_mcmc::geo::CitySet;
/// use u_tsp_mcmc::mcmc::{optimize, Schedule};
///
/// let cities = CitySet::from_pairs([
///     ("a", (0.0, 0.0)),
///     ("b", (0.0, 1.0)),
///     ("c", (1.0, 1.0)),
/// ])
/// .unwrap();
/// let route = optimize(&cities, 100, 0.0, Schedule::Fixed).unwrap();
/// assert!(route.is_permutation_of(3));
/// ```
pub fn optimize(
    cities: &CitySet,
    max_iterations: usize,
    control: f64,
    schedule: Schedule,
) -> Result<Route, McmcError> {
    let config = McmcConfig::default()
        .with_schedule(schedule)
        .with_control(control)
        .with_max_iterations(max_iterations);
    McmcRunner::run(cities, &config).map(|result| result.best)
}

/// [`optimize`] on a caller-owned random stream.
pub fn optimize_with_rng<R: Rng>(
    cities: &CitySet,
    max_iterations: usize,
    control: f64,
    schedule: Schedule,
    rng: &mut R,
) -> Result<Route, McmcError> {
    let config = McmcConfig::default()
        .with_schedule(schedule)
        .with_control(control)
        .with_max_iterations(max_iterations);
    McmcRunner::run_with_rng(cities, &config, rng).map(|result| result.best)
}
