//! Control-value sweep.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::info;

use super::export::{RouteExporter, RunSummary};
use crate::error::{HarnessError, McmcError};
use crate::geo::CitySet;
use crate::mcmc::{McmcConfig, McmcRunner, Schedule};
use crate::route::Route;

/// Configuration for a sweep.
///
/// # Examples
///
/// ```
/// use u_tsp_mcmc::harness::SweepConfig;
/// use u_tsp_mcmc::mcmc::Schedule;
///
/// let config = SweepConfig::new(Schedule::Annealing)
///     .with_runs(5)
///     .with_max_iterations(2_000)
///     .with_seed(1);
/// assert_eq!(config.runs, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Schedule applied to every run.
    pub schedule: Schedule,
    /// Number of runs; run `k` uses control value `k`.
    pub runs: usize,
    /// Iteration budget per run.
    pub max_iterations: usize,
    /// Base seed; run `k` is seeded with `seed + k`. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            schedule: Schedule::Fixed,
            runs: 10,
            max_iterations: 10_000,
            seed: None,
        }
    }
}

impl SweepConfig {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            ..Self::default()
        }
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the sweep shape. Per-run parameters are checked by the
    /// optimizer.
    pub fn validate(&self) -> Result<(), McmcError> {
        if self.runs == 0 {
            return Err(McmcError::ZeroRuns);
        }
        if self.max_iterations == 0 {
            return Err(McmcError::ZeroIterations);
        }
        Ok(())
    }

    /// Optimizer configuration for run `k`.
    pub fn run_config(&self, k: usize) -> McmcConfig {
        let config = McmcConfig::default()
            .with_schedule(self.schedule)
            .with_control(k as f64)
            .with_max_iterations(self.max_iterations);
        match self.seed {
            Some(seed) => config.with_seed(seed.wrapping_add(k as u64)),
            None => config,
        }
    }
}

/// Outcome of one run in a sweep.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunRecord {
    /// Control value (`T` or `c`) of the run.
    pub control: f64,
    /// Best route of the run.
    pub best: Route,
    /// Tour length of `best` in kilometers.
    pub best_cost: f64,
    /// Wall-clock time of the optimizer call.
    pub elapsed: Duration,
    /// Artifact written by the exporter, if any.
    pub artifact: Option<PathBuf>,
}

/// Outcome of a whole sweep.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepReport {
    /// Schedule every run used.
    pub schedule: Schedule,
    /// Runs in control-value order.
    pub runs: Vec<RunRecord>,
    /// Index into `runs` of the shortest tour (earliest on ties).
    pub best_run: usize,
    /// Wall-clock time of the whole sweep, exporting included.
    pub elapsed: Duration,
}

impl SweepReport {
    /// The run with the shortest tour.
    pub fn best(&self) -> &RunRecord {
        &self.runs[self.best_run]
    }
}

/// Runs control-value sweeps.
pub struct Sweep;

impl Sweep {
    /// Runs the optimizer with control values `0..runs` and exports each run.
    pub fn run<E: RouteExporter>(
        cities: &CitySet,
        config: &SweepConfig,
        exporter: &mut E,
    ) -> Result<SweepReport, HarnessError> {
        config.validate()?;
        if cities.is_empty() {
            return Err(McmcError::EmptyCitySet.into());
        }

        let started = Instant::now();
        let mut runs = Vec::with_capacity(config.runs);
        let mut best_run = 0usize;
        let mut best_cost = f64::INFINITY;

        for k in 0..config.runs {
            let run_config = config.run_config(k);
            let run_started = Instant::now();
            let result = McmcRunner::run(cities, &run_config)?;
            let elapsed = run_started.elapsed();

            info!(
                schedule = config.schedule.label(),
                control = run_config.control,
                max_iterations = config.max_iterations,
                best_cost = result.best_cost,
                elapsed_ms = elapsed.as_millis() as u64,
                "sweep run finished"
            );

            let artifact = exporter.export(&RunSummary {
                cities,
                route: &result.best,
                cost: result.best_cost,
                schedule: config.schedule,
                control: run_config.control,
                run: k,
            })?;

            if result.best_cost < best_cost {
                best_cost = result.best_cost;
                best_run = k;
            }

            runs.push(RunRecord {
                control: run_config.control,
                best: result.best,
                best_cost: result.best_cost,
                elapsed,
                artifact,
            });
        }

        let report = SweepReport {
            schedule: config.schedule,
            runs,
            best_run,
            elapsed: started.elapsed(),
        };
        info!(
            schedule = config.schedule.label(),
            best_control = report.best().control,
            best_cost = report.best().best_cost,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "sweep finished"
        );
        Ok(report)
    }
}
