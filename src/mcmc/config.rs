//! Optimizer configuration.

use crate::error::McmcError;
use crate::geo::CitySet;

/// How the acceptance temperature evolves over the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Schedule {
    /// The control value is used as a constant temperature `T`.
    #[default]
    Fixed,

    /// The control value is the constant `c` in `T(t) = c / sqrt(t)`.
    Annealing,
}

impl Schedule {
    /// Short label used in logs and report file names.
    pub fn label(self) -> &'static str {
        match self {
            Schedule::Fixed => "mcmc",
            Schedule::Annealing => "mcmc-sa",
        }
    }
}

/// Configuration for a single optimizer run.
///
/// # Examples
///
/// ```
/// use u_tsp_mcmc::mcmc::{McmcConfig, Schedule};
///
/// let config = McmcConfig::annealing(70.0)
///     .with_max_iterations(5_000)
///     .with_seed(7);
/// assert_eq!(config.schedule, Schedule::Annealing);
/// assert_eq!(config.max_iterations, 5_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McmcConfig {
    /// Temperature schedule.
    pub schedule: Schedule,

    /// `T` under [`Schedule::Fixed`], `c` under [`Schedule::Annealing`].
    pub control: f64,

    /// Exact number of iterations to run.
    pub max_iterations: usize,

    /// Random seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Record a [`TraceStep`](super::TraceStep) for every iteration.
    pub record_trace: bool,
}

impl Default for McmcConfig {
    fn default() -> Self {
        Self {
            schedule: Schedule::Fixed,
            control: 10.0,
            max_iterations: 10_000,
            seed: None,
            record_trace: false,
        }
    }
}

impl McmcConfig {
    /// Plain Metropolis MCMC at constant temperature `t`.
    pub fn fixed(t: f64) -> Self {
        Self {
            schedule: Schedule::Fixed,
            control: t,
            ..Self::default()
        }
    }

    /// Simulated annealing with `T(t) = c / sqrt(t)`.
    pub fn annealing(c: f64) -> Self {
        Self {
            schedule: Schedule::Annealing,
            control: c,
            ..Self::default()
        }
    }

    /// Simulated annealing with the customary `c = 70`.
    pub fn annealing_default() -> Self {
        Self::annealing(70.0)
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_control(mut self, control: f64) -> Self {
        self.control = control;
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

    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Validates the run parameters.
    pub fn validate(&self) -> Result<(), McmcError> {
        if self.max_iterations == 0 {
            return Err(McmcError::ZeroIterations);
        }
        if !self.control.is_finite() {
            return Err(McmcError::NonFiniteControl {
                value: self.control,
            });
        }
        if self.control < 0.0 {
            return Err(McmcError::NegativeControl {
                value: self.control,
            });
        }
        Ok(())
    }

    /// Validates the run parameters against a city set.
    pub fn validate_for(&self, cities: &CitySet) -> Result<(), McmcError> {
        if cities.is_empty() {
            return Err(McmcError::EmptyCitySet);
        }
        self.validate()
    }
}
