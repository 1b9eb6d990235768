//! Temperature schedules.

/// Yields the acceptance temperature for a 1-based iteration number.
///
/// Implementations must return a non-negative value.
pub trait TemperatureSchedule {
    /// Temperature at iteration `t` (`t >= 1`).
    fn temperature(&self, t: usize) -> f64;
}

/// Constant temperature: plain Metropolis MCMC.
///
/// `T == 0` degenerates to pure hill-climbing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTemperature(pub f64);

impl TemperatureSchedule for FixedTemperature {
    #[inline]
    fn temperature(&self, _t: usize) -> f64 {
        self.0
    }
}

/// Simulated annealing schedule `T(t) = c / sqrt(t)`.
///
/// `T(1) = c` and the temperature decreases strictly toward zero for
/// `c > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSqrtCooling {
    /// Initial temperature scale.
    pub c: f64,
}

impl TemperatureSchedule for InverseSqrtCooling {
    #[inline]
    fn temperature(&self, t: usize) -> f64 {
        self.c / (t as f64).sqrt()
    }
}
