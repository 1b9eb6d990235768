//! Exporter seam for sweep results.

use std::path::PathBuf;

use crate::error::ExportError;
use crate::geo::CitySet;
use crate::mcmc::Schedule;
use crate::route::Route;

/// One finished optimizer run, as seen by an exporter.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary<'a> {
    /// Cities the route indexes into.
    pub cities: &'a CitySet,
    /// Best route of the run.
    pub route: &'a Route,
    /// Tour length of `route` in kilometers.
    pub cost: f64,
    /// Schedule the run used.
    pub schedule: Schedule,
    /// Control value (`T` or `c`) the run used.
    pub control: f64,
    /// 0-based position of the run in its sweep.
    pub run: usize,
}

/// Receives each run's best route and produces an artifact.
///
/// Returning `Ok(Some(path))` reports where the artifact was written.
pub trait RouteExporter {
    fn export(&mut self, summary: &RunSummary<'_>) -> Result<Option<PathBuf>, ExportError>;
}

/// Discards every run.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopExporter;

impl RouteExporter for NoopExporter {
    fn export(&mut self, _summary: &RunSummary<'_>) -> Result<Option<PathBuf>, ExportError> {
        Ok(None)
    }
}

impl<E: RouteExporter + ?Sized> RouteExporter for &mut E {
    fn export(&mut self, summary: &RunSummary<'_>) -> Result<Option<PathBuf>, ExportError> {
        (**self).export(summary)
    }
}

/// Runs both exporters in order; the first artifact path wins.
impl<A: RouteExporter, B: RouteExporter> RouteExporter for (A, B) {
    fn export(&mut self, summary: &RunSummary<'_>) -> Result<Option<PathBuf>, ExportError> {
        let first = self.0.export(summary)?;
        let second = self.1.export(summary)?;
        Ok(first.or(second))
    }
}
