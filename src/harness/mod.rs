//! Parameter sweeps over the optimizer.
//!
//! A sweep runs the optimizer once per control value `0..runs`, hands
//! every run's best route to a [`RouteExporter`], and keeps the run with
//! the shortest tour.

mod export;
mod sweep;

pub use export::{NoopExporter, RouteExporter, RunSummary};
pub use sweep::{RunRecord, Sweep, SweepConfig, SweepReport};
