//! Route reports.
//!
//! [`describe_route`] renders the human-readable summary printed after
//! each run. With the `json` feature, [`JsonReportExporter`] writes one
//! JSON artifact per run and can promote the shortest one of a sweep.

use std::io::Write;
use std::path::PathBuf;

use crate::error::ExportError;
use crate::geo::CitySet;
use crate::harness::{RouteExporter, RunSummary};
use crate::route::Route;

/// One leg of a tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Leg {
    pub from: String,
    pub to: String,
    /// Haversine distance in kilometers.
    pub km: f64,
}

/// Legs of `route` in visiting order, closing leg included.
pub fn route_legs(cities: &CitySet, route: &Route) -> Vec<Leg> {
    route
        .legs()
        .map(|(a, b)| Leg {
            from: cities.city(a).name.clone(),
            to: cities.city(b).name.clone(),
            km: cities.distance(a, b),
        })
        .collect()
}

/// Whole kilometers, truncated toward zero.
#[inline]
pub fn whole_km(km: f64) -> u64 {
    km as u64
}

/// Renders a route summary.
///
/// With `verbose`, every leg is listed first. The tour itself is printed
/// as `A => B => C` followed by the truncated total distance.
///
/// # Examples
///
/// ```
/// use u_tsp_mcmc::geo::CitySet;
/// use u_tsp_mcmc::report::describe_route;
/// use u_tsp_mcmc::route::Route;
///
/// let cities = CitySet::from_pairs([("A", (0.0, 0.0)), ("B", (0.0, 1.0))]).unwrap();
/// let text = describe_route(&cities, &Route::identity(2), false);
/// assert!(text.starts_with("A => B\n"));
/// assert!(text.contains("The total distance is 222 km."));
/// ```
pub fn describe_route(cities: &CitySet, route: &Route, verbose: bool) -> String {
    let legs = route_legs(cities, route);
    let total: f64 = legs.iter().map(|leg| leg.km).sum();
    let mut out = String::new();

    if verbose {
        for leg in &legs {
            out.push_str(&format!(
                "{} and {} are {} km apart.\n",
                leg.from,
                leg.to,
                whole_km(leg.km)
            ));
        }
    }

    let names: Vec<&str> = route.cities(cities).map(|c| c.name.as_str()).collect();
    out.push_str(&names.join(" => "));
    out.push('\n');
    out.push_str(&format!("\nThe total distance is {} km.\n", whole_km(total)));
    out
}

/// Writes [`describe_route`] for every run to a writer.
#[derive(Debug)]
pub struct ConsoleExporter<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> ConsoleExporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RouteExporter for ConsoleExporter<W> {
    fn export(&mut self, summary: &RunSummary<'_>) -> Result<Option<PathBuf>, ExportError> {
        let text = describe_route(summary.cities, summary.route, self.verbose);
        self.out
            .write_all(text.as_bytes())
            .map_err(ExportError::Write)?;
        Ok(None)
    }
}

#[cfg(feature = "json")]
pub use json::{JsonReportExporter, RouteReport, Stop};

#[cfg(feature = "json")]
mod json {
    use std::fs;
    use std::path::{Path, PathBuf};

    use serde::Serialize;
    use tracing::debug;

    use super::{route_legs, whole_km, Leg};
    use crate::error::ExportError;
    use crate::harness::{RouteExporter, RunSummary, SweepReport};
    use crate::mcmc::Schedule;

    /// A city as listed in a report.
    #[derive(Debug, Clone, Serialize)]
    pub struct Stop {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
    }

    /// Serialized form of one run.
    #[derive(Debug, Clone, Serialize)]
    pub struct RouteReport {
        pub schedule: Schedule,
        pub control: f64,
        pub total_km: f64,
        pub stops: Vec<Stop>,
        pub legs: Vec<Leg>,
    }

    impl RouteReport {
        pub fn from_summary(summary: &RunSummary<'_>) -> Self {
            let stops = summary
                .route
                .cities(summary.cities)
                .map(|c| Stop {
                    name: c.name.clone(),
                    latitude: c.latitude,
                    longitude: c.longitude,
                })
                .collect();
            Self {
                schedule: summary.schedule,
                control: summary.control,
                total_km: summary.cost,
                stops,
                legs: route_legs(summary.cities, summary.route),
            }
        }
    }

    /// Writes `<root>/<label>-results/distance-<km>-run<k>.json` per run.
    #[derive(Debug, Clone)]
    pub struct JsonReportExporter {
        root: PathBuf,
    }

    impl JsonReportExporter {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        /// Directory holding the per-run artifacts of a schedule.
        pub fn results_dir(&self, schedule: Schedule) -> PathBuf {
            self.root.join(format!("{}-results", schedule.label()))
        }

        /// Copies the best run's artifact to
        /// `<root>/<label>-shortest-distance-<km>.json`.
        pub fn promote_shortest(&self, report: &SweepReport) -> Result<PathBuf, ExportError> {
            let best = report.best();
            let source = best.artifact.as_ref().ok_or(ExportError::EmptySweep)?;
            let target = self.root.join(format!(
                "{}-shortest-distance-{}.json",
                report.schedule.label(),
                whole_km(best.best_cost)
            ));
            fs::copy(source, &target).map_err(|source| ExportError::Io {
                path: target.clone(),
                source,
            })?;
            debug!(path = %target.display(), "promoted shortest route");
            Ok(target)
        }
    }

    impl RouteExporter for JsonReportExporter {
        fn export(&mut self, summary: &RunSummary<'_>) -> Result<Option<PathBuf>, ExportError> {
            let dir = self.results_dir(summary.schedule);
            fs::create_dir_all(&dir).map_err(|source| ExportError::Io {
                path: dir.clone(),
                source,
            })?;

            let path = dir.join(format!(
                "distance-{}-run{}.json",
                whole_km(summary.cost),
                summary.run
            ));
            let body = serde_json::to_string_pretty(&RouteReport::from_summary(summary))
                .map_err(|err| ExportError::Serialize(Box::new(err)))?;
            fs::write(&path, body).map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "wrote route report");
            Ok(Some(path))
        }
    }

}
