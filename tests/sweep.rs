//! Loader → sweep → exporter pipeline.
#![cfg(feature = "json")]

use std::fs;

use u_tsp_mcmc::harness::{Sweep, SweepConfig};
use u_tsp_mcmc::loader::load_cities;
use u_tsp_mcmc::mcmc::Schedule;
use u_tsp_mcmc::report::{whole_km, JsonReportExporter};
use u_tsp_mcmc::route::tour_length;

const CITIES: &str = "\
city,latitude,longitude
Sacramento,38.5816,-121.4944
San Francisco,37.7749,-122.4194
Fresno,36.7378,-119.7871
Reno,39.5296,-119.8138
San Jose,37.3382,-121.8863
Stockton,37.9577,-121.2908
\"Los Angeles, CA\",34.0522,-118.2437
";

#[test]
fn sweep_exports_every_run_and_promotes_the_shortest() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("cities.csv");
    fs::write(&csv, CITIES).unwrap();
    let cities = load_cities(&csv).unwrap();
    assert_eq!(cities.len(), 7);
    assert!(cities.index_of("Los Angeles, CA").is_some());

    for schedule in [Schedule::Fixed, Schedule::Annealing] {
        let mut exporter = JsonReportExporter::new(dir.path());
        let config = SweepConfig::new(schedule)
            .with_runs(4)
            .with_max_iterations(2_000)
            .with_seed(5);
        let report = Sweep::run(&cities, &config, &mut exporter).unwrap();

        assert_eq!(report.runs.len(), 4);
        for run in &report.runs {
            let artifact = run.artifact.as_ref().unwrap();
            assert!(artifact.starts_with(exporter.results_dir(schedule)));
            assert!(artifact.exists());
        }

        let best = report.best();
        assert!((tour_length(&cities, &best.best) - best.best_cost).abs() < 1e-9);

        let promoted = exporter.promote_shortest(&report).unwrap();
        assert_eq!(promoted.parent(), Some(dir.path()));
        let body: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&promoted).unwrap()).unwrap();
        assert_eq!(
            body["total_km"].as_f64().map(whole_km),
            Some(whole_km(best.best_cost))
        );
        assert_eq!(body["stops"].as_array().unwrap().len(), 7);
    }
}
