//! Criterion benchmarks for the tour cost and the optimizer loop.
//!
//! Cities are placed deterministically on a jittered grid so runs are
//! comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tsp_mcmc::geo::CitySet;
use u_tsp_mcmc::mcmc::{McmcConfig, McmcRunner};
use u_tsp_mcmc::route::{tour_length, Route};

fn grid_cities(n: usize) -> CitySet {
    let mut rng = StdRng::seed_from_u64(7);
    let side = (n as f64).sqrt().ceil() as usize;
    let pairs: Vec<(String, (f64, f64))> = (0..n)
        .map(|i| {
            let lat = 30.0 + (i / side) as f64 * 0.5 + rng.random_range(-0.1..0.1);
            let lon = -120.0 + (i % side) as f64 * 0.5 + rng.random_range(-0.1..0.1);
            (format!("city-{i}"), (lat, lon))
        })
        .collect();
    CitySet::from_pairs(pairs).expect("unique generated names")
}

fn bench_tour_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_length");

    for &n in &[25, 100, 500] {
        let cities = grid_cities(n);
        let route = Route::shuffled(n, &mut StdRng::seed_from_u64(1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &(cities, route), |b, (c, r)| {
            b.iter(|| black_box(tour_length(black_box(c), black_box(r))))
        });
    }
    group.finish();
}

fn bench_mcmc(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcmc_fixed");
    group.sample_size(10);

    for &n in &[25, 100] {
        let cities = grid_cities(n);
        let config = McmcConfig::fixed(5.0).with_max_iterations(10_000).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(cities, config), |b, (c, cfg)| {
            b.iter(|| {
                let result = McmcRunner::run(black_box(c), black_box(cfg));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcmc_annealing");
    group.sample_size(10);

    for &n in &[25, 100] {
        let cities = grid_cities(n);
        let config = McmcConfig::annealing(70.0).with_max_iterations(10_000).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(cities, config), |b, (c, cfg)| {
            b.iter(|| {
                let result = McmcRunner::run(black_box(c), black_box(cfg));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tour_length, bench_mcmc, bench_annealing);
criterion_main!(benches);
