//! End-to-end behavior of the optimizer through the public API.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_tsp_mcmc::geo::CitySet;
use u_tsp_mcmc::mcmc::{metropolis_accept, optimize_with_rng, McmcConfig, McmcRunner, Schedule};
use u_tsp_mcmc::route::{draw_swap, swap_neighbor, tour_length, Route};

/// Unit square loaded in a crossing order, so load order is not optimal.
fn crossed_square() -> CitySet {
    CitySet::from_pairs([
        ("sw", (0.0, 0.0)),
        ("ne", (1.0, 1.0)),
        ("nw", (0.0, 1.0)),
        ("se", (1.0, 0.0)),
    ])
    .unwrap()
}

fn square_perimeter(cities: &CitySet) -> f64 {
    let order = ["sw", "nw", "ne", "se"];
    tour_length(cities, &Route::from_names(cities, order).unwrap())
}

fn california() -> CitySet {
    CitySet::from_pairs([
        ("Sacramento", (38.5816, -121.4944)),
        ("San Francisco", (37.7749, -122.4194)),
        ("Fresno", (36.7378, -119.7871)),
        ("Reno", (39.5296, -119.8138)),
        ("San Jose", (37.3382, -121.8863)),
        ("Stockton", (37.9577, -121.2908)),
        ("Modesto", (37.6391, -120.9969)),
        ("Bakersfield", (35.3733, -119.0187)),
        ("Los Angeles", (34.0522, -118.2437)),
        ("San Diego", (32.7157, -117.1611)),
        ("Santa Barbara", (34.4208, -119.6982)),
        ("Redding", (40.5865, -122.3917)),
    ])
    .unwrap()
}

#[test]
fn hill_climbing_finds_square_perimeter() {
    let cities = crossed_square();
    let perimeter = square_perimeter(&cities);
    assert!(tour_length(&cities, &Route::identity(4)) > perimeter + 1.0);

    for seed in 0..25 {
        let config = McmcConfig::fixed(0.0).with_max_iterations(1_000).with_seed(seed);
        let result = McmcRunner::run(&cities, &config).unwrap();
        assert!(
            (result.best_cost - perimeter).abs() < 1e-9,
            "seed {seed}: {} != {perimeter}",
            result.best_cost
        );
        assert!((result.final_cost - perimeter).abs() < 1e-9);
    }
}

#[test]
fn chain_state_is_always_a_permutation() {
    let cities = california();
    for budget in 1..=60 {
        for schedule in [Schedule::Fixed, Schedule::Annealing] {
            let config = McmcConfig::default()
                .with_schedule(schedule)
                .with_control(25.0)
                .with_max_iterations(budget)
                .with_seed(123);
            let result = McmcRunner::run(&cities, &config).unwrap();
            assert!(result.best.is_permutation_of(cities.len()));
            assert!(result.final_route.is_permutation_of(cities.len()));
        }
    }
}

#[test]
fn seeded_runs_are_bit_identical() {
    let cities = california();
    for schedule in [Schedule::Fixed, Schedule::Annealing] {
        let a = optimize_with_rng(&cities, 5_000, 30.0, schedule, &mut StdRng::seed_from_u64(8))
            .unwrap();
        let b = optimize_with_rng(&cities, 5_000, 30.0, schedule, &mut StdRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(
            tour_length(&cities, &a).to_bits(),
            tour_length(&cities, &b).to_bits()
        );
    }
}

#[test]
fn coinciding_swap_positions_leave_cost_unchanged() {
    let cities = california();
    let n = cities.len();
    let route = Route::shuffled(n, &mut StdRng::seed_from_u64(3));
    let cost = tour_length(&cities, &route);

    // Find a stream whose first swap draws the same position twice.
    let seed = (0u64..)
        .find(|&s| {
            let (i, j) = draw_swap(n, &mut StdRng::seed_from_u64(s));
            i == j
        })
        .unwrap();

    let mut rng = StdRng::seed_from_u64(seed);
    let candidate = swap_neighbor(&route, &mut rng);
    assert_eq!(candidate, route);

    let candidate_cost = tour_length(&cities, &candidate);
    assert_eq!(candidate_cost.to_bits(), cost.to_bits());

    let delta = candidate_cost - cost;
    assert_eq!(delta, 0.0);
    assert!(!metropolis_accept(delta, 0.0, &mut rng));
    assert!(metropolis_accept(delta, 1.0, &mut rng));
}

#[test]
fn degenerate_swap_is_rejected_when_cold() {
    // With one city every candidate equals the current route (delta == 0).
    let cities = CitySet::from_pairs([("only", (10.0, 10.0))]).unwrap();

    let cold = McmcRunner::run(&cities, &McmcConfig::fixed(0.0).with_max_iterations(50).with_seed(1))
        .unwrap();
    assert_eq!(cold.accepted_moves, 0);

    let hot = McmcRunner::run(&cities, &McmcConfig::fixed(1.0).with_max_iterations(50).with_seed(1))
        .unwrap();
    assert_eq!(hot.accepted_moves, 50);
    assert_eq!(hot.improving_moves, 0);
}

#[test]
fn annealing_beats_load_order() {
    let cities = california();
    let load_order = tour_length(&cities, &Route::identity(cities.len()));
    let config = McmcConfig::annealing(70.0).with_max_iterations(10_000).with_seed(2024);
    let result = McmcRunner::run(&cities, &config).unwrap();
    assert!(result.best_cost <= load_order);
    assert!((tour_length(&cities, &result.best) - result.best_cost).abs() < 1e-9);
}

#[test]
fn best_is_never_worse_than_load_order() {
    let cities = california();
    let load_order = tour_length(&cities, &Route::identity(cities.len()));
    for control in 0..5 {
        let config = McmcConfig::fixed(control as f64 * 100.0)
            .with_max_iterations(200)
            .with_seed(control);
        let result = McmcRunner::run(&cities, &config).unwrap();
        assert!(result.best_cost <= load_order);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_results_are_permutations(
        coords in prop::collection::vec((-60.0f64..60.0, -170.0f64..170.0), 1..15),
        control in 0.0f64..200.0,
        annealing in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let pairs: Vec<(String, (f64, f64))> = coords
            .into_iter()
            .enumerate()
            .map(|(i, c)| (format!("city-{i}"), c))
            .collect();
        let cities = CitySet::from_pairs(pairs).unwrap();
        let schedule = if annealing { Schedule::Annealing } else { Schedule::Fixed };
        let config = McmcConfig::default()
            .with_schedule(schedule)
            .with_control(control)
            .with_max_iterations(300)
            .with_seed(seed)
            .with_trace(true);
        let result = McmcRunner::run(&cities, &config).unwrap();

        prop_assert!(result.best.is_permutation_of(cities.len()));
        prop_assert!(result.final_route.is_permutation_of(cities.len()));
        prop_assert_eq!(result.trace.len(), 300);
        for w in result.trace.windows(2) {
            prop_assert!(w[1].best_cost <= w[0].best_cost);
        }
    }
}
