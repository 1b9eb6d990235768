//! Sweeps MCMC and simulated annealing over a city file and keeps the
//! shortest tour of each sweep.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use u_tsp_mcmc::harness::{Sweep, SweepConfig};
use u_tsp_mcmc::loader::load_cities;
use u_tsp_mcmc::mcmc::Schedule;
use u_tsp_mcmc::report::{whole_km, ConsoleExporter, JsonReportExporter};
use u_tsp_mcmc::CitySet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScheduleArg {
    Fixed,
    Annealing,
    Both,
}

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// CSV file with a header row and `name,latitude,longitude` rows.
    #[arg(short, long)]
    cities: PathBuf,

    /// Which optimizer to sweep.
    #[arg(short, long, value_enum, default_value_t = ScheduleArg::Both)]
    schedule: ScheduleArg,

    /// Runs per sweep; run k uses control value k.
    #[arg(short, long, default_value_t = 10)]
    runs: usize,

    /// Iterations per run.
    #[arg(short = 'i', long, default_value_t = 10_000)]
    max_iter: usize,

    /// Base seed for reproducible sweeps.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for per-run reports and the promoted shortest route.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print every leg of each route.
    #[arg(short, long)]
    verbose: bool,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn title(schedule: Schedule) -> &'static str {
    match schedule {
        Schedule::Fixed => "MCMC",
        Schedule::Annealing => "MCMC SA",
    }
}

fn run_sweep(cities: &CitySet, args: &Args, schedule: Schedule) -> Result<f64> {
    let title = title(schedule);
    let control = match schedule {
        Schedule::Fixed => "T",
        Schedule::Annealing => "c",
    };
    println!("\n====================================================\n");
    println!("{title}");
    println!("\n====================================================\n");
    println!(
        "Sweeping {control} = 0..{} with MAX_ITER = {}",
        args.runs, args.max_iter
    );

    let mut config = SweepConfig::new(schedule)
        .with_runs(args.runs)
        .with_max_iterations(args.max_iter);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let json = JsonReportExporter::new(&args.out_dir);
    let mut exporters = (json, ConsoleExporter::new(io::stdout(), args.verbose));
    let report = Sweep::run(cities, &config, &mut exporters)
        .with_context(|| format!("{title} sweep failed"))?;

    let best = report.best();
    println!(
        "\n{title} shortest distance is: {} km ({control} = {})",
        whole_km(best.best_cost),
        best.control
    );
    let promoted = exporters
        .0
        .promote_shortest(&report)
        .context("failed to copy the shortest route report")?;
    println!("Shortest route written to {}", promoted.display());

    Ok(report.elapsed.as_secs_f64())
}

fn main() -> Result<()> {
    enable_tracing();
    let args = Args::parse();

    let cities = load_cities(&args.cities)
        .with_context(|| format!("failed to load cities from {}", args.cities.display()))?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let schedules: &[Schedule] = match args.schedule {
        ScheduleArg::Fixed => &[Schedule::Fixed],
        ScheduleArg::Annealing => &[Schedule::Annealing],
        ScheduleArg::Both => &[Schedule::Fixed, Schedule::Annealing],
    };

    let mut timings = Vec::with_capacity(schedules.len());
    for &schedule in schedules {
        let seconds = run_sweep(&cities, &args, schedule)?;
        timings.push((schedule, seconds));
    }

    println!();
    for (schedule, seconds) in timings {
        println!("{} took {seconds:.3} seconds", title(schedule));
    }
    Ok(())
}
