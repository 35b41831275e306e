use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use buffon::{
    seeded_rng, Experiment, ExperimentParams, DEFAULT_EXPERIMENT_PLANE_WIDTH, DEFAULT_TRIALS,
};

#[derive(Parser)]
#[command(name = "buffon")]
#[command(about = "Estimate pi by dropping needles on a ruled plane")]
struct Cli {
    /// Number of needles to drop
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Width of the plane; start points fall within width / 2 - 1 of the origin
    #[arg(short = 'w', long, default_value_t = DEFAULT_EXPERIMENT_PLANE_WIDTH)]
    plane_width: u32,

    /// Generator seed, drawn from OS entropy when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the seed and every needle as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

/// JSON output; carries the seed so the run can be replayed with `--seed`.
#[derive(Serialize)]
struct JsonReport<'a> {
    seed: u64,
    experiment: &'a Experiment,
}

fn render_json(seed: u64, experiment: &Experiment) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&JsonReport { seed, experiment })
        .context("Failed to serialize experiment")
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding generator");

    let params = ExperimentParams {
        trials: cli.trials,
        plane_width: cli.plane_width,
    };
    let mut rng = seeded_rng(seed);

    let start = Instant::now();
    let experiment = params.run(&mut rng)?;
    let run_time = start.elapsed();

    if cli.json {
        println!("{}", render_json(seed, &experiment)?);
        return Ok(());
    }

    println!("Buffon's Needle Estimation");
    println!("Seed: {}", seed);
    println!("Plane width: {}", experiment.plane);
    println!("Total trials: {}", experiment.trials());
    println!("Needles crossing a line: {}", experiment.crossings());
    match experiment.crossing_rate() {
        Some(rate) => println!("Crossing rate: {:.6}", rate),
        None => println!("Crossing rate: n/a"),
    }
    match experiment.pi_estimate() {
        Some(pi_estimate) => {
            println!("Pi estimate: {:.6}", pi_estimate);
            println!("Error: {:.6}", std::f64::consts::PI - pi_estimate);
        }
        None => println!("Pi estimate: n/a (no crossings)"),
    }
    println!("Run time: {}ms", run_time.as_millis());

    Ok(())
}
