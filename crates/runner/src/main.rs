//! Muse scenario CLI.
//!
//! Solve the creator-economy equilibrium under each policy scenario and
//! write the welfare summary table.

use anyhow::Context;
use clap::Parser;
use muse_runner::{SUMMARY_FILE, load_config, load_default_config, run_scenarios, save_summary};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "muse")]
#[command(about = "Creator-economy equilibrium and policy scenario simulator")]
struct Cli {
    /// Load configuration from JSON file (default: embedded baseline)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the summary table
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Only run the named scenario (repeatable)
    #[arg(short, long = "scenario")]
    scenarios: Vec<String>,

    /// Override the number of sampled creators
    #[arg(short = 'n', long)]
    population: Option<usize>,

    /// Log every solver iteration
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = match &cli.config {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => load_default_config().context("embedded baseline config is invalid")?,
    };

    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(n) = cli.population {
        config.solver = config.solver.with_population_sample_size(n);
        config.solver.validate()?;
    }

    let outcomes = run_scenarios(&config, &cli.scenarios)?;

    let not_converged = outcomes.iter().filter(|o| !o.converged).count();
    if not_converged > 0 {
        log::warn!("{not_converged} of {} scenarios did not converge", outcomes.len());
    }

    save_summary(&outcomes, &config.output_dir, SUMMARY_FILE)?;
    Ok(())
}
