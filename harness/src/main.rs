//! # emoa CLI Entry Point
//!
//! `emoa run` answers one start/goal query over DIMACS cost files.
//! `emoa grid` writes a random grid world as DIMACS cost files.

use anyhow::Context;
use clap::Parser;

use emoa_harness::cli::{GridArgs, RunArgs};
use emoa_harness::runner;
use emoa_harness::worlds::{export_grid, random_grid};

/// Pareto-optimal multi-objective shortest paths.
#[derive(Parser, Debug)]
#[command(name = "emoa", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Search one start/goal pair.
    Run(RunArgs),
    /// Generate a random grid world and export it.
    Grid(GridArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = args.into_config().context("loading run config")?;
            let outcome = runner::run(&config).context("running search")?;
            let r = &outcome.result;
            println!(
                "{}: {} solutions, {} generated, {} expanded, {} max open, {:.6}s search, {}",
                r.reason,
                r.solutions.len(),
                r.stats.n_generated,
                r.stats.n_expanded,
                r.stats.open_size_max,
                r.stats.rt_search,
                outcome.digest
            );
        }
        Commands::Grid(args) => {
            let grid = random_grid(&args.spec()).context("generating grid")?;
            let paths = export_grid(&grid, &args.out_dir, &args.stem).context("exporting grid")?;
            for p in paths {
                println!("{}", p.display());
            }
        }
    }

    Ok(())
}
