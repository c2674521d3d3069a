//! Command-line interface for batchgen
//!
//! # Usage Examples
//!
//! ## Scheduled Runs
//! ```bash
//! # Generate today's batch into ./data
//! batchgen run
//!
//! # Generate the batch for a specific date with a pinned seed
//! batchgen run --date 2025-09-23 --seed 42
//!
//! # Re-generate the designated first batch (300372 rows, no
//! # timestamp rewrite)
//! batchgen run --date 2025-09-22
//!
//! # Plan without writing anything
//! batchgen run --date 2025-09-23 --dry-run
//! ```
//!
//! ## Direct Batches
//! ```bash
//! # Write a fixed-size batch and post-process it as a follow-up run
//! batchgen populate --output data/batch.csv --rows 1000 --mode next
//!
//! # French records, reproducible
//! batchgen populate --output data/batch.csv --rows 50 --locale fr-fr --seed 7
//! ```
//!
//! ## Environment
//! - `BATCHGEN_OUTPUT_DIR`: default output directory for `run`
//! - `BATCHGEN_LOCALE`: default record locale
//! - `BATCHGEN_FIRST_RUN_DATE`: designated first-run date

use anyhow::Context;
use batchgen::run::{self, RunArgs, RunConfig};
use chrono::Local;
use clap::{Parser, Subcommand};
use csv_populate::{CsvPopulator, PopulateArgs};
use csv_postprocess::{append_unique_ids, rewrite_accessed_at, RunMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(name = "batchgen")]
#[command(about = "A tool for generating daily batches of synthetic user-activity CSV data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and post-process the batch for a date
    Run {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Write one batch of a fixed size and post-process it
    Populate {
        #[command(flatten)]
        args: PopulateArgs,

        /// Post-processing mode applied after writing
        #[arg(long, value_enum, default_value_t = RunMode::Next)]
        mode: RunMode,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { args } => run_batch(args)?,
        Commands::Populate { args, mode } => run_populate(args, mode)?,
    }

    Ok(())
}

/// Run the scheduled batch pipeline for a date.
fn run_batch(args: RunArgs) -> anyhow::Result<()> {
    let seed = resolve_seed(args.common.seed);
    let config = RunConfig::from_args(args, seed);

    tracing::info!(
        "Starting batch run for {} (locale={}, seed={})",
        config.date,
        config.locale,
        seed
    );

    if config.dry_run {
        tracing::info!("Running in dry-run mode - no data will be written");
    }

    let plan = run::execute(&config)?;

    tracing::info!(
        "Batch for {}: {} rows ({} run) at {:?}",
        config.date,
        plan.rows,
        plan.mode,
        plan.output_path
    );

    Ok(())
}

/// Write one fixed-size batch and apply the post-processing passes.
fn run_populate(args: PopulateArgs, mode: RunMode) -> anyhow::Result<()> {
    let seed = resolve_seed(args.common.seed);

    tracing::info!(
        "Populating {:?} with {} rows (locale={}, seed={})",
        args.output,
        args.rows,
        args.common.locale,
        seed
    );

    let mut populator = CsvPopulator::new(args.common.locale, seed);
    let metrics = populator
        .populate(&args.output, args.rows)
        .with_context(|| format!("Failed to write batch to {:?}", args.output))?;

    tracing::info!(
        "Generated {:?}: {} rows in {:?} ({:.2} rows/sec)",
        args.output,
        metrics.rows_written,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    let mut rng = StdRng::seed_from_u64(seed);
    append_unique_ids(&args.output, &mut rng)
        .with_context(|| format!("Failed to tag rows in {:?}", args.output))?;

    rewrite_accessed_at(&args.output, mode, Local::now().naive_local())
        .with_context(|| format!("Failed to update timestamps in {:?}", args.output))?;

    tracing::info!("Populate completed successfully");
    Ok(())
}

/// Use the given seed, or draw one from OS entropy so the log line
/// still lets a run be reproduced.
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}
