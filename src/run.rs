//! Scheduled batch runs.
//!
//! A run takes a date and turns it into one post-processed CSV batch:
//! the designated first-run date gets a fixed-size batch in first mode,
//! every other date gets a uniformly drawn row count in next mode.

use anyhow::Context;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use clap::Args;
use csv_populate::{CommonArgs, CsvPopulator};
use csv_postprocess::{append_unique_ids, rewrite_accessed_at, RunMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use record_generator::{Locale, ACCESS_WINDOW_DAYS, DATE_FORMAT};
use std::path::PathBuf;
use tracing::info;

/// Default designated first-run date.
pub const DEFAULT_FIRST_RUN_DATE: &str = "2025-09-22";

/// Rows written for the designated first batch.
pub const DEFAULT_FIRST_RUN_ROWS: u64 = 300_372;

/// Inclusive upper bound for follow-up batch sizes.
pub const DEFAULT_NEXT_ROWS_MAX: u64 = 1_101;

/// CLI options for a scheduled batch run.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Directory the batch file is written into
    #[arg(long, default_value = "data", env = "BATCHGEN_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Date the batch is generated for (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Designated first-run date
    #[arg(long, default_value = DEFAULT_FIRST_RUN_DATE, env = "BATCHGEN_FIRST_RUN_DATE")]
    pub first_run_date: NaiveDate,

    /// Rows written on the first-run date
    #[arg(long, default_value_t = DEFAULT_FIRST_RUN_ROWS)]
    pub first_run_rows: u64,

    /// Inclusive upper bound on the row count drawn for other dates
    #[arg(long, default_value_t = DEFAULT_NEXT_ROWS_MAX)]
    pub next_rows_max: u64,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Plan the batch without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output_dir: PathBuf,
    pub date: NaiveDate,
    pub first_run_date: NaiveDate,
    pub first_run_rows: u64,
    pub next_rows_max: u64,
    pub locale: Locale,
    pub seed: u64,
    pub dry_run: bool,
}

impl RunConfig {
    /// Build a config from parsed CLI arguments and a resolved seed.
    pub fn from_args(args: RunArgs, seed: u64) -> Self {
        Self {
            output_dir: args.output_dir,
            date: args.date.unwrap_or_else(|| Local::now().date_naive()),
            first_run_date: args.first_run_date,
            first_run_rows: args.first_run_rows,
            next_rows_max: args.next_rows_max,
            locale: args.common.locale,
            seed,
            dry_run: args.dry_run,
        }
    }
}

/// The plan derived from a [`RunConfig`]: what to write and where.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub mode: RunMode,
    pub rows: u64,
    pub output_path: PathBuf,
}

/// Decide mode, row count and output path for a run.
///
/// The row count for a next run is drawn uniformly from
/// `0..=next_rows_max`, consuming from `rng`, so the same seed plans
/// the same batch.
pub fn plan_run(config: &RunConfig, rng: &mut StdRng) -> RunPlan {
    let (mode, rows) = if config.date == config.first_run_date {
        (RunMode::First, config.first_run_rows)
    } else {
        (RunMode::Next, rng.random_range(0..=config.next_rows_max))
    };

    let file_name = format!("batch_{}.csv", config.date.format(DATE_FORMAT));
    RunPlan {
        mode,
        rows,
        output_path: config.output_dir.join(file_name),
    }
}

/// Execute a full batch run: plan, write the CSV, then post-process.
pub fn execute(config: &RunConfig) -> anyhow::Result<RunPlan> {
    execute_at(config, Local::now().naive_local())
}

/// Like [`execute`], with an explicit reference time.
///
/// `now` pins both the `accessed_at` sampling window and the rewritten
/// timestamp, so a run is fully determined by its config and `now`.
pub fn execute_at(config: &RunConfig, now: NaiveDateTime) -> anyhow::Result<RunPlan> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let plan = plan_run(config, &mut rng);

    info!(
        "Planned batch for {}: {} rows, {} mode, '{}'",
        config.date,
        plan.rows,
        plan.mode,
        plan.output_path.display()
    );

    if config.dry_run {
        info!(
            "[DRY-RUN] Would write {} rows to '{}'",
            plan.rows,
            plan.output_path.display()
        );
        return Ok(plan);
    }

    let window_end = now.with_nanosecond(0).unwrap_or(now);
    let window_start = window_end - Duration::days(ACCESS_WINDOW_DAYS);
    let mut populator = CsvPopulator::new(config.locale, config.seed)
        .with_access_window(window_start, window_end);

    let metrics = populator
        .populate(&plan.output_path, plan.rows)
        .with_context(|| format!("Failed to write batch to {:?}", plan.output_path))?;

    info!(
        "Wrote {} rows ({} bytes) in {:?}",
        metrics.rows_written, metrics.file_size_bytes, metrics.total_duration
    );

    append_unique_ids(&plan.output_path, &mut rng)
        .with_context(|| format!("Failed to tag rows in {:?}", plan.output_path))?;

    rewrite_accessed_at(&plan.output_path, plan.mode, now)
        .with_context(|| format!("Failed to update timestamps in {:?}", plan.output_path))?;

    info!("Batch run completed successfully");
    Ok(plan)
}
