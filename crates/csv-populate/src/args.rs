//! CLI argument definitions for the batch writer.

use clap::Args;
use record_generator::Locale;
use std::path::PathBuf;

/// Arguments shared by every subcommand that generates records.
#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    /// Fake-data locale, fixed for the whole batch
    #[arg(long, value_enum, default_value_t = Locale::En, env = "BATCHGEN_LOCALE")]
    pub locale: Locale,

    /// Random seed for reproducible output (omit for OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `populate` subcommand.
#[derive(Args, Clone, Debug)]
pub struct PopulateArgs {
    /// Output CSV file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Number of records to generate
    #[arg(long, default_value = "1000")]
    pub rows: u64,

    #[command(flatten)]
    pub common: CommonArgs,
}
