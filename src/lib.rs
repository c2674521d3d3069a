//! Batchgen Library
//!
//! A library for generating daily batches of synthetic user-activity
//! data as CSV files.
//!
//! # Features
//!
//! - Record generation: localized fake user-activity records from a
//!   seeded random number generator
//! - Batch writing: header plus N rows streamed into a CSV file
//! - Post-processing: per-row `unique_id` UUIDs and a normalized
//!   `accessed_at` timestamp for follow-up batches
//! - Run planning: the date alone decides batch size and mode
//!
//! # Pipeline
//!
//! ```text
//! RunConfig ──> plan_run ──> CsvPopulator ──> append_unique_ids ──> rewrite_accessed_at
//!   (date)     (mode, rows)  (batch_DATE.csv)  (unique_id column)    (next runs only)
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Scheduled run: size and mode decided from the date
//! batchgen run --output-dir data --seed 42
//!
//! # Re-generate the designated first batch
//! batchgen run --date 2025-09-22 --seed 42
//!
//! # Direct batch of a fixed size
//! batchgen populate --output data/batch.csv --rows 1000 --mode next
//! ```

pub mod run;

// Re-exports for convenience
pub use csv_populate::{CommonArgs, CsvPopulator, PopulateArgs, PopulateMetrics};
pub use csv_postprocess::{append_unique_ids, rewrite_accessed_at, RunMode, UNIQUE_ID_COLUMN};
pub use record_generator::{Locale, RecordGenerator, UserRecord, ACCESSED_AT_COLUMN, COLUMNS};
pub use run::{RunArgs, RunConfig, RunPlan};
