//! CSV batch population.
//!
//! Writes a header row plus a configurable number of generated user
//! activity records to a CSV file, creating parent directories as
//! needed. Generation is seeded, so the same locale, seed and access
//! window reproduce the same file.
//!
//! # Example
//!
//! ```no_run
//! use csv_populate::CsvPopulator;
//! use record_generator::Locale;
//!
//! # fn main() -> Result<(), csv_populate::PopulateError> {
//! let mut populator = CsvPopulator::new(Locale::En, 42);
//! let metrics = populator.populate("data/batch_2025-09-22.csv", 1000)?;
//! println!("Wrote {} rows", metrics.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod args;
mod error;
mod populator;

// Re-exports for convenience
pub use args::{CommonArgs, PopulateArgs};
pub use error::PopulateError;
pub use populator::{CsvPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
