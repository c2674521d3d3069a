//! Post-processing passes for generated CSV batches.
//!
//! Two passes run after a batch is written:
//!
//! - [`append_unique_ids`] tags every row with a random UUID in a
//!   `unique_id` column.
//! - [`rewrite_accessed_at`] rewrites the `accessed_at` column to one
//!   day before a reference time, skipped for first runs.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use csv_postprocess::{append_unique_ids, rewrite_accessed_at, RunMode};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), csv_postprocess::PostprocessError> {
//! let mut rng = StdRng::seed_from_u64(42);
//! append_unique_ids("data/batch_2025-09-23.csv", &mut rng)?;
//! rewrite_accessed_at(
//!     "data/batch_2025-09-23.csv",
//!     RunMode::Next,
//!     Local::now().naive_local(),
//! )?;
//! # Ok(())
//! # }
//! ```

mod error;
mod tag;
mod timestamp;

// Re-exports for convenience
pub use error::PostprocessError;
pub use tag::{append_unique_ids, UNIQUE_ID_COLUMN};
pub use timestamp::{rewrite_accessed_at, RunMode};
