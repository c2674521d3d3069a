//! Synthetic user-activity record generation.
//!
//! This crate produces the records the batch pipeline writes to CSV: 15
//! ordered fields of localized personal data (name, national identifier,
//! address, phone) and network telemetry (MAC, IPv4, IBAN, access
//! timestamp, session counters).
//!
//! ```text
//! Locale ──► FakeData source ──┐
//!                              ▼
//!                      RecordGenerator ──► UserRecord (15 fields)
//!                              ▲
//! seed ──► StdRng ─────────────┘
//! ```
//!
//! Generation is deterministic: the same locale, seed and access window
//! reproduce the same records.
//!
//! # Example
//!
//! ```rust
//! use record_generator::{Locale, RecordGenerator};
//!
//! let mut generator = RecordGenerator::new(Locale::En, 42);
//! let record = generator.next_record();
//! assert!(record.email.starts_with(&format!("{}@", record.user_name)));
//! ```

pub mod generator;
pub mod iban;
pub mod record;
pub mod source;

// Re-exports for convenience
pub use generator::{RecordGenerator, RecordIterator, ACCESS_WINDOW_DAYS};
pub use record::{
    UserRecord, ACCESSED_AT_COLUMN, COLUMNS, DATETIME_FORMAT, DATE_FORMAT, MAX_CONSUMED_TRAFFIC,
    MAX_DOWNLOAD_SPEED, MAX_SESSION_DURATION, MAX_UPLOAD_SPEED,
};
pub use source::{FakeData, Locale, LocaleFaker, LocaleProfile};
