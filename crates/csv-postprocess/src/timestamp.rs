//! Accessed-timestamp rewrite pass.

use crate::error::PostprocessError;
use chrono::{Duration, NaiveDateTime, Timelike};
use record_generator::{ACCESSED_AT_COLUMN, DATETIME_FORMAT};
use std::path::Path;
use tracing::info;

/// Whether a batch is the designated first batch or a follow-up batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RunMode {
    /// The designated first batch. Timestamps are left as generated.
    First,
    /// Any later batch. `accessed_at` is rewritten to one day ago.
    Next,
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunMode::First => write!(f, "first"),
            RunMode::Next => write!(f, "next"),
        }
    }
}

/// Rewrite every `accessed_at` value to one day before `now`.
///
/// `now` is truncated to whole seconds before the day is subtracted,
/// so every row carries the same second-precision timestamp. For
/// [`RunMode::First`] the file is left untouched and `None` is
/// returned; otherwise the number of rewritten rows is returned.
pub fn rewrite_accessed_at<P: AsRef<Path>>(
    path: P,
    mode: RunMode,
    now: NaiveDateTime,
) -> Result<Option<u64>, PostprocessError> {
    let path = path.as_ref();

    if mode == RunMode::First {
        info!("No timestamp update needed for a first run");
        return Ok(None);
    }

    let stamp = (now.with_nanosecond(0).unwrap_or(now) - Duration::days(1))
        .format(DATETIME_FORMAT)
        .to_string();

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(PostprocessError::MissingHeader(path.display().to_string()));
    }
    let idx = headers
        .iter()
        .position(|h| h == ACCESSED_AT_COLUMN)
        .ok_or_else(|| PostprocessError::MissingColumn {
            column: ACCESSED_AT_COLUMN,
            path: path.display().to_string(),
        })?;

    let rows = reader.into_records().collect::<Result<Vec<_>, _>>()?;

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&headers)?;

    let mut updated = 0u64;
    for row in &rows {
        let mut fields: Vec<&str> = row.iter().collect();
        fields[idx] = stamp.as_str();
        writer.write_record(&fields)?;
        updated += 1;
    }
    writer.flush()?;

    info!(
        "Updated '{}' to {} for {} rows in '{}'",
        ACCESSED_AT_COLUMN,
        stamp,
        updated,
        path.display()
    );
    Ok(Some(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn sample_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 23)
            .unwrap()
            .and_hms_nano_opt(10, 30, 45, 123_456_789)
            .unwrap()
    }

    #[test]
    fn test_next_mode_rewrites_all_rows() {
        let file = write_csv(
            "person_name,accessed_at\nalice,2024-01-01 00:00:00\nbob,2024-06-15 12:00:00\n",
        );

        let updated = rewrite_accessed_at(file.path(), RunMode::Next, sample_now()).unwrap();
        assert_eq!(updated, Some(2));

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // One day before `now`, truncated to whole seconds.
        assert_eq!(lines[1], "alice,2025-09-22 10:30:45");
        assert_eq!(lines[2], "bob,2025-09-22 10:30:45");
    }

    #[test]
    fn test_first_mode_leaves_file_untouched() {
        let original = "person_name,accessed_at\nalice,2024-01-01 00:00:00\n";
        let file = write_csv(original);

        let updated = rewrite_accessed_at(file.path(), RunMode::First, sample_now()).unwrap();
        assert_eq!(updated, None);
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), original);
    }

    #[test]
    fn test_header_only_file_reports_zero_rows() {
        let file = write_csv("person_name,accessed_at\n");

        let updated = rewrite_accessed_at(file.path(), RunMode::Next, sample_now()).unwrap();
        assert_eq!(updated, Some(0));
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let file = write_csv("person_name,email\nalice,a@example.com\n");

        let err = rewrite_accessed_at(file.path(), RunMode::Next, sample_now()).unwrap_err();
        assert!(matches!(
            err,
            PostprocessError::MissingColumn {
                column: ACCESSED_AT_COLUMN,
                ..
            }
        ));
    }

    #[test]
    fn test_run_mode_display() {
        assert_eq!(RunMode::First.to_string(), "first");
        assert_eq!(RunMode::Next.to_string(), "next");
    }
}
