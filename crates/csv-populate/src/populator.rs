//! CSV batch writer.

use crate::error::PopulateError;
use chrono::NaiveDateTime;
use csv::Writer;
use record_generator::{Locale, RecordGenerator, COLUMNS};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating records.
    pub generation_duration: Duration,
    /// Time spent writing records.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writer that generates a batch of records into one CSV file.
///
/// One [`RecordGenerator`] (and so one fake-data source and one locale)
/// serves the whole batch.
pub struct CsvPopulator {
    generator: RecordGenerator,
}

impl CsvPopulator {
    /// Create a populator for the given locale and seed.
    pub fn new(locale: Locale, seed: u64) -> Self {
        Self {
            generator: RecordGenerator::new(locale, seed),
        }
    }

    /// Pin the generator's `accessed_at` sampling window.
    pub fn with_access_window(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.generator = self.generator.with_access_window(start, end);
        self
    }

    /// Write the header row and `rows` generated records to `output_path`.
    ///
    /// Missing parent directories are created. An existing file is
    /// truncated. `rows` may be zero, which leaves a header-only file.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        rows: u64,
    ) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        create_parent_directories(output_path)?;

        info!(
            "Generating CSV file '{}' with {} rows",
            output_path.display(),
            rows
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        let write_start = Instant::now();
        writer.write_record(COLUMNS)?;
        write_time += write_start.elapsed();

        for _ in 0..rows {
            let gen_start = Instant::now();
            let record = self.generator.next_record();
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(record.to_csv_record())?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % 10_000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| PopulateError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

/// Create the parent directories of `path` if they do not exist yet.
fn create_parent_directories(path: &Path) -> Result<(), PopulateError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            info!("Created directory: {}", parent.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_metrics_rows_per_second() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            total_duration: Duration::from_secs(10),
            generation_duration: Duration::from_secs(2),
            write_duration: Duration::from_secs(8),
            file_size_bytes: 100_000,
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
    }

    #[test]
    fn test_populate_writes_header_and_rows() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("batch.csv");

        let mut populator = CsvPopulator::new(Locale::En, 42);
        let metrics = populator.populate(&output_path, 10).unwrap();

        assert_eq!(metrics.rows_written, 10);
        assert!(metrics.file_size_bytes > 0);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 11); // 1 header + 10 data rows
        assert_eq!(lines[0], COLUMNS.join(","));
    }

    #[test]
    fn test_populate_zero_rows_leaves_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("batch.csv");

        let metrics = CsvPopulator::new(Locale::En, 42)
            .populate(&output_path, 0)
            .unwrap();

        assert_eq!(metrics.rows_written, 0);
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert_eq!(content.lines().next(), Some(COLUMNS.join(",").as_str()));
    }

    #[test]
    fn test_populate_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("nested/deeper/batch.csv");

        CsvPopulator::new(Locale::En, 42)
            .populate(&output_path, 1)
            .unwrap();

        assert!(output_path.exists());
    }

    #[test]
    fn test_rows_have_expected_field_count() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("batch.csv");

        CsvPopulator::new(Locale::En, 42)
            .populate(&output_path, 5)
            .unwrap();

        let mut reader = csv::Reader::from_path(&output_path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), COLUMNS.len());
        let mut rows = 0;
        for record in reader.records() {
            assert_eq!(record.unwrap().len(), COLUMNS.len());
            rows += 1;
        }
        assert_eq!(rows, 5);
    }

    #[test]
    fn test_deterministic_output_with_pinned_window() {
        use chrono::NaiveDate;

        let temp_dir = TempDir::new().unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 9, 22)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 9, 22)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let path1 = temp_dir.path().join("one.csv");
        CsvPopulator::new(Locale::En, 42)
            .with_access_window(start, end)
            .populate(&path1, 5)
            .unwrap();

        let path2 = temp_dir.path().join("two.csv");
        CsvPopulator::new(Locale::En, 42)
            .with_access_window(start, end)
            .populate(&path2, 5)
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path1).unwrap(),
            std::fs::read_to_string(&path2).unwrap()
        );
    }

    #[test]
    fn test_populate_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("batch.csv");

        CsvPopulator::new(Locale::En, 1)
            .populate(&output_path, 8)
            .unwrap();
        CsvPopulator::new(Locale::En, 2)
            .populate(&output_path, 2)
            .unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.lines().count(), 3); // header + 2 rows
    }
}
