//! CSV writer for synthetic tables.

use crate::error::CSVSynthError;
use csv::Writer;
use csv_types::CsvValue;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use synth_core::SyntheticTable;
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl WriteMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes synthetic tables as CSV with a header row of column names.
#[derive(Debug, Clone)]
pub struct CSVWriter {
    include_header: bool,
}

impl Default for CSVWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CSVWriter {
    /// Create a new CSV writer that includes a header row.
    pub fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write a table to any writer. Returns the number of data rows written.
    pub fn write_table<W: Write>(
        &self,
        table: &SyntheticTable,
        writer: W,
    ) -> Result<u64, CSVSynthError> {
        let mut writer = Writer::from_writer(writer);

        if self.include_header {
            writer.write_record(table.column_names())?;
        }

        let mut rows_written = 0u64;
        for row in table.rows() {
            let record: Vec<String> = row
                .into_iter()
                .map(|value| CsvValue::from(value).into_inner())
                .collect();
            writer.write_record(&record)?;
            rows_written += 1;

            if rows_written % 10000 == 0 {
                debug!("Written {} rows", rows_written);
            }
        }

        writer.flush()?;
        Ok(rows_written)
    }

    /// Write a table to a CSV file, replacing any existing file.
    pub fn write_to_path<P: AsRef<Path>>(
        &self,
        table: &SyntheticTable,
        output_path: P,
    ) -> Result<WriteMetrics, CSVSynthError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Writing CSV file '{}' with {} rows and {} columns",
            output_path.display(),
            table.row_count(),
            table.column_count()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let rows_written = self.write_table(table, buf_writer)?;

        let metrics = WriteMetrics {
            rows_written,
            total_duration: start_time.elapsed(),
            file_size_bytes: std::fs::metadata(output_path)?.len(),
        };

        info!(
            "CSV export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::{GeneratedColumn, GeneratedValue};

    fn sample_table() -> SyntheticTable {
        let mut table = SyntheticTable::new(2);
        table.insert_column(GeneratedColumn::new(
            "id",
            vec![GeneratedValue::Int64(1), GeneratedValue::Int64(2)],
        ));
        table.insert_column(GeneratedColumn::new(
            "note",
            vec![
                GeneratedValue::Text("plain".to_string()),
                GeneratedValue::Text("with, comma".to_string()),
            ],
        ));
        table
    }

    #[test]
    fn test_write_table_with_header() {
        let mut buffer = Vec::new();
        let rows = CSVWriter::new()
            .write_table(&sample_table(), &mut buffer)
            .unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "id,note\n1,plain\n2,\"with, comma\"\n"
        );
    }

    #[test]
    fn test_write_table_without_header() {
        let mut buffer = Vec::new();
        CSVWriter::new()
            .with_header(false)
            .write_table(&sample_table(), &mut buffer)
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "1,plain\n2,\"with, comma\"\n"
        );
    }

    #[test]
    fn test_write_to_path_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let metrics = CSVWriter::new()
            .write_to_path(&sample_table(), &path)
            .unwrap();

        assert_eq!(metrics.rows_written, 2);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(metrics.file_size_bytes, content.len() as u64);
        assert!(content.starts_with("id,note\n"));
    }
}
