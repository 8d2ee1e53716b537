//! Error types for the CSV adapters.

use thiserror::Error;

/// Errors that can occur while reading schema tables or writing CSV output.
#[derive(Error, Debug)]
pub enum CSVSynthError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Schema-related error.
    #[error("Schema error: {0}")]
    Schema(#[from] synth_core::SchemaError),

    /// Schema table row that cannot be interpreted.
    #[error("Invalid schema row {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    /// Schema file with an unrecognized extension.
    #[error("Unsupported schema file '{0}': expected .csv, .yaml or .yml")]
    UnsupportedSchemaFormat(String),
}
