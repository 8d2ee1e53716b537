//! Reverse conversion: CSV string → schema table fields.
//!
//! Schema tables exported from spreadsheets or dataframes spell booleans in
//! several ways (`True`, `FALSE`, `1`, `yes`). These helpers normalize them.

use thiserror::Error;

/// Error type for CSV parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CsvParseError {
    #[error("Invalid boolean value: '{0}'")]
    InvalidBool(String),
}

/// Parse a boolean flag cell. An empty cell is `false`.
pub fn parse_flag(value: &str) -> Result<bool, CsvParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "f" | "0" | "no" | "n" => Ok(false),
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        _ => Err(CsvParseError::InvalidBool(value.to_string())),
    }
}

/// Parse an optional text cell. An empty cell is absent; other cells are kept
/// verbatim (no trimming).
pub fn parse_optional_text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
