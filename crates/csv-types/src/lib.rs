//! CSV type conversions for synth-core types.
//!
//! This crate provides the conversions between synth-core values and CSV
//! cells.
//!
//! # Modules
//!
//! - [`forward`] - GeneratedValue → CSV string conversion
//! - [`reverse`] - CSV string → schema table field conversion
//!
//! # Example
//!
//! ```rust
//! use csv_types::{parse_flag, CsvValue};
//! use synth_core::GeneratedValue;
//!
//! // Forward: GeneratedValue → CSV string
//! let csv_val: CsvValue = GeneratedValue::Int64(42).into();
//! assert_eq!(csv_val.as_str(), "42");
//!
//! // Reverse: CSV string → primary key flag
//! assert!(parse_flag("True").unwrap());
//! ```

pub mod forward;
pub mod reverse;

pub use forward::CsvValue;
pub use forward::{escape_csv, values_to_csv_line, DATETIME_FORMAT, DATE_FORMAT};
pub use reverse::{parse_flag, parse_optional_text, CsvParseError};
