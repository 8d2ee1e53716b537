//! CSV adapters for schema-synth.
//!
//! This crate is the boundary between the generator and the file system:
//!
//! - [`reader`] loads the schema table from a CSV (or YAML) file
//! - [`writer`] exports a synthetic table as CSV
//! - [`args`] holds the CLI arguments shared by the commands
//!
//! # Example
//!
//! ```ignore
//! use synth_csv::{load_schema, CSVWriter};
//! use synth_generator::DataGenerator;
//!
//! let schema = load_schema("schema.csv")?;
//! let table = DataGenerator::new(42).generate(&schema, &["id", "status"], 1000)?;
//! let metrics = CSVWriter::new().write_to_path(&table, "synthetic_data.csv")?;
//! ```

pub mod args;
mod error;
pub mod reader;
pub mod writer;

pub use args::{DescribeArgs, GenerateArgs};
pub use error::CSVSynthError;
pub use reader::{load_schema, read_schema_file, read_schema_table};
pub use writer::{CSVWriter, WriteMetrics};
