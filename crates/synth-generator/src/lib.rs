//! Data generator for schema-synth.
//!
//! This crate provides the `DataGenerator` which turns a schema table into a
//! synthetic table. Generation runs in two passes: every selected column is
//! synthesized according to its type family, then the primary-key column (if
//! selected) is regenerated as a deterministic, unique sequence.
//!
//! # Architecture
//!
//! ```text
//! SchemaTable + selection + row count
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    DataGenerator     │
//! │                      │
//! │  - seed              │
//! │  - per-column StdRng │
//! │  - text generator    │
//! └──────────┬───────────┘
//!            │  pass 1: generators::generate_values (per column)
//!            │  pass 2: generators::primary_key (flagged column)
//!            ▼
//!     SyntheticTable { columns, row_count }
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::{ColumnSpec, SchemaTable};
//! use synth_generator::DataGenerator;
//!
//! let schema = SchemaTable::new(vec![
//!     ColumnSpec::new("id", "int(4)").with_primary_key(true),
//!     ColumnSpec::new("status", "category").with_seed("active,inactive"),
//! ])
//! .unwrap();
//!
//! let generator = DataGenerator::new(42);
//! let table = generator.generate(&schema, &["id", "status"], 3).unwrap();
//! assert_eq!(table.column_names(), vec!["id", "status"]);
//! assert_eq!(table.row_count(), 3);
//! ```
//!
//! # Type Families
//!
//! - `char(N)` / `varchar(N)` - Lorem text of at most N characters
//! - `decimal(P,S)` - Decimals in `[1, 10^P)` with S fractional digits
//! - `int(D)` - Integers with exactly D digits
//! - `date` - Days between the seed date (or 1970-01-01) and now
//! - `datetime` / `timestamp` - Seconds between the seed date and now
//! - `category` and unrecognized types - Uniform choice from the seed list
//! - `boolean` - Uniform true/false

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{DataGenerator, GeneratorError, MAX_ROW_COUNT};
pub use generators::text::{LoremText, TextGenerator};
