//! Core types for the schema-synth framework.
//!
//! This crate provides the foundational types shared by the generator and the
//! input/output adapters:
//!
//! - [`ColumnType`] - Type family resolved from a column's type descriptor
//! - [`ColumnSpec`] / [`SchemaTable`] - The schema table describing what to synthesize
//! - [`GeneratedValue`] / [`GeneratedColumn`] / [`SyntheticTable`] - Generated output
//!
//! # Architecture
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    ├─── synth-generator  (column synthesis + primary key override)
//!    ├─── csv-types        (GeneratedValue -> CSV cell)
//!    └─── synth-csv        (schema table reader, CSV writer)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::{ColumnSpec, ColumnType, SchemaTable};
//!
//! let schema = SchemaTable::new(vec![
//!     ColumnSpec::new("id", "int(4)").with_primary_key(true),
//!     ColumnSpec::new("status", "category").with_seed("active,inactive"),
//! ])
//! .unwrap();
//!
//! let status = schema.get_column("status").unwrap();
//! assert_eq!(
//!     status.column_type().unwrap(),
//!     ColumnType::Category { labels: vec!["active".into(), "inactive".into()] }
//! );
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{ColumnSpec, SchemaError, SchemaTable};
pub use types::{ColumnType, TypeError};
pub use values::{format_scaled, GeneratedColumn, GeneratedValue, SyntheticTable};
