//! schema-synth library
//!
//! Synthesizes tabular test data from a schema table describing column names,
//! type descriptors, optional seed values and a primary-key flag.
//!
//! # Crates
//!
//! - `synth_core` - schema table, type families, generated values
//! - `synth_generator` - column synthesis and primary key override
//! - `csv_types` - value to CSV cell conversion
//! - `synth_csv` - schema table reader and CSV writer
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate 1000 rows for two columns, reproducibly
//! schema-synth generate --schema schema.csv --columns id,status --rows 1000 --seed 42 \
//!   --output synthetic_data.csv
//!
//! # Show how each column's type descriptor is interpreted
//! schema-synth describe --schema schema.csv
//! ```

pub mod synth;

pub use synth::{describe_schema, run_describe, run_generate};
