//! Command handlers for the schema-synth CLI.

mod describe;
mod generate;

pub use describe::{describe_schema, run_describe};
pub use generate::run_generate;
