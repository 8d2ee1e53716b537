//! Schema table reader.
//!
//! Expected CSV layout:
//!
//! ```text
//! names,type,values,primary_key
//! id,int(6),,True
//! status,category,"active,inactive",False
//! created,date,2020-01-01,
//! ```
//!
//! `values` and `primary_key` may be omitted entirely. Extra columns (such as
//! a dataframe index) are ignored.

use crate::error::CSVSynthError;
use csv::{ReaderBuilder, Trim};
use csv_types::{parse_flag, parse_optional_text};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use synth_core::{ColumnSpec, SchemaTable};
use tracing::{debug, info};

/// One raw row of the schema table CSV.
#[derive(Debug, Deserialize)]
struct SchemaRow {
    #[serde(alias = "name")]
    names: String,
    #[serde(rename = "type")]
    type_descriptor: String,
    #[serde(default)]
    values: String,
    #[serde(default)]
    primary_key: String,
}

/// Read a schema table from CSV data with a header row.
pub fn read_schema_table<R: Read>(reader: R) -> Result<SchemaTable, CSVSynthError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut columns = Vec::new();
    for result in reader.records() {
        let record = result?;
        // Quoted cells may span lines, so take the line from the record itself
        let line = record.position().map_or(0, |p| p.line());
        let row: SchemaRow = record.deserialize(Some(&headers))?;

        let primary_key =
            parse_flag(&row.primary_key).map_err(|e| CSVSynthError::InvalidRow {
                line,
                reason: e.to_string(),
            })?;

        let spec = ColumnSpec {
            name: row.names,
            type_descriptor: row.type_descriptor,
            seed_value: parse_optional_text(&row.values),
            primary_key,
        };
        debug!("Schema row {}: {:?}", line, spec);
        columns.push(spec);
    }

    Ok(SchemaTable::new(columns)?)
}

/// Read a schema table from a CSV file.
pub fn read_schema_file<P: AsRef<Path>>(path: P) -> Result<SchemaTable, CSVSynthError> {
    let file = File::open(path.as_ref())?;
    read_schema_table(file)
}

/// Load a schema table, choosing the format from the file extension.
///
/// `.csv` files are read as CSV; `.yaml` and `.yml` files as YAML.
pub fn load_schema<P: AsRef<Path>>(path: P) -> Result<SchemaTable, CSVSynthError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let schema = match extension.as_deref() {
        Some("csv") => read_schema_file(path)?,
        Some("yaml") | Some("yml") => SchemaTable::from_file(path)?,
        _ => {
            return Err(CSVSynthError::UnsupportedSchemaFormat(
                path.display().to_string(),
            ))
        }
    };

    info!(
        "Loaded schema table '{}' with {} columns",
        path.display(),
        schema.len()
    );
    Ok(schema)
}
