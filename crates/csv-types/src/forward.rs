//! Forward conversion: GeneratedValue → CSV string.
//!
//! Values are rendered in a locale-independent canonical form: ISO 8601 dates
//! and date-times, `true`/`false` booleans and plain-notation decimals.

use synth_core::{format_scaled, GeneratedValue};

/// Format of date cells.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of date-time cells.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&GeneratedValue> for CsvValue {
    fn from(value: &GeneratedValue) -> Self {
        match value {
            GeneratedValue::Bool(b) => CsvValue(b.to_string()),
            GeneratedValue::Int64(i) => CsvValue(i.to_string()),
            GeneratedValue::Int128(i) => CsvValue(i.to_string()),
            // Decimal keeps its scale, e.g. "12.50"
            GeneratedValue::Decimal(d) => CsvValue(d.to_string()),
            GeneratedValue::WideDecimal { mantissa, scale } => {
                CsvValue(format_scaled(*mantissa, *scale))
            }
            GeneratedValue::Text(s) => CsvValue(s.clone()),
            GeneratedValue::Date(d) => CsvValue(d.format(DATE_FORMAT).to_string()),
            GeneratedValue::DateTime(dt) => CsvValue(dt.format(DATETIME_FORMAT).to_string()),
        }
    }
}

impl From<GeneratedValue> for CsvValue {
    fn from(value: GeneratedValue) -> Self {
        match value {
            GeneratedValue::Text(s) => CsvValue(s),
            other => CsvValue::from(&other),
        }
    }
}

/// Escape a value for CSV (double quotes and add quotes if needed).
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Convert a row of values to a single CSV line.
pub fn values_to_csv_line<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a GeneratedValue>,
{
    values
        .into_iter()
        .map(|value| escape_csv(CsvValue::from(value).as_str()))
        .collect::<Vec<_>>()
        .join(",")
}
