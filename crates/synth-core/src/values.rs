//! Value representations for schema-synth.
//!
//! This module defines the generated values and the column/table containers
//! the generator fills and the output adapters consume.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// A single generated value.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int64(i64),

    /// Integer too wide for an `i64`
    Int128(i128),

    /// Exact decimal
    Decimal(Decimal),

    /// Decimal too wide for [`Decimal`]: `mantissa / 10^scale`
    WideDecimal { mantissa: i128, scale: u32 },

    /// String value
    Text(String),

    /// Calendar date
    Date(NaiveDate),

    /// Date and time without timezone
    DateTime(NaiveDateTime),
}

impl GeneratedValue {
    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i128. Accepts both integer widths.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Int64(i) => Some(i128::from(*i)),
            Self::Int128(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a decimal.
    pub fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Self::Decimal(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as a date-time.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// Render `mantissa / 10^scale` in plain notation, keeping `scale` digits
/// after the point.
pub fn format_scaled(mantissa: i128, scale: u32) -> String {
    let sign = if mantissa < 0 { "-" } else { "" };
    let magnitude = mantissa.unsigned_abs();
    if scale == 0 {
        return format!("{sign}{magnitude}");
    }
    let unit = 10_u128.pow(scale);
    let width = scale as usize;
    format!(
        "{sign}{}.{:0width$}",
        magnitude / unit,
        magnitude % unit
    )
}

/// One generated column: a name and its values in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedColumn {
    /// Column name
    pub name: String,
    /// Values, one per row
    pub values: Vec<GeneratedValue>,
}

impl GeneratedColumn {
    /// Create a new generated column.
    pub fn new(name: impl Into<String>, values: Vec<GeneratedValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of values in the column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at a row index.
    pub fn get(&self, row: usize) -> Option<&GeneratedValue> {
        self.values.get(row)
    }

    /// Iterate over the values in row order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedValue> {
        self.values.iter()
    }
}

/// A generated table: named columns of equal length, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SyntheticTable {
    columns: Vec<GeneratedColumn>,
    column_map: HashMap<String, usize>,
    row_count: usize,
}

impl SyntheticTable {
    /// Create an empty table that will hold `row_count` rows per column.
    pub fn new(row_count: usize) -> Self {
        Self {
            columns: Vec::new(),
            column_map: HashMap::new(),
            row_count,
        }
    }

    /// Insert a column, or replace the values of an existing column in place.
    ///
    /// Replacing keeps the column's original position.
    pub fn insert_column(&mut self, column: GeneratedColumn) {
        debug_assert_eq!(column.len(), self.row_count);
        match self.column_map.get(&column.name) {
            Some(&idx) => self.columns[idx] = column,
            None => {
                self.column_map
                    .insert(column.name.clone(), self.columns.len());
                self.columns.push(column);
            }
        }
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&GeneratedColumn> {
        self.column_map
            .get(name)
            .and_then(|&idx| self.columns.get(idx))
    }

    /// All columns in insertion order.
    pub fn columns(&self) -> &[GeneratedColumn] {
        &self.columns
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows in every column.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Values of one row, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&GeneratedValue>> {
        if index >= self.row_count {
            return None;
        }
        self.columns.iter().map(|c| c.get(index)).collect()
    }

    /// Iterate over rows, each as the values in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&GeneratedValue>> + '_ {
        (0..self.row_count).filter_map(move |idx| self.row(idx))
    }
}
