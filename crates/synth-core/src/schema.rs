//! Schema table definitions for schema-synth.
//!
//! A schema table is an ordered list of column specifications, each naming a
//! column, its type descriptor, an optional seed value and a primary-key flag.
//! It is usually loaded from a CSV file (see the `synth-csv` crate) or from a
//! YAML file:
//!
//! ```yaml
//! columns:
//!   - name: id
//!     type: int(6)
//!     primary_key: true
//!   - name: status
//!     type: category
//!     values: active,inactive,pending
//!   - name: created
//!     type: date
//!     values: "2020-01-01"
//! ```

use crate::types::{ColumnType, TypeError};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Type descriptor that cannot be resolved to a type family
    #[error("Invalid type descriptor '{descriptor}' for column '{column}': {reason}")]
    InvalidTypeDescriptor {
        column: String,
        descriptor: String,
        #[source]
        reason: TypeError,
    },

    /// Schema rows that contradict each other (e.g. duplicate names)
    #[error("Inconsistent schema: {0}")]
    InconsistentSchema(String),

    /// More than one row flagged as primary key
    #[error("Columns '{first}' and '{second}' are both flagged as primary key")]
    MultiplePrimaryKeys { first: String, second: String },

    /// Selected column not present in the schema table
    #[error("Column not found in schema: {0}")]
    UnknownColumn(String),
}

// ============================================================================
// Column Specification
// ============================================================================

/// One row of the schema table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ColumnSpec {
    /// Column name
    #[serde(alias = "names")]
    pub name: String,

    /// Type descriptor, e.g. `varchar(20)` or `decimal(8,2)`
    #[serde(rename = "type")]
    pub type_descriptor: String,

    /// Seed value; meaning depends on the type family
    #[serde(rename = "values", default, deserialize_with = "empty_as_none")]
    pub seed_value: Option<String>,

    /// Whether this column is the primary key
    #[serde(default)]
    pub primary_key: bool,
}

impl ColumnSpec {
    /// Create a new column specification without seed value.
    pub fn new(name: impl Into<String>, type_descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_descriptor: type_descriptor.into(),
            seed_value: None,
            primary_key: false,
        }
    }

    /// Set the seed value. Empty strings are treated as absent.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        let seed = seed.into();
        self.seed_value = (!seed.is_empty()).then_some(seed);
        self
    }

    /// Set the primary-key flag.
    pub fn with_primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    /// Get the seed value, if any.
    pub fn seed(&self) -> Option<&str> {
        self.seed_value.as_deref().filter(|s| !s.is_empty())
    }

    /// Resolve the type descriptor into a type family.
    pub fn column_type(&self) -> Result<ColumnType, SchemaError> {
        ColumnType::parse(&self.type_descriptor, self.seed()).map_err(|reason| {
            SchemaError::InvalidTypeDescriptor {
                column: self.name.clone(),
                descriptor: self.type_descriptor.clone(),
                reason,
            }
        })
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

// ============================================================================
// Schema Table
// ============================================================================

/// The schema table: ordered column specifications with name lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaTable {
    /// Column specifications in schema order
    pub columns: Vec<ColumnSpec>,

    /// Cached column lookup, rebuilt after deserializing
    #[serde(skip)]
    column_map: HashMap<String, usize>,
}

impl SchemaTable {
    /// Create a schema table from column specifications.
    ///
    /// Fails if two columns share a name or more than one column is flagged
    /// as primary key.
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self, SchemaError> {
        let mut schema = Self {
            columns,
            column_map: HashMap::new(),
        };
        schema.build_column_map()?;
        Ok(schema)
    }

    /// Load a schema table from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a schema table from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: SchemaTable = serde_yaml::from_str(yaml)?;
        schema.build_column_map()?;
        Ok(schema)
    }

    /// Build the internal column lookup map and validate the table.
    fn build_column_map(&mut self) -> Result<(), SchemaError> {
        self.column_map.clear();
        let mut primary_key: Option<&str> = None;

        for (idx, column) in self.columns.iter().enumerate() {
            if self.column_map.insert(column.name.clone(), idx).is_some() {
                return Err(SchemaError::InconsistentSchema(format!(
                    "column '{}' is defined more than once",
                    column.name
                )));
            }

            if column.primary_key {
                if let Some(first) = primary_key {
                    return Err(SchemaError::MultiplePrimaryKeys {
                        first: first.to_string(),
                        second: column.name.clone(),
                    });
                }
                primary_key = Some(&column.name);
            }
        }
        Ok(())
    }

    /// Get a column specification by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSpec> {
        self.column_map
            .get(name)
            .and_then(|&idx| self.columns.get(idx))
    }

    /// Position of a column in schema order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.column_map.get(name).copied()
    }

    /// Get all column names in schema order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// The column flagged as primary key, if any.
    pub fn primary_key(&self) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.primary_key)
    }

    /// Number of columns in the schema table.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Resolve a selection into column specifications, in schema order.
    ///
    /// An empty selection selects every column. Selecting a name that is not
    /// in the schema table is an error.
    pub fn select<S: AsRef<str>>(&self, selected: &[S]) -> Result<Vec<&ColumnSpec>, SchemaError> {
        if selected.is_empty() {
            return Ok(self.columns.iter().collect());
        }

        if let Some(unknown) = selected
            .iter()
            .map(AsRef::as_ref)
            .find(|name| !self.column_map.contains_key(*name))
        {
            return Err(SchemaError::UnknownColumn(unknown.to_string()));
        }

        Ok(self
            .columns
            .iter()
            .filter(|c| selected.iter().any(|s| s.as_ref() == c.name))
            .collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
