//! Main data generator for producing synthetic tables.

use crate::generators::text::{LoremText, TextGenerator};
use crate::generators::{generate_values, primary_key};
use chrono::{NaiveDateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use synth_core::{ColumnSpec, GeneratedColumn, SchemaError, SchemaTable, SyntheticTable};
use tracing::{debug, info};

/// Largest number of rows a single request may ask for.
pub const MAX_ROW_COUNT: usize = 1_000_000;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Schema error (invalid descriptor, unknown column, inconsistent schema)
    #[error("Schema error: {0}")]
    SchemaError(#[from] SchemaError),

    /// Category or fallback column without any labels to choose from
    #[error("Column '{column}' of type '{descriptor}' has no category values")]
    MissingCategoryValues { column: String, descriptor: String },

    /// Seed value that cannot be used as a primary key base
    #[error("Invalid seed value '{value}' for column '{column}': {reason}")]
    InvalidSeedValue {
        column: String,
        value: String,
        reason: String,
    },

    /// Row count outside of `1..=MAX_ROW_COUNT`
    #[error("Row count must be between 1 and {MAX_ROW_COUNT}, got {0}")]
    InvalidRowCount(usize),
}

/// Data generator that produces synthetic tables from a schema table.
///
/// Every column draws from its own RNG, seeded from the generator seed and the
/// column's position in the schema table. Output is therefore reproducible for
/// a fixed seed and reference time, and does not depend on which other
/// columns are selected.
pub struct DataGenerator {
    /// Base seed for the per-column RNGs
    seed: u64,
    /// Pinned "now"; `None` reads the clock once per request
    reference_time: Option<NaiveDateTime>,
    /// Source of fake text for character columns
    text: Box<dyn TextGenerator>,
}

impl DataGenerator {
    /// Create a new data generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            reference_time: None,
            text: Box::new(LoremText),
        }
    }

    /// Pin the "now" used as the upper bound of date and datetime columns.
    pub fn with_reference_time(mut self, now: NaiveDateTime) -> Self {
        self.reference_time = Some(now);
        self
    }

    /// Replace the fake text source used for character columns.
    pub fn with_text_generator<T: TextGenerator + 'static>(mut self, text: T) -> Self {
        self.text = Box::new(text);
        self
    }

    /// Get the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Compute the RNG seed for the column at a schema position.
    fn compute_rng_seed_for_column(&self, position: usize) -> u64 {
        self.seed
            .wrapping_add((position as u64).wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Synthesize a single column.
    ///
    /// `position` is the column's index in the schema table and selects its RNG
    /// stream. The primary-key override is not applied here.
    pub fn generate_column(
        &self,
        spec: &ColumnSpec,
        position: usize,
        row_count: usize,
        now: NaiveDateTime,
    ) -> Result<GeneratedColumn, GeneratorError> {
        let column_type = spec.column_type()?;
        let mut rng = StdRng::seed_from_u64(self.compute_rng_seed_for_column(position));

        let values = generate_values(
            spec,
            &column_type,
            &mut rng,
            row_count,
            now,
            self.text.as_ref(),
        )?;

        debug!(
            "Generated column '{}' as {} ({} rows)",
            spec.name, column_type, row_count
        );
        Ok(GeneratedColumn::new(spec.name.clone(), values))
    }

    /// Check a request without generating any values.
    ///
    /// Reports the same errors `generate` would: bad row count, unknown
    /// selected columns, unparseable descriptors, category columns without
    /// labels and primary-key seeds that cannot start a key sequence.
    pub fn validate<S: AsRef<str>>(
        &self,
        schema: &SchemaTable,
        selected: &[S],
        row_count: usize,
    ) -> Result<(), GeneratorError> {
        if !(1..=MAX_ROW_COUNT).contains(&row_count) {
            return Err(GeneratorError::InvalidRowCount(row_count));
        }

        for spec in schema.select(selected)? {
            let column_type = spec.column_type()?;
            if column_type.labels().is_some_and(<[String]>::is_empty) {
                return Err(GeneratorError::MissingCategoryValues {
                    column: spec.name.clone(),
                    descriptor: spec.type_descriptor.clone(),
                });
            }
            if spec.primary_key {
                primary_key::check_primary_key(spec, &column_type, row_count)?;
            }
        }
        Ok(())
    }

    /// Generate a synthetic table.
    ///
    /// Columns appear in schema order, restricted to `selected` (an empty
    /// selection selects every column). If the primary-key column is selected,
    /// its values are replaced by a unique sequence after all columns have
    /// been synthesized.
    pub fn generate<S: AsRef<str>>(
        &self,
        schema: &SchemaTable,
        selected: &[S],
        row_count: usize,
    ) -> Result<SyntheticTable, GeneratorError> {
        if !(1..=MAX_ROW_COUNT).contains(&row_count) {
            return Err(GeneratorError::InvalidRowCount(row_count));
        }

        let now = self
            .reference_time
            .unwrap_or_else(|| Utc::now().naive_utc());
        let specs = schema.select(selected)?;

        let mut table = SyntheticTable::new(row_count);
        let mut primary_key_column: Option<&str> = None;

        for spec in specs {
            let position = schema.position(&spec.name).ok_or_else(|| {
                SchemaError::InconsistentSchema(format!(
                    "column '{}' has no position in the schema table",
                    spec.name
                ))
            })?;
            table.insert_column(self.generate_column(spec, position, row_count, now)?);

            if spec.primary_key {
                primary_key_column = Some(&spec.name);
            }
        }

        if let Some(name) = primary_key_column {
            // Type and seed come from the schema table, not the selection
            let spec = schema.get_column(name).ok_or_else(|| {
                SchemaError::InconsistentSchema(format!(
                    "primary key column '{name}' is missing from the schema table"
                ))
            })?;
            let column_type = spec.column_type()?;
            let values = primary_key::primary_key_values(spec, &column_type, row_count)?;

            debug!("Regenerated primary key column '{}' as {}", name, column_type);
            table.insert_column(GeneratedColumn::new(name, values));
        }

        info!(
            "Generated {} rows for {} columns (seed {})",
            table.row_count(),
            table.column_count(),
            self.seed
        );
        Ok(table)
    }
}
