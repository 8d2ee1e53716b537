//! Primary key override.
//!
//! After every selected column has been synthesized, the primary-key column is
//! regenerated as a deterministic sequence so that its values are unique:
//!
//! - category, boolean, other: `1, 2, ..., N`
//! - char: `<base>1, <base>2, ...` where base is the seed truncated to the
//!   column length, or `PK`
//! - int, decimal: `base, base + 1, ...` where base is the seed as an integer,
//!   or 1
//! - date, datetime: consecutive days from the seed date, or 1970-01-01

use crate::generator::GeneratorError;
use crate::generators::text::truncate_chars;
use crate::generators::timestamp::resolve_start_date;
use chrono::{Duration, NaiveDate, NaiveTime};
use synth_core::{ColumnSpec, ColumnType, GeneratedValue};

/// Prefix used for character keys when the column has no seed value.
pub const DEFAULT_KEY_PREFIX: &str = "PK";

/// Build the primary-key values for a column.
pub fn primary_key_values(
    spec: &ColumnSpec,
    column_type: &ColumnType,
    row_count: usize,
) -> Result<Vec<GeneratedValue>, GeneratorError> {
    match column_type {
        ColumnType::Category { .. } | ColumnType::Boolean | ColumnType::Other { .. } => {
            sequential_integers(spec, 1, row_count)
        }

        ColumnType::Char { length } => {
            let base = match spec.seed() {
                Some(seed) => truncate_chars(seed, *length),
                None => DEFAULT_KEY_PREFIX,
            };
            Ok((1..=row_count)
                .map(|i| GeneratedValue::Text(format!("{base}{i}")))
                .collect())
        }

        ColumnType::Int { .. } | ColumnType::Decimal { .. } => {
            sequential_integers(spec, integer_base(spec)?, row_count)
        }

        ColumnType::Date => {
            let base = resolve_start_date(&spec.name, spec.seed());
            sequential_days(spec, base, row_count)
                .map(|days| days.into_iter().map(GeneratedValue::Date).collect())
        }

        ColumnType::DateTime => {
            let base = resolve_start_date(&spec.name, spec.seed());
            sequential_days(spec, base, row_count).map(|days| {
                days.into_iter()
                    .map(|day| GeneratedValue::DateTime(day.and_time(NaiveTime::MIN)))
                    .collect()
            })
        }
    }
}

/// Check that [`primary_key_values`] would succeed for `row_count` rows,
/// without building the sequence. Only the last key can overflow.
pub fn check_primary_key(
    spec: &ColumnSpec,
    column_type: &ColumnType,
    row_count: usize,
) -> Result<(), GeneratorError> {
    let last = row_count.saturating_sub(1);
    match column_type {
        ColumnType::Int { .. } | ColumnType::Decimal { .. } => {
            nth_integer(spec, integer_base(spec)?, last).map(|_| ())
        }
        ColumnType::Date | ColumnType::DateTime => {
            let base = resolve_start_date(&spec.name, spec.seed());
            nth_day(spec, base, last).map(|_| ())
        }
        ColumnType::Category { .. }
        | ColumnType::Boolean
        | ColumnType::Other { .. }
        | ColumnType::Char { .. } => Ok(()),
    }
}

/// Starting value of an integer key: the seed parsed as an integer, or 1.
fn integer_base(spec: &ColumnSpec) -> Result<i64, GeneratorError> {
    match spec.seed() {
        Some(seed) => seed
            .trim()
            .parse::<i64>()
            .map_err(|e| GeneratorError::InvalidSeedValue {
                column: spec.name.clone(),
                value: seed.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(1),
    }
}

fn nth_integer(spec: &ColumnSpec, base: i64, n: usize) -> Result<i64, GeneratorError> {
    i64::try_from(n)
        .ok()
        .and_then(|n| base.checked_add(n))
        .ok_or_else(|| overflow(spec, base))
}

fn nth_day(spec: &ColumnSpec, base: NaiveDate, n: usize) -> Result<NaiveDate, GeneratorError> {
    i64::try_from(n)
        .ok()
        .and_then(|n| base.checked_add_signed(Duration::days(n)))
        .ok_or_else(|| overflow(spec, base))
}

fn sequential_integers(
    spec: &ColumnSpec,
    base: i64,
    row_count: usize,
) -> Result<Vec<GeneratedValue>, GeneratorError> {
    (0..row_count)
        .map(|i| nth_integer(spec, base, i).map(GeneratedValue::Int64))
        .collect()
}

fn sequential_days(
    spec: &ColumnSpec,
    base: NaiveDate,
    row_count: usize,
) -> Result<Vec<NaiveDate>, GeneratorError> {
    (0..row_count).map(|i| nth_day(spec, base, i)).collect()
}

fn overflow(spec: &ColumnSpec, base: impl std::fmt::Display) -> GeneratorError {
    GeneratorError::InvalidSeedValue {
        column: spec.name.clone(),
        value: spec.seed().unwrap_or_default().to_string(),
        reason: format!("sequence starting at {base} overflows"),
    }
}
