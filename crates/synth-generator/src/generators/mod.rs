//! Individual value generators for the different type families.
//!
//! This module provides the per-column synthesis logic, dispatched on the
//! column's resolved [`ColumnType`].

pub mod category;
pub mod numeric;
pub mod primary_key;
pub mod text;
pub mod timestamp;

use self::text::TextGenerator;
use crate::generator::GeneratorError;
use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use synth_core::{ColumnSpec, ColumnType, GeneratedValue};

/// Generate `row_count` independent values for one column.
///
/// `now` bounds date and datetime columns from above; `text` supplies the
/// fake text for character columns.
pub fn generate_values(
    spec: &ColumnSpec,
    column_type: &ColumnType,
    rng: &mut StdRng,
    row_count: usize,
    now: NaiveDateTime,
    text: &dyn TextGenerator,
) -> Result<Vec<GeneratedValue>, GeneratorError> {
    let values = match column_type {
        ColumnType::Char { length } => (0..row_count)
            .map(|_| GeneratedValue::Text(text.text(rng, *length)))
            .collect(),

        ColumnType::Decimal { precision, scale } => (0..row_count)
            .map(|_| numeric::generate_decimal(rng, *precision, *scale))
            .collect(),

        ColumnType::Int { digits } => (0..row_count)
            .map(|_| numeric::generate_int_digits(rng, *digits))
            .collect(),

        ColumnType::Date => {
            let start = timestamp::resolve_start_date(&spec.name, spec.seed());
            (0..row_count)
                .map(|_| timestamp::generate_date(rng, start, now))
                .collect()
        }

        ColumnType::DateTime => {
            let start = timestamp::resolve_start_date(&spec.name, spec.seed());
            (0..row_count)
                .map(|_| timestamp::generate_datetime(rng, start, now))
                .collect()
        }

        ColumnType::Category { labels } | ColumnType::Other { labels } => {
            if labels.is_empty() {
                return Err(GeneratorError::MissingCategoryValues {
                    column: spec.name.clone(),
                    descriptor: spec.type_descriptor.clone(),
                });
            }
            (0..row_count)
                .map(|_| category::generate_one_of(rng, labels))
                .collect()
        }

        ColumnType::Boolean => (0..row_count)
            .map(|_| category::generate_bool(rng))
            .collect(),
    };

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::text::LoremText;
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap()
    }

    fn generate(spec: &ColumnSpec, row_count: usize) -> Vec<GeneratedValue> {
        let mut rng = StdRng::seed_from_u64(7);
        let column_type = spec.column_type().unwrap();
        generate_values(spec, &column_type, &mut rng, row_count, now(), &LoremText).unwrap()
    }

    #[test]
    fn test_varchar_respects_length() {
        let spec = ColumnSpec::new("title", "varchar(10)");
        for value in generate(&spec, 200) {
            let text = value.as_str().unwrap();
            assert!(text.chars().count() <= 10, "too long: {text:?}");
            assert_eq!(text, text.trim());
        }
    }

    #[test]
    fn test_int_has_exact_digits() {
        let spec = ColumnSpec::new("code", "int(4)");
        for value in generate(&spec, 500) {
            let v = value.as_i64().unwrap();
            assert!((1000..=9999).contains(&v));
        }
    }

    #[test]
    fn test_decimal_range_and_scale() {
        let spec = ColumnSpec::new("price", "decimal(3,2)");
        for value in generate(&spec, 500) {
            let d = value.as_decimal().unwrap();
            assert!(*d >= rust_decimal::Decimal::ONE);
            assert!(*d < rust_decimal::Decimal::from(1000));
            assert!(d.scale() <= 2);
        }
    }

    #[test]
    fn test_dates_between_start_and_now() {
        let spec = ColumnSpec::new("day", "date").with_seed("2024-01-01");
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for value in generate(&spec, 300) {
            let d = value.as_date().unwrap();
            assert!(d >= start && d <= now().date());
        }
    }

    #[test]
    fn test_datetimes_between_start_and_now() {
        let spec = ColumnSpec::new("at", "datetime").with_seed("2024-01-30");
        let start = NaiveDate::from_ymd_opt(2024, 1, 30)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        for value in generate(&spec, 300) {
            let dt = value.as_datetime().unwrap();
            assert!(dt >= start && dt <= now());
        }
    }

    #[test]
    fn test_category_membership() {
        let spec = ColumnSpec::new("color", "category").with_seed("red,green,blue");
        for value in generate(&spec, 100) {
            assert!(["red", "green", "blue"].contains(&value.as_str().unwrap()));
        }
    }

    #[test]
    fn test_fallback_behaves_like_category() {
        let spec = ColumnSpec::new("tier", "enum").with_seed("gold, silver");
        for value in generate(&spec, 100) {
            assert!(["gold", " silver"].contains(&value.as_str().unwrap()));
        }
    }

    #[test]
    fn test_boolean_draws_both_values() {
        let spec = ColumnSpec::new("flag", "boolean");
        let values = generate(&spec, 100);
        assert!(values.iter().any(|v| v.as_bool() == Some(true)));
        assert!(values.iter().any(|v| v.as_bool() == Some(false)));
    }
}
