//! Date and datetime value generators.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use synth_core::GeneratedValue;
use tracing::warn;

/// Date format accepted for seed values.
pub const SEED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default start date when no usable seed is given (1970-01-01).
pub fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Resolve a column's start date from its seed value.
///
/// Surrounding whitespace is ignored. Absent seeds fall back to the epoch
/// silently; seeds that are present but not `YYYY-MM-DD` fall back to the
/// epoch with a warning.
pub fn resolve_start_date(column: &str, seed: Option<&str>) -> NaiveDate {
    let Some(seed) = seed else {
        return epoch();
    };

    match NaiveDate::parse_from_str(seed.trim(), SEED_DATE_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            warn!(
                "Column '{}': cannot parse start date '{}' ({}), using {}",
                column,
                seed,
                e,
                epoch()
            );
            epoch()
        }
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Generate a random date in `[start, now]`, at day granularity.
///
/// A start date after `now` always yields the start date.
pub fn generate_date<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    now: NaiveDateTime,
) -> GeneratedValue {
    let max_days = (now - start_of_day(start)).num_days().max(0);
    let offset = rng.gen_range(0..=max_days);
    let date = start
        .checked_add_signed(Duration::days(offset))
        .unwrap_or(start);
    GeneratedValue::Date(date)
}

/// Generate a random date-time in `[start, now]`, at second granularity.
///
/// A start date after `now` always yields the start of the start date.
pub fn generate_datetime<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    now: NaiveDateTime,
) -> GeneratedValue {
    let start = start_of_day(start);
    let max_seconds = (now - start).num_seconds().max(0);
    let offset = rng.gen_range(0..=max_seconds);
    let datetime = start
        .checked_add_signed(Duration::seconds(offset))
        .unwrap_or(start);
    GeneratedValue::DateTime(datetime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_start_date() {
        assert_eq!(resolve_start_date("c", Some("2020-02-29")), date(2020, 2, 29));
        assert_eq!(resolve_start_date("c", Some(" 2020-02-29 ")), date(2020, 2, 29));
        assert_eq!(resolve_start_date("c", None), date(1970, 1, 1));
        assert_eq!(resolve_start_date("c", Some("yesterday")), date(1970, 1, 1));
        assert_eq!(resolve_start_date("c", Some("2020/01/01")), date(1970, 1, 1));
    }

    #[test]
    fn test_generate_date_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = date(2023, 12, 1);
        let now = date(2024, 1, 15).and_hms_opt(23, 59, 0).unwrap();

        for _ in 0..500 {
            let d = generate_date(&mut rng, start, now).as_date().unwrap();
            assert!(d >= start && d <= now.date());
        }
    }

    #[test]
    fn test_generate_datetime_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = date(2024, 1, 1);
        let now = date(2024, 1, 1).and_hms_opt(0, 10, 0).unwrap();

        for _ in 0..500 {
            let dt = generate_datetime(&mut rng, start, now).as_datetime().unwrap();
            assert!(dt >= start_of_day(start) && dt <= now);
        }
    }

    #[test]
    fn test_future_start_is_clamped() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = date(2030, 1, 1);
        let now = date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap();

        assert_eq!(
            generate_date(&mut rng, start, now),
            GeneratedValue::Date(start)
        );
        assert_eq!(
            generate_datetime(&mut rng, start, now),
            GeneratedValue::DateTime(start_of_day(start))
        );
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let now = date(2024, 6, 1).and_hms_opt(0, 0, 0).unwrap();

        assert_eq!(
            generate_datetime(&mut rng1, epoch(), now),
            generate_datetime(&mut rng2, epoch(), now)
        );
    }
}
