//! Numeric value generators.

use rand::Rng;
use rust_decimal::Decimal;
use synth_core::types::{
    MAX_DECIMAL_DIGITS, MAX_EXACT_DECIMAL_DIGITS, MAX_I64_DIGITS, MAX_INT_DIGITS,
};
use synth_core::GeneratedValue;

/// Generate a random integer with exactly `digits` decimal digits.
///
/// The value lies in `[10^(digits-1), 10^digits - 1]`, so it never has a
/// leading zero. `digits` is clamped to `1..=MAX_INT_DIGITS`; anything wider
/// than `MAX_I64_DIGITS` is produced as an `Int128`.
pub fn generate_int_digits<R: Rng + ?Sized>(rng: &mut R, digits: u32) -> GeneratedValue {
    let digits = digits.clamp(1, MAX_INT_DIGITS);
    if digits <= MAX_I64_DIGITS {
        let min = 10_i64.pow(digits - 1);
        let max = 10_i64.pow(digits) - 1;
        return GeneratedValue::Int64(rng.gen_range(min..=max));
    }

    let min = 10_i128.pow(digits - 1);
    let max = 10_i128.pow(digits) - 1;
    GeneratedValue::Int128(rng.gen_range(min..=max))
}

/// Generate a random decimal in `[1, 10^precision)` with `scale` fractional digits.
///
/// The draw is uniform over the grid of representable `scale`-digit values,
/// which is the same as drawing a real number and rounding it. Columns wider
/// than `MAX_EXACT_DECIMAL_DIGITS` come back as `WideDecimal`.
pub fn generate_decimal<R: Rng + ?Sized>(rng: &mut R, precision: u32, scale: u32) -> GeneratedValue {
    let precision = precision.clamp(1, MAX_DECIMAL_DIGITS);
    let scale = scale.min(MAX_DECIMAL_DIGITS - precision);

    let unit = 10_i128.pow(scale);
    let upper = 10_i128.pow(precision) * unit;
    let mantissa = rng.gen_range(unit..upper);

    if precision + scale <= MAX_EXACT_DECIMAL_DIGITS {
        GeneratedValue::Decimal(Decimal::from_i128_with_scale(mantissa, scale))
    } else {
        GeneratedValue::WideDecimal { mantissa, scale }
    }
}
