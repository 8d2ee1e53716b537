//! Column type families for schema-synth.
//!
//! This module defines `ColumnType`, the tagged type family a column's
//! descriptor resolves to, and the parser that produces it.
//!
//! # Descriptor Format
//!
//! Descriptors are free-form strings taken from the schema table. Matching is
//! case-insensitive and substring based, evaluated in a fixed order where the
//! first match wins:
//!
//! ```text
//! varchar / char   -> Char { length }            e.g. "varchar(50)", "char(2)"
//! decimal          -> Decimal { precision, scale } e.g. "decimal(10,2)"
//! int              -> Int { digits }             e.g. "int(4)", "bigint(12)"
//! date / datetime / timestamp -> Date | DateTime
//! category         -> Category { labels }
//! boolean          -> Boolean
//! anything else    -> Other { labels }
//! ```
//!
//! Category and fallback labels come from the column's seed value, split on
//! `,` without trimming.

use std::fmt;

/// Largest digit count an `int(N)` column may request (fits an `i128`).
pub const MAX_INT_DIGITS: u32 = 38;

/// Widest integer that is still generated as an `i64`.
pub const MAX_I64_DIGITS: u32 = 18;

/// Largest combined `precision + scale` a decimal column may request.
pub const MAX_DECIMAL_DIGITS: u32 = 38;

/// Widest decimal that `rust_decimal` represents exactly. Wider columns are
/// generated as [`GeneratedValue::WideDecimal`](crate::GeneratedValue::WideDecimal).
pub const MAX_EXACT_DECIMAL_DIGITS: u32 = 28;

/// Error produced when a type descriptor is missing its required parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// Character type without any length digits
    #[error("character type requires a length, e.g. varchar(50)")]
    MissingLength,

    /// Parameterized type without a `( ... )` block
    #[error("expected a parenthesized parameter list")]
    MissingParameters,

    /// Decimal type with a single parameter
    #[error("expected `precision,scale` inside the parentheses")]
    MissingScale,

    /// Parameter that is not a non-negative integer
    #[error("invalid parameter '{0}'")]
    InvalidParameter(String),

    /// Parameter outside of the supported range
    #[error("{0}")]
    OutOfRange(String),
}

/// Type family of a column, with the parameters needed for synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// Fixed or variable length character string
    Char {
        /// Maximum number of characters
        length: usize,
    },

    /// Exact decimal
    Decimal {
        /// Number of integral digits; values lie in `[1, 10^precision)`
        precision: u32,
        /// Number of digits after the decimal point
        scale: u32,
    },

    /// Integer with an exact number of decimal digits
    Int {
        /// Digit count; values lie in `[10^(digits-1), 10^digits - 1]`
        digits: u32,
    },

    /// Calendar date (day granularity)
    Date,

    /// Date and time (second granularity), used for `datetime` and `timestamp`
    DateTime,

    /// Categorical value drawn from a label list
    Category {
        /// Allowed labels
        labels: Vec<String>,
    },

    /// Boolean value
    Boolean,

    /// Unrecognized descriptor, treated like a category
    Other {
        /// Allowed labels
        labels: Vec<String>,
    },
}

impl ColumnType {
    /// Resolve a type descriptor (and the column's seed value) into a type family.
    ///
    /// Labels for `Category` and `Other` are taken from `seed`; an absent or
    /// empty seed yields an empty label list, which the generator rejects.
    pub fn parse(descriptor: &str, seed: Option<&str>) -> Result<Self, TypeError> {
        let descriptor = descriptor.trim().to_ascii_lowercase();

        if descriptor.contains("char") {
            return Ok(Self::Char {
                length: parse_length(&descriptor)?,
            });
        }

        if descriptor.contains("decimal") {
            let (precision, scale) = parse_precision_scale(&descriptor)?;
            return Ok(Self::Decimal { precision, scale });
        }

        if descriptor.contains("int") {
            return Ok(Self::Int {
                digits: parse_digits(&descriptor)?,
            });
        }

        if descriptor.contains("date") || descriptor.contains("timestamp") {
            if descriptor.contains("datetime") || descriptor.contains("timestamp") {
                return Ok(Self::DateTime);
            }
            return Ok(Self::Date);
        }

        if descriptor.contains("category") {
            return Ok(Self::Category {
                labels: split_labels(seed),
            });
        }

        if descriptor.contains("boolean") {
            return Ok(Self::Boolean);
        }

        Ok(Self::Other {
            labels: split_labels(seed),
        })
    }

    /// Short family name, used in logs and the `describe` command.
    pub fn family(&self) -> &'static str {
        match self {
            Self::Char { .. } => "char",
            Self::Decimal { .. } => "decimal",
            Self::Int { .. } => "int",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Category { .. } => "category",
            Self::Boolean => "boolean",
            Self::Other { .. } => "other",
        }
    }

    /// Labels of a categorical column, if this is one.
    pub fn labels(&self) -> Option<&[String]> {
        match self {
            Self::Category { labels } | Self::Other { labels } => Some(labels),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char { length } => write!(f, "char({length})"),
            Self::Decimal { precision, scale } => write!(f, "decimal({precision},{scale})"),
            Self::Int { digits } => write!(f, "int({digits})"),
            Self::Category { labels } | Self::Other { labels } => {
                write!(f, "{}[{}]", self.family(), labels.join("|"))
            }
            _ => f.write_str(self.family()),
        }
    }
}

/// First run of ASCII digits anywhere in the descriptor.
fn parse_length(descriptor: &str) -> Result<usize, TypeError> {
    let digits: String = descriptor
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return Err(TypeError::MissingLength);
    }
    digits
        .parse()
        .map_err(|_| TypeError::InvalidParameter(digits))
}

/// Contents between the first `(` and the following `)`.
fn parenthesized(descriptor: &str) -> Result<&str, TypeError> {
    let open = descriptor.find('(').ok_or(TypeError::MissingParameters)?;
    let close = descriptor[open..]
        .find(')')
        .map(|offset| open + offset)
        .ok_or(TypeError::MissingParameters)?;
    Ok(&descriptor[open + 1..close])
}

fn parse_param(raw: &str) -> Result<u32, TypeError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| TypeError::InvalidParameter(raw.to_string()))
}

fn parse_precision_scale(descriptor: &str) -> Result<(u32, u32), TypeError> {
    let (precision, scale) = parenthesized(descriptor)?
        .split_once(',')
        .ok_or(TypeError::MissingScale)?;
    let precision = parse_param(precision)?;
    let scale = parse_param(scale)?;

    if precision == 0 {
        return Err(TypeError::OutOfRange(
            "decimal precision must be at least 1".to_string(),
        ));
    }
    if precision + scale > MAX_DECIMAL_DIGITS {
        return Err(TypeError::OutOfRange(format!(
            "decimal precision + scale must not exceed {MAX_DECIMAL_DIGITS}"
        )));
    }
    Ok((precision, scale))
}

fn parse_digits(descriptor: &str) -> Result<u32, TypeError> {
    let digits = parse_param(parenthesized(descriptor)?)?;
    if !(1..=MAX_INT_DIGITS).contains(&digits) {
        return Err(TypeError::OutOfRange(format!(
            "integer digit count must be between 1 and {MAX_INT_DIGITS}"
        )));
    }
    Ok(digits)
}

fn split_labels(seed: Option<&str>) -> Vec<String> {
    match seed {
        Some(seed) if !seed.is_empty() => seed.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_char_family() {
        assert_eq!(
            ColumnType::parse("varchar(50)", None).unwrap(),
            ColumnType::Char { length: 50 }
        );
        assert_eq!(
            ColumnType::parse("char(2)", None).unwrap(),
            ColumnType::Char { length: 2 }
        );
        // Only the first run of digits counts
        assert_eq!(
            ColumnType::parse("varchar(12) x3", None).unwrap(),
            ColumnType::Char { length: 12 }
        );
        assert_eq!(
            ColumnType::parse("varchar", None),
            Err(TypeError::MissingLength)
        );
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(
            ColumnType::parse("decimal(10, 2)", None).unwrap(),
            ColumnType::Decimal {
                precision: 10,
                scale: 2
            }
        );
        assert_eq!(
            ColumnType::parse("decimal", None),
            Err(TypeError::MissingParameters)
        );
        assert_eq!(
            ColumnType::parse("decimal(10)", None),
            Err(TypeError::MissingScale)
        );
        assert_eq!(
            ColumnType::parse("decimal(a,2)", None),
            Err(TypeError::InvalidParameter("a".to_string()))
        );
        assert_eq!(
            ColumnType::parse("decimal(30,2)", None).unwrap(),
            ColumnType::Decimal {
                precision: 30,
                scale: 2
            }
        );
        assert!(matches!(
            ColumnType::parse("decimal(30,10)", None),
            Err(TypeError::OutOfRange(_))
        ));
        assert!(matches!(
            ColumnType::parse("decimal(0,2)", None),
            Err(TypeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(
            ColumnType::parse("int(4)", None).unwrap(),
            ColumnType::Int { digits: 4 }
        );
        assert_eq!(
            ColumnType::parse("bigint(12)", None).unwrap(),
            ColumnType::Int { digits: 12 }
        );
        assert_eq!(
            ColumnType::parse("int", None),
            Err(TypeError::MissingParameters)
        );
        assert!(matches!(
            ColumnType::parse("int(0)", None),
            Err(TypeError::OutOfRange(_))
        ));
        assert_eq!(
            ColumnType::parse("bigint(20)", None).unwrap(),
            ColumnType::Int { digits: 20 }
        );
        assert_eq!(
            ColumnType::parse("int(38)", None).unwrap(),
            ColumnType::Int { digits: 38 }
        );
        assert!(matches!(
            ColumnType::parse("int(39)", None),
            Err(TypeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_temporal() {
        assert_eq!(ColumnType::parse("date", None).unwrap(), ColumnType::Date);
        assert_eq!(
            ColumnType::parse("datetime", None).unwrap(),
            ColumnType::DateTime
        );
        assert_eq!(
            ColumnType::parse("timestamp", None).unwrap(),
            ColumnType::DateTime
        );
    }

    #[test]
    fn test_parse_category_keeps_whitespace() {
        let parsed = ColumnType::parse("category", Some("red, green,blue ")).unwrap();
        assert_eq!(
            parsed.labels().unwrap(),
            &["red".to_string(), " green".to_string(), "blue ".to_string()]
        );

        let empty = ColumnType::parse("category", Some("")).unwrap();
        assert_eq!(empty.labels().unwrap().len(), 0);
    }

    #[test]
    fn test_parse_boolean_and_fallback() {
        assert_eq!(
            ColumnType::parse("boolean", None).unwrap(),
            ColumnType::Boolean
        );
        assert_eq!(
            ColumnType::parse("enum", Some("a,b")).unwrap(),
            ColumnType::Other {
                labels: vec!["a".to_string(), "b".to_string()]
            }
        );
        // "bool" is not "boolean"
        assert!(matches!(
            ColumnType::parse("bool", Some("y,n")).unwrap(),
            ColumnType::Other { .. }
        ));
    }

    #[test]
    fn test_check_order_resolves_collisions() {
        // "char" wins over "int" and "date"
        assert_eq!(
            ColumnType::parse("char_date(8)", None).unwrap(),
            ColumnType::Char { length: 8 }
        );
        // "int" wins over "date"
        assert_eq!(
            ColumnType::parse("int_date(3)", None).unwrap(),
            ColumnType::Int { digits: 3 }
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            ColumnType::parse("  VARCHAR(10) ", None).unwrap(),
            ColumnType::Char { length: 10 }
        );
        assert_eq!(
            ColumnType::parse("Timestamp", None).unwrap(),
            ColumnType::DateTime
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ColumnType::Char { length: 5 }.to_string(), "char(5)");
        assert_eq!(
            ColumnType::Decimal {
                precision: 6,
                scale: 2
            }
            .to_string(),
            "decimal(6,2)"
        );
        assert_eq!(ColumnType::DateTime.to_string(), "datetime");
        assert_eq!(
            ColumnType::Category {
                labels: vec!["a".to_string(), "b".to_string()]
            }
            .to_string(),
            "category[a|b]"
        );
    }
}
