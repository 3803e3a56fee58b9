//! Field values as seen by clauses.
//!
//! A record's accessor hands back a [`Value`] that borrows from the record.
//! Numbers cover integers, floats and exact decimals so salaries can be
//! compared without rounding.

use std::cmp::Ordering;
use std::fmt;

use crate::decimal::Decimal;

/// A field value borrowed from a record.
///
/// ```
/// use roster_seeker::{Decimal, Number, Value};
///
/// struct Employee {
///     last_name: String,
///     annual_salary: Decimal,
/// }
///
/// fn accessor<'a>(e: &'a Employee, field: &str) -> Value<'a> {
///     match field {
///         "last_name" => Value::String(&e.last_name),
///         "annual_salary" => Value::Number(Number::Decimal(e.annual_salary)),
///         _ => Value::None,
///     }
/// }
///
/// let sam = Employee { last_name: "Sulek".into(), annual_salary: Decimal::new(10000020, 2) };
/// assert_eq!(accessor(&sam, "annual_salary").to_string(), "100000.20");
/// assert!(accessor(&sam, "nickname").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Number(Number),
    Bool(bool),
    /// Unknown or unqueryable field.
    None,
}

impl Value<'_> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::None => f.write_str("-"),
        }
    }
}

/// Numeric value.
///
/// - `I64` / `U64` for integers
/// - `F64` for floating point
/// - `Decimal` for exact fixed-point amounts such as salaries
///
/// Integer and decimal operands compare exactly; anything involving an `F64`
/// is compared as `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
    /// Exact fixed-point decimal.
    Decimal(Decimal),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
            Number::Decimal(d) => d.to_f64(),
        }
    }

    /// Exact decimal form, if the number has one.
    fn as_exact(self) -> Option<Decimal> {
        match self {
            Number::I64(n) => Some(Decimal::from(n)),
            Number::U64(n) => i64::try_from(n).ok().map(Decimal::from),
            Number::Decimal(d) => Some(d),
            Number::F64(_) => None,
        }
    }

    /// Compares two numbers, handling mixed types.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => match (self.as_exact(), other.as_exact()) {
                (Some(a), Some(b)) => Some(a.cmp(&b)),
                _ => self.to_f64().partial_cmp(&other.to_f64()),
            },
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
            Number::Decimal(d) => write!(f, "{d}"),
        }
    }
}

/// Equal by value: `I64(50000)` equals `Decimal(50000.00)`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Number::Decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Value::String("Jones").to_string(), "Jones");
        assert_eq!(Value::Number(Number::Decimal(Decimal::new(600003, 1))).to_string(), "60000.3");
        assert_eq!(Value::Number(Number::U64(3)).to_string(), "3");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::None.to_string(), "-");
    }

    #[test]
    fn number_comparisons_same_type() {
        assert_eq!(
            Number::I64(5).compare(Number::I64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::U64(10).compare(Number::U64(5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::F64(5.0).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn decimal_against_integer_is_exact() {
        let salary = Number::Decimal(Decimal::new(5000000, 2));
        assert_eq!(salary.compare(Number::I64(50000)), Some(Ordering::Equal));

        let just_under = Number::Decimal(Decimal::new(4999999, 2));
        assert_eq!(
            just_under.compare(Number::U64(50000)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn equality_agrees_with_ordering() {
        let round = Number::I64(50000);
        let salary = Number::Decimal(Decimal::new(5000000, 2));
        assert_eq!(round.partial_cmp(&salary), Some(Ordering::Equal));
        assert_eq!(round, salary);
        assert_eq!(Number::U64(7), Number::I64(7));
        assert_ne!(Number::Decimal(Decimal::new(600003, 1)), Number::I64(60000));
        assert_ne!(Number::F64(f64::NAN), Number::F64(f64::NAN));
    }

    #[test]
    fn decimal_against_float_falls_back() {
        let salary = Number::Decimal(Decimal::new(600003, 1));
        assert_eq!(
            salary.compare(Number::F64(50000.5)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn huge_unsigned_falls_back_to_float() {
        assert_eq!(
            Number::U64(u64::MAX).compare(Number::I64(1)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn number_nan_comparison() {
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
        assert_eq!(
            Number::Decimal(Decimal::ZERO).compare(Number::F64(f64::NAN)),
            None
        );
    }
}
