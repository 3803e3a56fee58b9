//! Clause types for query predicates.
//!
//! A [`Clause`] is a single filter predicate: a field name, an operator and a
//! comparison value.

use std::fmt;

use regex::Regex;

use crate::decimal::Decimal;
use crate::error::{Result, SeekerError};
use crate::op::{Op, OpKind};
use crate::value::{Number, Value};

/// A single filter predicate.
///
/// ```
/// use roster_seeker::{Clause, Op, Value, Number};
///
/// let clause = Clause::new("annual_salary", Op::Gte, 50000i64);
/// assert!(clause.matches(&Value::Number(Number::I64(50000))));
/// ```
#[derive(Debug, Clone)]
pub struct Clause {
    /// The field name to compare.
    pub field: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

impl Clause {
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Missing fields and type mismatches never match.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::String(operand), Value::String(field)) => self.match_string(field, operand),
            (ClauseValue::Regex(regex), Value::String(field)) => regex.is_match(field),
            (ClauseValue::Number(operand), Value::Number(field)) => field
                .compare(*operand)
                .is_some_and(|ordering| self.op.holds(ordering)),
            (ClauseValue::Bool(operand), Value::Bool(field)) => {
                self.op.kind() == OpKind::Equality && self.op.holds(field.cmp(operand))
            }
            // Missing fields fail every operator, `Ne` included.
            _ => false,
        }
    }

    /// Checks that the operator makes sense for the clause value.
    pub fn validate(&self) -> Result<()> {
        let kind = self.op.kind();
        let (valid, value_type) = match &self.value {
            ClauseValue::String(_) => (
                matches!(self.op, Op::Eq | Op::Ne) || (kind == OpKind::Text && self.op != Op::Regex),
                "string",
            ),
            ClauseValue::Regex(_) => (self.op == Op::Regex, "regex"),
            ClauseValue::Number(_) => (
                matches!(self.op, Op::Eq | Op::Ne) || kind == OpKind::Range,
                "number",
            ),
            ClauseValue::Bool(_) => (kind == OpKind::Equality, "bool"),
        };
        if valid {
            Ok(())
        } else {
            Err(SeekerError::InvalidOperatorForType {
                op: self.op.as_str(),
                value_type,
            })
        }
    }

    fn match_string(&self, field: &str, operand: &str) -> bool {
        match self.op {
            Op::StartsWith => field.starts_with(operand),
            Op::EndsWith => field.ends_with(operand),
            Op::Contains => field.contains(operand),
            Op::Eq | Op::Ne | Op::Is => self.op.holds(field.cmp(operand)),
            _ => false,
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.field, self.op)?;
        match &self.value {
            ClauseValue::String(s) => write!(f, "{s:?}"),
            ClauseValue::Regex(r) => write!(f, "/{}/", r.as_str()),
            ClauseValue::Number(n) => write!(f, "{n}"),
            ClauseValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Owned value for storage in a clause.
///
/// Unlike [`Value`], which borrows from the source struct, `ClauseValue`
/// owns its data so it can be stored in query definitions.
#[derive(Debug, Clone)]
pub enum ClauseValue {
    String(String),
    Number(Number),
    Bool(bool),
    /// Compiled regular expression.
    Regex(Regex),
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Bool(b)
    }
}

impl From<Regex> for ClauseValue {
    fn from(r: Regex) -> Self {
        ClauseValue::Regex(r)
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<Decimal> for ClauseValue {
    fn from(n: Decimal) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<i32> for ClauseValue {
    fn from(n: i32) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<i64> for ClauseValue {
    fn from(n: i64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<u32> for ClauseValue {
    fn from(n: u32) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<u64> for ClauseValue {
    fn from(n: u64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<usize> for ClauseValue {
    fn from(n: usize) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<f64> for ClauseValue {
    fn from(n: f64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_ops() {
        let eq = Clause::new("last_name", Op::Eq, "Jones");
        assert!(eq.matches(&Value::String("Jones")));
        assert!(!eq.matches(&Value::String("jones"))); // case sensitive

        let starts = Clause::new("last_name", Op::StartsWith, "Jam");
        assert!(starts.matches(&Value::String("Jameson")));
        assert!(!starts.matches(&Value::String("Jones")));

        let ends = Clause::new("last_name", Op::EndsWith, "son");
        assert!(ends.matches(&Value::String("Jameson")));

        let contains = Clause::new("first_name", Op::Contains, "ara");
        assert!(contains.matches(&Value::String("Sarah")));
        assert!(!contains.matches(&Value::String("Sam")));
    }

    #[test]
    fn string_regex() {
        let regex = Regex::new(r"^S[a-z]+$").unwrap();
        let clause = Clause::new("first_name", Op::Regex, regex);
        assert!(clause.matches(&Value::String("Sarah")));
        assert!(!clause.matches(&Value::String("Bob")));
    }

    #[test]
    fn threshold_is_inclusive() {
        let clause = Clause::new("annual_salary", Op::Gte, 50000i64);
        assert!(clause.matches(&Value::Number(Number::Decimal(Decimal::new(
            5000000, 2
        )))));
        assert!(clause.matches(&Value::Number(Number::Decimal(Decimal::new(
            600003, 1
        )))));
        assert!(!clause.matches(&Value::Number(Number::Decimal(Decimal::new(
            400002, 1
        )))));
    }

    #[test]
    fn decimal_clause_value() {
        let clause = Clause::new("annual_salary", Op::Lt, Decimal::new(10000020, 2));
        assert!(clause.matches(&Value::Number(Number::I64(100000))));
        assert!(!clause.matches(&Value::Number(Number::F64(100000.5))));
    }

    #[test]
    fn bool_comparisons() {
        let is = Clause::new("is_manager", Op::Is, true);
        assert!(is.matches(&Value::Bool(true)));
        assert!(!is.matches(&Value::Bool(false)));

        let ne = Clause::new("is_manager", Op::Ne, true);
        assert!(ne.matches(&Value::Bool(false)));
    }

    #[test]
    fn none_and_mismatch_never_match() {
        let clause = Clause::new("last_name", Op::Ne, "Jones");
        assert!(!clause.matches(&Value::None));
        assert!(!clause.matches(&Value::Number(Number::I64(1))));
        assert!(!clause.matches(&Value::Bool(true)));
    }

    #[test]
    fn validate_operator_against_value() {
        assert!(Clause::new("a", Op::Gte, 1i64).validate().is_ok());
        assert!(Clause::new("a", Op::Contains, "x").validate().is_ok());
        assert!(Clause::new("a", Op::Is, false).validate().is_ok());

        let err = Clause::new("a", Op::Contains, 1i64).validate().unwrap_err();
        assert!(matches!(
            err,
            SeekerError::InvalidOperatorForType {
                op: "contains",
                value_type: "number"
            }
        ));
        assert!(Clause::new("a", Op::Gt, true).validate().is_err());
        assert!(Clause::new("a", Op::Regex, "x").validate().is_err());
    }

    #[test]
    fn display_reads_as_infix() {
        let clause = Clause::new("annual_salary", Op::Gte, 50000i64);
        assert_eq!(clause.to_string(), "annual_salary >= 50000");

        let clause = Clause::new("last_name", Op::StartsWith, "Ja");
        assert_eq!(clause.to_string(), "last_name starts with \"Ja\"");
    }
}
