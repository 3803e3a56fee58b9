//! Clause operators.

use std::cmp::Ordering;
use std::fmt;

/// How a clause compares a record's field with its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Ne,
    StartsWith,
    EndsWith,
    Contains,
    Regex,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Same as `Eq`; reads better on flags (`is_manager is true`).
    Is,
}

/// Operator families. Which value types an operator accepts follows from its
/// family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// `Eq`, `Ne`, `Is`.
    Equality,
    /// Substring and pattern tests, strings only.
    Text,
    /// `Gt`, `Gte`, `Lt`, `Lte`, numbers only.
    Range,
}

impl Op {
    pub fn kind(self) -> OpKind {
        match self {
            Op::Eq | Op::Ne | Op::Is => OpKind::Equality,
            Op::StartsWith | Op::EndsWith | Op::Contains | Op::Regex => OpKind::Text,
            Op::Gt | Op::Gte | Op::Lt | Op::Lte => OpKind::Range,
        }
    }

    /// Whether `field.cmp(operand) == ordering` satisfies the operator.
    ///
    /// Text operators are not ordering-based and never hold.
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq | Op::Is => ordering.is_eq(),
            Op::Ne => ordering.is_ne(),
            Op::Gt => ordering.is_gt(),
            Op::Gte => ordering.is_ge(),
            Op::Lt => ordering.is_lt(),
            Op::Lte => ordering.is_le(),
            Op::StartsWith | Op::EndsWith | Op::Contains | Op::Regex => false,
        }
    }

    /// Lower-case name, used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::StartsWith => "startswith",
            Op::EndsWith => "endswith",
            Op::Contains => "contains",
            Op::Regex => "regex",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::Is => "is",
        }
    }

    /// Infix form used when a clause is displayed.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::StartsWith => "starts with",
            Op::EndsWith => "ends with",
            Op::Contains => "contains",
            Op::Regex => "=~",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Is => "is",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
