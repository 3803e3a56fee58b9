//! Field access for queryable records.

use crate::value::Value;

/// Trait for records that can be queried by field name.
///
/// Streaming pipelines ([`Lazy`](crate::Lazy), [`Deferred`](crate::Deferred))
/// require it; eager [`Query`](crate::Query) methods also accept a plain
/// accessor function.
///
/// ```
/// use roster_seeker::{Decimal, Number, Seekable, Value};
///
/// struct Employee {
///     first_name: String,
///     annual_salary: Decimal,
/// }
///
/// impl Seekable for Employee {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "first_name" => Value::String(&self.first_name),
///             "annual_salary" => Value::Number(Number::Decimal(self.annual_salary)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// Returns the value of a field, or [`Value::None`] if the field doesn't
    /// exist or is not queryable.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;

    /// Accessor function compatible with [`Query::filter`](crate::Query::filter)
    /// and friends.
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}
