//! Roster Seeker - query pipelines over live Rust collections.
//!
//! A [`Query`] describes which records to keep (clause groups over named
//! fields) and, for eager execution, how to order and paginate them. The same
//! description can be evaluated three ways:
//!
//! - **Eager**: [`Query::select`] / [`Query::filter`] scan a slice once and
//!   return a materialized `Vec`. Later changes to the collection don't
//!   affect it.
//! - **Deferred**: [`Query::defer`] stores the query plus a projection
//!   against a shared [`Source`]. Nothing runs until it is traversed, and every
//!   traversal rescans the source's current contents.
//! - **Lazy**: [`Query::lazy`] yields matching records one at a time. A
//!   [`Producer`] suspends after each match, resumes on the next request, and
//!   can report every record it examines through a visit hook.
//!
//! # Quick Start
//!
//! ```rust
//! use roster_seeker::{Decimal, Number, Query, Seekable, Source, Value};
//!
//! #[derive(Clone)]
//! struct Employee {
//!     name: String,
//!     salary: Decimal,
//! }
//!
//! impl Seekable for Employee {
//!     fn seeker_field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::String(&self.name),
//!             "salary" => Value::Number(Number::Decimal(self.salary)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let staff = Source::new(vec![
//!     Employee { name: "Bob Jones".into(), salary: Decimal::new(600003, 1) },
//!     Employee { name: "Douglas Roberts".into(), salary: Decimal::new(400002, 1) },
//! ]);
//! let high = Query::new().and_gte("salary", 50000i64).build();
//!
//! let eager = high.select_from(&staff, |e| e.name.clone());
//! let deferred = high.clone().defer(&staff, |e: &Employee| e.name.clone());
//!
//! staff.push(Employee { name: "Sam Sulek".into(), salary: Decimal::new(10000020, 2) });
//!
//! assert_eq!(eager, vec!["Bob Jones"]);
//! assert_eq!(deferred.run(), vec!["Bob Jones", "Sam Sulek"]);
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//!       ∧ (no NOT clause matches)
//! ```
//!
//! | Type | Operators |
//! |------|-----------|
//! | String | `Eq`, `Ne`, `StartsWith`, `EndsWith`, `Contains`, `Regex` |
//! | Number / Decimal | `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte` |
//! | Bool | `Eq`, `Ne`, `Is` |

mod clause;
mod decimal;
mod deferred;
mod error;
mod op;
mod ordering;
mod query;
mod source;
mod stream;
mod traits;
mod value;

pub use clause::{Clause, ClauseValue};
pub use decimal::{Decimal, MAX_SCALE};
pub use deferred::{Deferred, DeferredIter};
pub use error::{Result, SeekerError};
pub use op::{Op, OpKind};
pub use ordering::{compare_values, Dir, OrderBy};
pub use query::Query;
pub use source::Source;
pub use stream::{Lazy, Producer, ProducerState};
pub use traits::Seekable;
pub use value::{Number, Value};
