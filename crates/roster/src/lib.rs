//! Roster - salary queries over a live employee collection.
//!
//! The same "annual salary of at least 50000" rule is run three ways against
//! one shared [`Source`](roster_seeker::Source) of employees:
//!
//! - [`pipelines::eager_high_earners`] materializes the matches immediately;
//! - [`pipelines::deferred_high_earners`] stores the query and rescans on each
//!   traversal;
//! - [`pipelines::high_salaried_employees`] produces matches one at a time and
//!   can report each employee it examines.
//!
//! [`demo::run`] walks through all three, appending employees between steps
//! so the differences in read timing show up in the output.

pub mod console;
pub mod data;
pub mod demo;
pub mod error;
pub mod model;
pub mod pipelines;

pub use console::Console;
pub use error::{Result, RosterError};
pub use model::{Department, Employee, SalaryLine};
