//! Query builder and eager executor.
//!
//! A [`Query`] is a reusable description: clause groups, ordering and
//! pagination. The methods here evaluate it eagerly against a slice and
//! return materialized results. [`Query::defer`] and [`Query::lazy`] turn the
//! same description into pipelines that re-read a live [`Source`].

use std::fmt;

use regex::Regex;
use tracing::debug;

use crate::clause::{Clause, ClauseValue};
use crate::deferred::Deferred;
use crate::error::Result;
use crate::op::Op;
use crate::ordering::{compare_by_orderings, Dir, OrderBy};
use crate::source::Source;
use crate::stream::Lazy;
use crate::traits::Seekable;
use crate::value::Value;

/// A query for filtering, projecting and ordering collections.
///
/// Queries consist of three clause groups:
/// - **AND**: All clauses must match
/// - **OR**: At least one clause must match (or none if empty)
/// - **NOT**: No clause may match
///
/// ```text
/// match = (all AND clauses match)
///       ∧ (at least one OR clause matches, OR no OR clauses exist)
///       ∧ (no NOT clause matches)
/// ```
///
/// # Example
///
/// ```
/// use roster_seeker::{Query, Value, Number};
///
/// fn accessor<'a>(salary: &'a i64, _field: &str) -> Value<'a> {
///     Value::Number(Number::I64(*salary))
/// }
///
/// let salaries = vec![60000i64, 80000, 40000, 30000];
/// let query = Query::new().and_gte("annual_salary", 50000i64).build();
/// let high: Vec<String> = query.select(&salaries, accessor, |n| n.to_string());
/// assert_eq!(high, vec!["60000", "80000"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
    not_clauses: Vec<Clause>,
    orderings: Vec<OrderBy>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl Query {
    /// Creates a new empty query. An empty query matches all items.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Clause builders
    // ========================================================================

    /// Adds an AND clause. All AND clauses must match.
    pub fn and(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.and_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an OR clause. At least one OR clause must match, unless there
    /// are none.
    pub fn or(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.or_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds a NOT clause. No NOT clause may match.
    pub fn not(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.not_clauses.push(Clause::new(field, op, value));
        self
    }

    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    pub fn and_ne(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Ne, value)
    }

    pub fn and_gt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gt, value)
    }

    pub fn and_gte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gte, value)
    }

    pub fn and_lt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lt, value)
    }

    pub fn and_lte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lte, value)
    }

    pub fn and_contains(self, field: &str, value: &str) -> Self {
        self.and(field, Op::Contains, value)
    }

    pub fn and_startswith(self, field: &str, value: &str) -> Self {
        self.and(field, Op::StartsWith, value)
    }

    /// Adds an AND regex clause.
    ///
    /// Returns an error if the pattern is invalid.
    pub fn and_regex(self, field: &str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.and(field, Op::Regex, ClauseValue::Regex(regex)))
    }

    pub fn or_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.or(field, Op::Eq, value)
    }

    pub fn or_gte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.or(field, Op::Gte, value)
    }

    pub fn or_contains(self, field: &str, value: &str) -> Self {
        self.or(field, Op::Contains, value)
    }

    pub fn not_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.not(field, Op::Eq, value)
    }

    pub fn not_lt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.not(field, Op::Lt, value)
    }

    pub fn not_contains(self, field: &str, value: &str) -> Self {
        self.not(field, Op::Contains, value)
    }

    // ========================================================================
    // Ordering and pagination
    // ========================================================================

    /// Adds an ordering clause. Orderings apply to eager execution only;
    /// streams always follow source order.
    pub fn order_by(mut self, field: &str, dir: Dir) -> Self {
        self.orderings.push(OrderBy::new(field, dir));
        self
    }

    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    /// Sets the maximum number of results to return.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets the number of matching results to skip.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = Some(n);
        self
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    /// Finalizes the query, rejecting clauses whose operator does not fit
    /// their value (e.g. `contains` against a number).
    pub fn try_build(self) -> Result<Self> {
        self.and_clauses
            .iter()
            .chain(&self.or_clauses)
            .chain(&self.not_clauses)
            .try_for_each(Clause::validate)?;
        Ok(self)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    pub fn not_clauses(&self) -> &[Clause] {
        &self.not_clauses
    }

    pub fn orderings(&self) -> &[OrderBy] {
        &self.orderings
    }

    pub fn get_limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn get_offset(&self) -> Option<usize> {
        self.offset
    }

    /// Returns `true` if this query has no clauses (matches everything).
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty() && self.not_clauses.is_empty()
    }

    // ========================================================================
    // Eager execution
    // ========================================================================

    /// Tests if a single item matches this query.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let holds = |clause: &Clause| clause.matches(&accessor(item, &clause.field));

        self.and_clauses.iter().all(holds)
            && (self.or_clauses.is_empty() || self.or_clauses.iter().any(holds))
            && !self.not_clauses.iter().any(holds)
    }

    /// Filters a slice, returning references to matching items.
    ///
    /// Results are sorted by the query's orderings (stable, so ties keep
    /// source order), then offset and limit are applied.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let mut results: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect();

        if !self.orderings.is_empty() {
            results.sort_by(|a, b| compare_by_orderings(*a, *b, &self.orderings, &accessor));
        }

        let offset = self.offset.unwrap_or(0).min(results.len());
        results.drain(..offset);

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        debug!(
            query = %self,
            scanned = items.len(),
            matched = results.len(),
            "eager query materialized"
        );
        results
    }

    /// Filters then projects each match, materializing the results.
    ///
    /// The returned vector owns its elements: later changes to `items`' owner
    /// cannot affect it.
    pub fn select<T, R, F, P>(&self, items: &[T], accessor: F, project: P) -> Vec<R>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
        P: FnMut(&T) -> R,
    {
        self.filter(items, accessor).into_iter().map(project).collect()
    }

    /// Eager [`select`](Query::select) over the current state of a live
    /// source.
    pub fn select_from<T, R, P>(&self, source: &Source<T>, project: P) -> Vec<R>
    where
        T: Seekable,
        P: FnMut(&T) -> R,
    {
        source.with(|items| self.select(items, T::accessor, project))
    }

    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }

    /// Finds the first matching item in source order.
    pub fn find<'a, T, F>(&self, items: &'a [T], accessor: F) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        items.iter().find(|item| self.matches(*item, &accessor))
    }

    // ========================================================================
    // Deferred and lazy pipelines
    // ========================================================================

    /// Builds a deferred pipeline over `source`. Nothing is read until the
    /// result is traversed.
    pub fn defer<T, R, P>(self, source: &Source<T>, project: P) -> Deferred<T, P>
    where
        T: Seekable + Clone,
        P: Fn(&T) -> R,
    {
        Deferred::new(source, self, project)
    }

    /// Builds a restartable lazy sequence of matching records.
    pub fn lazy<T>(self, source: &Source<T>) -> Lazy<T>
    where
        T: Seekable + Clone,
    {
        Lazy::new(source, self)
    }
}

/// Renders the clause groups as one boolean expression, e.g.
/// `annual_salary >= 50000 and (first_name == "Sam" or is_manager == true)`.
/// Orderings and pagination are left out.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<String> = self.and_clauses.iter().map(Clause::to_string).collect();
        match self.or_clauses.as_slice() {
            [] => {}
            [only] => terms.push(only.to_string()),
            many => {
                let alternatives: Vec<String> = many.iter().map(Clause::to_string).collect();
                terms.push(format!("({})", alternatives.join(" or ")));
            }
        }
        terms.extend(self.not_clauses.iter().map(|clause| format!("not {clause}")));

        if terms.is_empty() {
            f.write_str("*")
        } else {
            f.write_str(&terms.join(" and "))
        }
    }
}
