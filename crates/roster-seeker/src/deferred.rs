//! Deferred evaluation: a stored query plus projection that re-runs against
//! the live source on every traversal.

use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;

use crate::query::Query;
use crate::source::Source;
use crate::stream::{Lazy, Producer};
use crate::traits::Seekable;

/// A reusable filter-then-project description over a [`Source`].
///
/// Building one never touches the source. Each call to [`iter`](Self::iter),
/// [`run`](Self::run) or [`count`](Self::count) scans the source from the
/// start, so records added or removed since the previous traversal are
/// reflected.
///
/// ```
/// use roster_seeker::{Number, Query, Seekable, Source, Value};
///
/// #[derive(Clone)]
/// struct Pay(i64);
///
/// impl Seekable for Pay {
///     fn seeker_field_value(&self, _field: &str) -> Value<'_> {
///         Value::Number(Number::I64(self.0))
///     }
/// }
///
/// let source = Source::new(vec![Pay(60000), Pay(40000)]);
/// let high = Query::new().and_gte("pay", 50000i64).defer(&source, |p: &Pay| p.0);
///
/// assert_eq!(high.run(), vec![60000]);
/// source.push(Pay(100000));
/// assert_eq!(high.run(), vec![60000, 100000]);
/// ```
pub struct Deferred<T, P> {
    records: Lazy<T>,
    project: P,
}

impl<T, R, P> Deferred<T, P>
where
    T: Seekable + Clone,
    P: Fn(&T) -> R,
{
    pub fn new(source: &Source<T>, query: Query, project: P) -> Self {
        Deferred {
            records: Lazy::new(source, query),
            project,
        }
    }

    pub fn query(&self) -> &Query {
        self.records.query()
    }

    /// Streams projected results, reading the source as it goes.
    pub fn iter(&self) -> DeferredIter<'_, T, P> {
        debug!(
            query = %self.records.query(),
            source_len = self.records.source().len(),
            "deferred traversal started"
        );
        DeferredIter {
            records: self.records.iter().for_pipeline("deferred"),
            project: &self.project,
        }
    }

    /// Runs one full traversal and collects it.
    pub fn run(&self) -> Vec<R> {
        self.iter().collect()
    }

    /// Runs one full traversal, counting matches without projecting them.
    pub fn count(&self) -> usize {
        self.records.iter().for_pipeline("deferred").count()
    }
}

impl<'a, T, R, P> IntoIterator for &'a Deferred<T, P>
where
    T: Seekable + Clone,
    P: Fn(&T) -> R,
{
    type Item = R;
    type IntoIter = DeferredIter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One traversal of a [`Deferred`] pipeline.
pub struct DeferredIter<'a, T, P> {
    records: Producer<'a, T>,
    project: &'a P,
}

impl<T, R, P> Iterator for DeferredIter<'_, T, P>
where
    T: Seekable + Clone,
    P: Fn(&T) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.records.next().map(|record| (self.project)(&record))
    }
}

impl<T, R, P> FusedIterator for DeferredIter<'_, T, P>
where
    T: Seekable + Clone,
    P: Fn(&T) -> R,
{
}

impl<T, P> fmt::Debug for Deferred<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
