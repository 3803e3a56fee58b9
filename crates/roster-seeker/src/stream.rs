//! Lazy, element-by-element evaluation.
//!
//! A [`Lazy`] is a restartable sequence: every call to [`Lazy::iter`] starts a
//! fresh [`Producer`] with its own position. A producer does no work until
//! `next()` is called, examines the live [`Source`] one record at a time,
//! and suspends right after handing back a match.
//!
//! ```text
//!             first next()                 match
//!   Created ───────────────► Examining ───────────► Suspended
//!                              │   ▲  ◄───────────────┘
//!                  no match ───┘   │     next()
//!                              │
//!                   end of input / limit reached
//!                              ▼
//!                          Exhausted (terminal)
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::query::Query;
use crate::source::Source;
use crate::traits::Seekable;

/// Where a [`Producer`] currently is in its traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProducerState {
    /// Built, but `next()` has not been called yet.
    Created,
    /// Looking at input records. Only observable from inside a visit hook.
    Examining,
    /// Just yielded a match; waiting for the next request.
    Suspended,
    /// Input exhausted (or limit reached). Terminal.
    Exhausted,
}

/// Restartable lazy sequence of the records in a [`Source`] that match a
/// [`Query`].
///
/// An optional visit hook runs for every record the producer examines,
/// before the query is evaluated against it, whether or not it matches.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
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
/// let source = Source::new(vec![Pay(60000), Pay(40000), Pay(80000)]);
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let log = Rc::clone(&seen);
/// let high = Query::new()
///     .and_gte("pay", 50000i64)
///     .lazy(&source)
///     .on_visit(move |p: &Pay| log.borrow_mut().push(p.0));
///
/// let mut producer = high.iter();
/// assert_eq!(producer.next().map(|p| p.0), Some(60000));
/// assert_eq!(*seen.borrow(), vec![60000]);
/// assert_eq!(producer.next().map(|p| p.0), Some(80000));
/// assert_eq!(*seen.borrow(), vec![60000, 40000, 80000]);
/// ```
pub struct Lazy<T> {
    source: Source<T>,
    query: Query,
    visit: Option<Rc<dyn Fn(&T)>>,
}

impl<T: Seekable + Clone> Lazy<T> {
    /// Wraps `source` without reading it.
    pub fn new(source: &Source<T>, query: Query) -> Self {
        Lazy {
            source: source.clone(),
            query,
            visit: None,
        }
    }

    /// Installs a hook called for every examined record.
    pub fn on_visit(mut self, hook: impl Fn(&T) + 'static) -> Self {
        self.visit = Some(Rc::new(hook));
        self
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn source(&self) -> &Source<T> {
        &self.source
    }

    /// Starts an independent traversal from the first record.
    pub fn iter(&self) -> Producer<'_, T> {
        Producer {
            source: &self.source,
            query: &self.query,
            visit: self.visit.as_deref(),
            position: 0,
            skipped: 0,
            yielded: 0,
            state: ProducerState::Created,
            pipeline: "lazy",
        }
    }
}

impl<'a, T: Seekable + Clone> IntoIterator for &'a Lazy<T> {
    type Item = T;
    type IntoIter = Producer<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("query", &self.query)
            .field("visit", &self.visit.is_some())
            .finish_non_exhaustive()
    }
}

/// One traversal of a [`Lazy`] sequence.
///
/// Each step reads the source by position, so records appended during the
/// traversal are reached when the producer gets to them. Removing records
/// mid-traversal shifts positions and may skip a record.
pub struct Producer<'q, T> {
    source: &'q Source<T>,
    query: &'q Query,
    visit: Option<&'q dyn Fn(&T)>,
    position: usize,
    skipped: usize,
    yielded: usize,
    state: ProducerState,
    pipeline: &'static str,
}

impl<T> Producer<'_, T> {
    pub fn state(&self) -> ProducerState {
        self.state
    }

    /// Number of records examined so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of records yielded so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Names the pipeline driving this traversal in diagnostics.
    pub(crate) fn for_pipeline(mut self, pipeline: &'static str) -> Self {
        self.pipeline = pipeline;
        self
    }

    fn exhaust(&mut self) {
        debug!(
            pipeline = self.pipeline,
            examined = self.position,
            yielded = self.yielded,
            "traversal exhausted"
        );
        self.state = ProducerState::Exhausted;
    }
}

impl<T: Seekable + Clone> Iterator for Producer<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.state == ProducerState::Exhausted {
            return None;
        }
        if self.query.get_limit().is_some_and(|limit| self.yielded >= limit) {
            self.exhaust();
            return None;
        }

        self.state = ProducerState::Examining;
        let offset = self.query.get_offset().unwrap_or(0);

        while let Some(item) = self.source.get(self.position) {
            self.position += 1;
            trace!(position = self.position - 1, "examining record");

            if let Some(visit) = self.visit {
                visit(&item);
            }
            if !self.query.matches(&item, T::accessor) {
                continue;
            }
            if self.skipped < offset {
                self.skipped += 1;
                continue;
            }

            self.yielded += 1;
            self.state = ProducerState::Suspended;
            trace!(position = self.position - 1, "yielding record");
            return Some(item);
        }

        self.exhaust();
        None
    }
}

impl<T: Seekable + Clone> FusedIterator for Producer<'_, T> {}

impl<T> fmt::Debug for Producer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("pipeline", &self.pipeline)
            .field("state", &self.state)
            .field("position", &self.position)
            .field("yielded", &self.yielded)
            .finish_non_exhaustive()
    }
}
