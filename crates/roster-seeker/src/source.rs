//! The shared, live backing collection.
//!
//! Every pipeline reads through a [`Source`]. Eager pipelines take a snapshot
//! of its contents at call time; deferred and lazy pipelines re-read it on
//! every traversal step, so records pushed after a pipeline was built are
//! visible to it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A clonable handle onto one mutable, ordered collection.
///
/// Clones share the same storage. The handle is single-threaded: no borrow is
/// held between calls, so the collection may be mutated between the steps of
/// a traversal.
///
/// ```
/// use roster_seeker::Source;
///
/// let names = Source::new(vec!["Bob", "Sarah"]);
/// let reader = names.clone();
/// names.push("Sam");
/// assert_eq!(reader.snapshot(), vec!["Bob", "Sarah", "Sam"]);
/// ```
pub struct Source<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> Source<T> {
    pub fn new(items: Vec<T>) -> Self {
        Source {
            items: Rc::new(RefCell::new(items)),
        }
    }

    /// Appends a record to the end of the collection.
    pub fn push(&self, item: T) {
        self.items.borrow_mut().push(item);
    }

    pub fn extend<I: IntoIterator<Item = T>>(&self, items: I) {
        self.items.borrow_mut().extend(items);
    }

    /// Removes the record at `index`, shifting later records down.
    pub fn remove(&self, index: usize) -> Option<T> {
        let mut items = self.items.borrow_mut();
        (index < items.len()).then(|| items.remove(index))
    }

    pub fn retain<F: FnMut(&T) -> bool>(&self, keep: F) {
        self.items.borrow_mut().retain(keep);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Runs `f` against the current contents.
    ///
    /// # Panics
    ///
    /// Panics if `f` mutates the collection through another handle.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.items.borrow())
    }

    /// Returns `true` if both handles share the same storage.
    pub fn ptr_eq(&self, other: &Source<T>) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> Source<T> {
    /// Clones the record currently at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.borrow().get(index).cloned()
    }

    /// Copies the current contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        Source {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for Source<T> {
    fn default() -> Self {
        Source::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for Source<T> {
    fn from(items: Vec<T>) -> Self {
        Source::new(items)
    }
}

impl<T: fmt::Debug> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.borrow().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let source = Source::new(vec![1, 2]);
        let other = source.clone();
        other.push(3);

        assert_eq!(source.len(), 3);
        assert!(source.ptr_eq(&other));
        assert!(!source.ptr_eq(&Source::new(vec![1, 2, 3])));
    }

    #[test]
    fn snapshot_is_detached() {
        let source = Source::new(vec![1, 2]);
        let snapshot = source.snapshot();
        source.push(3);

        assert_eq!(snapshot, vec![1, 2]);
        assert_eq!(source.snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn get_and_remove() {
        let source = Source::new(vec!["a", "b", "c"]);
        assert_eq!(source.get(1), Some("b"));
        assert_eq!(source.get(3), None);

        assert_eq!(source.remove(0), Some("a"));
        assert_eq!(source.remove(5), None);
        assert_eq!(source.get(0), Some("b"));
    }

    #[test]
    fn retain_and_extend() {
        let source = Source::from(vec![1, 2, 3, 4]);
        source.retain(|n| n % 2 == 0);
        source.extend([6, 8]);

        assert_eq!(source.with(|items| items.to_vec()), vec![2, 4, 6, 8]);
        assert!(!source.is_empty());
        assert!(Source::<i32>::default().is_empty());
    }
}
