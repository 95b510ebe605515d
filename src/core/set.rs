//! Minimal unordered set of unique elements.
//!
//! `Set` is the leaf utility backing the machine's reachability index.
//! It stores each element at most once and enumerates in unspecified order.

use std::collections::HashSet;
use std::hash::Hash;

/// Unordered collection of unique, hashable elements.
///
/// Insertion and deletion are idempotent: adding an element that is already
/// present, or deleting one that is absent, is a no-op and never an error.
/// Enumeration order is unspecified and may differ between runs; callers
/// comparing contents should compare as sets, not sequences.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Set;
///
/// let mut set = Set::new();
/// set.add("a");
/// set.add("b");
/// set.add("a");
///
/// assert_eq!(set.size(), 2);
/// assert!(set.has(&"a"));
/// assert!(!set.has(&"c"));
/// ```
#[derive(Clone, Debug)]
pub struct Set<T> {
    items: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    /// Insert an element. No-op if already present.
    pub fn add(&mut self, key: T) {
        self.items.insert(key);
    }

    /// Remove an element. No-op if absent.
    pub fn delete(&mut self, key: &T) {
        self.items.remove(key);
    }

    /// Check whether an element is present.
    pub fn has(&self, key: &T) -> bool {
        self.items.contains(key)
    }

    /// Number of distinct elements currently present.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Check whether the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the elements in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Snapshot of all elements, in unspecified order.
    ///
    /// Each call produces a fresh `Vec` whose length equals [`size`](Self::size)
    /// and whose elements are distinct.
    pub fn keys(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
