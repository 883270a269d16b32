//! Cycle guard.
//!
//! Records the `(expected, actual)` composite pairs entered during one
//! top-level comparison. Identity is the shared allocation address, never a
//! value hash.
//!
//! A pair is either still on the current walk path or finished with a known
//! outcome. Meeting an on-path pair again is a cycle. Meeting a finished
//! pair again (a shared child in a DAG) reuses its outcome without walking
//! or reporting it a second time; its mismatches stay under the path where
//! it was first met.
//!
//! The set also holds a clone of every handle it has seen. Reflected structs
//! produce fresh allocations on each member read; pinning them keeps an
//! address from being freed and reused for an unrelated composite later in
//! the same walk.

use crate::shape::Composite;
use std::collections::HashMap;

/// What the guard knows about a pair at the moment it is met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// First meeting; the pair is now on the walk path.
    New,
    /// The pair is an ancestor of the current node: a cycle.
    OnPath,
    /// The pair was already compared in this walk, with this outcome.
    Finished(bool),
}

#[derive(Debug, Default)]
pub struct VisitedSet {
    pairs: HashMap<(usize, usize), Option<bool>>,
    pinned: Vec<(Composite, Composite)>,
}

fn key(expected: &Composite, actual: &Composite) -> (usize, usize) {
    (expected.identity(), actual.identity())
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Meet a pair. A new pair is marked as on the path.
    pub fn enter(&mut self, expected: &Composite, actual: &Composite) -> Entry {
        match self.pairs.get(&key(expected, actual)) {
            Some(None) => Entry::OnPath,
            Some(Some(matched)) => Entry::Finished(*matched),
            None => {
                self.pairs.insert(key(expected, actual), None);
                self.pinned.push((expected.clone(), actual.clone()));
                Entry::New
            }
        }
    }

    /// Take a pair off the path and record its outcome.
    pub fn finish(&mut self, expected: &Composite, actual: &Composite, matched: bool) {
        self.pairs.insert(key(expected, actual), Some(matched));
    }

    pub fn contains(&self, expected: &Composite, actual: &Composite) -> bool {
        self.pairs.contains_key(&key(expected, actual))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
