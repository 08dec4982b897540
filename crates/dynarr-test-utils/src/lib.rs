//! Test utilities for dynarr development.
//!
//! Provides instrumented element and comparator types for observing what
//! the container does with the values it owns:
//!
//! - [`DropTracker`] / [`Tracked`] count element drops.
//! - [`CountingComparator`] counts comparator calls.
//! - [`PanickingComparator`] fails deterministically after N calls.
//!
//! Deterministic input generators live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// Shared drop counter handing out [`Tracked`] values.
///
/// Every `Tracked` created by [`track`](DropTracker::track) bumps the
/// tracker's drop count exactly once when it is dropped.
#[derive(Clone, Default)]
pub struct DropTracker {
    created: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its drop is counted by this tracker.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.created.set(self.created.get() + 1);
        Tracked {
            value,
            dropped: Rc::clone(&self.dropped),
        }
    }

    /// How many tracked values have been dropped.
    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// How many tracked values are still alive.
    pub fn live(&self) -> usize {
        self.created.get() - self.dropped.get()
    }
}

/// A value whose drop is reported to a [`DropTracker`].
///
/// Ordering and equality delegate to the wrapped value.
#[derive(Debug)]
pub struct Tracked<T> {
    value: T,
    dropped: Rc<Cell<usize>>,
}

impl<T> Tracked<T> {
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.dropped.set(self.dropped.get() + 1);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Tracked<T> {}

impl<T: PartialOrd> PartialOrd for Tracked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Tracked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// Natural-order comparator that counts how often it is called.
///
/// Pass `|a, b| counter.compare(a, b)` where a comparator is expected,
/// then inspect [`calls`](CountingComparator::calls).
#[derive(Default)]
pub struct CountingComparator {
    calls: Cell<usize>,
}

impl CountingComparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compare<T: Ord>(&self, a: &T, b: &T) -> Ordering {
        self.calls.set(self.calls.get() + 1);
        a.cmp(b)
    }

    /// How many comparisons have been made.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// Natural-order comparator that panics on call number `succeed_count + 1`.
///
/// Useful for checking that a failing comparator leaves the container in
/// a consistent state.
pub struct PanickingComparator {
    succeed_count: usize,
    calls: Cell<usize>,
}

impl PanickingComparator {
    /// Create a comparator that answers `succeed_count` times then panics.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: Cell::new(0),
        }
    }

    pub fn compare<T: Ord>(&self, a: &T, b: &T) -> Ordering {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n >= self.succeed_count {
            panic!(
                "deliberate comparator failure after {} calls",
                self.succeed_count
            );
        }
        a.cmp(b)
    }

    /// How many times `compare()` has been called, including the failing call.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}
