//! Bounded history of computed results.
//!
//! Only successful calculations are recorded. The store keeps the most
//! recent entries first and evicts the oldest once it is full.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of results kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Record of a single successful calculation.
///
/// Entries are immutable once created.
///
/// # Example
///
/// ```rust
/// use abacus::core::HistoryEntry;
/// use chrono::Utc;
///
/// let entry = HistoryEntry::new("3 + 4", 7.0, Utc::now());
/// assert_eq!(entry.expression(), "3 + 4");
/// assert_eq!(entry.result(), 7.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    expression: String,
    #[serde(with = "crate::core::number")]
    result: f64,
    recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: f64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            expression: expression.into(),
            result,
            recorded_at,
        }
    }

    /// Expression in the form `"<lhs> <op> <rhs>"`.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// When the calculation was performed.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Newest-first sequence of history entries with a fixed capacity.
///
/// # Example
///
/// ```rust
/// use abacus::core::{HistoryEntry, HistoryStore};
/// use chrono::Utc;
///
/// let mut history = HistoryStore::with_capacity(2);
/// history.record(HistoryEntry::new("1 + 1", 2.0, Utc::now()));
/// history.record(HistoryEntry::new("2 + 2", 4.0, Utc::now()));
/// let evicted = history.record(HistoryEntry::new("3 + 3", 6.0, Utc::now()));
///
/// assert_eq!(evicted.map(|e| e.result()), Some(2.0));
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get(0).map(|e| e.result()), Some(6.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    /// Create an empty store with the default capacity of five.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty store holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an entry as the newest one.
    ///
    /// Returns the evicted oldest entry when the store was full.
    pub fn record(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Entry at `index`, where 0 is the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
