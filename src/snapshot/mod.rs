//! In-process snapshots of calculator state.
//!
//! A snapshot captures the entry buffer, memory, history and panel
//! visibility so a host can tear down and re-mount the widget without
//! losing work. Timers and the error display are not captured.

use crate::core::{EntryState, HistoryStore, MemoryCell};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable image of an engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Entry buffer and pending operation
    pub entry: EntryState,

    /// Memory accumulator
    pub memory: MemoryCell,

    /// Result history, newest first
    pub history: HistoryStore,

    /// Whether the history panel was open
    pub history_panel_visible: bool,
}

impl Snapshot {
    pub fn new(
        taken_at: DateTime<Utc>,
        entry: EntryState,
        memory: MemoryCell,
        history: HistoryStore,
        history_panel_visible: bool,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            taken_at,
            entry,
            memory,
            history,
            history_panel_visible,
        }
    }

    /// Encode as JSON. Overflowed numbers are written as `"Infinity"`,
    /// `"-Infinity"` or `"NaN"` so they load back unchanged.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot and check it before handing it out.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check version and state invariants, reporting ALL problems at once.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let checks: Vec<Validation<(), NonEmptyVec<String>>> = vec![
            check(
                self.entry.is_well_formed(),
                format!("malformed entry value '{}'", self.entry.current_value()),
            ),
            check(
                self.entry.previous_value().is_some() == self.entry.operation().is_some(),
                "pending operand and operator must be set together".to_string(),
            ),
            check(
                self.history.iter().all(|entry| !entry.expression().is_empty()),
                "history entry without an expression".to_string(),
            ),
            check(
                self.history.len() <= self.history.capacity(),
                format!(
                    "history holds {} entries but capacity is {}",
                    self.history.len(),
                    self.history.capacity()
                ),
            ),
        ];

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(problems) => Err(SnapshotError::Inconsistent {
                problems: problems.iter().cloned().collect(),
            }),
        }
    }
}

fn check(ok: bool, problem: String) -> Validation<(), NonEmptyVec<String>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(problem)
    }
}
