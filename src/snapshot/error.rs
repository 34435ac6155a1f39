//! Snapshot failures.

use thiserror::Error;

/// Why a snapshot could not be written or brought back.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The JSON does not describe a snapshot
    #[error("Snapshot JSON is unreadable: {0}")]
    Json(#[from] serde_json::Error),

    /// Written by a different snapshot format
    #[error("Snapshot format v{found} cannot be restored, this build reads v{expected}")]
    VersionMismatch { found: u32, expected: u32 },

    /// The captured state is one the engine can never be in
    #[error("Snapshot state is inconsistent: {}", .problems.join("; "))]
    Inconsistent { problems: Vec<String> },
}
