//! Snapshot error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while saving or loading an automaton snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The JSON form could not be written or is not a snapshot
    #[error("Snapshot JSON could not be encoded or decoded: {0}")]
    Json(#[from] serde_json::Error),

    /// The bincode form could not be written or is truncated or corrupt
    #[error("Snapshot binary could not be encoded or decoded: {0}")]
    Binary(#[from] bincode::Error),

    /// Written by a build using a different snapshot layout
    #[error("Snapshot format version {found} is not readable; this build reads version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The stored states do not form a valid deterministic automaton
    #[error("Snapshot holds an invalid automaton: {0}")]
    InvalidAutomaton(#[from] BuildError),
}
