//! Saving and reloading compiled automata.
//!
//! Compiling a large pattern is far more expensive than walking the result,
//! so an application can compile once, store a snapshot, and rebuild the
//! automaton from it later. Loading runs the stored graph back through
//! [`AutomatonBuilder`], so a tampered snapshot is rejected instead of
//! trusted.

use crate::builder::AutomatonBuilder;
use crate::core::{Automaton, State, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable form of a compiled automaton.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,

    /// Pattern the automaton was compiled from, if known
    pub pattern: Option<String>,

    /// Initial state of the automaton
    pub initial: StateId,

    /// Every state with its transitions
    pub states: Vec<State>,
}

impl Snapshot {
    /// Capture an automaton.
    pub fn new(automaton: &Automaton, pattern: Option<&str>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            created_at: Utc::now(),
            pattern: pattern.map(str::to_owned),
            initial: automaton.initial(),
            states: automaton.states().map(|(_, s)| s.clone()).collect(),
        }
    }

    /// Rebuild and validate the automaton.
    pub fn restore(self) -> Result<Automaton, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(AutomatonBuilder::from_parts(self.initial, self.states).build()?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
