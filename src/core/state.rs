//! States and transitions of a compiled automaton.
//!
//! States live in the automaton's arena and are addressed by [`StateId`].
//! Transitions refer to their destination by id, so the graph owns every
//! node and edges never own what they point at.

use super::range::CharRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a state inside its automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Edge consuming exactly one character from `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// Lowest character accepted by this edge
    pub min: char,
    /// Highest character accepted by this edge
    pub max: char,
    /// Destination state
    pub to: StateId,
}

impl Transition {
    pub fn new(min: char, max: char, to: StateId) -> Self {
        Self { min, max, to }
    }

    pub fn range(&self) -> CharRange {
        CharRange::new(self.min, self.max)
    }
}

/// A node of the automaton: an accept flag plus outgoing transitions.
///
/// Inside a built [`Automaton`](super::Automaton) the transitions are
/// sorted ascending by `min` and pairwise disjoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub(crate) accepting: bool,
    pub(crate) transitions: Vec<Transition>,
}

impl State {
    /// Check if the path leading here is a complete match.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Outgoing transitions in ascending range order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Find the transition taken on `c`, if any.
    pub fn step(&self, c: char) -> Option<StateId> {
        let idx = self.transitions.partition_point(|t| t.max < c);
        self.transitions
            .get(idx)
            .filter(|t| t.min <= c)
            .map(|t| t.to)
    }

    /// A state with no way out.
    pub fn is_dead_end(&self) -> bool {
        self.transitions.is_empty()
    }
}
