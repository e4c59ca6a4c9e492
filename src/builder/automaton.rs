//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Automaton, CharRange, State, StateId, Transition};

/// Builder for automata with a fluent API.
///
/// States are created with [`add_state`](Self::add_state), which hands out
/// the id used to wire transitions. [`build`](Self::build) checks every
/// reference, sorts each state's transitions by range, and rejects
/// overlapping ranges so the result is deterministic.
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    initial: Option<StateId>,
    states: Vec<State>,
    pending: Vec<(StateId, Transition)>,
    marked: Vec<StateId>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing states, e.g. when reloading a snapshot.
    pub fn from_parts(initial: StateId, states: Vec<State>) -> Self {
        let mut builder = Self {
            initial: Some(initial),
            states: Vec::with_capacity(states.len()),
            pending: Vec::new(),
            marked: Vec::new(),
        };
        for (idx, state) in states.into_iter().enumerate() {
            let from = StateId(idx);
            builder
                .pending
                .extend(state.transitions.into_iter().map(|t| (from, t)));
            builder.states.push(State {
                accepting: state.accepting,
                transitions: Vec::new(),
            });
        }
        builder
    }

    /// Add a state and return its id.
    pub fn add_state(&mut self, accepting: bool) -> StateId {
        self.states.push(State {
            accepting,
            transitions: Vec::new(),
        });
        StateId(self.states.len() - 1)
    }

    /// Number of states added so far.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark a state as accepting.
    pub fn accepting(mut self, state: StateId) -> Self {
        self.set_accepting(state);
        self
    }

    /// Mark a state as accepting without consuming the builder.
    /// Unknown ids are reported by [`build`](Self::build).
    pub fn set_accepting(&mut self, state: StateId) {
        self.marked.push(state);
    }

    /// Add a transition consuming one character from `[min, max]`.
    pub fn transition(mut self, from: StateId, min: char, max: char, to: StateId) -> Self {
        self.add_transition(from, CharRange::new(min, max), to);
        self
    }

    /// Add a transition without consuming the builder.
    pub fn add_transition(&mut self, from: StateId, range: CharRange, to: StateId) {
        self.pending
            .push((from, Transition::new(range.min, range.max, to)));
    }

    /// Build the automaton.
    /// Returns an error if a reference is dangling or ranges are invalid.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let mut states = self.states;
        if initial.0 >= states.len() {
            return Err(BuildError::UnknownState { id: initial });
        }

        for id in self.marked {
            let state = states
                .get_mut(id.0)
                .ok_or(BuildError::UnknownState { id })?;
            state.accepting = true;
        }

        let count = states.len();
        for (from, transition) in self.pending {
            if transition.to.0 >= count {
                return Err(BuildError::UnknownState { id: transition.to });
            }
            if transition.min > transition.max {
                return Err(BuildError::EmptyRange {
                    state: from,
                    min: transition.min,
                    max: transition.max,
                });
            }
            let state = states
                .get_mut(from.0)
                .ok_or(BuildError::UnknownState { id: from })?;
            state.transitions.push(transition);
        }

        for (idx, state) in states.iter_mut().enumerate() {
            state.transitions.sort_by_key(|t| (t.min, t.max));
            if let Some(pair) = state.transitions.windows(2).find(|w| w[0].max >= w[1].min) {
                return Err(BuildError::OverlappingTransitions {
                    state: StateId(idx),
                    first: pair[0].range(),
                    second: pair[1].range(),
                });
            }
        }

        Ok(Automaton::from_validated(initial, states))
    }
}
