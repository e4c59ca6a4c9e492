//! Immutable automaton graph.

use super::state::{State, StateId, Transition};
use serde::Serialize;
use std::collections::VecDeque;

/// Deterministic finite automaton over character ranges.
///
/// Built through [`AutomatonBuilder`](crate::builder::AutomatonBuilder) or
/// compiled from a pattern with [`compile`](crate::compile::compile). Once
/// built it is never mutated, so it can be shared freely between threads.
///
/// # Example
///
/// ```rust
/// use regen::builder::AutomatonBuilder;
///
/// // Accepts "ab" and "ac"
/// let mut builder = AutomatonBuilder::new();
/// let start = builder.add_state(false);
/// let middle = builder.add_state(false);
/// let end = builder.add_state(true);
/// let automaton = builder
///     .initial(start)
///     .transition(start, 'a', 'a', middle)
///     .transition(middle, 'b', 'c', end)
///     .build()
///     .unwrap();
///
/// assert!(automaton.accepts("ab"));
/// assert!(automaton.accepts("ac"));
/// assert!(!automaton.accepts("ad"));
/// assert!(automaton.is_finite());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Automaton {
    initial: StateId,
    states: Vec<State>,
}

impl Automaton {
    /// Assemble from parts the builder has already validated.
    pub(crate) fn from_validated(initial: StateId, states: Vec<State>) -> Self {
        Self { initial, states }
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn initial_state(&self) -> &State {
        self.node(self.initial)
    }

    /// Look up a state; `None` if the id belongs to another automaton.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.0)
    }

    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().enumerate().map(|(i, s)| (StateId(i), s))
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }

    /// Ids handed out by the builder always index into `states`.
    pub(crate) fn node(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    /// Run the automaton over `input`.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = self.initial;
        for c in input.chars() {
            match self.node(current).step(c) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.node(current).accepting
    }

    /// Flags, per state, whether an accepting state is reachable from it.
    pub fn live_states(&self) -> Vec<bool> {
        let mut reverse: Vec<Vec<usize>> = vec![Vec::new(); self.states.len()];
        for (from, state) in self.states.iter().enumerate() {
            for t in &state.transitions {
                reverse[t.to.0].push(from);
            }
        }

        let mut live = vec![false; self.states.len()];
        let mut queue = VecDeque::new();
        for (id, state) in self.states.iter().enumerate() {
            if state.accepting {
                live[id] = true;
                queue.push_back(id);
            }
        }
        while let Some(id) = queue.pop_front() {
            for &pred in &reverse[id] {
                if !live[pred] {
                    live[pred] = true;
                    queue.push_back(pred);
                }
            }
        }
        live
    }

    /// Check if the accepted language is finite.
    ///
    /// The language is infinite exactly when a cycle is reachable from the
    /// initial state through states that can still reach acceptance.
    pub fn is_finite(&self) -> bool {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            OnPath,
            Done,
        }

        let live = self.live_states();
        if !live[self.initial.0] {
            return true;
        }

        let mut marks = vec![Mark::Unvisited; self.states.len()];
        // (state, next transition index)
        let mut stack = vec![(self.initial.0, 0usize)];
        marks[self.initial.0] = Mark::OnPath;

        while let Some(frame) = stack.last_mut() {
            let (id, next) = *frame;
            let transitions = &self.states[id].transitions;
            let Some(Transition { to, .. }) = transitions.get(next) else {
                marks[id] = Mark::Done;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let to = to.0;
            if !live[to] {
                continue;
            }
            match marks[to] {
                Mark::OnPath => return false,
                Mark::Done => {}
                Mark::Unvisited => {
                    marks[to] = Mark::OnPath;
                    stack.push((to, 0));
                }
            }
        }
        true
    }

    /// Check whether the language is empty.
    pub fn accepts_nothing(&self) -> bool {
        !self.live_states()[self.initial.0]
    }
}
