//! Bounded exhaustive enumeration.
//!
//! Depth-first walk over the automaton that records the path spelled so far
//! every time it stands on an accepting state. The walk keeps its own stack
//! of frames on the heap, one per state on the current path, so a deep
//! traversal ends in [`GenerateError::CapacityExceeded`] rather than a
//! native stack overflow.

use super::error::GenerateError;
use super::limits::Limits;
use crate::core::{next_char, Automaton, State, StateId};
use std::collections::HashSet;
use tracing::debug;

/// Position of the walk inside one state's outgoing transitions.
#[derive(Debug)]
struct Frame {
    state: StateId,
    transition: usize,
    /// Next character to try in the current transition; `None` means its `min`.
    cursor: Option<char>,
}

impl Frame {
    fn new(state: StateId) -> Self {
        Self {
            state,
            transition: 0,
            cursor: None,
        }
    }

    /// Next (character, destination) pair in ascending order.
    fn advance(&mut self, state: &State) -> Option<(char, StateId)> {
        let t = state.transitions().get(self.transition)?;
        let c = self.cursor.take().unwrap_or(t.min);
        match next_char(c).filter(|&n| n <= t.max) {
            Some(n) => self.cursor = Some(n),
            None => self.transition += 1,
        }
        Some((c, t.to))
    }
}

struct Enumerator<'a> {
    automaton: &'a Automaton,
    max_length: usize,
    max_count: usize,
    max_depth: usize,
    found: HashSet<String>,
    path: Vec<char>,
    stack: Vec<Frame>,
}

impl<'a> Enumerator<'a> {
    fn new(automaton: &'a Automaton, limits: &Limits) -> Self {
        Self {
            automaton,
            max_length: limits.length_bound(),
            max_count: limits.count_bound(),
            max_depth: limits.max_depth,
            found: HashSet::new(),
            path: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.found.len() >= self.max_count
    }

    /// Handle arrival at `id`. Returns whether a frame was pushed, i.e.
    /// whether the walk will branch out of this state.
    fn visit(&mut self, id: StateId) -> Result<bool, GenerateError> {
        if self.is_full() {
            return Ok(false);
        }
        let state = self.automaton.node(id);
        if state.is_accepting() {
            self.found.insert(self.path.iter().collect());
        }
        if self.path.len() >= self.max_length || state.is_dead_end() {
            return Ok(false);
        }
        if self.stack.len() >= self.max_depth {
            return Err(GenerateError::CapacityExceeded {
                limit: self.max_depth,
            });
        }
        self.stack.push(Frame::new(id));
        Ok(true)
    }

    fn run(mut self) -> Result<HashSet<String>, GenerateError> {
        self.visit(self.automaton.initial())?;

        while let Some(frame) = self.stack.last_mut() {
            if self.found.len() >= self.max_count {
                break;
            }
            let state = self.automaton.node(frame.state);
            match frame.advance(state) {
                Some((c, to)) => {
                    self.path.push(c);
                    if !self.visit(to)? {
                        self.path.pop();
                    }
                }
                None => {
                    // The root frame has no character on the path.
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }

        Ok(self.found)
    }
}

/// Enumerate accepted strings up to the given bounds.
///
/// Every returned string is accepted by `automaton`, is at most
/// `limits.max_length` characters long, and the set never holds more than
/// `limits.max_count` members. When the bounded language is smaller than
/// the count bound, all of it is returned. Strings are visited in
/// ascending transition order, one branch per character of each range, so
/// wide ranges cost proportionally more.
///
/// # Errors
///
/// [`GenerateError::CapacityExceeded`] when the walk would hold more than
/// `limits.max_depth` frames.
///
/// # Example
///
/// ```rust
/// use regen::compile::compile;
/// use regen::generate::{enumerate, Limits};
///
/// let automaton = compile("(light|dark) (red|blue)").unwrap();
/// let all = enumerate(&automaton, &Limits::default()).unwrap();
/// assert_eq!(all.len(), 4);
/// assert!(all.contains("dark blue"));
/// ```
pub fn enumerate(automaton: &Automaton, limits: &Limits) -> Result<HashSet<String>, GenerateError> {
    if limits.count_bound() == 0 {
        return Ok(HashSet::new());
    }
    let found = Enumerator::new(automaton, limits).run()?;
    debug!(
        count = found.len(),
        max_length = ?limits.max_length,
        max_count = ?limits.max_count,
        "enumeration finished"
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;
    use crate::compile::compile;

    fn sorted(set: HashSet<String>) -> Vec<String> {
        let mut v: Vec<String> = set.into_iter().collect();
        v.sort();
        v
    }

    #[test]
    fn finite_language_is_enumerated_completely() {
        let automaton = compile("a(b|c)d?").unwrap();
        let all = enumerate(&automaton, &Limits::default()).unwrap();

        assert_eq!(sorted(all), vec!["ab", "abd", "ac", "acd"]);
    }

    #[test]
    fn empty_string_is_found_on_accepting_initial_state() {
        let automaton = compile("x?").unwrap();
        let all = enumerate(&automaton, &Limits::default()).unwrap();

        assert_eq!(sorted(all), vec!["", "x"]);
    }

    #[test]
    fn max_length_bounds_cyclic_language() {
        let automaton = compile("a*").unwrap();
        let all = enumerate(&automaton, &Limits::default().max_length(3)).unwrap();

        assert_eq!(sorted(all), vec!["", "a", "aa", "aaa"]);
    }

    #[test]
    fn max_length_zero_yields_only_empty_match() {
        let automaton = compile("b*").unwrap();
        let all = enumerate(&automaton, &Limits::default().max_length(0)).unwrap();
        assert_eq!(sorted(all), vec![""]);

        let automaton = compile("b+").unwrap();
        let all = enumerate(&automaton, &Limits::default().max_length(0)).unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn max_count_caps_result() {
        let automaton = compile("[a-z]{2}").unwrap();
        let some = enumerate(&automaton, &Limits::default().max_count(7)).unwrap();

        assert_eq!(some.len(), 7);
        assert!(some.iter().all(|s| automaton.accepts(s)));
    }

    #[test]
    fn max_count_zero_returns_nothing() {
        let automaton = compile("abc").unwrap();
        let none = enumerate(&automaton, &Limits::default().max_count(0)).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn count_cap_keeps_lowest_strings_first() {
        // Ascending range order means the first strings found are the smallest.
        let automaton = compile("[0-9]").unwrap();
        let some = enumerate(&automaton, &Limits::default().max_count(3)).unwrap();
        assert_eq!(sorted(some), vec!["0", "1", "2"]);
    }

    #[test]
    fn every_character_of_a_range_is_visited() {
        let automaton = compile("[a-e][x-y]").unwrap();
        let all = enumerate(&automaton, &Limits::default()).unwrap();
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn unbounded_cycle_reports_capacity() {
        let automaton = compile("a*").unwrap();
        let result = enumerate(&automaton, &Limits::default().max_depth(64));

        assert_eq!(result, Err(GenerateError::CapacityExceeded { limit: 64 }));
    }

    #[test]
    fn dead_end_branches_are_abandoned() {
        let mut builder = AutomatonBuilder::new();
        let start = builder.add_state(false);
        let end = builder.add_state(true);
        let trap = builder.add_state(false);
        let automaton = builder
            .initial(start)
            .transition(start, 'a', 'a', end)
            .transition(start, 'b', 'b', trap)
            .build()
            .unwrap();

        let all = enumerate(&automaton, &Limits::default()).unwrap();
        assert_eq!(sorted(all), vec!["a"]);
    }

    #[test]
    fn color_names_have_fourteen_members() {
        let automaton = compile("(white|black)|((light|dark) )?(red|green|blue|gray)").unwrap();
        let all = enumerate(&automaton, &Limits::default()).unwrap();

        assert_eq!(all.len(), 14);
        assert!(all.contains("white"));
        assert!(all.contains("light gray"));
        assert!(!all.contains("dark white"));
    }
}
