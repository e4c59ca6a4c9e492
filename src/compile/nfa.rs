//! Thompson construction from the parsed pattern.

use super::charset::CharSet;
use super::error::CompileError;
use super::parser::{Ast, ClassItem};
use crate::core::CharRange;

/// Largest `n` or `m` accepted in `{n,m}`.
pub const MAX_REPEAT: u32 = 1000;

#[derive(Debug, Default)]
pub struct NfaState {
    pub epsilon: Vec<usize>,
    pub edges: Vec<(CharRange, usize)>,
}

/// Nondeterministic automaton with epsilon moves and a single accept state.
#[derive(Debug)]
pub struct Nfa {
    pub states: Vec<NfaState>,
    pub start: usize,
    pub accept: usize,
}

struct Builder {
    states: Vec<NfaState>,
    max_states: usize,
}

impl Builder {
    fn add(&mut self) -> Result<usize, CompileError> {
        if self.states.len() >= self.max_states {
            return Err(CompileError::TooManyStates {
                limit: self.max_states,
            });
        }
        self.states.push(NfaState::default());
        Ok(self.states.len() - 1)
    }

    fn epsilon(&mut self, from: usize, to: usize) {
        self.states[from].epsilon.push(to);
    }

    /// Build a fragment and return its (entry, exit) states.
    fn fragment(&mut self, ast: &Ast) -> Result<(usize, usize), CompileError> {
        match ast {
            Ast::Empty => {
                let s = self.add()?;
                Ok((s, s))
            }
            Ast::Class { items, negated } => {
                let set = lower_class(items, *negated)?;
                let entry = self.add()?;
                let exit = self.add()?;
                for range in set.ranges() {
                    self.states[entry].edges.push((range, exit));
                }
                Ok((entry, exit))
            }
            Ast::Concat(parts) => {
                let entry = self.add()?;
                let mut exit = entry;
                for part in parts {
                    let (a, b) = self.fragment(part)?;
                    self.epsilon(exit, a);
                    exit = b;
                }
                Ok((entry, exit))
            }
            Ast::Alternate(branches) => {
                let entry = self.add()?;
                let exit = self.add()?;
                for branch in branches {
                    let (a, b) = self.fragment(branch)?;
                    self.epsilon(entry, a);
                    self.epsilon(b, exit);
                }
                Ok((entry, exit))
            }
            Ast::Repeat { inner, min, max } => self.repeat(inner, *min, *max),
        }
    }

    fn repeat(&mut self, inner: &Ast, min: u32, max: Option<u32>) -> Result<(usize, usize), CompileError> {
        for bound in std::iter::once(min).chain(max) {
            if bound > MAX_REPEAT {
                return Err(CompileError::RepetitionTooLarge {
                    bound,
                    limit: MAX_REPEAT,
                });
            }
        }
        if let Some(max) = max.filter(|&m| m < min) {
            return Err(CompileError::InvalidRepetition { min, max });
        }

        let entry = self.add()?;
        let mut exit = entry;
        for _ in 0..min {
            let (a, b) = self.fragment(inner)?;
            self.epsilon(exit, a);
            exit = b;
        }

        match max {
            None => {
                let hub = self.add()?;
                self.epsilon(exit, hub);
                let (a, b) = self.fragment(inner)?;
                self.epsilon(hub, a);
                self.epsilon(b, hub);
                Ok((entry, hub))
            }
            Some(max) => {
                let end = self.add()?;
                for _ in min..max {
                    self.epsilon(exit, end);
                    let (a, b) = self.fragment(inner)?;
                    self.epsilon(exit, a);
                    exit = b;
                }
                self.epsilon(exit, end);
                Ok((entry, end))
            }
        }
    }
}

fn lower_class(items: &[ClassItem], negated: bool) -> Result<CharSet, CompileError> {
    let mut set = CharSet::empty();
    for item in items {
        let part = match item {
            ClassItem::Range(min, max) if min > max => {
                return Err(CompileError::InvalidClassRange {
                    min: *min,
                    max: *max,
                })
            }
            ClassItem::Range(min, max) => CharSet::from_intervals([(*min as u32, *max as u32)]),
            ClassItem::Set(s) => s.clone(),
        };
        set = set.union(&part);
    }
    Ok(if negated { set.complement() } else { set })
}

/// Build the NFA for `ast`, failing once it needs more than `max_states` states.
pub fn build(ast: &Ast, max_states: usize) -> Result<Nfa, CompileError> {
    let mut builder = Builder {
        states: Vec::new(),
        max_states,
    };
    let (start, accept) = builder.fragment(ast)?;
    Ok(Nfa {
        states: builder.states,
        start,
        accept,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::parser::parse;
    use crate::compile::DEFAULT_MAX_NESTING;

    #[test]
    fn rejects_inverted_repetition() {
        let ast = parse("a{3,1}", DEFAULT_MAX_NESTING).unwrap();
        assert_eq!(
            build(&ast, 1000).unwrap_err(),
            CompileError::InvalidRepetition { min: 3, max: 1 }
        );
    }

    #[test]
    fn rejects_huge_repetition() {
        let ast = parse("a{5000}", DEFAULT_MAX_NESTING).unwrap();
        assert_eq!(
            build(&ast, 1000).unwrap_err(),
            CompileError::RepetitionTooLarge {
                bound: 5000,
                limit: MAX_REPEAT
            }
        );
    }

    #[test]
    fn rejects_inverted_class_range() {
        let ast = parse("[z-a]", DEFAULT_MAX_NESTING).unwrap();
        assert_eq!(
            build(&ast, 1000).unwrap_err(),
            CompileError::InvalidClassRange { min: 'z', max: 'a' }
        );
    }

    #[test]
    fn state_budget_is_enforced() {
        let ast = parse("(abc){100}", DEFAULT_MAX_NESTING).unwrap();
        assert_eq!(
            build(&ast, 50).unwrap_err(),
            CompileError::TooManyStates { limit: 50 }
        );
    }

    #[test]
    fn negated_class_excludes_members() {
        let ast = parse("[^a-y]", DEFAULT_MAX_NESTING).unwrap();
        let nfa = build(&ast, 100).unwrap();
        let edges = &nfa.states[nfa.start].edges;

        assert!(edges.iter().any(|(r, _)| r.contains('z')));
        assert!(!edges.iter().any(|(r, _)| r.contains('m')));
    }
}
