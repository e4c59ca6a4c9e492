//! Pattern compilation into a deterministic range automaton.
//!
//! The pipeline is parse, Thompson construction, subset construction, then
//! trimming of states that can never reach acceptance. Every result goes
//! through [`AutomatonBuilder`](crate::builder::AutomatonBuilder), so it is
//! deterministic with sorted, disjoint transitions.
//!
//! # Dialect
//!
//! - literals, `.` for any character, `|`, `( )` and `(?: )`
//! - `*`, `+`, `?`, `{n}`, `{n,}`, `{n,m}`; a trailing lazy `?` is accepted
//! - bracket classes `[a-z]`, negated `[^...]`
//! - `\d \D \w \W \s \S`, `\n \r \t \f \v \0`, `\xHH`, `\u{HHHHHH}`
//! - `\` before any other character makes it literal
//!
//! Anchors, backreferences, lookaround and inline flags are not supported.
//! Groups and stacked quantifiers may nest at most
//! `max_nesting` levels deep (see [`CompileOptions`]).

mod charset;
mod dfa;
pub mod error;
mod nfa;
mod parser;

pub use error::CompileError;
pub use nfa::MAX_REPEAT;

use crate::core::Automaton;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default state budget for both construction stages.
pub const DEFAULT_MAX_STATES: usize = 10_000;

/// Default ceiling on nested groups and stacked quantifiers.
pub const DEFAULT_MAX_NESTING: usize = 64;

/// Knobs for [`compile_with`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Most states the NFA or the DFA may hold
    pub max_states: usize,
    /// Deepest nesting of groups and quantifiers the parser accepts
    pub max_nesting: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_states: DEFAULT_MAX_STATES,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl CompileOptions {
    pub fn max_states(mut self, n: usize) -> Self {
        self.max_states = n;
        self
    }

    pub fn max_nesting(mut self, n: usize) -> Self {
        self.max_nesting = n;
        self
    }
}

/// Compile `pattern` with default options.
///
/// # Example
///
/// ```rust
/// use regen::compile::compile;
///
/// let automaton = compile("a*([bd])+c?").unwrap();
/// assert!(automaton.accepts("aabdc"));
/// assert!(!automaton.accepts("ac"));
/// assert!(!automaton.is_finite());
/// ```
pub fn compile(pattern: &str) -> Result<Automaton, CompileError> {
    compile_with(pattern, &CompileOptions::default())
}

/// Compile `pattern` under the given state and nesting budgets.
pub fn compile_with(pattern: &str, options: &CompileOptions) -> Result<Automaton, CompileError> {
    let ast = parser::parse(pattern, options.max_nesting)?;
    let nfa = nfa::build(&ast, options.max_states)?;
    let dfa = dfa::determinize(&nfa, options.max_states)?;
    let automaton = dfa::trim(&dfa)?;
    debug!(
        pattern,
        nfa_states = nfa.states.len(),
        states = automaton.len(),
        transitions = automaton.transition_count(),
        "compiled pattern"
    );
    Ok(automaton)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_color_names() {
        let automaton = compile("(white|black)|((light|dark) )?(red|green|blue|gray)").unwrap();

        assert!(automaton.accepts("white"));
        assert!(automaton.accepts("dark red"));
        assert!(automaton.accepts("gray"));
        assert!(!automaton.accepts("light white"));
        assert!(!automaton.accepts("dark "));
        assert!(automaton.is_finite());
    }

    #[test]
    fn compiles_bounded_repetition() {
        let automaton = compile("x{2,3}").unwrap();
        assert!(!automaton.accepts("x"));
        assert!(automaton.accepts("xx"));
        assert!(automaton.accepts("xxx"));
        assert!(!automaton.accepts("xxxx"));
    }

    #[test]
    fn compiles_escapes_and_classes() {
        let automaton = compile(r"\d{3}-[A-F\s]\.").unwrap();
        assert!(automaton.accepts("123-B."));
        assert!(automaton.accepts("000- ."));
        assert!(!automaton.accepts("123-G."));
        assert!(!automaton.accepts("123-Bx"));
    }

    #[test]
    fn empty_pattern_matches_empty_string() {
        let automaton = compile("").unwrap();
        assert!(automaton.accepts(""));
        assert!(!automaton.accepts("a"));
        assert_eq!(automaton.len(), 1);
    }

    #[test]
    fn empty_class_matches_nothing() {
        let automaton = compile(r"[^\s\S]").unwrap();
        assert!(automaton.accepts_nothing());
    }

    #[test]
    fn unicode_literals() {
        let automaton = compile("ñ+é").unwrap();
        assert!(automaton.accepts("ññé"));
        assert!(!automaton.accepts("é"));
    }

    #[test]
    fn syntax_errors_surface() {
        assert!(matches!(
            compile("(a|b"),
            Err(CompileError::Syntax { .. })
        ));
        assert!(matches!(
            compile("a{4,2}"),
            Err(CompileError::InvalidRepetition { min: 4, max: 2 })
        ));
    }

    #[test]
    fn deep_nesting_is_reported_not_overflowed() {
        let depth = 10_000;
        let pattern = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));

        assert_eq!(
            compile(&pattern),
            Err(CompileError::NestingTooDeep {
                limit: DEFAULT_MAX_NESTING
            })
        );
    }

    #[test]
    fn stacked_quantifiers_count_as_nesting() {
        let pattern = format!("a{}", "*".repeat(10_000));

        assert_eq!(
            compile(&pattern),
            Err(CompileError::NestingTooDeep {
                limit: DEFAULT_MAX_NESTING
            })
        );
    }

    #[test]
    fn nesting_within_budget_compiles() {
        let depth = DEFAULT_MAX_NESTING;
        let pattern = format!("{}a|b{}", "(".repeat(depth), ")".repeat(depth));
        let automaton = compile(&pattern).unwrap();
        assert!(automaton.accepts("a"));
        assert!(automaton.accepts("b"));

        let options = CompileOptions::default().max_nesting(2);
        assert!(compile_with("((a))", &options).is_ok());
        assert_eq!(
            compile_with("(((a)))", &options),
            Err(CompileError::NestingTooDeep { limit: 2 })
        );
    }

    #[test]
    fn options_limit_states() {
        let options = CompileOptions::default().max_states(8);
        assert!(matches!(
            compile_with("[a-z]{20}", &options),
            Err(CompileError::TooManyStates { limit: 8 })
        ));
    }
}
