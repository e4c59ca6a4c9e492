//! Build errors for automaton and generator builders.

use crate::compile::CompileError;
use crate::core::{CharRange, StateId};
use thiserror::Error;

/// Errors that can occur when building automata and generators.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State {id} does not exist in this automaton")]
    UnknownState { id: StateId },

    #[error("Transition from {state} has an empty range {min:?}-{max:?}")]
    EmptyRange { state: StateId, min: char, max: char },

    #[error("Transitions from {state} overlap: {first} and {second}")]
    OverlappingTransitions {
        state: StateId,
        first: CharRange,
        second: CharRange,
    },

    #[error("No pattern or automaton specified. Call .pattern(..) or .automaton(..)")]
    MissingSource,

    #[error("Pattern failed to compile: {0}")]
    Compile(Box<CompileError>),
}

impl From<CompileError> for BuildError {
    fn from(err: CompileError) -> Self {
        Self::Compile(Box::new(err))
    }
}
