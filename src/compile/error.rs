//! Pattern compilation errors.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur when compiling a pattern into an automaton
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompileError {
    /// The pattern is not well formed; `position` counts characters
    #[error("Syntax error at position {position}: {message}")]
    Syntax { position: usize, message: String },

    /// A `{n,m}` repetition with `m < n`
    #[error("Invalid repetition {{{min},{max}}}: upper bound below lower bound")]
    InvalidRepetition { min: u32, max: u32 },

    /// A repetition bound above the supported ceiling
    #[error("Repetition bound {bound} exceeds the limit of {limit}")]
    RepetitionTooLarge { bound: u32, limit: u32 },

    /// A class range such as `[z-a]`
    #[error("Invalid class range {min:?}-{max:?}")]
    InvalidClassRange { min: char, max: char },

    /// Groups or stacked quantifiers nested past the configured depth
    #[error("Pattern nests groups or repetitions deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// The automaton grew past the configured state budget
    #[error("Pattern needs more than {limit} automaton states")]
    TooManyStates { limit: usize },

    /// The compiled graph failed validation
    #[error("Compiled automaton is invalid: {0}")]
    Build(#[from] BuildError),
}
