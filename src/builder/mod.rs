//! Builder API for automaton and generator construction.
//!
//! Builders validate everything up front, so a built [`Automaton`] always
//! has sorted, disjoint transitions and no dangling state references.
//!
//! [`Automaton`]: crate::core::Automaton

pub mod automaton;
pub mod error;
pub mod generator;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
pub use generator::GeneratorBuilder;
