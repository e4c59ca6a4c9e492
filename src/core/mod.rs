//! Core automaton data model.
//!
//! This module contains the immutable graph the generators walk:
//! - Character ranges over Unicode scalar values
//! - States with an accept flag and sorted, disjoint transitions
//! - The automaton itself with membership and finiteness queries
//!
//! Nothing in this module mutates an automaton after construction.

mod automaton;
mod range;
mod state;

pub use automaton::Automaton;
pub use range::{next_char, CharRange};
pub use state::{State, StateId, Transition};
