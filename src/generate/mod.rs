//! Generation algorithms over a compiled automaton.
//!
//! - [`enumerate`]: bounded depth-first enumeration of the language
//! - [`sample_one`]: a single random walk
//! - [`sample_many`]: repeated walks under count, uniqueness and deadline
//!
//! All three borrow the automaton immutably. Random sources are passed in
//! explicitly, so concurrent calls are safe as long as each thread owns
//! its own source.

mod batch;
mod enumerate;
pub mod error;
mod limits;
mod walk;

pub use batch::sample_many;
pub use enumerate::enumerate;
pub use error::GenerateError;
pub use limits::{BatchOptions, Limits, DEFAULT_MAX_DEPTH};
pub use walk::sample_one;
