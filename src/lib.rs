//! Regen: generate strings accepted by a finite automaton
//!
//! A pattern is compiled once into an immutable deterministic automaton
//! whose transitions are labelled with character ranges. Generators then
//! walk that graph to produce example inputs for tests, fuzzers and docs.
//!
//! # Core Concepts
//!
//! - **Automaton**: Immutable state graph built by [`compile`] or [`builder::AutomatonBuilder`]
//! - **Enumeration**: Every accepted string up to a length and count bound
//! - **Sampling**: One random accepted string per walk, or a batch with
//!   uniqueness and a deadline
//! - **Generator**: One automaton plus convenience entry points
//!
//! # Example
//!
//! ```rust
//! use regen::generate::{BatchOptions, Limits};
//! use regen::Generator;
//!
//! let generator = Generator::new("a*([bd])+c?").unwrap();
//!
//! // Infinite language: bound the length.
//! let short = generator
//!     .enumerate_with(&Limits::default().max_length(10))
//!     .unwrap();
//! assert_eq!(short.len(), 6098);
//!
//! // Reproducible batch of distinct samples.
//! let batch = generator.sample_many_seeded(1989465435487498, &BatchOptions::new(50));
//! assert_eq!(batch.len(), 50);
//! assert!(batch.iter().all(|s| generator.automaton().accepts(s)));
//! ```

pub mod builder;
pub mod compile;
pub mod core;
pub mod generate;
pub mod generator;
pub mod snapshot;

// Re-export commonly used types
pub use compile::compile;
pub use core::{Automaton, CharRange, State, StateId, Transition};
pub use generate::{BatchOptions, GenerateError, Limits};
pub use generator::Generator;
