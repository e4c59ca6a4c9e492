//! Builder for constructing generators.

use crate::builder::error::BuildError;
use crate::compile::{compile_with, CompileOptions};
use crate::core::Automaton;
use crate::generate::{BatchOptions, Limits};
use crate::generator::Generator;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

#[derive(Debug)]
enum Source {
    Pattern(String),
    Automaton(Arc<Automaton>),
}

/// Builder for generators with a fluent API.
///
/// # Example
///
/// ```rust
/// use regen::builder::GeneratorBuilder;
/// use regen::generate::Limits;
///
/// let mut generator = GeneratorBuilder::new()
///     .pattern("[01]{8}")
///     .seed(99)
///     .limits(Limits::default().max_count(16))
///     .build()
///     .unwrap();
///
/// assert_eq!(generator.enumerate().unwrap().len(), 16);
/// let byte = generator.sample();
/// assert_eq!(byte.len(), 8);
/// ```
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    source: Option<Source>,
    seed: Option<u64>,
    limits: Limits,
    batch: BatchOptions,
    compile: CompileOptions,
}

impl GeneratorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the generator from a pattern.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.source = Some(Source::Pattern(pattern.into()));
        self
    }

    /// Use an already built automaton.
    pub fn automaton(mut self, automaton: Automaton) -> Self {
        self.source = Some(Source::Automaton(Arc::new(automaton)));
        self
    }

    /// Share an automaton with other generators.
    pub fn shared_automaton(mut self, automaton: Arc<Automaton>) -> Self {
        self.source = Some(Source::Automaton(automaton));
        self
    }

    /// Seed the generator's own random source (optional).
    /// Without a seed the source is seeded from the thread RNG.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Default bounds for [`Generator::enumerate`].
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Default request for [`Generator::sample_batch`].
    pub fn batch(mut self, batch: BatchOptions) -> Self {
        self.batch = batch;
        self
    }

    pub fn compile_options(mut self, options: CompileOptions) -> Self {
        self.compile = options;
        self
    }

    /// Build the generator.
    /// Returns an error if no source was given or the pattern is invalid.
    pub fn build(self) -> Result<Generator, BuildError> {
        let (automaton, pattern) = match self.source.ok_or(BuildError::MissingSource)? {
            Source::Pattern(pattern) => {
                let automaton = compile_with(&pattern, &self.compile)?;
                (Arc::new(automaton), Some(pattern))
            }
            Source::Automaton(automaton) => (automaton, None),
        };

        let rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };

        Ok(Generator::from_parts(
            automaton,
            pattern,
            self.limits,
            self.batch,
            rng,
        ))
    }
}
