//! Generator bound to one compiled automaton.

use crate::builder::GeneratorBuilder;
use crate::compile::{compile, CompileError};
use crate::core::Automaton;
use crate::generate::{self, BatchOptions, GenerateError, Limits};
use crate::snapshot::{Snapshot, SnapshotError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

/// Generates strings matching one pattern.
///
/// The automaton is shared behind an [`Arc`] and never mutated. The
/// generator also owns a default random source used by [`sample`] and
/// [`sample_many`]; those take `&mut self`, so the source is never shared
/// between concurrent callers. Seeded and explicit-source calls take
/// `&self` and are safe to run from many threads at once.
///
/// Cloning copies the held source in its current position, so a clone's
/// [`sample`] calls replay the original's upcoming sequence. Build
/// generators with distinct seeds for independent sequences.
///
/// [`sample`]: Generator::sample
/// [`sample_many`]: Generator::sample_many
///
/// # Example
///
/// ```rust
/// use regen::Generator;
///
/// let generator = Generator::new("(white|black)|((light|dark) )?(red|green|blue|gray)").unwrap();
///
/// let all = generator.enumerate().unwrap();
/// assert_eq!(all.len(), 14);
///
/// let one = generator.sample_seeded(42);
/// assert_eq!(one, generator.sample_seeded(42));
/// assert!(all.contains(&one));
/// ```
#[derive(Clone, Debug)]
pub struct Generator {
    automaton: Arc<Automaton>,
    pattern: Option<String>,
    limits: Limits,
    batch: BatchOptions,
    rng: ChaCha8Rng,
}

impl Generator {
    /// Compile `pattern` and seed the default source from the thread RNG.
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        let automaton = compile(pattern)?;
        let mut generator = Self::from_automaton(automaton);
        generator.pattern = Some(pattern.to_owned());
        Ok(generator)
    }

    /// Wrap an already built automaton.
    pub fn from_automaton(automaton: Automaton) -> Self {
        Self::from_parts(
            Arc::new(automaton),
            None,
            Limits::default(),
            BatchOptions::default(),
            ChaCha8Rng::from_rng(&mut rand::rng()),
        )
    }

    /// Fluent construction with seed and default bounds.
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub(crate) fn from_parts(
        automaton: Arc<Automaton>,
        pattern: Option<String>,
        limits: Limits,
        batch: BatchOptions,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            automaton,
            pattern,
            limits,
            batch,
            rng,
        }
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Shared handle to the automaton for use on other threads.
    pub fn shared_automaton(&self) -> Arc<Automaton> {
        Arc::clone(&self.automaton)
    }

    /// Source pattern, when the generator was built from one.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn batch_options(&self) -> &BatchOptions {
        &self.batch
    }

    /// Random match using the generator's own source.
    pub fn sample(&mut self) -> String {
        generate::sample_one(&self.automaton, &mut self.rng)
    }

    /// Random match from a fresh source seeded with `seed`. The same seed
    /// always yields the same string.
    pub fn sample_seeded(&self, seed: u64) -> String {
        self.sample_with(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Random match from a caller-supplied source.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        generate::sample_one(&self.automaton, rng)
    }

    /// Batch using the generator's own source.
    pub fn sample_many(&mut self, options: &BatchOptions) -> Vec<String> {
        generate::sample_many(&self.automaton, &mut self.rng, options)
    }

    /// Batch with the generator's default options and own source.
    pub fn sample_batch(&mut self) -> Vec<String> {
        let options = self.batch.clone();
        self.sample_many(&options)
    }

    /// Batch from a fresh source seeded with `seed`; reproducible.
    pub fn sample_many_seeded(&self, seed: u64, options: &BatchOptions) -> Vec<String> {
        self.sample_many_with(&mut ChaCha8Rng::seed_from_u64(seed), options)
    }

    pub fn sample_many_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        options: &BatchOptions,
    ) -> Vec<String> {
        generate::sample_many(&self.automaton, rng, options)
    }

    /// Every match within the generator's default limits.
    ///
    /// With default limits the length is unbounded, which is only
    /// appropriate for finite languages.
    pub fn enumerate(&self) -> Result<HashSet<String>, GenerateError> {
        self.enumerate_with(&self.limits)
    }

    pub fn enumerate_with(&self, limits: &Limits) -> Result<HashSet<String>, GenerateError> {
        if limits.max_length.is_none() && !self.automaton.is_finite() {
            warn!(
                pattern = self.pattern.as_deref().unwrap_or("<automaton>"),
                max_depth = limits.max_depth,
                "enumerating an infinite language without a length bound"
            );
        }
        generate::enumerate(&self.automaton, limits)
    }

    /// Capture the automaton for later reuse.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.automaton, self.pattern.as_deref())
    }
}

impl TryFrom<Snapshot> for Generator {
    type Error = SnapshotError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        let pattern = snapshot.pattern.clone();
        let mut generator = Self::from_automaton(snapshot.restore()?);
        generator.pattern = pattern;
        Ok(generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const COLORS: &str = "(white|black)|((light|dark) )?(red|green|blue|gray)";

    #[test]
    fn new_keeps_pattern() {
        let generator = Generator::new("ab+").unwrap();
        assert_eq!(generator.pattern(), Some("ab+"));
        assert!(generator.automaton().accepts("abbb"));
    }

    #[test]
    fn invalid_pattern_fails_construction() {
        assert!(Generator::new("a)").is_err());
    }

    #[test]
    fn default_source_samples_match() {
        let mut generator = Generator::new("a*([bd])+c?").unwrap();
        for _ in 0..50 {
            let s = generator.sample();
            assert!(generator.automaton().accepts(&s));
        }
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let generator = Generator::new("a*([bd])+c?").unwrap();
        let seed = 1989465435487498;
        assert_eq!(generator.sample_seeded(seed), generator.sample_seeded(seed));
    }

    #[test]
    fn enumerate_default_is_complete_for_finite_language() {
        let generator = Generator::new(COLORS).unwrap();
        assert_eq!(generator.enumerate().unwrap().len(), 14);
    }

    #[test]
    fn enumerate_with_limits() {
        let generator = Generator::new(COLORS).unwrap();
        let some = generator
            .enumerate_with(&Limits::default().max_count(5))
            .unwrap();
        assert_eq!(some.len(), 5);

        let generator = Generator::new("a*([bd])+c?").unwrap();
        let bounded = generator
            .enumerate_with(&Limits::default().max_length(10))
            .unwrap();
        assert_eq!(bounded.len(), 6098);
    }

    #[test]
    fn seeded_batches_are_reproducible() {
        let generator = Generator::new("a*([bd])+c?").unwrap();
        let options = BatchOptions::new(50);
        let first = generator.sample_many_seeded(7, &options);
        let second = generator.sample_many_seeded(7, &options);
        assert_eq!(first, second);
        assert_eq!(first.len(), 50);
    }

    #[test]
    fn own_source_batch_uses_defaults() {
        let mut generator = Generator::builder()
            .pattern("[a-c]{2}")
            .seed(5)
            .batch(BatchOptions::new(4).timeout(Duration::from_secs(5)))
            .build()
            .unwrap();

        let batch = generator.sample_batch();
        assert_eq!(batch.len(), 4);
        let distinct: HashSet<&String> = batch.iter().collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn clone_replays_held_source() {
        let mut original = Generator::builder().pattern("[a-z]{6}").seed(8).build().unwrap();
        original.sample();
        let mut copy = original.clone();

        let ahead: Vec<String> = (0..5).map(|_| original.sample()).collect();
        let replayed: Vec<String> = (0..5).map(|_| copy.sample()).collect();
        assert_eq!(ahead, replayed);

        let mut other = Generator::builder().pattern("[a-z]{6}").seed(9).build().unwrap();
        other.sample();
        let diverged: Vec<String> = (0..5).map(|_| other.sample()).collect();
        assert_ne!(ahead, diverged);
    }

    #[test]
    fn snapshot_round_trip_rebuilds_generator() {
        let generator = Generator::new(COLORS).unwrap();
        let json = generator.snapshot().to_json().unwrap();

        let restored = Generator::try_from(Snapshot::from_json(&json).unwrap()).unwrap();
        assert_eq!(restored.pattern(), Some(COLORS));
        assert_eq!(restored.automaton(), generator.automaton());
        assert_eq!(restored.sample_seeded(3), generator.sample_seeded(3));
    }

    #[test]
    fn seeded_calls_run_across_threads() {
        let generator = Arc::new(Generator::new("[a-z]{3}").unwrap());
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || generator.sample_seeded(seed))
            })
            .collect();

        for (seed, handle) in handles.into_iter().enumerate() {
            let s = handle.join().unwrap();
            assert_eq!(s, generator.sample_seeded(seed as u64));
        }
    }
}
