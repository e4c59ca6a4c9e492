//! Batch sampling with uniqueness and a deadline.

use super::limits::BatchOptions;
use super::walk::sample_one;
use crate::core::Automaton;
use rand::Rng;
use std::collections::HashSet;
use std::time::Instant;
use tracing::debug;

/// Collect up to `options.count` random samples.
///
/// With `options.unique` set, repeats are dropped and sampling continues
/// until enough distinct strings are found. The deadline, when enabled, is
/// checked before each walk; a walk already under way is never cut short,
/// so the call may overrun the deadline by one walk. Results keep the order
/// in which they were first generated, so a seeded source reproduces the
/// same sequence.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use regen::compile::compile;
/// use regen::generate::{sample_many, BatchOptions};
///
/// let automaton = compile("[a-f]{3}").unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let batch = sample_many(&automaton, &mut rng, &BatchOptions::new(10));
/// assert_eq!(batch.len(), 10);
/// ```
pub fn sample_many<R: Rng + ?Sized>(
    automaton: &Automaton,
    rng: &mut R,
    options: &BatchOptions,
) -> Vec<String> {
    let deadline = options
        .effective_timeout()
        .and_then(|timeout| Instant::now().checked_add(timeout));

    let mut samples = Vec::new();
    let mut seen = HashSet::new();
    let mut walks = 0usize;

    while samples.len() < options.count {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            debug!(
                wanted = options.count,
                collected = samples.len(),
                walks,
                "batch deadline reached"
            );
            break;
        }
        let sample = sample_one(automaton, rng);
        walks += 1;
        if !options.unique || seen.insert(sample.clone()) {
            samples.push(sample);
        }
    }

    samples
}
