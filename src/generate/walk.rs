//! Random walk producing one accepted string.

use crate::core::Automaton;
use rand::Rng;

/// Walk the automaton at random and return the string spelled on the way.
///
/// At each state the walker picks uniformly among the outgoing
/// transitions, plus one extra "stop here" choice when the state is
/// accepting. Choice `0` is the stop choice; the transition taken is
/// `choice - 1` on accepting states and `choice` otherwise. The character
/// consumed is drawn uniformly from the chosen transition's range.
///
/// A state with no outgoing transitions ends the walk where it stands.
/// On a well-formed automaton that only happens at accepting states.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use regen::compile::compile;
/// use regen::generate::sample_one;
///
/// let automaton = compile("a*([bd])+c?").unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let s = sample_one(&automaton, &mut rng);
/// assert!(automaton.accepts(&s));
/// ```
pub fn sample_one<R: Rng + ?Sized>(automaton: &Automaton, rng: &mut R) -> String {
    let mut out = String::new();
    let mut state = automaton.initial_state();

    loop {
        let transitions = state.transitions();
        if transitions.is_empty() {
            break;
        }
        let accepting = state.is_accepting();
        let choices = transitions.len() + usize::from(accepting);
        let choice = rng.random_range(0..choices);
        if accepting && choice == 0 {
            break;
        }

        let t = &transitions[choice - usize::from(accepting)];
        out.push(rng.random_range(t.min..=t.max));
        state = automaton.node(t.to);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;
    use crate::compile::compile;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn samples_are_accepted() {
        let automaton = compile("a*b+c?").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(879870238957089);

        for _ in 0..200 {
            let s = sample_one(&automaton, &mut rng);
            assert!(automaton.accepts(&s), "rejected sample {s:?}");
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let automaton = compile("a*([bd])+c?").unwrap();
        let s1 = sample_one(&automaton, &mut ChaCha8Rng::seed_from_u64(1989465435487498));
        let s2 = sample_one(&automaton, &mut ChaCha8Rng::seed_from_u64(1989465435487498));

        assert_eq!(s1, s2);
        assert!(automaton.accepts(&s1));
    }

    #[test]
    fn literal_language_always_yields_literal() {
        let automaton = compile("hello").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(sample_one(&automaton, &mut rng), "hello");
        }
    }

    #[test]
    fn empty_language_of_only_empty_string() {
        let automaton = compile("").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(sample_one(&automaton, &mut rng), "");
    }

    #[test]
    fn stuck_walk_returns_prefix() {
        let mut builder = AutomatonBuilder::new();
        let start = builder.add_state(false);
        let stuck = builder.add_state(false);
        let automaton = builder
            .initial(start)
            .transition(start, 'q', 'q', stuck)
            .build()
            .unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(sample_one(&automaton, &mut rng), "q");
    }

    #[test]
    fn walk_covers_every_branch() {
        let automaton = compile("(white|black)|((light|dark) )?(red|green|blue|gray)").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(879870238957089);
        let seen: HashSet<String> = (0..2000)
            .map(|_| sample_one(&automaton, &mut rng))
            .collect();

        assert!(seen.iter().all(|s| automaton.accepts(s)));
        assert_eq!(seen.len(), 14);
    }

    const SAMPLES: usize = 10_000;

    /// Mean length in characters and share of empty strings over many walks.
    fn length_profile(pattern: &str, seed: u64) -> (f64, f64) {
        let automaton = compile(pattern).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut total = 0usize;
        let mut empty = 0usize;
        for _ in 0..SAMPLES {
            let s = sample_one(&automaton, &mut rng);
            total += s.chars().count();
            empty += usize::from(s.is_empty());
        }
        (total as f64 / SAMPLES as f64, empty as f64 / SAMPLES as f64)
    }

    #[test]
    fn stop_is_one_of_two_choices_on_single_loop() {
        // One self-loop plus stop: each step stops with probability 1/2,
        // so the length is geometric with mean 1.
        let (mean, empty) = length_profile("a*", 20240611);

        assert!((mean - 1.0).abs() < 0.1, "mean length {mean}");
        assert!((empty - 0.5).abs() < 0.05, "empty share {empty}");
    }

    #[test]
    fn stop_weight_shrinks_with_more_transitions() {
        // Two disjoint loops plus stop: stop probability 1/3, mean length 2.
        let (mean, empty) = length_profile("(a|c)*", 77);

        assert!((mean - 2.0).abs() < 0.15, "mean length {mean}");
        assert!((empty - 1.0 / 3.0).abs() < 0.05, "empty share {empty}");
    }

    #[test]
    fn non_accepting_state_offers_no_stop() {
        // The first step is forced, then the loop behaves like `a*`.
        let (mean, empty) = length_profile("a+", 5);

        assert_eq!(empty, 0.0);
        assert!((mean - 2.0).abs() < 0.1, "mean length {mean}");
    }

    #[test]
    fn range_counts_as_one_transition() {
        // `[a-z]` is a single range edge, so stop stays at 1/2 and the
        // characters spread evenly across the range.
        let automaton = compile("[a-z]*").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let mut empty = 0usize;
        let mut counts = [0usize; 26];
        for _ in 0..SAMPLES {
            let s = sample_one(&automaton, &mut rng);
            empty += usize::from(s.is_empty());
            for c in s.chars() {
                counts[(c as u8 - b'a') as usize] += 1;
            }
        }

        let share = empty as f64 / SAMPLES as f64;
        assert!((share - 0.5).abs() < 0.05, "empty share {share}");
        let total: usize = counts.iter().sum();
        let expected = total as f64 / 26.0;
        for (i, &n) in counts.iter().enumerate() {
            let ratio = n as f64 / expected;
            assert!((0.75..1.25).contains(&ratio), "{} drawn {n} times", (b'a' + i as u8) as char);
        }
    }

    #[test]
    fn characters_drawn_from_whole_range() {
        let automaton = compile("[a-z]").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let seen: HashSet<String> = (0..2000)
            .map(|_| sample_one(&automaton, &mut rng))
            .collect();

        assert_eq!(seen.len(), 26);
    }
}
