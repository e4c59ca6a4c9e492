//! Color Names
//!
//! This example enumerates and samples a small finite language.
//!
//! Key concepts:
//! - Compiling a pattern into an automaton
//! - Exhaustive enumeration of a finite language
//! - Random sampling with a seeded source
//! - Saving the compiled automaton as a snapshot
//!
//! Run with: cargo run --example color_names

use regen::generate::Limits;
use regen::snapshot::Snapshot;
use regen::Generator;

fn main() {
    println!("=== Color Names ===\n");

    let pattern = "(white|black)|((light|dark) )?(red|green|blue|gray)";
    let generator = Generator::new(pattern).expect("pattern compiles");

    let automaton = generator.automaton();
    println!(
        "Compiled {} states, {} transitions, finite: {}\n",
        automaton.len(),
        automaton.transition_count(),
        automaton.is_finite()
    );

    let mut all: Vec<String> = generator
        .enumerate()
        .expect("finite language enumerates")
        .into_iter()
        .collect();
    all.sort();
    println!("All {} names:", all.len());
    for name in &all {
        println!("  {name}");
    }

    let first_five = generator
        .enumerate_with(&Limits::default().max_count(5))
        .expect("bounded enumeration");
    println!("\nAny five: {first_five:?}");

    println!("\nSeeded samples:");
    for seed in 0..5 {
        println!("  seed {seed}: {}", generator.sample_seeded(seed));
    }

    let json = generator.snapshot().to_json().expect("snapshot serializes");
    let restored = Generator::try_from(Snapshot::from_json(&json).expect("snapshot parses"))
        .expect("snapshot restores");
    println!(
        "\nSnapshot: {} bytes of JSON, restored pattern {:?}",
        json.len(),
        restored.pattern()
    );
}
