//! Seeded Batch
//!
//! This example draws batches of test inputs from an infinite language.
//!
//! Key concepts:
//! - Length-bounded enumeration of an infinite language
//! - Reproducible batches from a fixed seed
//! - Unique batches guarded by a deadline
//! - A generator with its own seeded source
//!
//! Run with: cargo run --example seeded_batch

use regen::generate::{BatchOptions, Limits};
use regen::Generator;
use std::time::{Duration, Instant};

fn main() {
    println!("=== Seeded Batch ===\n");

    let pattern = "a*([bd])+c?";
    let generator = Generator::new(pattern).expect("pattern compiles");

    let bounded = generator
        .enumerate_with(&Limits::default().max_length(10))
        .expect("length bound keeps enumeration finite");
    println!("{pattern} has {} matches of length <= 10\n", bounded.len());

    let seed = 1989465435487498;
    let options = BatchOptions::new(10);
    let batch = generator.sample_many_seeded(seed, &options);
    println!("Ten unique samples (seed {seed}):");
    for s in &batch {
        println!("  {s}");
    }
    assert_eq!(batch, generator.sample_many_seeded(seed, &options));
    println!("Same seed, same batch.\n");

    // Only one string exists, so a unique batch of two can never fill.
    let single = Generator::new("a").expect("pattern compiles");
    let started = Instant::now();
    let partial = single.sample_many_seeded(
        seed,
        &BatchOptions::new(2).timeout(Duration::from_millis(100)),
    );
    println!(
        "Asked for 2 unique matches of \"a\", got {:?} after {:?}\n",
        partial,
        started.elapsed()
    );

    let mut own = Generator::builder()
        .pattern(r"\d{3}-[A-Z]{2}")
        .seed(7)
        .batch(BatchOptions::new(3).unique(false))
        .build()
        .expect("generator builds");
    println!("Plate numbers: {:?}", own.sample_batch());
    println!("One more: {}", own.sample());
}
