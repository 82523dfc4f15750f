//! Throughput harness.
//!
//! Measures batches per second across growing batch sizes, cycling the
//! demo vocabulary to fill each batch.

use std::time::Instant;
use wavefield::WaveEngine;

fn main() {
    let engine = WaveEngine::new();
    let vocabulary = [
        "thinking", "mind", "brain", "birds", "fly", "penguins", "cannot", "test", "speed",
        "benchmark",
    ];

    println!("{:>7}  {:>14}  {:>14}", "batch", "batches/s", "us/batch");
    for &size in &[1usize, 3, 10, 100, 1000] {
        let batch: Vec<&str> = vocabulary.iter().cycle().take(size).copied().collect();
        let iterations = 1_000;
        let start = Instant::now();
        for _ in 0..iterations {
            engine.activation_field(batch.iter().copied());
        }
        let elapsed = start.elapsed().as_secs_f64();
        println!(
            "{size:>7}  {:>14.1}  {:>14.3}",
            iterations as f64 / elapsed,
            elapsed / iterations as f64 * 1e6,
        );
    }
}
