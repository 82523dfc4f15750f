//! Cross-language replication harness.
//!
//! Mirrors the replication run the sibling engines perform in other
//! languages: a basic batch, a timed loop, and the contradiction batch,
//! ending with a pass/fail latency verdict.

use std::time::Instant;
use wavefield::WaveEngine;

fn main() -> Result<(), anyhow::Error> {
    println!("Wave engine replication");
    println!("{}", "=".repeat(50));

    let engine = WaveEngine::new();

    let symbols = ["thinking", "mind", "brain"];
    let field = engine.activation_field(symbols);
    println!("Input: {symbols:?}");
    println!("Output: {field:?}");
    println!("Symbols processed: {}", field.len());

    let iterations = 100;
    let start = Instant::now();
    for _ in 0..iterations {
        engine.activation_field(["test", "speed", "benchmark"]);
    }
    let avg = start.elapsed().as_secs_f64() / iterations as f64;
    println!("Average processing time: {avg:.6}s");

    let contradiction = engine.activation_field(["birds", "fly", "penguins", "cannot"]);
    println!("Contradiction batch: {contradiction:?}");

    if avg < 0.01 {
        println!("Validation passed: batches complete under the 10ms budget");
        Ok(())
    } else {
        Err(anyhow::anyhow!("processing too slow: {avg:.6}s per batch"))
    }
}
