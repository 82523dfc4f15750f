//! Wavefield - a deterministic symbolic oscillator engine.
//!
//! Every string symbol owns a fixed sine oscillator whose frequency,
//! amplitude, and phase are derived from the symbol's content through an
//! explicit portable hash, so independently written engines (in any
//! language) agree on every parameter. Activations are point evaluations
//! of those oscillators at a caller-visible time.

pub mod engine;
pub mod hash;
pub mod oscillator;

// Re-export commonly used types at the crate root
pub use engine::{ActivationField, Clock, FixedClock, MonotonicClock, WaveEngine};
pub use hash::symbol_hash;
pub use oscillator::WaveParameters;
