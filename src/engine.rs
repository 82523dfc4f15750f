//! The wave engine - batch activation fields over a clock.
//!
//! The engine is the thin stateful-looking shell around the pure math in
//! [`crate::oscillator`]: it owns a [`Clock`] and nothing else. The clock
//! is read once per batch call and every symbol in the batch is evaluated
//! at that single shared time, so a batch is internally consistent and
//! two batches at equal clock readings are identical.

use crate::oscillator::WaveParameters;
use std::collections::HashMap;
use std::time::Instant;

/// A batch result: each input symbol mapped to its activation.
pub type ActivationField = HashMap<String, f64>;

/// A source of elapsed time in seconds.
///
/// Swapping the clock swaps the time semantics without touching the
/// math: [`MonotonicClock`] for wall-clock demos, [`FixedClock`] for
/// reproducible output in tests and validation harnesses.
pub trait Clock {
    /// Seconds elapsed since the clock's epoch.
    fn elapsed(&self) -> f64;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose epoch is now.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn elapsed(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// A clock frozen at a fixed elapsed time.
///
/// # Examples
///
/// ```
/// use wavefield::{FixedClock, WaveEngine};
///
/// let engine = WaveEngine::with_clock(FixedClock(1.5));
/// let first = engine.activation_field(["mind", "brain"]);
/// let second = engine.activation_field(["mind", "brain"]);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn elapsed(&self) -> f64 {
        self.0
    }
}

/// The symbolic oscillator engine.
///
/// Holds only read-only configuration (its clock), so one engine can be
/// shared across threads and every method takes `&self`. All per-call
/// values are derived on the fly; nothing persists between calls.
///
/// # Examples
///
/// ```
/// use wavefield::WaveEngine;
///
/// let engine = WaveEngine::new();
/// let field = engine.activation_field(["thinking", "mind", "brain"]);
/// assert_eq!(field.len(), 3);
/// ```
pub struct WaveEngine<C: Clock = MonotonicClock> {
    clock: C,
}

impl WaveEngine<MonotonicClock> {
    /// Creates an engine with a wall clock whose epoch is now.
    pub fn new() -> Self {
        Self {
            clock: MonotonicClock::new(),
        }
    }
}

impl Default for WaveEngine<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> WaveEngine<C> {
    /// Creates an engine with a custom clock.
    ///
    /// # Arguments
    ///
    /// * `clock` - Time source read once per batch call
    ///
    /// # Examples
    ///
    /// ```
    /// use wavefield::{FixedClock, WaveEngine};
    ///
    /// let engine = WaveEngine::with_clock(FixedClock(0.25));
    /// let field = engine.activation_field(["mind"]);
    /// assert_eq!(field["mind"], engine.activation("mind", 0.25));
    /// ```
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Instantaneous activation of one symbol at a caller-supplied time.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Text token to evaluate
    /// * `time` - Elapsed time in seconds
    ///
    /// # Returns
    ///
    /// The symbol's oscillator evaluated at `time`
    pub fn activation(&self, symbol: &str, time: f64) -> f64 {
        WaveParameters::derive(symbol).activation(time)
    }

    /// Computes the activation field for a batch of symbols at the
    /// clock's current reading.
    ///
    /// The clock is read once, before iteration, and shared by every
    /// symbol in the batch.
    pub fn activation_field<I, S>(&self, symbols: I) -> ActivationField
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.activation_field_at(symbols, self.clock.elapsed())
    }

    /// Computes the activation field for a batch of symbols at a
    /// caller-supplied time.
    ///
    /// An empty batch yields an empty field. Duplicate symbols collapse
    /// to one entry: later occurrences overwrite earlier ones, which at
    /// a shared time leaves the value unchanged.
    ///
    /// # Arguments
    ///
    /// * `symbols` - Batch of text tokens, evaluated in input order
    /// * `time` - Elapsed time in seconds shared by the whole batch
    pub fn activation_field_at<I, S>(&self, symbols: I, time: f64) -> ActivationField
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut field = ActivationField::new();
        for symbol in symbols {
            let symbol = symbol.as_ref();
            let value = WaveParameters::derive(symbol).activation(time);
            field.insert(symbol.to_owned(), value);
        }
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch_yields_empty_field() {
        let engine = WaveEngine::new();
        let field = engine.activation_field(Vec::<String>::new());
        assert!(field.is_empty());
    }

    #[test]
    fn test_duplicate_symbols_collapse() {
        let engine = WaveEngine::new();
        let field = engine.activation_field(["x", "x"]);
        assert_eq!(field.len(), 1);
        assert!(field.contains_key("x"));
    }

    #[test]
    fn test_batch_shares_one_time() {
        let engine = WaveEngine::with_clock(FixedClock(2.5));
        let field = engine.activation_field(["thinking", "mind", "brain"]);
        for (symbol, value) in &field {
            assert_eq!(*value, engine.activation(symbol, 2.5));
        }
    }

    #[test]
    fn test_fixed_clock_fields_are_reproducible() {
        let engine = WaveEngine::with_clock(FixedClock(1.0));
        assert_eq!(
            engine.activation_field(["a", "b"]),
            engine.activation_field(["a", "b"])
        );
    }

    #[test]
    fn test_field_at_matches_point_evaluation() {
        let engine = WaveEngine::new();
        let field = engine.activation_field_at(["penguins", "cannot"], 0.75);
        assert_eq!(field["penguins"], engine.activation("penguins", 0.75));
        assert_eq!(field["cannot"], engine.activation("cannot", 0.75));
    }

    #[test]
    fn test_accepts_owned_and_borrowed_symbols() {
        let engine = WaveEngine::with_clock(FixedClock(0.0));
        let owned = engine.activation_field(vec!["mind".to_string()]);
        let borrowed = engine.activation_field(["mind"]);
        assert_eq!(owned, borrowed);
    }

    #[test]
    fn test_monotonic_clock_is_non_negative() {
        let clock = MonotonicClock::new();
        assert!(clock.elapsed() >= 0.0);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = WaveEngine::with_clock(FixedClock(0.5));
        let field = std::thread::scope(|scope| {
            scope
                .spawn(|| engine.activation_field(["mind", "brain"]))
                .join()
                .unwrap()
        });
        assert_eq!(field, engine.activation_field(["mind", "brain"]));
    }
}
