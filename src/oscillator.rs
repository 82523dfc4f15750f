//! Wave parameters - the oscillator a symbol denotes.
//!
//! Each symbol deterministically owns one sine oscillator. The mapping
//! from symbol content to (frequency, amplitude, phase) is fixed by the
//! hash contract in [`crate::hash`] plus the modulus formulas below, so
//! independently written engines agree on every parameter.

use crate::hash::symbol_hash;
use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The oscillator parameters derived from one symbol.
///
/// Ranges are fixed by construction:
/// - `frequency` in `[1.0, 2.0)` Hz
/// - `amplitude` in `[0.5, 1.0)`
/// - `phase` in `[0.0, 6.28)` radians
///
/// The phase bound is the literal `628 / 100`, kept slightly short of 2π
/// so that every implementation computes the identical constant.
///
/// # Examples
///
/// ```
/// use wavefield::WaveParameters;
///
/// let params = WaveParameters::derive("mind");
/// assert_eq!(params.amplitude, 0.7); // 0.5 + (4 % 10) / 20.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaveParameters {
    /// Oscillation frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Phase offset in radians.
    pub phase: f64,
}

impl WaveParameters {
    /// Derives the oscillator parameters for a symbol.
    ///
    /// Frequency and phase come from the symbol's hash, amplitude from
    /// its length. Length is counted in UTF-8 bytes, the same unit the
    /// hash iterates over, so non-ASCII symbols stay in cross-engine
    /// parity. Integer modulus is applied before float conversion.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Text token to derive parameters for
    ///
    /// # Examples
    ///
    /// ```
    /// use wavefield::WaveParameters;
    ///
    /// let a = WaveParameters::derive("thinking");
    /// let b = WaveParameters::derive("thinking");
    /// assert_eq!(a, b);
    /// ```
    pub fn derive(symbol: &str) -> Self {
        let hash = symbol_hash(symbol);
        Self {
            frequency: 1.0 + (hash % 100) as f64 / 100.0,
            amplitude: 0.5 + (symbol.len() % 10) as f64 / 20.0,
            phase: (hash % 628) as f64 / 100.0,
        }
    }

    /// Evaluates the oscillator at a point in time.
    ///
    /// # Arguments
    ///
    /// * `time` - Elapsed time in seconds
    ///
    /// # Returns
    ///
    /// `amplitude * sin(2π * frequency * time + phase)`, bounded by
    /// `amplitude` in absolute value
    pub fn activation(&self, time: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * time + self.phase).sin()
    }
}
