//! Population statistics over a sample sequence.
//!
//! All three measures divide by `len(a)`, not `len(a) - 1`: the sequence is
//! the whole synthesized signal, not a sample drawn from a larger population.

use serde::Serialize;

use crate::error::{Result, SignalError};

/// Mean, dispersion and deviation of one signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalStats {
    /// Arithmetic mean (Mx).
    pub mean: f64,
    /// Population variance (Dx).
    pub dispersion: f64,
    /// Standard deviation (sigma).
    pub deviation: f64,
}

impl SignalStats {
    /// Compute the full triple in one pass over the mean.
    pub fn from_samples(a: &[f64]) -> Result<Self> {
        let mean = mean(a)?;
        let dispersion = squared_deviation_sum(a, mean) / a.len() as f64;
        Ok(Self {
            mean,
            dispersion,
            deviation: dispersion.sqrt(),
        })
    }
}

impl std::fmt::Display for SignalStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mx = {}", self.mean)?;
        writeln!(f, "Dx = {}", self.dispersion)?;
        write!(f, "σ  = {}", self.deviation)
    }
}

/// Arithmetic mean, `sum(a) / len(a)`.
pub fn mean(a: &[f64]) -> Result<f64> {
    if a.is_empty() {
        return Err(SignalError::EmptySeries);
    }
    Ok(a.iter().sum::<f64>() / a.len() as f64)
}

/// Population variance: average squared deviation from the mean.
pub fn dispersion(a: &[f64]) -> Result<f64> {
    let mx = mean(a)?;
    Ok(squared_deviation_sum(a, mx) / a.len() as f64)
}

/// Standard deviation, `sqrt(dispersion(a))`.
pub fn deviation(a: &[f64]) -> Result<f64> {
    dispersion(a).map(f64::sqrt)
}

fn squared_deviation_sum(a: &[f64], mean: f64) -> f64 {
    a.iter().map(|&x| (x - mean).powi(2)).sum()
}
