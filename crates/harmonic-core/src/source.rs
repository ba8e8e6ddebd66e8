//! Random parameter sources for harmonic synthesis.
//!
//! Every random value the synthesizer consumes is drawn through the
//! [`ParameterSource`] trait. The trait has a single required capability,
//! "draw uniform in `[lower, upper]`", with the amplitude and phase draws
//! layered on top as provided methods.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SignalError};

/// Reference amplitude range for each harmonic cell.
pub const AMPLITUDE_RANGE: UniformRange = UniformRange::from_trusted(-5.0, 5.0);

/// Reference phase range. Drawn in `[0, 360]` and fed to `sin` as-is, with no
/// degree to radian conversion.
pub const PHASE_RANGE: UniformRange = UniformRange::from_trusted(0.0, 360.0);

/// A closed interval `[lower, upper]` with finite bounds and `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct UniformRange {
    lower: f64,
    upper: f64,
}

impl UniformRange {
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(SignalError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    const fn from_trusted(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}

#[derive(Deserialize)]
struct RangeBounds {
    lower: f64,
    upper: f64,
}

impl TryFrom<RangeBounds> for UniformRange {
    type Error = SignalError;

    fn try_from(bounds: RangeBounds) -> Result<Self> {
        Self::new(bounds.lower, bounds.upper)
    }
}

/// Supplies uniformly distributed harmonic parameters.
///
/// Implementations only need [`uniform`](ParameterSource::uniform). Draws are
/// independent of one another; no correlation between successive calls is
/// expected or required.
pub trait ParameterSource {
    /// Draw a value uniformly distributed in `[range.lower(), range.upper()]`.
    fn uniform(&mut self, range: UniformRange) -> f64;

    /// Random amplitude for one harmonic cell.
    fn amplitude(&mut self, range: UniformRange) -> f64 {
        self.uniform(range)
    }

    /// Random phase for one harmonic cell.
    fn angle_phi(&mut self, range: UniformRange) -> f64 {
        self.uniform(range)
    }
}

impl<S: ParameterSource + ?Sized> ParameterSource for &mut S {
    fn uniform(&mut self, range: UniformRange) -> f64 {
        (**self).uniform(range)
    }

    fn amplitude(&mut self, range: UniformRange) -> f64 {
        (**self).amplitude(range)
    }

    fn angle_phi(&mut self, range: UniformRange) -> f64 {
        (**self).angle_phi(range)
    }
}

impl<S: ParameterSource + ?Sized> ParameterSource for Box<S> {
    fn uniform(&mut self, range: UniformRange) -> f64 {
        (**self).uniform(range)
    }

    fn amplitude(&mut self, range: UniformRange) -> f64 {
        (**self).amplitude(range)
    }

    fn angle_phi(&mut self, range: UniformRange) -> f64 {
        (**self).angle_phi(range)
    }
}

/// Unseeded, process-wide thread RNG. Runs are not reproducible.
#[derive(Debug, Clone, Default)]
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl ParameterSource for ThreadRngSource {
    fn uniform(&mut self, range: UniformRange) -> f64 {
        self.rng.random_range(range.lower..=range.upper)
    }
}

/// Deterministic source: the same seed always yields the same draws.
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ParameterSource for SeededSource {
    fn uniform(&mut self, range: UniformRange) -> f64 {
        self.rng.random_range(range.lower..=range.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert_eq!(
            UniformRange::new(5.0, -5.0),
            Err(SignalError::InvalidRange {
                lower: 5.0,
                upper: -5.0
            })
        );
    }

    #[test]
    fn test_range_rejects_non_finite_bounds() {
        assert!(UniformRange::new(f64::NAN, 1.0).is_err());
        assert!(UniformRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_degenerate_range_is_allowed() {
        let range = UniformRange::new(3.0, 3.0).unwrap();
        let mut source = SeededSource::new(7);
        assert_eq!(source.uniform(range), 3.0);
    }

    #[test]
    fn test_reference_ranges() {
        assert_eq!(AMPLITUDE_RANGE.lower(), -5.0);
        assert_eq!(AMPLITUDE_RANGE.upper(), 5.0);
        assert_eq!(PHASE_RANGE.lower(), 0.0);
        assert_eq!(PHASE_RANGE.upper(), 360.0);
    }

    #[test]
    fn test_thread_rng_draws_stay_in_range() {
        let mut source = ThreadRngSource::new();
        for _ in 0..10_000 {
            assert!(AMPLITUDE_RANGE.contains(source.amplitude(AMPLITUDE_RANGE)));
            assert!(PHASE_RANGE.contains(source.angle_phi(PHASE_RANGE)));
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = SeededSource::new(0xdeadbeef);
        let mut b = SeededSource::new(0xdeadbeef);
        for _ in 0..100 {
            assert_eq!(a.amplitude(AMPLITUDE_RANGE), b.amplitude(AMPLITUDE_RANGE));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededSource::new(1);
        let mut b = SeededSource::new(2);
        let xs: Vec<f64> = (0..16).map(|_| a.angle_phi(PHASE_RANGE)).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.angle_phi(PHASE_RANGE)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_uniform_draws_center_on_midpoint() {
        let mut source = SeededSource::new(42);
        let n = 20_000;
        let sum: f64 = (0..n).map(|_| source.amplitude(AMPLITUDE_RANGE)).sum();
        // Uniform on [-5, 5] has mean 0 and std 10/sqrt(12); the sample mean
        // of 20k draws sits well within 0.1 of zero.
        assert!((sum / n as f64).abs() < 0.1);
    }

    #[test]
    fn test_range_deserialize_validates() {
        let ok: UniformRange = serde_json::from_str(r#"{"lower":-1.0,"upper":1.0}"#).unwrap();
        assert_eq!(ok, UniformRange::new(-1.0, 1.0).unwrap());
        let bad: std::result::Result<UniformRange, _> =
            serde_json::from_str(r#"{"lower":1.0,"upper":-1.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<S: ParameterSource>(mut source: S) -> f64 {
            source.amplitude(AMPLITUDE_RANGE)
        }
        let mut a = SeededSource::new(9);
        let mut b = SeededSource::new(9);
        assert_eq!(draw(&mut a), b.amplitude(AMPLITUDE_RANGE));
    }
}
