//! Harmonic signal synthesis.
//!
//! A signal is built as a `harmonics × sampling` matrix whose row `h` holds
//! harmonic `h` evaluated at integer sample indices, then reduced by summing
//! each column:
//!
//! ```text
//! step    = W / (harmonics - 1)
//! w(h)    = W - h * step
//! M[h][t] = A * sin(w(h) * t + phi)
//! x(t)    = sum_h M[h][t]
//! ```
//!
//! `A` and `phi` are redrawn from the [`ParameterSource`] for every `(h, t)`
//! cell, not once per harmonic. The result is a sum of per-sample random
//! perturbations rather than a sum of smooth sinusoids.

use std::ops::Deref;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SignalError};
use crate::source::{AMPLITUDE_RANGE, PHASE_RANGE, ParameterSource, ThreadRngSource, UniformRange};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Parameters for one synthesis run.
///
/// Defaults reproduce the reference scenario: 14 harmonics, cutoff 2000,
/// 256 samples, amplitude in `[-5, 5]`, phase in `[0, 360]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    pub harmonics: usize,
    pub cutoff_frequency: f64,
    pub sampling: usize,
    pub amplitude: UniformRange,
    pub phase: UniformRange,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            harmonics: 14,
            cutoff_frequency: 2000.0,
            sampling: 256,
            amplitude: AMPLITUDE_RANGE,
            phase: PHASE_RANGE,
        }
    }
}

impl SynthesisConfig {
    /// Build a validated config with the reference amplitude and phase ranges.
    pub fn new(harmonics: usize, cutoff_frequency: f64, sampling: usize) -> Result<Self> {
        let config = Self {
            harmonics,
            cutoff_frequency,
            sampling,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the structural preconditions. The cutoff frequency is not
    /// checked; a NaN cutoff yields a NaN signal.
    pub fn validate(&self) -> Result<()> {
        if self.harmonics < 2 {
            return Err(SignalError::TooFewHarmonics {
                harmonics: self.harmonics,
            });
        }
        if self.sampling == 0 {
            return Err(SignalError::NoSamples);
        }
        Ok(())
    }

    pub fn frequency_step(&self) -> Result<f64> {
        frequency_step(self.harmonics, self.cutoff_frequency)
    }
}

// ---------------------------------------------------------------------------
// Frequencies
// ---------------------------------------------------------------------------

/// Spacing between neighbouring harmonic frequencies, `W / (harmonics - 1)`.
pub fn frequency_step(harmonics: usize, cutoff_frequency: f64) -> Result<f64> {
    if harmonics < 2 {
        return Err(SignalError::TooFewHarmonics { harmonics });
    }
    Ok(cutoff_frequency / (harmonics - 1) as f64)
}

/// Frequency of harmonic `n`: `W - n * step`.
pub fn next_frequency(n: usize, step: f64, cutoff_frequency: f64) -> f64 {
    cutoff_frequency - n as f64 * step
}

/// All harmonic frequencies, from `W` at `h = 0` down to `0` at the last harmonic.
pub fn harmonic_frequencies(harmonics: usize, cutoff_frequency: f64) -> Result<Vec<f64>> {
    let step = frequency_step(harmonics, cutoff_frequency)?;
    Ok((0..harmonics)
        .map(|h| next_frequency(h, step, cutoff_frequency))
        .collect())
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// A synthesized signal: `sampling` real values, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Signal(Vec<f64>);

impl Signal {
    /// Wrap externally produced samples, e.g. a recorded signal to correlate
    /// against a synthesized one.
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Signal {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Per-harmonic contributions before reduction, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicMatrix {
    harmonics: usize,
    sampling: usize,
    cells: Vec<f64>,
}

impl HarmonicMatrix {
    pub fn harmonics(&self) -> usize {
        self.harmonics
    }

    pub fn sampling(&self) -> usize {
        self.sampling
    }

    /// Contribution of harmonic `h` at every sample index.
    pub fn row(&self, h: usize) -> &[f64] {
        &self.cells[h * self.sampling..(h + 1) * self.sampling]
    }

    pub fn get(&self, h: usize, t: usize) -> Option<f64> {
        if h < self.harmonics && t < self.sampling {
            Some(self.cells[h * self.sampling + t])
        } else {
            None
        }
    }

    /// Sum every column across harmonics into a [`Signal`].
    pub fn reduce(&self) -> Signal {
        let mut samples = vec![0.0; self.sampling];
        for row in self.cells.chunks_exact(self.sampling) {
            for (acc, &cell) in samples.iter_mut().zip(row) {
                *acc += cell;
            }
        }
        Signal(samples)
    }
}

// ---------------------------------------------------------------------------
// Synthesizer
// ---------------------------------------------------------------------------

/// Builds signals from an injected [`ParameterSource`].
#[derive(Debug, Clone)]
pub struct Synthesizer<S> {
    source: S,
}

impl<S: ParameterSource> Synthesizer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Fill the harmonic matrix. For each cell the amplitude is drawn before
    /// the phase.
    pub fn harmonic_matrix(&mut self, config: &SynthesisConfig) -> Result<HarmonicMatrix> {
        config.validate()?;
        let step = config.frequency_step()?;
        let SynthesisConfig {
            harmonics,
            cutoff_frequency,
            sampling,
            amplitude,
            phase,
        } = *config;
        debug!("synthesizing {harmonics} harmonics x {sampling} samples (cutoff {cutoff_frequency}, step {step})");

        let mut cells = Vec::with_capacity(harmonics * sampling);
        for h in 0..harmonics {
            let wp = next_frequency(h, step, cutoff_frequency);
            trace!("harmonic {h}: w = {wp}");
            for t in 0..sampling {
                let a = self.source.amplitude(amplitude);
                let phi = self.source.angle_phi(phase);
                cells.push(a * (wp * t as f64 + phi).sin());
            }
        }

        Ok(HarmonicMatrix {
            harmonics,
            sampling,
            cells,
        })
    }

    /// Synthesize one signal of length `config.sampling`.
    pub fn generate(&mut self, config: &SynthesisConfig) -> Result<Signal> {
        Ok(self.harmonic_matrix(config)?.reduce())
    }
}

/// Synthesize a signal from the unseeded thread RNG with the reference
/// amplitude and phase ranges.
pub fn generate_signal(harmonics: usize, frequency: f64, sampling: usize) -> Result<Signal> {
    let config = SynthesisConfig::new(harmonics, frequency, sampling)?;
    Synthesizer::new(ThreadRngSource::new()).generate(&config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
