//! # harmonic-core
//!
//! **Random band-limited signals, built one harmonic at a time.**
//!
//! `harmonic-core` synthesizes a pseudo-random time-domain signal as a sum of
//! sinusoidal harmonics with randomized amplitude and phase, then describes it
//! with population statistics and raw (unnormalized) correlation sums.
//!
//! ## Quick Start
//!
//! ```no_run
//! use harmonic_core::{SynthesisConfig, Synthesizer, ThreadRngSource, correlation};
//!
//! // Reference scenario: 14 harmonics, cutoff 2000, 256 samples
//! let config = SynthesisConfig::default();
//! let mut synth = Synthesizer::new(ThreadRngSource::new());
//! let signal = synth.generate(&config).unwrap();
//!
//! let stats = harmonic_core::SignalStats::from_samples(&signal).unwrap();
//! println!("Mx = {}, Dx = {}, sigma = {}", stats.mean, stats.dispersion, stats.deviation);
//!
//! // Identical inputs take the one-sided autocorrelation branch
//! let auto = correlation(&signal, &signal).unwrap();
//! assert_eq!(auto.len(), signal.len());
//! ```
//!
//! ## Architecture
//!
//! ParameterSource → Synthesizer (harmonics × sampling matrix → column sums)
//! → Signal → Statistics / Correlator
//!
//! Every random draw goes through the [`ParameterSource`] trait, so the same
//! synthesis code runs against the unseeded thread RNG, a seeded
//! [`SeededSource`], or a scripted source in tests.

pub mod analysis;
pub mod correlation;
pub mod error;
pub mod source;
pub mod stats;
pub mod synth;

pub use analysis::{PairAnalysis, SignalAnalysis, analyze_pair, analyze_signal};
pub use correlation::{
    Correlation, CorrelationKind, autocorrelation, correlate_full, correlation, cross_correlation,
};
pub use error::{Result, SignalError};
pub use source::{
    AMPLITUDE_RANGE, PHASE_RANGE, ParameterSource, SeededSource, ThreadRngSource, UniformRange,
};
pub use stats::{SignalStats, deviation, dispersion, mean};
pub use synth::{
    HarmonicMatrix, Signal, SynthesisConfig, Synthesizer, frequency_step, generate_signal,
    harmonic_frequencies, next_frequency,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
