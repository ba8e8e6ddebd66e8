//! Signal reports: statistics with correlation as an optional downstream step.

use serde::Serialize;

use crate::correlation::{Correlation, autocorrelation, correlation};
use crate::error::Result;
use crate::stats::SignalStats;

/// Statistics of one signal, plus its autocorrelation when requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalAnalysis {
    pub sample_size: usize,
    pub stats: SignalStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocorrelation: Option<Correlation>,
}

/// Statistics of two signals and the correlation between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairAnalysis {
    pub first: SignalStats,
    pub second: SignalStats,
    /// Two-sided unless both signals hold identical values.
    pub correlation: Correlation,
}

pub fn analyze_signal(signal: &[f64], with_autocorrelation: bool) -> Result<SignalAnalysis> {
    let stats = SignalStats::from_samples(signal)?;
    let autocorrelation = if with_autocorrelation {
        Some(autocorrelation(signal)?)
    } else {
        None
    };
    Ok(SignalAnalysis {
        sample_size: signal.len(),
        stats,
        autocorrelation,
    })
}

pub fn analyze_pair(first: &[f64], second: &[f64]) -> Result<PairAnalysis> {
    Ok(PairAnalysis {
        first: SignalStats::from_samples(first)?,
        second: SignalStats::from_samples(second)?,
        correlation: correlation(first, second)?,
    })
}
