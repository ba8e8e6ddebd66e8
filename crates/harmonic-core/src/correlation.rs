//! Raw discrete correlation of one or two signals.
//!
//! The full correlation of `a1` against `a2` covers every lag
//! `tau` in `[-(len(a2) - 1), len(a1) - 1]`:
//!
//! ```text
//! c(tau) = sum_n a1[n + tau] * a2[n]      (over the valid overlap)
//! ```
//!
//! Sums are never normalized by length or variance.

use log::debug;
use serde::Serialize;

use crate::error::{Result, SignalError};

/// Which half of the lag axis a [`Correlation`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationKind {
    /// One-sided, lags `0..len`.
    Auto,
    /// Two-sided, lags `-(len(a2) - 1)..=len(a1) - 1`.
    Cross,
}

impl std::fmt::Display for CorrelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "autocorrelation"),
            Self::Cross => write!(f, "cross-correlation"),
        }
    }
}

/// Correlation values indexed by lag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Correlation {
    kind: CorrelationKind,
    /// Lag of `values[0]`.
    first_lag: isize,
    values: Vec<f64>,
}

impl Correlation {
    pub fn kind(&self) -> CorrelationKind {
        self.kind
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first_lag(&self) -> isize {
        self.first_lag
    }

    /// Lag axis matching [`values`](Self::values) element for element.
    pub fn lags(&self) -> impl Iterator<Item = isize> + use<> {
        let first = self.first_lag;
        (0..self.values.len() as isize).map(move |i| first + i)
    }

    pub fn at_lag(&self, lag: isize) -> Option<f64> {
        let index = usize::try_from(lag - self.first_lag).ok()?;
        self.values.get(index).copied()
    }

    /// Lag and value of the largest absolute correlation.
    pub fn peak(&self) -> Option<(isize, f64)> {
        self.lags()
            .zip(self.values.iter().copied())
            .fold(None, |best, (lag, v)| match best {
                Some((_, b)) if f64::abs(b) >= v.abs() => best,
                _ => Some((lag, v)),
            })
    }
}

/// Full two-sided correlation, `len(a1) + len(a2) - 1` values starting at
/// lag `-(len(a2) - 1)`.
pub fn correlate_full(a1: &[f64], a2: &[f64]) -> Result<Vec<f64>> {
    if a1.is_empty() || a2.is_empty() {
        return Err(SignalError::EmptySeries);
    }
    let (n, m) = (a1.len(), a2.len());
    let out_len = n + m - 1;
    let mut out = Vec::with_capacity(out_len);

    for i in 0..out_len {
        // Output index i is lag i - (m - 1); a1 is indexed at k + lag.
        let k_lo = (m - 1).saturating_sub(i);
        let k_hi = m.min(out_len - i);
        let sum: f64 = (k_lo..k_hi).map(|k| a1[k + i + 1 - m] * a2[k]).sum();
        out.push(sum);
    }
    Ok(out)
}

/// One-sided autocorrelation: the non-negative-lag half of
/// `correlate_full(a, a)`. `values[0]` is the lag-0 energy `sum(a[i]^2)`.
pub fn autocorrelation(a: &[f64]) -> Result<Correlation> {
    let full = correlate_full(a, a)?;
    let values = full[a.len() - 1..].to_vec();
    debug!("autocorrelation over {} samples", a.len());
    Ok(Correlation {
        kind: CorrelationKind::Auto,
        first_lag: 0,
        values,
    })
}

/// Two-sided cross-correlation over the whole overlap range.
pub fn cross_correlation(a1: &[f64], a2: &[f64]) -> Result<Correlation> {
    let values = correlate_full(a1, a2)?;
    debug!(
        "cross-correlation {} x {} samples -> {} lags",
        a1.len(),
        a2.len(),
        values.len()
    );
    Ok(Correlation {
        kind: CorrelationKind::Cross,
        first_lag: -(a2.len() as isize - 1),
        values,
    })
}

/// Correlate two signals, branching on value equality: identical inputs
/// yield the one-sided autocorrelation, anything else the two-sided
/// cross-correlation.
pub fn correlation(a1: &[f64], a2: &[f64]) -> Result<Correlation> {
    if a1 == a2 {
        autocorrelation(a1)
    } else {
        cross_correlation(a1, a2)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
