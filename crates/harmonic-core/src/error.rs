//! Precondition failures surfaced by the core.
//!
//! Every operation is total over valid inputs, so the only errors are
//! invalid arguments caught at the boundary. Arithmetic oddities such as NaN
//! are not errors and flow through the computation unchanged.

/// Invalid-argument conditions reported by synthesis, statistics and correlation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SignalError {
    /// The frequency step divides by `harmonics - 1`.
    #[error("at least 2 harmonics are required, got {harmonics}")]
    TooFewHarmonics { harmonics: usize },
    #[error("sampling must be at least 1")]
    NoSamples,
    #[error("statistics and correlation are undefined on an empty series")]
    EmptySeries,
    #[error("invalid uniform range [{lower}, {upper}]")]
    InvalidRange { lower: f64, upper: f64 },
}

pub type Result<T> = std::result::Result<T, SignalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            SignalError::TooFewHarmonics { harmonics: 1 }.to_string(),
            "at least 2 harmonics are required, got 1"
        );
        assert_eq!(
            SignalError::InvalidRange {
                lower: 5.0,
                upper: -5.0
            }
            .to_string(),
            "invalid uniform range [5, -5]"
        );
    }
}
