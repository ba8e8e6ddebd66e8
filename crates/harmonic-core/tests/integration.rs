//! Integration tests for harmonic-core.
//!
//! These tests run the full pipeline:
//! config → synthesis → statistics → correlation.

use harmonic_core::{
    CorrelationKind, SeededSource, SignalError, SignalStats, SynthesisConfig, Synthesizer,
    analyze_pair, analyze_signal, correlation, deviation, dispersion, generate_signal,
    harmonic_frequencies, mean,
};
use statrs::statistics::Statistics;

fn seeded_signal(seed: u64) -> Vec<f64> {
    Synthesizer::new(SeededSource::new(seed))
        .generate(&SynthesisConfig::default())
        .unwrap()
        .into_vec()
}

#[test]
fn reference_scenario_has_expected_shape() {
    let signal = generate_signal(14, 2000.0, 256).unwrap();
    assert_eq!(signal.len(), 256);

    let w = harmonic_frequencies(14, 2000.0).unwrap();
    assert_eq!(w[0], 2000.0);
    assert!(w[13].abs() < 1e-9, "last harmonic should sit at 0, got {}", w[13]);
}

#[test]
fn statistics_agree_with_statrs_population_estimators() {
    let signal = seeded_signal(0xdeadbeef);

    let expected_mean = signal.iter().mean();
    let expected_var = signal.iter().population_variance();
    let expected_std = signal.iter().population_std_dev();

    assert!((mean(&signal).unwrap() - expected_mean).abs() < 1e-9);
    assert!((dispersion(&signal).unwrap() - expected_var).abs() < 1e-6);
    assert!((deviation(&signal).unwrap() - expected_std).abs() < 1e-9);
}

#[test]
fn dispersion_is_deviation_squared_for_synthesized_signals() {
    for seed in [1, 2, 3, 4, 5] {
        let stats = SignalStats::from_samples(&seeded_signal(seed)).unwrap();
        let rel = (stats.deviation.powi(2) - stats.dispersion).abs() / stats.dispersion;
        assert!(rel < 1e-12, "seed {seed}: relative error {rel}");
    }
}

#[test]
fn autocorrelation_of_synthesized_signal() {
    let signal = seeded_signal(99);
    let auto = correlation(&signal, &signal).unwrap();
    assert_eq!(auto.kind(), CorrelationKind::Auto);
    assert_eq!(auto.len(), signal.len());

    let energy: f64 = signal.iter().map(|x| x * x).sum();
    assert!((auto.values()[0] - energy).abs() < 1e-6 * energy);

    // Lag 0 dominates every other lag (Cauchy-Schwarz).
    assert!(auto.values().iter().all(|v| v.abs() <= auto.values()[0] + 1e-9));
}

#[test]
fn cross_correlation_of_two_signals() {
    let a = seeded_signal(10);
    let b = seeded_signal(20);
    let ab = correlation(&a, &b).unwrap();
    assert_eq!(ab.kind(), CorrelationKind::Cross);
    assert_eq!(ab.len(), 2 * 256 - 1);
    assert_eq!(ab.first_lag(), -255);
    assert_eq!(ab.lags().last(), Some(255));

    let mut ba = correlation(&b, &a).unwrap().into_values();
    ba.reverse();
    for (x, y) in ab.values().iter().zip(&ba) {
        assert!((x - y).abs() < 1e-9);
    }
}

#[test]
fn pair_analysis_report() {
    let a = seeded_signal(3);
    let b = seeded_signal(4);
    let report = analyze_pair(&a, &b).unwrap();
    assert_eq!(report.first, SignalStats::from_samples(&a).unwrap());
    assert_eq!(report.second, SignalStats::from_samples(&b).unwrap());
    assert_eq!(report.correlation.len(), 511);
}

#[test]
fn single_analysis_report_serializes_to_json() {
    let signal = seeded_signal(11);
    let report = analyze_signal(&signal, true).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"kind\":\"auto\""));
}

#[test]
fn seeded_generation_is_deterministic() {
    assert_eq!(seeded_signal(42), seeded_signal(42));
    assert_ne!(seeded_signal(42), seeded_signal(43));
}

#[test]
fn one_harmonic_is_rejected() {
    assert_eq!(
        generate_signal(1, 2000.0, 256),
        Err(SignalError::TooFewHarmonics { harmonics: 1 })
    );
}
