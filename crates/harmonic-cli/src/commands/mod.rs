pub mod correlate;
pub mod frequencies;
pub mod generate;

use harmonic_core::{ParameterSource, SeededSource, SynthesisConfig, ThreadRngSource};
use serde::Serialize;

use crate::SynthesisArgs;

/// Resolve synthesis parameters: defaults, then the `--config` file, then
/// explicit flags.
pub fn build_config(args: &SynthesisArgs) -> Result<SynthesisConfig, String> {
    let mut config = match args.config.as_deref() {
        Some(path) => load_config(path)?,
        None => SynthesisConfig::default(),
    };
    if let Some(harmonics) = args.harmonics {
        config.harmonics = harmonics;
    }
    if let Some(cutoff) = args.cutoff {
        config.cutoff_frequency = cutoff;
    }
    if let Some(sampling) = args.sampling {
        config.sampling = sampling;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

pub fn load_config(path: &str) -> Result<SynthesisConfig, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read config {path}: {e}"))?;
    let config: SynthesisConfig =
        serde_json::from_str(&text).map_err(|e| format!("invalid config {path}: {e}"))?;
    log::debug!("loaded synthesis config from {path}: {config:?}");
    Ok(config)
}

/// Seeded source when a seed is given, otherwise the unseeded thread RNG.
pub fn make_source(seed: Option<u64>) -> Box<dyn ParameterSource> {
    match seed {
        Some(seed) => {
            log::info!("using seeded parameter source (seed {seed})");
            Box::new(SeededSource::new(seed))
        }
        None => Box::new(ThreadRngSource::new()),
    }
}

pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("failed to encode JSON: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("failed to write {path}: {e}"))?;
    println!("\nResults written to {path}");
    Ok(())
}

/// Compact one-line summary of a correlation sequence.
pub fn describe_correlation(c: &harmonic_core::Correlation) -> String {
    let lags: Vec<isize> = c.lags().collect();
    let span = match (lags.first(), lags.last()) {
        (Some(first), Some(last)) => format!("tau {first}..={last}"),
        _ => "empty".to_string(),
    };
    match c.peak() {
        Some((lag, value)) => format!("{} ({span}), peak {value:.4} at tau = {lag}", c.kind()),
        None => format!("{} ({span})", c.kind()),
    }
}
