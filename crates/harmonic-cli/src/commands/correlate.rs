use harmonic_core::{PairAnalysis, Signal, SynthesisConfig, Synthesizer, analyze_pair};
use serde::Serialize;

use crate::SynthesisArgs;

#[derive(Serialize)]
struct CorrelateReport<'a> {
    config: &'a SynthesisConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    signals: [&'a Signal; 2],
    analysis: &'a PairAnalysis,
}

/// Two signals drawn back to back from one source, then cross-correlated.
pub fn run(synthesis: &SynthesisArgs, output_path: Option<&str>) -> Result<(), String> {
    let config = super::build_config(synthesis)?;
    let mut synth = Synthesizer::new(super::make_source(synthesis.seed));
    let first = synth.generate(&config).map_err(|e| e.to_string())?;
    let second = synth.generate(&config).map_err(|e| e.to_string())?;
    let analysis = analyze_pair(&first, &second).map_err(|e| e.to_string())?;

    println!(
        "Two random signals: {} harmonics, cutoff {}, {} samples each",
        config.harmonics, config.cutoff_frequency, config.sampling
    );
    for (label, stats) in [("x(t)", &analysis.first), ("y(t)", &analysis.second)] {
        println!();
        println!("  ┌─ {label}");
        for line in stats.to_string().lines() {
            println!("  │ {line}");
        }
        println!("  └─");
    }
    println!(
        "\n  {}",
        super::describe_correlation(&analysis.correlation)
    );

    if let Some(path) = output_path {
        let report = CorrelateReport {
            config: &config,
            seed: synthesis.seed,
            signals: [&first, &second],
            analysis: &analysis,
        };
        super::write_json(path, &report)?;
    }
    Ok(())
}
