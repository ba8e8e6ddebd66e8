use harmonic_core::{SignalAnalysis, SynthesisConfig, Synthesizer, analyze_signal};
use serde::Serialize;

use crate::SynthesisArgs;

pub struct GenerateCommandConfig<'a> {
    pub synthesis: &'a SynthesisArgs,
    pub autocorrelation: bool,
    pub print_samples: bool,
    pub output_path: Option<&'a str>,
}

#[derive(Serialize)]
struct GenerateReport<'a> {
    config: &'a SynthesisConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    signal: &'a [f64],
    analysis: &'a SignalAnalysis,
}

pub fn run(cfg: GenerateCommandConfig<'_>) -> Result<(), String> {
    let config = super::build_config(cfg.synthesis)?;
    let mut synth = Synthesizer::new(super::make_source(cfg.synthesis.seed));
    let signal = synth.generate(&config).map_err(|e| e.to_string())?;
    let analysis = analyze_signal(&signal, cfg.autocorrelation).map_err(|e| e.to_string())?;

    println!(
        "Random signal: {} harmonics, cutoff {}, {} samples\n",
        config.harmonics, config.cutoff_frequency, config.sampling
    );
    println!("  ┌─ Statistics");
    for line in analysis.stats.to_string().lines() {
        println!("  │ {line}");
    }
    if let Some(auto) = &analysis.autocorrelation {
        println!("  │ {}", super::describe_correlation(auto));
    }
    println!("  └─");

    if cfg.print_samples {
        println!();
        for (t, x) in signal.iter().enumerate() {
            println!("  {t:>6}  {x:>12.6}");
        }
    }

    if let Some(path) = cfg.output_path {
        let report = GenerateReport {
            config: &config,
            seed: cfg.synthesis.seed,
            signal: &signal,
            analysis: &analysis,
        };
        super::write_json(path, &report)?;
    }
    Ok(())
}
