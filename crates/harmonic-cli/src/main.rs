//! CLI for harmonic-core — random harmonic signals, their statistics and correlations.

mod commands;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "harmonic")]
#[command(about = "harmonic — synthesize random harmonic signals and inspect their statistics")]
#[command(version = harmonic_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Synthesis parameters shared by every signal-producing command.
#[derive(Args, Debug, Default, Clone)]
pub struct SynthesisArgs {
    /// Number of harmonics (at least 2). Default: 14
    #[arg(long)]
    harmonics: Option<usize>,

    /// Cutoff (maximum harmonic) frequency. Default: 2000
    #[arg(long)]
    cutoff: Option<f64>,

    /// Number of samples per signal. Default: 256
    #[arg(long)]
    sampling: Option<usize>,

    /// Seed the parameter source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Load synthesis parameters from a JSON file; explicit flags override it
    #[arg(long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize one signal and report Mx, Dx and sigma
    Generate {
        #[command(flatten)]
        synthesis: SynthesisArgs,

        /// Also compute the one-sided autocorrelation
        #[arg(long)]
        autocorrelation: bool,

        /// Print every sample value
        #[arg(long)]
        print_samples: bool,

        /// Write the signal and its analysis as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Synthesize two independent signals and cross-correlate them
    Correlate {
        #[command(flatten)]
        synthesis: SynthesisArgs,

        /// Write both signals and the correlation as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// List the harmonic frequencies w(h) for a harmonic count and cutoff
    Frequencies {
        /// Number of harmonics (at least 2)
        #[arg(long, default_value = "14")]
        harmonics: usize,

        /// Cutoff (maximum harmonic) frequency
        #[arg(long, default_value = "2000")]
        cutoff: f64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            synthesis,
            autocorrelation,
            print_samples,
            output,
        } => commands::generate::run(commands::generate::GenerateCommandConfig {
            synthesis: &synthesis,
            autocorrelation,
            print_samples,
            output_path: output.as_deref(),
        }),
        Commands::Correlate { synthesis, output } => {
            commands::correlate::run(&synthesis, output.as_deref())
        }
        Commands::Frequencies { harmonics, cutoff } => {
            commands::frequencies::run(harmonics, cutoff)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
