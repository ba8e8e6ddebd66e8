use harmonic_core::{frequency_step, harmonic_frequencies};

pub fn run(harmonics: usize, cutoff: f64) -> Result<(), String> {
    let step = frequency_step(harmonics, cutoff).map_err(|e| e.to_string())?;
    let frequencies = harmonic_frequencies(harmonics, cutoff).map_err(|e| e.to_string())?;

    println!("{harmonics} harmonics, cutoff {cutoff}, step {step}\n");
    println!("  {:>4}  {:>14}", "h", "w(h)");
    for (h, w) in frequencies.iter().enumerate() {
        println!("  {h:>4}  {w:>14.6}");
    }
    Ok(())
}
