pub mod circular_buffer;
pub mod config;
pub mod error;
pub mod float;
pub mod pitch_shift;
pub mod wav;

pub use config::ShiftConfig;
pub use error::{Error, Result};
pub use pitch_shift::{pitch_shift, pitch_shifter};

/// Root mean square of `buf`, zero for an empty buffer.
pub fn power<T: float::Float + std::iter::Sum>(buf: &[T]) -> T {
    if buf.is_empty() {
        return T::zero();
    }
    let len = T::from_usize(buf.len()).unwrap_or_else(T::one);
    (buf.iter().map(|&x| x.powi(2)).sum::<T>() / len).sqrt()
}

/// Reads `config.input`, shifts it by `config.factor` and writes the result
/// to `config.output` at the source sample rate. Returns the sample count.
pub fn run(config: &ShiftConfig) -> Result<usize> {
    let (input, sample_rate) = wav::read_file(&config.input)?;
    log::info!(
        "read {} samples at {} Hz from {}, rms {:.4}",
        input.len(),
        sample_rate,
        config.input.display(),
        power(&input)
    );

    let start = std::time::Instant::now();
    let output = pitch_shift(&input, config.factor, sample_rate as f64)?;
    log::info!(
        "shifted by {} in {:?}, rms {:.4}",
        config.factor,
        start.elapsed(),
        power(&output)
    );

    wav::write_file(&config.output, &output, sample_rate)?;
    log::info!("wrote {}", config.output.display());

    Ok(output.len())
}
