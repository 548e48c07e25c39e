//! delay-shift: pitch shifts a mono 16-bit WAV file.
//!
//! Usage: `delay-shift [input.wav] [output.wav] [factor]`
//!
//! Logging is controlled with `RUST_LOG` (default `info`).

use anyhow::Context;
use delay_shift::ShiftConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShiftConfig::from_args(std::env::args().skip(1))
        .context("usage: delay-shift [input.wav] [output.wav] [factor]")?;

    delay_shift::run(&config).with_context(|| {
        format!(
            "failed to shift {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    Ok(())
}
