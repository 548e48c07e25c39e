//! Driver configuration.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Factor used when none is given. Lowers the pitch.
pub const DEFAULT_FACTOR: f64 = 1.25;

/// What to shift, where to write it and by how much.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftConfig {
    /// Source WAV file (mono, 16-bit)
    pub input: PathBuf,
    /// Destination WAV file, written at the source sample rate
    pub output: PathBuf,
    /// Pitch shift factor (default: 1.25)
    /// > 1 lowers the pitch, < 1 raises it
    pub factor: f64,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        let input = PathBuf::from("input.wav");
        Self {
            output: shifted_path(&input),
            input,
            factor: DEFAULT_FACTOR,
        }
    }
}

impl ShiftConfig {
    /// Parses `<input> [output] [factor]`, program name already stripped.
    ///
    /// Missing values fall back to the defaults; a missing output is derived
    /// from the input path.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut config = Self::default();

        if let Some(input) = args.next() {
            config.input = PathBuf::from(input);
            config.output = shifted_path(&config.input);
        }
        if let Some(output) = args.next() {
            config.output = PathBuf::from(output);
        }
        if let Some(factor) = args.next() {
            config.factor = factor.parse().map_err(|_| {
                Error::InvalidArgument(format!("factor is not a number: {:?}", factor))
            })?;
        }
        if let Some(extra) = args.next() {
            return Err(Error::InvalidArgument(format!(
                "unexpected argument: {:?}",
                extra
            )));
        }

        Ok(config)
    }
}

/// `dir/name.wav` -> `dir/name_shifted.wav`
pub fn shifted_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "wav".to_string());
    input.with_file_name(format!("{}_shifted.{}", stem, ext))
}
