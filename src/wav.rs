//! Mono 16-bit PCM WAV decoding and encoding.

use std::{fs, io::Cursor, path::Path};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{Error, Result};

/// Full-scale value of a 16-bit sample.
const SCALE: f64 = 32768.0;

/// Decodes mono 16-bit integer PCM WAV bytes into normalized samples and the
/// sample rate in Hz.
pub fn decode(bytes: &[u8]) -> Result<(Vec<f64>, u32)> {
    let reader = WavReader::new(bytes).map_err(format_error)?;
    let spec = reader.spec();

    match spec {
        WavSpec {
            channels: 1,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
            ..
        } => {}
        WavSpec { channels, .. } if channels != 1 => {
            return Err(Error::Format(format!(
                "expected a mono file, got {} channels",
                channels
            )))
        }
        WavSpec {
            bits_per_sample,
            sample_format,
            ..
        } => {
            return Err(Error::Format(format!(
                "expected 16-bit integer samples, got {}-bit {:?}",
                bits_per_sample, sample_format
            )))
        }
    }

    if spec.sample_rate == 0 {
        return Err(Error::Format("header declares a sample rate of 0 Hz".to_string()));
    }

    let signal = reader
        .into_samples::<i16>()
        .map(|x| x.map(to_sample))
        .collect::<Result<Vec<_>, _>>()
        .map_err(format_error)?;

    log::debug!("decoded {} samples at {} Hz", signal.len(), spec.sample_rate);

    Ok((signal, spec.sample_rate))
}

/// Encodes normalized samples as a mono 16-bit PCM WAV.
///
/// Samples are truncated toward zero. Values outside [-1, 1) do not fit in
/// 16 bits and wrap around; they are counted and reported, not clamped.
pub fn encode(signal: &[f64], sample_rate: u32) -> Result<Vec<u8>> {
    if sample_rate == 0 {
        return Err(Error::InvalidArgument(
            "sample rate must be positive, got 0".to_string(),
        ));
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut cursor, spec)?;
    let mut wrapped = 0;
    for &x in signal {
        if !fits(x) {
            wrapped += 1;
        }
        writer.write_sample(from_sample(x))?;
    }
    writer.finalize()?;

    if wrapped > 0 {
        log::warn!(
            "{} of {} samples out of 16-bit range, wrapped",
            wrapped,
            signal.len()
        );
    }

    Ok(cursor.into_inner())
}

pub fn read_file(path: impl AsRef<Path>) -> Result<(Vec<f64>, u32)> {
    let bytes = fs::read(path)?;
    decode(&bytes)
}

pub fn write_file(path: impl AsRef<Path>, signal: &[f64], sample_rate: u32) -> Result<()> {
    let bytes = encode(signal, sample_rate)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// 16-bit integer to normalized sample.
pub fn to_sample(x: i16) -> f64 {
    x as f64 / SCALE
}

/// Normalized sample to 16-bit integer, truncating toward zero.
pub fn from_sample(x: f64) -> i16 {
    (x * SCALE) as i64 as i16
}

fn fits(x: f64) -> bool {
    let v = (x * SCALE) as i64;
    i16::MIN as i64 <= v && v <= i16::MAX as i64
}

// Errors while parsing in-memory bytes come from the container, not the OS.
fn format_error(err: hound::Error) -> Error {
    Error::Format(err.to_string())
}
