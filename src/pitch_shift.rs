//! Delay-line pitch shifter.
//!
//! Input samples are blended into a short circular buffer at the source rate
//! while a second cursor reads it back at a rate scaled by the shift factor.
//! The read cursor drifts relative to the write cursor and wraps around the
//! window, which changes the perceived pitch without changing the duration.

use crate::{
    circular_buffer::CircularBuffer,
    error::{Error, Result},
    float::Float,
};

/// Number of slots in the delay line.
pub const BUFFER_LEN: usize = 256;

/// Shifts the pitch of `input` by `factor` (`> 1` lowers, `< 1` raises).
///
/// The output has the same length as the input. `factor` must be positive
/// and `sample_rate` positive and finite, otherwise nothing is processed and
/// [`Error::InvalidArgument`] is returned. An infinite factor freezes the read
/// cursor on slot 0.
///
/// Read positions are computed in `T`. With `f32` the sample counter loses
/// precision past 2^24 samples (about 6.3 minutes at 44.1 kHz) and the read
/// sequence drifts from the `f64` one; use `f64` for bit-exact output.
pub fn pitch_shift<T: Float>(input: &[T], factor: T, sample_rate: T) -> Result<Vec<T>> {
    let mut shift = pitch_shifter(factor, sample_rate)?;

    log::debug!(
        "pitch shifting {} samples by {:?} at {:?} Hz",
        input.len(),
        factor,
        sample_rate
    );

    Ok(input.iter().map(|&x| shift(x)).collect())
}

/// Per-sample form of [`pitch_shift`].
///
/// The returned closure owns a fresh delay line and a sample counter. Feeding
/// it the input one sample at a time, in order, reproduces `pitch_shift`.
pub fn pitch_shifter<T: Float>(factor: T, sample_rate: T) -> Result<impl FnMut(T) -> T> {
    if !(factor > T::zero()) {
        return Err(Error::InvalidArgument(format!(
            "pitch shift factor must be positive, got {:?}",
            factor
        )));
    }
    if !(sample_rate > T::zero() && sample_rate.is_finite()) {
        return Err(Error::InvalidArgument(format!(
            "sample rate must be positive and finite, got {:?}",
            sample_rate
        )));
    }

    let write_period = T::one() / sample_rate;
    let read_period = write_period * factor;
    let mut buffer = CircularBuffer::<T>::new(BUFFER_LEN);
    let mut i = 0;

    Ok(move |sample: T| {
        buffer.write_blend(sample);
        let out = buffer.read(read_index(i, write_period, read_period, BUFFER_LEN));
        i += 1;
        out
    })
}

/// Read cursor position for output sample `i`.
///
/// Elapsed time at the write rate divided by the read period, wrapped to the
/// buffer length and truncated. Positions between slots are not interpolated.
/// Exact for `i` below 2^24 with `f32`, below 2^53 with `f64`.
pub fn read_index<T: Float>(i: usize, write_period: T, read_period: T, len: usize) -> usize {
    let t = to_float::<T>(i) * write_period;
    let ri = t / read_period;
    (ri % to_float::<T>(len)).to_usize().unwrap_or(0)
}

fn to_float<T: Float>(n: usize) -> T {
    T::from_usize(n).unwrap_or_else(T::nan)
}
