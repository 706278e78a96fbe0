// SPDX-License-Identifier: LGPL-3.0-or-later

//! Band-limited resampling driven by a precomputed sinc table.
//!
//! The engine walks a continuous time cursor through the input in units of
//! input samples. At every output instant it evaluates both wings of the
//! symmetric filter against the table: the left wing covers the input sample
//! at or before the cursor and its predecessors, the right wing the samples
//! after it. Downsampling stretches the table-index step by `min(1, ratio)`,
//! which narrows the filter's passband for anti-aliasing without touching
//! the table, and the output is scaled by the same factor to compensate the
//! decimation gain.

use multiversion::multiversion;

use crate::error::{Error, Result};
use crate::table::SincTable;

/// Resample `input` by `ratio` (target rate / source rate).
///
/// Produces `ceil(input.len() * ratio)` output samples: `ratio > 1`
/// upsamples, `ratio < 1` downsamples with anti-aliasing. A ratio of exactly
/// `1` is not short-circuited — the signal still runs through the full
/// filter path, so a 1:1 call doubles as an anti-aliasing pass rather than
/// a bit-exact copy.
///
/// Near the signal boundaries the filter wings are clipped to the available
/// samples (truncated kernel, not zero-padded), so edge-region output is a
/// deliberate approximation.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] for a non-positive or non-finite
/// `ratio` and [`Error::EmptyInput`] for an empty `input`, before any
/// computation starts.
///
/// # Examples
/// ```
/// use sinc_resample::{default_table, resample};
///
/// // 48 kHz -> 44.1 kHz
/// let input: Vec<f32> = (0..480).map(|i| (i as f64 * 0.05).sin() as f32).collect();
/// let output = resample(&input, 44100.0 / 48000.0, &default_table()).unwrap();
/// assert_eq!(output.len(), 441);
/// ```
pub fn resample(input: &[f32], ratio: f64, table: &SincTable) -> Result<Vec<f32>> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "ratio",
            value: ratio,
        });
    }
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(convolve_loop(input, ratio, table))
}

/// Resample `input` from `from_rate` Hz to `to_rate` Hz.
///
/// Thin wrapper over [`resample`] with `ratio = to_rate / from_rate`.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] for a zero rate and
/// [`Error::EmptyInput`] for an empty `input`.
///
/// # Examples
/// ```
/// use sinc_resample::{default_table, resample_rates};
///
/// let input = vec![0.0f32; 16000];
/// let output = resample_rates(&input, 16000, 48000, &default_table()).unwrap();
/// assert_eq!(output.len(), 48000);
/// ```
pub fn resample_rates(
    input: &[f32],
    from_rate: u32,
    to_rate: u32,
    table: &SincTable,
) -> Result<Vec<f32>> {
    if from_rate == 0 {
        return Err(Error::InvalidParameter {
            name: "from_rate",
            value: 0.0,
        });
    }
    if to_rate == 0 {
        return Err(Error::InvalidParameter {
            name: "to_rate",
            value: 0.0,
        });
    }
    resample(input, to_rate as f64 / from_rate as f64, table)
}

/// The per-call convolution loop over already-validated inputs.
///
/// Wing lengths are clipped with precomputed `min(...)` counts before each
/// inner loop, so the tap accumulation itself runs without per-element
/// bounds checks.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
fn convolve_loop(input: &[f32], ratio: f64, table: &SincTable) -> Vec<f32> {
    let n = input.len();
    let out_len = (n as f64 * ratio).ceil() as usize;
    let mut out = Vec::with_capacity(out_len);

    let time_step = 1.0 / ratio;
    let filter_scale = ratio.min(1.0);
    let filter_step = table.samples_per_crossing() as f64 * filter_scale;
    let table_end = table.table_size() as f64;

    let mut t = 0.0f64;
    while t < n as f64 {
        let idx = t as usize;
        let frac = t - idx as f64;

        let mut acc = 0.0f64;

        // Left wing: input[idx] and earlier. The tap count is clipped both
        // to the filter's finite support and to the start of the input.
        let offset = filter_step * frac;
        let left_count = (((table_end - offset) / filter_step) as usize).min(idx);
        for i in (0..=left_count).rev() {
            let w = table.weight(offset + filter_step * i as f64);
            acc += input[idx - i] as f64 * w as f64;
        }

        // Right wing: input[idx + 1] and later, mirrored through the
        // filter's symmetry, clipped to the end of the input.
        let offset = filter_step * (1.0 - frac);
        let right_count = (((table_end - offset) / filter_step) as usize).min(n - idx - 1);
        for i in 0..right_count {
            let w = table.weight(offset + filter_step * i as f64);
            acc += input[idx + 1 + i] as f64 * w as f64;
        }

        // Cursor stepping and ceil sizing can disagree by one sample at the
        // boundary; drop the extra rather than overflow.
        if out.len() < out_len {
            out.push((acc * filter_scale) as f32);
        }

        t += time_step;
    }

    out
}
