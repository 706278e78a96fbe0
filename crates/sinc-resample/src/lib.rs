// SPDX-License-Identifier: LGPL-3.0-or-later

//! # sinc-resample
//!
//! Band-limited sample rate conversion using a precomputed Kaiser-windowed
//! sinc filter table.
//!
//! The crate has two pieces, constructed and consumed in order:
//!
//! - **Table construction** ([`SincTable`]): build the right wing of a
//!   symmetric windowed-sinc low-pass filter once, at any resolution,
//!   together with its forward-difference table for O(1) interpolated
//!   lookup. Construction is pure and deterministic; the result is
//!   immutable.
//! - **Resampling** ([`resample`], [`resample_rates`]): walk a continuous
//!   time cursor through the input and convolve both filter wings around
//!   every output instant — upsampling, downsampling with anti-aliasing, or
//!   a 1:1 filtering pass.
//!
//! Data flows one way: table → engine → output sequence. A [`SincTable`] is
//! safe to share read-only across threads, so resampling independent
//! channels in parallel needs no locking; [`default_table`] hands out a
//! shared reference-counted table built on first use.
//!
//! ## Example
//! ```
//! use sinc_resample::{resample, SincTable};
//!
//! let table = SincTable::new(13, 512, 10.0).unwrap();
//!
//! // A 200 Hz tone sampled at 1 kHz, resampled to 2.5 kHz.
//! let input: Vec<f32> = (0..1000)
//!     .map(|i| (std::f64::consts::TAU * 200.0 * i as f64 / 1000.0).sin() as f32)
//!     .collect();
//! let output = resample(&input, 2.5, &table).unwrap();
//! assert_eq!(output.len(), 2500);
//! ```

pub mod error;
pub mod resample;
pub mod table;
pub mod windows;

pub use error::{Error, Result};
pub use resample::{resample, resample_rates};
pub use table::{
    default_table, SincTable, DEFAULT_KAISER_BETA, DEFAULT_SAMPLES_PER_CROSSING,
    DEFAULT_ZERO_CROSSINGS,
};
