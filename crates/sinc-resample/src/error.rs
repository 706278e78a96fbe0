// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error types for table construction and resampling.
//!
//! Every failure is detected synchronously, before any table entry is
//! written or any output sample is produced. The convolution loop itself is
//! total: offsets past the table end and wings reaching an input boundary
//! are clipped, never reported as errors.

use thiserror::Error;

/// Errors reported by table construction and the resampling entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A parameter is outside its valid domain (zero table dimensions,
    /// negative window shape, non-positive or non-finite rate ratio).
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The input signal contains no samples.
    #[error("input signal is empty")]
    EmptyInput,
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
