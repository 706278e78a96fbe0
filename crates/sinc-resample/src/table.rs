// SPDX-License-Identifier: LGPL-3.0-or-later

//! Precomputed Kaiser-windowed sinc filter table.
//!
//! Evaluating the transcendental sinc per tap at run time is exactly what
//! this table avoids: the right wing of the symmetric low-pass filter is
//! sampled once at `samples_per_crossing` points per zero crossing, and the
//! resampling loop reads it back through a linearly interpolated lookup that
//! costs one multiply-add per tap.

use std::f64::consts::PI;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::windows::kaiser;

/// Zero crossings retained by the shared default table.
pub const DEFAULT_ZERO_CROSSINGS: usize = 32;

/// Table resolution of the shared default table.
pub const DEFAULT_SAMPLES_PER_CROSSING: usize = 512;

/// Kaiser shape parameter of the shared default table.
pub const DEFAULT_KAISER_BETA: f64 = 10.0;

static DEFAULT_TABLE: Lazy<Arc<SincTable>> = Lazy::new(|| {
    let table = SincTable::new(
        DEFAULT_ZERO_CROSSINGS,
        DEFAULT_SAMPLES_PER_CROSSING,
        DEFAULT_KAISER_BETA,
    )
    .expect("default table parameters are valid");
    Arc::new(table)
});

/// Return the shared default filter table (32 zero crossings, 512 samples
/// per crossing, Kaiser beta 10), building it on first use.
///
/// The table is immutable and reference counted; clones of the `Arc` can be
/// handed to any number of concurrent resampling calls without locking.
pub fn default_table() -> Arc<SincTable> {
    Arc::clone(&DEFAULT_TABLE)
}

/// Normalized sinc: `sin(pi*x) / (pi*x)`, `1.0` at `x == 0` by continuity.
fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-12 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Right wing of a symmetric Kaiser-windowed sinc low-pass filter, together
/// with its forward-difference table for interpolated lookup.
///
/// The table holds `zero_crossings * samples_per_crossing + 1` taps covering
/// filter offsets `[0, zero_crossings]` in sample units. The negative half
/// of the filter is obtained by symmetry during convolution and never
/// stored. A table is immutable after construction and `Send + Sync`.
///
/// # Examples
/// ```
/// use sinc_resample::SincTable;
///
/// let table = SincTable::new(13, 128, 8.0).unwrap();
/// assert_eq!(table.table_size(), 13 * 128);
/// assert_eq!(table.taps()[0], 1.0); // unity passband gain at the peak
/// ```
#[derive(Debug, Clone)]
pub struct SincTable {
    /// Right-wing taps, `table_size + 1` entries, `taps[0]` is the peak.
    taps: Vec<f32>,
    /// Forward differences of `taps`, trailing zero sentinel.
    diffs: Vec<f32>,
    zero_crossings: usize,
    samples_per_crossing: usize,
}

impl SincTable {
    /// Build a filter table retaining `zero_crossings` sinc lobes on each
    /// side of the peak, sampled at `samples_per_crossing` entries per lobe,
    /// tapered by a Kaiser window with shape `beta`.
    ///
    /// Construction runs once per configuration (offline or at startup) and
    /// evaluates the windowed sinc in double precision before quantizing to
    /// `f32`. Larger `zero_crossings` and `samples_per_crossing` trade
    /// memory and build time for stopband attenuation and interpolation
    /// accuracy.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `zero_crossings` or
    /// `samples_per_crossing` is zero, or if `beta` is negative or
    /// non-finite.
    pub fn new(zero_crossings: usize, samples_per_crossing: usize, beta: f64) -> Result<Self> {
        if zero_crossings == 0 {
            return Err(Error::InvalidParameter {
                name: "zero_crossings",
                value: 0.0,
            });
        }
        if samples_per_crossing == 0 {
            return Err(Error::InvalidParameter {
                name: "samples_per_crossing",
                value: 0.0,
            });
        }
        if !beta.is_finite() || beta < 0.0 {
            return Err(Error::InvalidParameter { name: "beta", value: beta });
        }

        let table_size = zero_crossings * samples_per_crossing;

        // Symmetric window over all 2*table_size + 1 abscissas; only the
        // right half is kept, symmetry supplies the left during convolution.
        let mut window = vec![0.0f64; 2 * table_size + 1];
        kaiser(&mut window, beta);

        let mut taps = Vec::with_capacity(table_size + 1);
        for j in 0..=table_size {
            let x = j as f64 / samples_per_crossing as f64;
            taps.push((sinc(x) * window[table_size + j]) as f32);
        }

        let mut diffs: Vec<f32> = taps.windows(2).map(|w| w[1] - w[0]).collect();
        diffs.push(0.0);

        Ok(Self {
            taps,
            diffs,
            zero_crossings,
            samples_per_crossing,
        })
    }

    /// Number of sinc zero crossings covered by the wing.
    pub fn zero_crossings(&self) -> usize {
        self.zero_crossings
    }

    /// Table entries per zero crossing.
    pub fn samples_per_crossing(&self) -> usize {
        self.samples_per_crossing
    }

    /// Index of the last tap; offsets at or past it carry no weight.
    pub fn table_size(&self) -> usize {
        self.taps.len() - 1
    }

    /// Read-only view of the right-wing taps.
    pub fn taps(&self) -> &[f32] {
        &self.taps
    }

    /// Interpolated tap lookup at a continuous, non-negative filter offset
    /// in table-index units.
    ///
    /// Returns `0.0` once the offset reaches the end of the table (the
    /// filter has decayed to its tail); otherwise interpolates linearly
    /// between the two adjacent taps using the precomputed differences, one
    /// multiply-add, no division.
    #[inline]
    pub fn weight(&self, offset: f64) -> f32 {
        debug_assert!(offset >= 0.0);
        let idx = offset as usize;
        if idx >= self.table_size() {
            return 0.0;
        }
        let frac = (offset - idx as f64) as f32;
        self.taps[idx] + frac * self.diffs[idx]
    }
}
