//! Output types for smoothing runs.
//!
//! ## Purpose
//!
//! This module defines [`SmoothResult`], which pairs each input sample with
//! its smoothed value and optional residual.
//!
//! ## Design notes
//!
//! * **Shape-preserving**: The smoothed sequence mirrors the input series.
//! * **Optional Outputs**: Residuals use `Option<Vec<T>>`.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * All populated vectors have the same length as the input series.
//! * `smoothed` may contain NaN or infinity where a window was degenerate.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond comparison.
//! * This module does not provide serialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::Engine;
use crate::evaluation::comparison::Comparison;
use crate::primitives::errors::SmoothError;

// ============================================================================
// Result Structure
// ============================================================================

/// Smoothed output aligned with the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothResult<T> {
    /// Sample positions, copied from the input.
    pub positions: Vec<i64>,

    /// Original sample values.
    pub values: Vec<T>,

    /// Smoothed values, one per sample.
    pub smoothed: Vec<T>,

    /// Residuals (`value - smoothed`), when requested.
    pub residuals: Option<Vec<T>>,

    /// Half-width used for the run.
    pub half_width: usize,

    /// Engine that produced the smoothed values.
    pub engine: Engine,
}

impl<T: Float> SmoothResult<T> {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.smoothed.len()
    }

    /// Whether the result holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.smoothed.is_empty()
    }

    /// Number of smoothed values that are NaN or infinite.
    pub fn non_finite_count(&self) -> usize {
        self.smoothed.iter().filter(|v| !v.is_finite()).count()
    }

    /// Compare the smoothed values against a reference sequence.
    pub fn compare(&self, reference: &[T]) -> core::result::Result<Comparison<T>, SmoothError> {
        Comparison::compute(&self.smoothed, reference)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SmoothResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Half-width:  {}", self.half_width)?;
        writeln!(f, "  Engine:      {}", self.engine)?;

        let non_finite = self.non_finite_count();
        if non_finite > 0 {
            writeln!(f, "  Non-finite:  {}", non_finite)?;
        }
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;

        let has_resid = self.residuals.is_some();

        write!(f, "{:>8} {:>12} {:>12}", "Position", "Value", "Smoothed")?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        writeln!(f)?;

        let line_width = 34 + if has_resid { 13 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (first 10 and last 10 if more than 20 points)
        let n = self.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(
                f,
                "{:>8} {:>12.6} {:>12.6}",
                self.positions[idx], self.values[idx], self.smoothed[idx]
            )?;

            if let Some(resid) = &self.residuals {
                write!(f, " {:>12.6}", resid[idx])?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
