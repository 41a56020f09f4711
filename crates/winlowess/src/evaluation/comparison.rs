//! Pointwise comparison of two smoothed sequences.
//!
//! ## Purpose
//!
//! Differential testing of smoothing engines: given a smoothed sequence and a
//! reference sequence of the same length, compute the pointwise difference
//! and summary error metrics.
//!
//! ## Design notes
//!
//! * **Sign**: `difference[i] = reference[i] - smoothed[i]`.
//! * **Non-finite tolerant**: Degenerate windows may produce NaN or infinity.
//!   Such points keep their non-finite difference, are counted in
//!   `non_finite`, and are excluded from the summary metrics.
//!
//! ## Non-goals
//!
//! * No statistical significance testing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SmoothError;

/// Pointwise difference and error metrics between two sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<T> {
    /// `reference - smoothed`, per point.
    pub difference: Vec<T>,

    /// Largest absolute finite difference.
    pub max_abs: T,

    /// Mean absolute finite difference.
    pub mae: T,

    /// Root mean squared finite difference.
    pub rmse: T,

    /// Number of points whose difference is NaN or infinite.
    pub non_finite: usize,
}

impl<T: Float> Comparison<T> {
    /// Compare `smoothed` against `reference`.
    pub fn compute(smoothed: &[T], reference: &[T]) -> core::result::Result<Self, SmoothError> {
        Validator::validate_lengths(smoothed.len(), reference.len())?;

        let difference: Vec<T> = reference
            .iter()
            .zip(smoothed)
            .map(|(&r, &s)| r - s)
            .collect();

        let mut max_abs = T::zero();
        let mut sum_abs = T::zero();
        let mut sum_sq = T::zero();
        let mut finite = 0usize;
        for &d in &difference {
            if !d.is_finite() {
                continue;
            }
            let abs = d.abs();
            max_abs = max_abs.max(abs);
            sum_abs = sum_abs + abs;
            sum_sq = sum_sq + d * d;
            finite += 1;
        }

        let (mae, rmse) = if finite > 0 {
            let n = T::from(finite).unwrap_or_else(T::one);
            (sum_abs / n, (sum_sq / n).sqrt())
        } else {
            (T::zero(), T::zero())
        };

        Ok(Self {
            non_finite: difference.len() - finite,
            difference,
            max_abs,
            mae,
            rmse,
        })
    }

    /// Whether every finite difference is within `tolerance` and no point is
    /// non-finite.
    pub fn within(&self, tolerance: T) -> bool {
        self.non_finite == 0 && self.max_abs <= tolerance
    }
}

impl<T: Float + Display> Display for Comparison<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Comparison:")?;
        writeln!(f, "  Points:       {}", self.difference.len())?;
        writeln!(f, "  Max |diff|:   {:.6}", self.max_abs)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        write!(f, "  Non-finite:   {}", self.non_finite)
    }
}
