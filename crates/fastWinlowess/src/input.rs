//! Input abstractions for parallel smoothing.
//!
//! ## Purpose
//!
//! This module lets `fit` accept several container types (slices, vectors,
//! `ndarray` arrays, or a ready-made [`Series`]) through one trait.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: A borrowed `Series` passes through as-is.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected up front.
//!
//! ## Invariants
//!
//! * Plain value containers are assigned positions `0..n`.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;
use std::borrow::Cow;

// Export dependencies from winlowess crate
use winlowess::internals::primitives::errors::SmoothError;
use winlowess::internals::primitives::series::Series;

/// Trait for types that can be smoothed.
pub trait SmoothInput<T: Float> {
    /// View the input as a series.
    fn to_series(&self) -> Result<Cow<'_, Series<T>>, SmoothError>;
}

impl<T: Float> SmoothInput<T> for [T] {
    fn to_series(&self) -> Result<Cow<'_, Series<T>>, SmoothError> {
        Ok(Cow::Owned(Series::from_values(self.iter().copied())))
    }
}

impl<T: Float> SmoothInput<T> for Vec<T> {
    fn to_series(&self) -> Result<Cow<'_, Series<T>>, SmoothError> {
        self.as_slice().to_series()
    }
}

impl<T: Float> SmoothInput<T> for Series<T> {
    fn to_series(&self) -> Result<Cow<'_, Series<T>>, SmoothError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: Float, S> SmoothInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn to_series(&self) -> Result<Cow<'_, Series<T>>, SmoothError> {
        let values = self.as_slice().ok_or_else(|| {
            SmoothError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })?;
        values.to_series()
    }
}
