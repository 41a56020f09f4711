//! Time-series data model shared by every engine.
//!
//! ## Purpose
//!
//! A [`Series`] is the ordered list of `(position, value)` samples that the
//! smoother consumes and whose shape the smoothed output mirrors.
//!
//! ## Design notes
//!
//! * **Append-only**: Samples are pushed in order and never reordered or removed.
//! * **Columnar**: Positions and values are stored in separate buffers so
//!   window slices of the values can be taken without copying.
//!
//! ## Invariants
//!
//! * `positions.len() == values.len()`.
//! * Positions are expected to be contiguous, zero-based and unit spaced. This
//!   is a caller guarantee; violating it yields meaningless output, not an
//!   error. [`Series::is_unit_spaced`] lets callers check it up front.
//!
//! ## Non-goals
//!
//! * This module does not parse any on-disk or wire format.
//! * This module does not resample or sort.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Sample
// ============================================================================

/// A single `(position, value)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// Integer position of the sample (its index under the unit-step invariant).
    pub position: i64,

    /// Observed value.
    pub value: T,
}

impl<T> Sample<T> {
    /// Create a sample.
    #[inline]
    pub const fn new(position: i64, value: T) -> Self {
        Self { position, value }
    }
}

// ============================================================================
// Series
// ============================================================================

/// Ordered, append-only sequence of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    positions: Vec<i64>,
    values: Vec<T>,
}

impl<T> Default for Series<T> {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<T: Float> Series<T> {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty series with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Build a series from values, assigning positions `0..n`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let positions = (0..values.len() as i64).collect();
        Self { positions, values }
    }

    /// Build a series from explicit samples, keeping their order.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Sample<T>>,
    {
        let mut series = Self::new();
        for sample in samples {
            series.push_sample(sample);
        }
        series
    }

    /// Append a value at the next position (`last + 1`, or `0` when empty).
    pub fn push(&mut self, value: T) {
        let position = self.positions.last().map_or(0, |&p| p + 1);
        self.push_sample(Sample::new(position, value));
    }

    /// Append an explicit sample.
    pub fn push_sample(&mut self, sample: Sample<T>) {
        self.positions.push(sample.position);
        self.values.push(sample.value);
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at index `idx`, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Sample<T>> {
        Some(Sample::new(*self.positions.get(idx)?, *self.values.get(idx)?))
    }

    /// Sample positions in order.
    #[inline]
    pub fn positions(&self) -> &[i64] {
        &self.positions
    }

    /// Sample values in order.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Positions converted to the float type, for distance computations.
    pub fn positions_as_float(&self) -> Vec<T> {
        self.positions
            .iter()
            .map(|&p| T::from(p).unwrap_or_else(T::nan))
            .collect()
    }

    /// Iterate over the samples in order.
    pub fn iter(&self) -> impl Iterator<Item = Sample<T>> + '_ {
        self.positions
            .iter()
            .zip(self.values.iter())
            .map(|(&position, &value)| Sample::new(position, value))
    }

    /// Check the contiguous, zero-based, unit-step position invariant.
    pub fn is_unit_spaced(&self) -> bool {
        self.positions
            .iter()
            .enumerate()
            .all(|(i, &p)| p == i as i64)
    }
}

impl<T: Float> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Float> FromIterator<Sample<T>> for Series<T> {
    fn from_iter<I: IntoIterator<Item = Sample<T>>>(iter: I) -> Self {
        Self::from_samples(iter)
    }
}

impl<T: Float> Extend<T> for Series<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
