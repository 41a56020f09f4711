//! Scratch buffers for per-point fits.
//!
//! Each local fit needs an offset vector and a weight vector sized to its
//! window. A driver allocates one [`FitBuffer`] per worker and reuses it for
//! every target index so the inner loop stays allocation-free.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Reusable offsets/weights storage for one worker.
#[derive(Debug, Clone, Default)]
pub struct FitBuffer<T> {
    /// Signed offsets of window samples from the target.
    pub offsets: Vec<T>,

    /// Kernel weights, one per window sample.
    pub weights: Vec<T>,
}

impl<T: Float> FitBuffer<T> {
    /// Create a buffer that can hold windows of up to `capacity` samples
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            offsets: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
        }
    }

    /// Clear both vectors and size the weight vector to `len` zeros.
    #[inline]
    pub fn prepare(&mut self, len: usize) {
        self.offsets.clear();
        self.weights.clear();
        self.weights.resize(len, T::zero());
    }
}
