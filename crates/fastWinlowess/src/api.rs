//! High-level API for windowed smoothing with parallel execution support.
//!
//! ## Purpose
//!
//! This module wraps the `winlowess` builder and installs the rayon smoothing
//! pass when parallel execution is enabled (the default).
//!
//! ## Design notes
//!
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Transparent**: Same setters and results as the `winlowess` builder.
//! * **Flexible input**: `fit` accepts any [`SmoothInput`].

// External dependencies
use num_traits::Float;

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::smooth_pass_parallel;

// Export dependencies from winlowess crate
use winlowess::internals::api::{Smoother, WinLowessBuilder};

// Publicly re-exported types
pub use crate::input::SmoothInput;
pub use winlowess::internals::api::{Comparison, Engine, Sample, Series, SmoothError, SmoothResult};

// ============================================================================
// Parallel Builder
// ============================================================================

/// Builder for a smoother with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelWinLowessBuilder<T> {
    /// Base builder from the winlowess crate.
    pub base: WinLowessBuilder<T>,

    /// Parallel execution (default: true).
    pub parallel: Option<bool>,
}

impl<T: Float + Send + Sync> Default for ParallelWinLowessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> ParallelWinLowessBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the winlowess builder
    /// * parallel: true
    pub fn new() -> Self {
        Self {
            base: WinLowessBuilder::new(),
            parallel: None,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.base.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the half-width (samples on each side of the target).
    pub fn half_width(mut self, half_width: usize) -> Self {
        self.base = self.base.half_width(half_width);
        self
    }

    /// Select the smoothing engine.
    pub fn engine(mut self, engine: Engine) -> Self {
        self.base = self.base.engine(engine);
        self
    }

    /// Select the smoothing engine by name.
    pub fn engine_name(mut self, name: &str) -> Self {
        self.base = self.base.engine_name(name);
        self
    }

    /// Enable returning residuals in the output.
    pub fn compute_residuals(mut self, enabled: bool) -> Self {
        self.base = self.base.compute_residuals(enabled);
        self
    }

    /// Validate the configuration and build a [`ParallelSmoother`].
    pub fn build(self) -> Result<ParallelSmoother<T>, SmoothError> {
        let parallel = self.parallel.unwrap_or(true);
        let mut base = self.base;

        #[cfg(feature = "cpu")]
        {
            if parallel {
                base.custom_smooth_pass = Some(smooth_pass_parallel::<T>);
            } else {
                base.custom_smooth_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Sequential fallback when the cpu feature is disabled
            base.custom_smooth_pass = None;
        }
        base.parallel = Some(parallel && base.custom_smooth_pass.is_some());

        Ok(ParallelSmoother {
            inner: base.build()?,
            parallel,
        })
    }
}

// ============================================================================
// Parallel Smoother
// ============================================================================

/// Smoother with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelSmoother<T> {
    inner: Smoother<T>,
    parallel: bool,
}

impl<T: Float + Send + Sync> ParallelSmoother<T> {
    /// Half-width in use.
    pub fn half_width(&self) -> usize {
        self.inner.half_width()
    }

    /// Engine in use.
    pub fn engine(&self) -> Engine {
        self.inner.engine()
    }

    /// Whether parallel execution was requested.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Smooth every sample of `input`.
    pub fn fit<I>(&self, input: &I) -> Result<SmoothResult<T>, SmoothError>
    where
        I: SmoothInput<T> + ?Sized,
    {
        let series = input.to_series()?;
        self.inner.fit(&series)
    }

    /// Smoothed value at a single index.
    pub fn evaluate_at<I>(&self, input: &I, target: usize) -> Result<T, SmoothError>
    where
        I: SmoothInput<T> + ?Sized,
    {
        let series = input.to_series()?;
        self.inner.evaluate_at(&series, target)
    }
}
