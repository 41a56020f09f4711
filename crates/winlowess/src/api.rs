//! High-level API for windowed LOWESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring a [`Smoother`], and the free functions [`evaluate_at`] and
//! [`smooth`] for one-off calls.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Deferred validation**: Setter misuse (duplicate calls, unknown engine
//!   names) is recorded and reported by `build()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WinLowessBuilder`] via `WinLowess::new()`.
//! 2. Chain configuration methods (`.half_width()`, `.engine()`, etc.).
//! 3. Call `.build()` to obtain a [`Smoother`], then `.fit(&series)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{Executor, PointFitter, SmoothConfig, SmoothPassFn, DEFAULT_HALF_WIDTH};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::Engine;
pub use crate::engine::output::SmoothResult;
pub use crate::evaluation::comparison::Comparison;
pub use crate::primitives::errors::SmoothError;
pub use crate::primitives::series::{Sample, Series};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Smoother`].
#[derive(Debug, Clone)]
pub struct WinLowessBuilder<T> {
    /// Samples on each side of the target (default: 5).
    pub half_width: Option<usize>,

    /// Smoothing engine (default: `Custom`).
    pub engine: Option<Engine>,

    /// Return residuals `value - smoothed`.
    pub compute_residuals: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom smooth pass function.
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    /// First setter error, reported by `build()`.
    #[doc(hidden)]
    pub deferred_error: Option<SmoothError>,
}

impl<T: Float> Default for WinLowessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WinLowessBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            half_width: None,
            engine: None,
            compute_residuals: None,
            custom_smooth_pass: None,
            parallel: None,
            duplicate_param: None,
            deferred_error: None,
        }
    }

    /// Set the half-width (samples on each side of the target).
    pub fn half_width(mut self, half_width: usize) -> Self {
        if self.half_width.is_some() {
            self.duplicate_param = Some("half_width");
        }
        self.half_width = Some(half_width);
        self
    }

    /// Select the smoothing engine.
    pub fn engine(mut self, engine: Engine) -> Self {
        if self.engine.is_some() {
            self.duplicate_param = Some("engine");
        }
        self.engine = Some(engine);
        self
    }

    /// Select the smoothing engine by name (`"custom"` or `"reference"`).
    ///
    /// An unknown name is reported by `build()`.
    pub fn engine_name(mut self, name: &str) -> Self {
        match name.parse::<Engine>() {
            Ok(engine) => self.engine(engine),
            Err(err) => {
                self.deferred_error.get_or_insert(err);
                self
            }
        }
    }

    /// Enable returning residuals in the output.
    pub fn compute_residuals(mut self, enabled: bool) -> Self {
        if self.compute_residuals.is_some() {
            self.duplicate_param = Some("compute_residuals");
        }
        self.compute_residuals = Some(enabled);
        self
    }

    /// Set a custom smooth pass function (for parallel drivers).
    #[doc(hidden)]
    pub fn custom_smooth_pass(mut self, pass: SmoothPassFn<T>) -> Self {
        self.custom_smooth_pass = Some(pass);
        self
    }

    /// Set the parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build a [`Smoother`].
    pub fn build(self) -> Result<Smoother<T>, SmoothError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = SmoothConfig {
            half_width: self.half_width.unwrap_or(DEFAULT_HALF_WIDTH),
            engine: self.engine.unwrap_or_default(),
            custom_smooth_pass: self.custom_smooth_pass,
            parallel: self.parallel.unwrap_or(false),
        };

        Ok(Smoother {
            config,
            compute_residuals: self.compute_residuals.unwrap_or(false),
        })
    }
}

// ============================================================================
// Smoother
// ============================================================================

/// Configured smoother, ready to fit series.
#[derive(Debug, Clone)]
pub struct Smoother<T> {
    config: SmoothConfig<T>,
    compute_residuals: bool,
}

impl<T: Float> Smoother<T> {
    /// Half-width in use.
    pub fn half_width(&self) -> usize {
        self.config.half_width
    }

    /// Engine in use.
    pub fn engine(&self) -> Engine {
        self.config.engine
    }

    /// Smooth every sample of `series`.
    pub fn fit(&self, series: &Series<T>) -> Result<SmoothResult<T>, SmoothError> {
        Validator::validate_series(series)?;

        let output = Executor::run(series, &self.config);

        let residuals = if self.compute_residuals {
            Some(
                series
                    .values()
                    .iter()
                    .zip(&output.smoothed)
                    .map(|(&v, &s)| v - s)
                    .collect::<Vec<T>>(),
            )
        } else {
            None
        };

        Ok(SmoothResult {
            positions: series.positions().to_vec(),
            values: series.values().to_vec(),
            smoothed: output.smoothed,
            residuals,
            half_width: self.config.half_width,
            engine: output.engine,
        })
    }

    /// Smooth a plain value sequence (positions `0..n`).
    pub fn fit_values(&self, values: &[T]) -> Result<SmoothResult<T>, SmoothError> {
        self.fit(&Series::from_values(values.iter().copied()))
    }

    /// Smoothed value at a single index.
    pub fn evaluate_at(&self, series: &Series<T>, target: usize) -> Result<T, SmoothError> {
        Validator::validate_series(series)?;
        Validator::validate_index(target, series.len())?;

        let fitter = PointFitter::new(series, self.config.half_width, self.config.engine);
        let mut buffer = fitter.buffer();
        Ok(fitter.fit(target, &mut buffer))
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Local fit of the custom kernel at `target`, evaluated at its position.
///
/// Fails for an empty series or an out-of-range target. A degenerate window
/// is not an error and may produce a non-finite value.
pub fn evaluate_at<T: Float>(series: &Series<T>, target: usize, half_width: usize) -> Result<T, SmoothError> {
    WinLowessBuilder::new()
        .half_width(half_width)
        .build()?
        .evaluate_at(series, target)
}

/// Smooth every sample of `series` with the custom kernel.
///
/// The output has one value per sample, in index order.
pub fn smooth<T: Float>(series: &Series<T>, half_width: usize) -> Result<Vec<T>, SmoothError> {
    Validator::validate_series(series)?;
    let config = SmoothConfig::with_half_width(half_width);
    Ok(Executor::run(series, &config).smoothed)
}
