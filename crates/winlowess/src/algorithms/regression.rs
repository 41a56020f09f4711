//! Windowed weighted regression kernel.
//!
//! ## Purpose
//!
//! This module fits the local weighted line at one target index and returns
//! its value at the target. It carries all the numerical work of the custom
//! engine:
//!
//! 1. Select the shifted half-width window ([`Window::centered`]).
//! 2. Compute signed offsets `d_j = position_j - target` and tri-cube weights
//!    normalised by `max |d_j|`.
//! 3. Fit `a + b * d` by two-pass weighted least squares on the raw offsets.
//! 4. Return the line at `d = 0`.
//!
//! ## Invariants
//!
//! * The slope is computed literally as `Σw(d-x̄)(y-ȳ) / Σw(d-x̄)²`. A window
//!   with zero weighted spread divides by zero and yields a non-finite value;
//!   this is observable behaviour, not a bug to guard against.
//! * A single-sample window reduces to that sample's value.
//!
//! ## Non-goals
//!
//! * No robustness reweighting.
//! * No validation of target indices (see `engine::validator`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::window_weights;
use crate::primitives::buffer::FitBuffer;
use crate::primitives::series::Series;
use crate::primitives::window::Window;

// ============================================================================
// LocalFit
// ============================================================================

/// Weighted linear fit `intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFit<T> {
    /// Intercept (value at `x = 0`).
    pub intercept: T,

    /// Slope.
    pub slope: T,

    /// Weighted mean of the regression coordinate.
    pub x_mean: T,

    /// Weighted mean of the response.
    pub y_mean: T,
}

impl<T: Float> LocalFit<T> {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Two-pass weighted least squares with centred sums.
    ///
    /// Weighted means fall back to zero when the weights sum to zero. The
    /// slope is not guarded: zero weighted spread produces a non-finite slope
    /// and intercept.
    pub fn fit_weighted(x: &[T], y: &[T], weights: &[T]) -> Self {
        debug_assert!(x.len() == y.len() && y.len() == weights.len());

        let mut sum_w = T::zero();
        let mut sum_wx = T::zero();
        let mut sum_wy = T::zero();
        for ((&xi, &yi), &wi) in x.iter().zip(y).zip(weights) {
            sum_w = sum_w + wi;
            sum_wx = sum_wx + wi * xi;
            sum_wy = sum_wy + wi * yi;
        }

        let (x_mean, y_mean) = if sum_w != T::zero() {
            (sum_wx / sum_w, sum_wy / sum_w)
        } else {
            (T::zero(), T::zero())
        };

        let mut covariance = T::zero();
        let mut variance = T::zero();
        for ((&xi, &yi), &wi) in x.iter().zip(y).zip(weights) {
            let dx = xi - x_mean;
            covariance = covariance + wi * dx * (yi - y_mean);
            variance = variance + wi * dx * dx;
        }

        let slope = covariance / variance;
        let intercept = y_mean - slope * x_mean;

        Self {
            intercept,
            slope,
            x_mean,
            y_mean,
        }
    }

    /// Single-pass weighted least squares with a variance tolerance.
    ///
    /// Returns `None` when the weights sum to zero. When the weighted variance
    /// of `x` falls below `max(1e-7, eps * radius^2)` the fit degrades to a
    /// flat line through the weighted mean.
    pub fn fit_weighted_tolerant(x: &[T], y: &[T], weights: &[T], radius: T) -> Option<Self> {
        let mut sum_w = T::zero();
        let mut sum_wx = T::zero();
        let mut sum_wy = T::zero();
        let mut sum_wxx = T::zero();
        let mut sum_wxy = T::zero();

        for ((&xi, &yi), &wi) in x.iter().zip(y).zip(weights) {
            let wx = wi * xi;
            sum_w = sum_w + wi;
            sum_wx = sum_wx + wx;
            sum_wy = sum_wy + wi * yi;
            sum_wxx = sum_wxx + wx * xi;
            sum_wxy = sum_wxy + wx * yi;
        }

        if sum_w <= T::zero() {
            return None;
        }

        let x_mean = sum_wx / sum_w;
        let y_mean = sum_wy / sum_w;
        let variance = sum_wxx - (sum_wx * sum_wx) / sum_w;

        let abs_tol = T::from(1e-7).unwrap_or_else(T::epsilon);
        let tol = abs_tol.max(T::epsilon() * radius * radius);

        if variance <= tol {
            return Some(Self {
                intercept: y_mean,
                slope: T::zero(),
                x_mean,
                y_mean,
            });
        }

        let covariance = sum_wxy - (sum_wx * sum_wy) / sum_w;
        let slope = covariance / variance;

        Some(Self {
            intercept: y_mean - slope * x_mean,
            slope,
            x_mean,
            y_mean,
        })
    }
}

// ============================================================================
// Regression Context
// ============================================================================

/// Everything needed to fit the custom kernel at one index.
pub struct RegressionContext<'a, T: Float> {
    /// Input series.
    pub series: &'a Series<T>,

    /// Target index.
    pub idx: usize,

    /// Window for the local fit.
    pub window: Window,

    /// Scratch storage for offsets and weights.
    pub buffer: &'a mut FitBuffer<T>,
}

impl<'a, T: Float> RegressionContext<'a, T> {
    /// Build a context with the shifted half-width window around `idx`.
    pub fn new(series: &'a Series<T>, idx: usize, half_width: usize, buffer: &'a mut FitBuffer<T>) -> Self {
        let window = Window::centered(idx, half_width, series.len());
        Self {
            series,
            idx,
            window,
            buffer,
        }
    }

    /// Fit the local line and evaluate it at the target (`d = 0`).
    pub fn fit(&mut self) -> T {
        let range = self.window.range();
        let positions = &self.series.positions()[range.clone()];
        let values = &self.series.values()[range];

        if values.len() == 1 {
            return values[0];
        }

        self.buffer.prepare(values.len());
        let target = self.idx as i64;
        self.buffer.offsets.extend(
            positions
                .iter()
                .map(|&p| T::from(p - target).unwrap_or_else(T::nan)),
        );

        window_weights(&self.buffer.offsets, &mut self.buffer.weights);

        let model = LocalFit::fit_weighted(&self.buffer.offsets, values, &self.buffer.weights);
        model.predict(T::zero())
    }
}
