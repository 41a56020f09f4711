//! Reference engine: nearest-neighbour span LOWESS.
//!
//! ## Purpose
//!
//! An alternative smoother with the classic span formulation, selectable
//! through `Engine::Reference` and used as an oracle for differential
//! comparison against the custom kernel.
//!
//! ## Design notes
//!
//! * **Span**: `q = clamp(floor(frac * n + 1e-5), 2, n)` with
//!   `frac = min(1, 2h / n)`, so a half-width `h` covers about `2h` neighbours.
//! * **Window**: The `q` nearest neighbours of the target position.
//! * **Weights**: Tri-cube on distance over the window radius, with near and
//!   far thresholds.
//! * **Fit**: Single-pass weighted least squares with a variance tolerance,
//!   evaluated at the target position.
//!
//! ## Non-goals
//!
//! * No robustness iterations and no delta interpolation.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::LocalFit;
use crate::math::kernel::neighbourhood_weights;
use crate::primitives::buffer::FitBuffer;
use crate::primitives::window::Window;

/// Neighbour count used by the reference engine for half-width `half_width`.
pub fn reference_span(n: usize, half_width: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let n_f = n as f64;
    let frac = (2.0 * half_width as f64 / n_f).min(1.0);
    Window::span_from_fraction(n, frac)
}

/// Everything needed to fit the reference engine at one index.
pub struct ReferenceContext<'a, T: Float> {
    /// Sample positions as floats.
    pub x: &'a [T],

    /// Sample values.
    pub y: &'a [T],

    /// Target index.
    pub idx: usize,

    /// Nearest-neighbour window.
    pub window: Window,

    /// Scratch storage; only `weights` is used.
    pub buffer: &'a mut FitBuffer<T>,
}

impl<'a, T: Float> ReferenceContext<'a, T> {
    /// Build a context selecting the `span` nearest neighbours of `idx`.
    pub fn new(x: &'a [T], y: &'a [T], idx: usize, span: usize, buffer: &'a mut FitBuffer<T>) -> Self {
        let window = Window::nearest(x, idx, span.max(1));
        Self {
            x,
            y,
            idx,
            window,
            buffer,
        }
    }

    /// Fit the local line and evaluate it at the target position.
    pub fn fit(&mut self) -> T {
        let range = self.window.range();
        let x_current = self.x[self.idx];
        let radius = self.window.max_distance(self.x, x_current);
        let window_y = &self.y[range.clone()];

        if radius <= T::zero() {
            return local_mean(window_y);
        }

        self.buffer.prepare(self.window.len());
        let weight_sum = neighbourhood_weights(
            self.x,
            self.window,
            x_current,
            radius,
            &mut self.buffer.weights,
        );

        if weight_sum <= T::zero() {
            return local_mean(window_y);
        }

        match LocalFit::fit_weighted_tolerant(&self.x[range], window_y, &self.buffer.weights, radius) {
            Some(model) => model.predict(x_current),
            None => local_mean(window_y),
        }
    }
}

fn local_mean<T: Float>(values: &[T]) -> T {
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap_or_else(T::one)
}
