//! Windowing primitives for local fits.
//!
//! Two selection policies live here:
//!
//! * [`Window::centered`] is the fixed half-width window of the custom kernel.
//!   Near either edge it shifts inward instead of truncating, so every window
//!   keeps `min(n, 2h + 1)` samples.
//! * [`Window::nearest`] is the span-of-nearest-neighbours window used by the
//!   reference engine.
//!
//! Windows are half-open `[start, end)` and are recomputed for every target
//! index; they are never stored.

// External dependencies
use core::ops::Range;
use num_traits::Float;

/// Half-open window bounds `[start, end)` for a local fit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// First index in the window.
    pub start: usize,

    /// One past the last index in the window.
    pub end: usize,
}

impl Window {
    /// Select the window of half-width `half_width` around `target` in a
    /// sequence of length `n`.
    ///
    /// The nominal window is `[target - h, target + h + 1)`. A negative lower
    /// bound shifts the whole window right by the deficit; an upper bound past
    /// `n` then shifts it left by the overflow. Both bounds are finally clipped
    /// to `[0, n]`, which only bites when `n < 2h + 1`.
    #[inline]
    pub fn centered(target: usize, half_width: usize, n: usize) -> Self {
        debug_assert!(
            target < n,
            "Window::centered: target index must be inside the sequence"
        );

        let ideal = half_width.saturating_mul(2).saturating_add(1);

        // Lower bound clipped at zero; the deficit moves to the right edge.
        let mut start = target.saturating_sub(half_width);
        let mut end = start.saturating_add(ideal);

        // Overflow on the right moves back to the left edge.
        if end > n {
            start = start.saturating_sub(end - n);
            end = n;
        }

        Self { start, end }
    }

    /// Select the `span` nearest neighbours of `x[target]` in sorted `x`.
    ///
    /// Starts from a window roughly centred on `target` and slides it until
    /// neither neighbouring point outside the window is closer than the point
    /// it would replace.
    pub fn nearest<T: Float>(x: &[T], target: usize, span: usize) -> Self {
        let n = x.len();
        debug_assert!(span >= 1, "Window::nearest: span must be at least 1");
        debug_assert!(target < n, "Window::nearest: target out of bounds");

        if span >= n {
            return Self { start: 0, end: n };
        }

        let mut start = target.saturating_sub(span / 2).min(n - span);
        let mut end = start + span;
        let x_current = x[target];

        // Slide right while the point after the window is closer than the leftmost point
        while end < n {
            let d_left = x_current - x[start];
            let d_right = x[end] - x_current;
            if d_left <= d_right {
                break;
            }
            start += 1;
            end += 1;
        }

        // Slide left while the point before the window is closer than the rightmost point
        while start > 0 {
            let d_left = x_current - x[start - 1];
            let d_right = x[end - 1] - x_current;
            if d_right <= d_left {
                break;
            }
            start -= 1;
            end -= 1;
        }

        Self { start, end }
    }

    /// Convert a smoothing fraction into a neighbour count `q`, clamped to
    /// `[2, n]`.
    #[inline]
    pub fn span_from_fraction<T: Float>(n: usize, frac: T) -> usize {
        let epsilon = T::from(1e-5).unwrap_or_else(T::zero);
        let frac_n = frac * T::from(n).unwrap_or_else(T::zero) + epsilon;
        let frac_n_int = frac_n.to_usize().unwrap_or(0);
        usize::max(2, usize::min(n, frac_n_int))
    }

    /// Largest distance from `x_current` to either end of the window.
    #[inline]
    pub fn max_distance<T: Float>(&self, x: &[T], x_current: T) -> T {
        T::max(x_current - x[self.start], x[self.end - 1] - x_current)
    }

    /// Index range covered by the window.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether `idx` lies inside the window.
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx < self.end
    }

    /// Number of samples in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
