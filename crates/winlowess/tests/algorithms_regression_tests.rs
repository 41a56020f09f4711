#![cfg(feature = "dev")]
//! Tests for the local regression fits.
//!
//! These tests verify the numerical core of both engines:
//! - Weighted least squares (exact and tolerant variants)
//! - The custom kernel's per-index context
//! - The reference engine's nearest-neighbour fit
//!
//! ## Test Organization
//!
//! 1. **LocalFit** - Weighted least squares
//! 2. **Custom Kernel** - Offsets, weights and degenerate windows
//! 3. **Reference Engine** - Span fits

use approx::{assert_abs_diff_eq, assert_relative_eq};

use winlowess::internals::algorithms::reference::{reference_span, ReferenceContext};
use winlowess::internals::algorithms::regression::{LocalFit, RegressionContext};
use winlowess::internals::primitives::buffer::FitBuffer;
use winlowess::internals::primitives::series::Series;

fn squares(n: usize) -> Series<f64> {
    (0..n).map(|i| (i * i) as f64).collect()
}

// ============================================================================
// LocalFit
// ============================================================================

/// Exact line through weighted points.
#[test]
fn test_fit_weighted_line() {
    let x = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let y = [1.0, 3.0, 5.0, 7.0, 9.0];
    let w = [0.1, 0.5, 1.0, 0.5, 0.1];

    let fit = LocalFit::fit_weighted(&x, &y, &w);
    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(fit.intercept, 5.0, epsilon = 1e-12);
    assert_relative_eq!(fit.predict(3.0), 11.0, epsilon = 1e-12);
}

/// Zero weighted spread yields a non-finite slope rather than a fallback.
#[test]
fn test_fit_weighted_zero_spread() {
    let fit = LocalFit::<f64>::fit_weighted(&[0.0, 1.0], &[4.0, 6.0], &[1.0, 0.0]);
    assert!(fit.slope.is_nan());
    assert!(fit.intercept.is_nan());
}

/// Tolerant fit degrades to the weighted mean for tiny variance.
#[test]
fn test_fit_weighted_tolerant_flat() {
    let fit = LocalFit::fit_weighted_tolerant(&[3.0, 3.0], &[2.0, 4.0], &[1.0, 1.0], 1.0)
        .expect("positive weights");
    assert_relative_eq!(fit.slope, 0.0);
    assert_relative_eq!(fit.predict(3.0), 3.0);
}

/// Tolerant fit returns `None` for all-zero weights.
#[test]
fn test_fit_weighted_tolerant_zero_weights() {
    assert!(LocalFit::fit_weighted_tolerant(&[0.0, 1.0], &[1.0, 2.0], &[0.0, 0.0], 1.0).is_none());
}

// ============================================================================
// Custom Kernel
// ============================================================================

/// Worked example: x² on positions 0..10 with h = 2 at position 5.
///
/// Window [3, 8), weights [0, a, 1, a, 0] with a = 343/512. The slope is 10
/// and the weighted mean of the offsets is 0, so the fit equals the weighted
/// mean of the values: (52a + 25) / (1 + 2a) = 15318 / 599.
#[test]
fn test_golden_value_squares() {
    let series = squares(11);
    let mut buffer = FitBuffer::with_capacity(5);
    let value = RegressionContext::new(&series, 5, 2, &mut buffer).fit();

    assert_relative_eq!(value, 15318.0 / 599.0, epsilon = 1e-12);
}

/// Interior weights are symmetric about the target.
#[test]
fn test_interior_weight_symmetry() {
    let series = squares(20);
    let h = 4;
    for idx in h..series.len() - h {
        let mut buffer = FitBuffer::with_capacity(2 * h + 1);
        RegressionContext::new(&series, idx, h, &mut buffer).fit();

        let w = &buffer.weights;
        assert_eq!(w.len(), 2 * h + 1);
        for k in 1..=h {
            assert_relative_eq!(w[h - k], w[h + k]);
        }
        assert_relative_eq!(w[h], 1.0);
    }
}

/// Offsets are measured from the target, not from the window start.
#[test]
fn test_boundary_offsets() {
    let series = squares(10);
    let mut buffer = FitBuffer::with_capacity(5);
    let ctx = RegressionContext::new(&series, 9, 2, &mut buffer);
    assert_eq!(ctx.window.range(), 5..10);

    let mut ctx = ctx;
    ctx.fit();
    assert_eq!(buffer.offsets, vec![-4.0, -3.0, -2.0, -1.0, 0.0]);
}

/// A one-sample window returns that sample.
#[test]
fn test_single_sample_window() {
    let series: Series<f64> = [42.0].into_iter().collect();
    let mut buffer = FitBuffer::with_capacity(1);
    assert_relative_eq!(RegressionContext::new(&series, 0, 7, &mut buffer).fit(), 42.0);

    let series = squares(6);
    let mut buffer = FitBuffer::with_capacity(1);
    assert_relative_eq!(RegressionContext::new(&series, 4, 0, &mut buffer).fit(), 16.0);
}

/// A two-sample window puts zero weight on the far sample, so the slope
/// divides by zero.
#[test]
fn test_two_sample_window_is_non_finite() {
    let series: Series<f64> = [1.0, 2.0].into_iter().collect();
    for idx in 0..2 {
        let mut buffer = FitBuffer::with_capacity(2);
        let value = RegressionContext::new(&series, idx, 3, &mut buffer).fit();
        assert!(value.is_nan());
    }
}

/// With h = 1 the interior window has weights [0, 1, 0] and no spread.
#[test]
fn test_half_width_one_interior_is_non_finite() {
    let series = squares(6);
    let mut buffer = FitBuffer::with_capacity(3);
    assert!(RegressionContext::new(&series, 3, 1, &mut buffer).fit().is_nan());

    // Boundary windows are one-sided and keep their spread.
    let mut buffer = FitBuffer::with_capacity(3);
    assert!(RegressionContext::new(&series, 0, 1, &mut buffer).fit().is_finite());
}

// ============================================================================
// Reference Engine
// ============================================================================

/// The reference engine reproduces linear data.
#[test]
fn test_reference_linear() {
    let n = 20;
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 2.5 * xi - 1.0).collect();
    let span = reference_span(n, 3);

    for idx in 0..n {
        let mut buffer = FitBuffer::with_capacity(span);
        let value = ReferenceContext::new(&x, &y, idx, span, &mut buffer).fit();
        assert_abs_diff_eq!(value, y[idx], epsilon = 1e-9);
    }
}

/// A two-neighbour span collapses to the target value.
#[test]
fn test_reference_minimal_span() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| xi * xi).collect();
    let span = reference_span(10, 1);
    assert_eq!(span, 2);

    let mut buffer = FitBuffer::with_capacity(span);
    let value = ReferenceContext::new(&x, &y, 5, span, &mut buffer).fit();
    assert_relative_eq!(value, 25.0, epsilon = 1e-12);
}
