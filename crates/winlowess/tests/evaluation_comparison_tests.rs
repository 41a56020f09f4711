//! Tests for pointwise comparison metrics.

use approx::assert_relative_eq;

use winlowess::prelude::*;

/// Metrics over a simple difference vector.
#[test]
fn test_compute_metrics() {
    let smoothed = [1.0, 2.0, 3.0, 4.0];
    let reference = [1.5, 2.0, 2.0, 4.5];
    let cmp = Comparison::compute(&smoothed, &reference).unwrap();

    assert_eq!(cmp.difference, vec![0.5, 0.0, -1.0, 0.5]);
    assert_relative_eq!(cmp.max_abs, 1.0);
    assert_relative_eq!(cmp.mae, 0.5);
    assert_relative_eq!(cmp.rmse, (1.5_f64 / 4.0).sqrt());
    assert_eq!(cmp.non_finite, 0);
    assert!(cmp.within(1.0));
    assert!(!cmp.within(0.9));
}

/// Non-finite differences are counted but excluded from the metrics.
#[test]
fn test_non_finite_excluded() {
    let smoothed = [f64::NAN, 2.0, f64::INFINITY];
    let reference = [1.0, 3.0, 1.0];
    let cmp = Comparison::compute(&smoothed, &reference).unwrap();

    assert_eq!(cmp.non_finite, 2);
    assert!(cmp.difference[0].is_nan());
    assert_relative_eq!(cmp.max_abs, 1.0);
    assert_relative_eq!(cmp.mae, 1.0);
    assert!(!cmp.within(10.0));
}

/// All-non-finite input yields zero metrics.
#[test]
fn test_all_non_finite() {
    let cmp = Comparison::compute(&[f64::NAN], &[1.0]).unwrap();
    assert_eq!(cmp.non_finite, 1);
    assert_relative_eq!(cmp.rmse, 0.0);
}

/// Lengths must match.
#[test]
fn test_mismatched_lengths() {
    assert_eq!(
        Comparison::compute(&[1.0, 2.0], &[1.0]).unwrap_err(),
        SmoothError::MismatchedInputs { left: 2, right: 1 }
    );
}

/// Display lists every metric.
#[test]
fn test_display() {
    let cmp = Comparison::compute(&[1.0, 2.0], &[1.0, 2.5]).unwrap();
    let text = cmp.to_string();
    assert!(text.starts_with("Comparison:"));
    assert!(text.contains("Max |diff|:   0.500000"));
    assert!(text.contains("Non-finite:   0"));
}
