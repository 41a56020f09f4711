//! Tests for the accepted input containers.

use approx::assert_relative_eq;
use fastWinlowess::prelude::*;
use ndarray::{s, Array1};

fn model() -> ParallelSmoother<f64> {
    WinLowess::new().half_width(2).build().unwrap()
}

#[test]
fn test_slice_vec_and_series_agree() {
    let values: Vec<f64> = (0..11).map(|i| (i * i) as f64).collect();
    let series: Series<f64> = values.iter().copied().collect();
    let model = model();

    let from_vec = model.fit(&values).unwrap();
    let from_slice = model.fit(values.as_slice()).unwrap();
    let from_series = model.fit(&series).unwrap();

    assert_eq!(from_vec.smoothed, from_slice.smoothed);
    assert_eq!(from_vec.smoothed, from_series.smoothed);
    assert_relative_eq!(from_vec.smoothed[5], 15318.0 / 599.0, epsilon = 1e-12);
}

#[test]
fn test_ndarray_input() {
    let values = Array1::from_iter((0..11).map(|i| (i * i) as f64));
    let result = model().fit(&values).unwrap();
    assert_eq!(result.positions, (0..11).collect::<Vec<i64>>());

    let view = values.view();
    assert_relative_eq!(model().evaluate_at(&view, 5).unwrap(), 15318.0 / 599.0, epsilon = 1e-12);
}

#[test]
fn test_non_contiguous_ndarray_rejected() {
    let values = Array1::from_iter((0..20).map(|i| i as f64));
    let strided = values.slice(s![..;2]);
    let err = model().fit(&strided).unwrap_err();
    assert!(matches!(err, SmoothError::InvalidInput(_)));
}

#[test]
fn test_errors_propagate() {
    let empty: Vec<f64> = Vec::new();
    assert_eq!(model().fit(&empty).unwrap_err(), SmoothError::EmptyInput);
    assert_eq!(
        model().evaluate_at(&vec![1.0, 2.0, 3.0], 3).unwrap_err(),
        SmoothError::IndexOutOfRange { index: 3, len: 3 }
    );
}
