#![cfg(feature = "dev")]
//! Tests for the smoothing driver.
//!
//! These tests verify:
//! - Engine selection and parsing
//! - Index-ordered assembly of per-index fits
//! - The injectable smooth pass hook

use approx::assert_relative_eq;

use winlowess::internals::engine::executor::{Engine, Executor, PointFitter, SmoothConfig};
use winlowess::internals::primitives::errors::SmoothError;
use winlowess::internals::primitives::series::Series;

fn fill_sevens(_series: &Series<f64>, _half_width: usize, _engine: Engine, out: &mut [f64]) {
    out.fill(7.0);
}

/// Engine names parse case-insensitively.
#[test]
fn test_engine_from_str() {
    assert_eq!("custom".parse::<Engine>(), Ok(Engine::Custom));
    assert_eq!(" Reference ".parse::<Engine>(), Ok(Engine::Reference));
    assert_eq!(
        "statsmodels".parse::<Engine>(),
        Err(SmoothError::InvalidEngine("statsmodels".into()))
    );
    assert_eq!(Engine::default(), Engine::Custom);
    assert_eq!(Engine::Reference.to_string(), "reference");
}

/// The sequential pass matches per-index fits.
#[test]
fn test_run_matches_point_fits() {
    let series: Series<f64> = (0..12).map(|i| ((i as f64) * 0.7).sin()).collect();
    let config = SmoothConfig::with_half_width(3);
    let output = Executor::run(&series, &config);

    assert_eq!(output.smoothed.len(), series.len());
    assert!(!output.custom_pass);

    let fitter = PointFitter::new(&series, 3, Engine::Custom);
    let mut buffer = fitter.buffer();
    for (i, &value) in output.smoothed.iter().enumerate() {
        assert_eq!(value.to_bits(), fitter.fit(i, &mut buffer).to_bits());
    }
}

/// The hook replaces the sequential pass only when parallel is requested.
#[test]
fn test_custom_smooth_pass() {
    let series: Series<f64> = (0..8).map(|i| i as f64).collect();

    let mut config = SmoothConfig::with_half_width(2);
    config.custom_smooth_pass = Some(fill_sevens);

    let output = Executor::run(&series, &config);
    assert!(!output.custom_pass);
    assert_relative_eq!(output.smoothed[3], 3.0, epsilon = 1e-12);

    config.parallel = true;
    let output = Executor::run(&series, &config);
    assert!(output.custom_pass);
    assert!(output.smoothed.iter().all(|&v| v == 7.0));
}

/// Buffer capacity tracks the largest window.
#[test]
fn test_window_capacity() {
    let series: Series<f64> = (0..10).map(|i| i as f64).collect();
    assert_eq!(PointFitter::new(&series, 2, Engine::Custom).window_capacity(), 5);
    assert_eq!(PointFitter::new(&series, 50, Engine::Custom).window_capacity(), 10);
    assert_eq!(PointFitter::new(&series, 2, Engine::Reference).window_capacity(), 4);
}

/// The reference engine is selectable through the config.
#[test]
fn test_run_reference_engine() {
    let series: Series<f64> = (0..15).map(|i| 4.0 - 0.5 * i as f64).collect();
    let config = SmoothConfig {
        engine: Engine::Reference,
        ..SmoothConfig::with_half_width(3)
    };
    let output = Executor::run(&series, &config);

    assert_eq!(output.engine, Engine::Reference);
    for (i, &value) in output.smoothed.iter().enumerate() {
        assert_relative_eq!(value, 4.0 - 0.5 * i as f64, epsilon = 1e-9);
    }
}
