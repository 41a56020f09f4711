//! Parallel and sequential passes must agree exactly.

use approx::assert_abs_diff_eq;
use fastWinlowess::prelude::*;

fn wave(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.3).sin() + 0.01 * i as f64).collect()
}

fn fit(values: &[f64], half_width: usize, engine: Engine, parallel: bool) -> SmoothResult<f64> {
    WinLowess::new()
        .half_width(half_width)
        .engine(engine)
        .parallel(parallel)
        .build()
        .unwrap()
        .fit(values)
        .unwrap()
}

#[test]
fn test_custom_engine_consistency() {
    let values = wave(500);
    for h in [1, 2, 5, 17, 600] {
        let seq = fit(&values, h, Engine::Custom, false);
        let par = fit(&values, h, Engine::Custom, true);

        assert_eq!(seq.len(), par.len());
        for i in 0..seq.len() {
            // Bitwise equality, including NaN from degenerate windows.
            assert_eq!(seq.smoothed[i].to_bits(), par.smoothed[i].to_bits(), "h={h} i={i}");
        }
    }
}

#[test]
fn test_reference_engine_consistency() {
    let values = wave(300);
    let seq = fit(&values, 6, Engine::Reference, false);
    let par = fit(&values, 6, Engine::Reference, true);

    for i in 0..seq.len() {
        assert_abs_diff_eq!(seq.smoothed[i], par.smoothed[i], epsilon = 0.0);
    }
}

#[test]
fn test_matches_core_crate() {
    let values = wave(120);
    let series = Series::from_values(values.iter().copied());
    let core = winlowess::smooth(&series, 4).unwrap();
    let par = fit(&values, 4, Engine::Custom, true);

    assert_eq!(core, par.smoothed);
}

#[test]
fn test_parallel_default() {
    let model = WinLowess::<f64>::new().build().unwrap();
    assert!(model.is_parallel());
    assert_eq!(model.half_width(), 5);

    let err = WinLowess::<f64>::new().parallel(true).parallel(false).build().unwrap_err();
    assert_eq!(err, SmoothError::DuplicateParameter { parameter: "parallel" });
}
