#![cfg(feature = "dev")]
//! Tests for input validation.

use winlowess::internals::engine::validator::Validator;
use winlowess::internals::evaluation::comparison::Comparison;
use winlowess::internals::primitives::errors::SmoothError;
use winlowess::internals::primitives::series::Series;

/// Empty series are rejected.
#[test]
fn test_validate_series() {
    assert_eq!(
        Validator::validate_series(&Series::<f64>::new()),
        Err(SmoothError::EmptyInput)
    );
    assert!(Validator::validate_series(&Series::from_values([1.0])).is_ok());
}

/// Target index must lie inside the series.
#[test]
fn test_validate_index() {
    assert!(Validator::validate_index(2, 3).is_ok());
    assert_eq!(
        Validator::validate_index(3, 3),
        Err(SmoothError::IndexOutOfRange { index: 3, len: 3 })
    );
}

/// Paired lengths must agree, and comparison reports the same error.
#[test]
fn test_validate_lengths() {
    assert!(Validator::validate_lengths(4, 4).is_ok());
    assert_eq!(
        Validator::validate_lengths(3, 5),
        Err(SmoothError::MismatchedInputs { left: 3, right: 5 })
    );

    let err = Comparison::<f64>::compute(&[1.0, 2.0, 3.0], &[1.0; 5]).unwrap_err();
    assert_eq!(err, Validator::validate_lengths(3, 5).unwrap_err());
}

/// Duplicate builder parameters are reported by name.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("half_width")),
        Err(SmoothError::DuplicateParameter { parameter: "half_width" })
    );
}
