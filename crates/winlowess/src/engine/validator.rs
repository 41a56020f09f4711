//! Precondition checks for smoothing calls.
//!
//! ## Purpose
//!
//! Precondition violations are caller defects and must fail loudly instead of
//! being clamped. This module turns them into [`SmoothError`]s.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Values are not checked**: Non-finite sample values are allowed through;
//!   they propagate to the output like any other numeric degeneracy.
//!
//! ## Non-goals
//!
//! * This module does not check the unit-spacing invariant of positions.
//! * This module does not correct invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;
use crate::primitives::series::Series;

/// Validation utility for smoothing inputs and configuration.
pub struct Validator;

impl Validator {
    /// The series must contain at least one sample.
    pub fn validate_series<T: Float>(series: &Series<T>) -> Result<(), SmoothError> {
        if series.is_empty() {
            return Err(SmoothError::EmptyInput);
        }
        Ok(())
    }

    /// The target index must lie in `[0, len)`.
    pub fn validate_index(index: usize, len: usize) -> Result<(), SmoothError> {
        if index >= len {
            return Err(SmoothError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    /// Two paired sequences must have the same length.
    pub fn validate_lengths(left: usize, right: usize) -> Result<(), SmoothError> {
        if left != right {
            return Err(SmoothError::MismatchedInputs { left, right });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SmoothError> {
        if let Some(param) = duplicate_param {
            return Err(SmoothError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
