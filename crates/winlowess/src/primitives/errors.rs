//! Error types for windowed LOWESS operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the smoothing engine.
//! They are all caller errors: a defect in the surrounding driver logic rather
//! than a data-quality issue. Numeric degeneracy (a window with no spread) is
//! *not* an error; it propagates as a non-finite value in the output.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (index vs. length).
//! * **Deferred**: Builder misconfiguration is stored and reported by `build()`.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation itself (see `engine::validator`).
//! * This module does not provide recovery strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoothing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmoothError {
    /// The input series has no samples.
    EmptyInput,

    /// A target index lies outside `[0, len)`.
    IndexOutOfRange {
        /// Requested target index.
        index: usize,
        /// Number of samples in the series.
        len: usize,
    },

    /// Two sequences that must be paired point-for-point differ in length.
    MismatchedInputs {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// Generic invalid input with a descriptive message.
    InvalidInput(String),

    /// Engine name is not one of `custom` or `reference`.
    InvalidEngine(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input series is empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Target index {index} out of range for series of length {len}")
            }
            Self::MismatchedInputs { left, right } => {
                write!(f, "Length mismatch: {left} points vs {right} points")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidEngine(name) => {
                write!(f, "Invalid engine: '{name}' (expected 'custom' or 'reference')")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmoothError {}
