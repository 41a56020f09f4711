//! Layer 2: Math
//!
//! Pure mathematical functions with no knowledge of series or drivers.

/// Kernel (weight) functions.
pub mod kernel;
