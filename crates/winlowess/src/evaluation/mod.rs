//! Layer 4: Evaluation
//!
//! Post-processing of smoothed output: comparison against a reference
//! smoothing for differential testing.

/// Pointwise comparison metrics.
pub mod comparison;
