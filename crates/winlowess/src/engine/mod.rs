//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer drives the smoothing pass: it validates inputs, evaluates the
//! selected engine at every index and packages the output.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Smoothing driver and engine selection.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for smoothing runs.
pub mod output;
