//! # fastWinlowess — parallel windowed LOWESS smoothing
//!
//! Extends [`winlowess`] with a rayon-backed smoothing pass and input adapters
//! for `ndarray`. Every index of the series is fitted independently, so the
//! output slots are split across worker threads with no shared mutable state.
//! Results are identical to the sequential driver.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastWinlowess::prelude::*;
//! use ndarray::Array1;
//!
//! let values = Array1::from_iter((0..200).map(|i| (i as f64 / 10.0).sin()));
//!
//! let model = WinLowess::<f64>::new()
//!     .half_width(5)
//!     .build()?;
//!
//! let result = model.fit(&values)?;
//! assert_eq!(result.len(), 200);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): parallel execution with rayon. Without it the builder
//!   falls back to the sequential pass.
//! * `dev`: exposes `fastWinlowess::internals` for tests and benchmarks.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel execution.
mod engine;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

// Standard fastWinlowess prelude.
pub mod prelude {
    pub use crate::api::{
        Comparison, Engine, ParallelSmoother, ParallelWinLowessBuilder as WinLowess, Sample, Series,
        SmoothError, SmoothInput, SmoothResult,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
