//! # winlowess — windowed LOWESS smoothing for time series
//!
//! A small smoothing engine for evenly spaced, integer-indexed series. At each
//! index it selects a fixed-size window of neighbours, weights them with the
//! tri-cube kernel, fits a weighted least-squares line and reports the line's
//! value at the target.
//!
//! ## Quick Start
//!
//! ```rust
//! use winlowess::prelude::*;
//!
//! let series: Series<f64> = (0..10).map(|i| (i * i) as f64).collect();
//!
//! let model = WinLowess::new()
//!     .half_width(2)
//!     .compute_residuals(true)
//!     .build()?;
//!
//! let result = model.fit(&series)?;
//! assert_eq!(result.len(), series.len());
//!
//! println!("{}", result);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! For one-off calls, [`smooth`] and [`evaluate_at`] skip the builder:
//!
//! ```rust
//! use winlowess::{evaluate_at, smooth, Series};
//!
//! let series = Series::from_values([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
//! let smoothed = smooth(&series, 2)?;
//! let middle = evaluate_at(&series, 3, 2)?;
//! assert_eq!(smoothed[3], middle);
//! # Result::<(), winlowess::SmoothError>::Ok(())
//! ```
//!
//! ## Engines
//!
//! | Engine      | Window                                     | Fit                                  |
//! |-------------|--------------------------------------------|--------------------------------------|
//! | `Custom`    | `2h + 1` samples, shifted inward at edges  | Two-pass WLS on signed offsets       |
//! | `Reference` | Nearest neighbours, span from `2h / n`     | Tolerant WLS at the target position  |
//!
//! The reference engine exists for differential comparison
//! ([`SmoothResult::compare`](prelude::SmoothResult::compare)).
//!
//! ## Degenerate windows
//!
//! The window edges get weight zero, so a window with no weighted spread
//! (two samples, or an interior window with `h = 1`) divides by zero and
//! yields a non-finite value. This is reported as-is rather than replaced;
//! consumers must tolerate NaN in the output. A single-sample window returns
//! that sample's value.
//!
//! ## `no_std` support
//!
//! Disable default features to build without `std` (requires `alloc`):
//!
//! ```toml
//! [dependencies]
//! winlowess = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - local fits.
mod algorithms;

// Layer 4: Evaluation - post-processing and comparison.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API.
mod api;

pub use crate::api::{evaluate_at, smooth, Series, SmoothError};

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        evaluate_at, smooth, Comparison, Engine, Sample, Series, SmoothError, SmoothResult, Smoother,
        WinLowessBuilder as WinLowess,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
