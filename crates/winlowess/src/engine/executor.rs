//! Execution engine for smoothing passes.
//!
//! ## Purpose
//!
//! This module is the Smoothing Driver: it evaluates the selected engine at
//! every index of a series and assembles the results in index order.
//!
//! ## Design notes
//!
//! * **Engine selection** is explicit configuration ([`Engine`]), never
//!   process state.
//! * **Injectable pass**: [`SmoothConfig::custom_smooth_pass`] replaces the
//!   sequential loop. Extension crates use it to plug in parallel execution.
//! * **Buffer reuse**: One [`FitBuffer`] per worker, sized to the largest
//!   window, so the per-index loop does not allocate.
//!
//! ## Invariants
//!
//! * The output has exactly one value per input sample, in input order.
//! * Every index is computed independently from the read-only input; passes
//!   may evaluate indices in any order or concurrently.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not spawn threads itself (handled by extension crates).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::reference::{reference_span, ReferenceContext};
use crate::algorithms::regression::RegressionContext;
pub use crate::primitives::buffer::FitBuffer;
use crate::primitives::errors::SmoothError;
use crate::primitives::series::Series;

/// Half-width used when none is configured.
pub const DEFAULT_HALF_WIDTH: usize = 5;

// ============================================================================
// Engine Selection
// ============================================================================

/// Smoothing engine evaluated at each index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Engine {
    /// Windowed weighted regression kernel with shifted boundary windows.
    #[default]
    Custom,

    /// Nearest-neighbour span LOWESS, used as a comparison oracle.
    Reference,
}

impl Engine {
    /// Lower-case engine name, as accepted by [`FromStr`].
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Engine::Custom => "custom",
            Engine::Reference => "reference",
        }
    }
}

impl Display for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = SmoothError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("custom") {
            Ok(Engine::Custom)
        } else if name.eq_ignore_ascii_case("reference") {
            Ok(Engine::Reference)
        } else {
            Err(SmoothError::InvalidEngine(name.into()))
        }
    }
}

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom smooth pass: fill `out[i]` for every index of the
/// series.
#[doc(hidden)]
pub type SmoothPassFn<T> = fn(
    &Series<T>, // series
    usize,      // half_width
    Engine,     // engine
    &mut [T],   // output (one slot per sample)
);

/// Output of a smoothing run.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Smoothed values, one per input sample.
    pub smoothed: Vec<T>,

    /// Engine that produced them.
    pub engine: Engine,

    /// Whether the injected pass ran instead of the sequential loop.
    pub custom_pass: bool,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a smoothing run.
#[derive(Debug, Clone)]
pub struct SmoothConfig<T> {
    /// Nominal number of samples on each side of the target.
    pub half_width: usize,

    /// Engine evaluated at each index.
    pub engine: Engine,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Replacement for the sequential pass (enables parallel execution).
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,

    /// Use `custom_smooth_pass` when one is installed.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T> Default for SmoothConfig<T> {
    fn default() -> Self {
        Self {
            half_width: DEFAULT_HALF_WIDTH,
            engine: Engine::default(),
            custom_smooth_pass: None,
            parallel: false,
        }
    }
}

impl<T> SmoothConfig<T> {
    /// Config for `half_width` with the default engine.
    pub fn with_half_width(half_width: usize) -> Self {
        Self {
            half_width,
            ..Self::default()
        }
    }
}

// ============================================================================
// Point Fitter
// ============================================================================

/// Per-pass state shared by every index: the series plus whatever the engine
/// precomputes once (float positions and span for the reference engine).
///
/// A `PointFitter` is read-only after construction, so one instance can be
/// shared by concurrent workers, each holding its own [`FitBuffer`].
pub struct PointFitter<'a, T> {
    series: &'a Series<T>,
    positions: Vec<T>,
    half_width: usize,
    engine: Engine,
    span: usize,
}

impl<'a, T: Float> PointFitter<'a, T> {
    /// Prepare a fitter for `series`.
    pub fn new(series: &'a Series<T>, half_width: usize, engine: Engine) -> Self {
        let (positions, span) = match engine {
            Engine::Custom => (Vec::new(), 0),
            Engine::Reference => (
                series.positions_as_float(),
                reference_span(series.len(), half_width),
            ),
        };

        Self {
            series,
            positions,
            half_width,
            engine,
            span,
        }
    }

    /// Largest window any index can need.
    pub fn window_capacity(&self) -> usize {
        match self.engine {
            Engine::Custom => self
                .half_width
                .saturating_mul(2)
                .saturating_add(1)
                .min(self.series.len()),
            Engine::Reference => self.span.min(self.series.len()),
        }
    }

    /// Allocate a scratch buffer sized for this fitter.
    pub fn buffer(&self) -> FitBuffer<T> {
        FitBuffer::with_capacity(self.window_capacity())
    }

    /// Smoothed value at `idx`.
    pub fn fit(&self, idx: usize, buffer: &mut FitBuffer<T>) -> T {
        let value = match self.engine {
            Engine::Custom => RegressionContext::new(self.series, idx, self.half_width, buffer).fit(),
            Engine::Reference => {
                ReferenceContext::new(&self.positions, self.series.values(), idx, self.span, buffer).fit()
            }
        };

        if !value.is_finite() {
            trace!(index = idx, engine = self.engine.name(), "non-finite local fit");
        }

        value
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Smoothing driver.
pub struct Executor;

impl Executor {
    /// Smooth every sample of `series` according to `config`.
    ///
    /// The caller guarantees a non-empty series.
    pub fn run<T: Float>(series: &Series<T>, config: &SmoothConfig<T>) -> ExecutorOutput<T> {
        let n = series.len();
        let mut smoothed = vec![T::zero(); n];
        let pass = config.custom_smooth_pass.filter(|_| config.parallel);

        debug!(
            points = n,
            half_width = config.half_width,
            engine = config.engine.name(),
            custom_pass = pass.is_some(),
            "running smoothing pass"
        );

        match pass {
            Some(pass) => pass(series, config.half_width, config.engine, &mut smoothed),
            None => Self::smooth_pass(series, config.half_width, config.engine, &mut smoothed),
        }

        ExecutorOutput {
            smoothed,
            engine: config.engine,
            custom_pass: pass.is_some(),
        }
    }

    /// Sequential pass over all indices, reusing one scratch buffer.
    pub fn smooth_pass<T: Float>(series: &Series<T>, half_width: usize, engine: Engine, out: &mut [T]) {
        debug_assert_eq!(series.len(), out.len());

        let fitter = PointFitter::new(series, half_width, engine);
        let mut buffer = fitter.buffer();
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = fitter.fit(i, &mut buffer);
        }
    }
}
