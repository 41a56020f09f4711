//! Parallel execution engine for windowed smoothing.
//!
//! ## Purpose
//!
//! This module provides the parallel smoothing pass that is injected into the
//! `winlowess` driver through its `SmoothPassFn` hook.
//!
//! ## Design notes
//!
//! * **Drop-in**: Same signature and output as the sequential pass.
//! * **Parallelism**: `rayon` splits the output slots across worker threads.
//!   Each index reads only the shared, immutable series.
//! * **Buffer reuse**: One scratch buffer per rayon work split
//!   (`for_each_init`).
//!
//! ## Invariants
//!
//! * Results are bitwise identical to the sequential pass: every index runs
//!   the same arithmetic in the same order.
//! * `out` has one slot per sample.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not configure the rayon thread pool.

// External dependencies
use rayon::prelude::*;
use num_traits::Float;
use tracing::debug;

// Export dependencies from winlowess crate
use winlowess::internals::engine::executor::{Engine, PointFitter};
use winlowess::internals::primitives::series::Series;

/// Smooth every index of `series` in parallel, writing into `out`.
pub fn smooth_pass_parallel<T>(series: &Series<T>, half_width: usize, engine: Engine, out: &mut [T])
where
    T: Float + Send + Sync,
{
    debug_assert_eq!(series.len(), out.len());

    let fitter = PointFitter::new(series, half_width, engine);

    debug!(
        points = out.len(),
        threads = rayon::current_num_threads(),
        engine = engine.name(),
        "parallel smoothing pass"
    );

    out.par_iter_mut()
        .enumerate()
        .for_each_init(|| fitter.buffer(), |buffer, (i, slot)| {
            *slot = fitter.fit(i, buffer);
        });
}
