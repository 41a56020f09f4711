//! Layer 5: Engine
//!
//! Parallel replacements for the `winlowess` smoothing pass.

// Parallel execution engine using CPU threads
#[cfg(feature = "cpu")]
pub mod executor;
