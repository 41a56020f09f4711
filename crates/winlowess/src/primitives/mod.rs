//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data model, windowing, scratch buffers and error
//! types used throughout the crate. It has zero internal dependencies within
//! the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Time-series samples.
pub mod series;

/// Windowing logic.
pub mod window;

/// Shared error types.
pub mod errors;

/// Scratch buffers.
pub mod buffer;
