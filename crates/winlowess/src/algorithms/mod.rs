//! Layer 3: Algorithms
//!
//! This layer implements the local fits: the windowed weighted regression
//! kernel of the custom engine and the nearest-neighbour fit of the reference
//! engine. Both are orchestrated by the engine layer.

// Windowed weighted regression kernel.
pub mod regression;

// Nearest-neighbour reference smoother.
pub mod reference;
