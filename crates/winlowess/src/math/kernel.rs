//! Tri-cube kernel and window weighting.
//!
//! ## Purpose
//!
//! This module maps offsets from a target point to regression weights. It
//! controls how strongly each neighbouring sample pulls on the local fit.
//!
//! ## Design notes
//!
//! * **Normalisation**: Offsets are divided by the largest absolute offset in
//!   the window, so every normalised coordinate lies in `[-1, 1]`.
//! * **Support**: The tri-cube curve is compactly supported on `[-1, 1]`; the
//!   window edge itself gets weight zero.
//!
//! ## Key concepts
//!
//! * **Tri-cube**: `K(u) = (1 - |u|^3)^3` for `|u| <= 1`, `0` otherwise.
//! * **Near/far thresholds**: The reference engine gives weight one to points
//!   within `0.001 * r` of the target and weight zero beyond `0.999 * r`.
//!
//! ## Invariants
//!
//! * Weights are non-negative and symmetric in the offset (`K(u) = K(-u)`).
//! * The target sample (`u = 0`) always receives weight one.
//!
//! ## Non-goals
//!
//! * This module does not normalise weights to sum to one.
//! * This module does not choose windows or bandwidths.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::window::Window;

/// Fraction of the window radius inside which a point counts as coincident.
const NEAR_THRESHOLD: f64 = 0.001;

/// Fraction of the window radius beyond which a point gets zero weight.
const FAR_THRESHOLD: f64 = 0.999;

// ============================================================================
// Kernel
// ============================================================================

/// Tri-cube weight of a normalised coordinate.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u > T::one() {
        return T::zero();
    }
    let tmp = T::one() - abs_u * abs_u * abs_u;
    tmp * tmp * tmp
}

/// Fill `weights` with the tri-cube weights of `offsets`, normalised by the
/// largest absolute offset in the window, and return their sum.
///
/// When every offset is zero (a single-sample window) the normalised
/// coordinates are all taken as zero, giving weight one.
pub fn window_weights<T: Float>(offsets: &[T], weights: &mut [T]) -> T {
    debug_assert_eq!(
        offsets.len(),
        weights.len(),
        "window_weights: offsets and weights must have the same length"
    );

    let scale = offsets
        .iter()
        .fold(T::zero(), |acc, &d| acc.max(d.abs()));

    let mut sum = T::zero();
    for (w, &d) in weights.iter_mut().zip(offsets) {
        let u = if scale > T::zero() { d / scale } else { T::zero() };
        *w = tricube(u);
        sum = sum + *w;
    }
    sum
}

/// Apply the thresholded tri-cube to a nearest-neighbour window.
///
/// `weights[k]` receives the weight of `x[window.start + k]`. Returns the sum
/// of weights.
pub fn neighbourhood_weights<T: Float>(
    x: &[T],
    window: Window,
    x_current: T,
    radius: T,
    weights: &mut [T],
) -> T {
    debug_assert_eq!(window.len(), weights.len());

    if radius <= T::zero() {
        weights.iter_mut().for_each(|w| *w = T::zero());
        return T::zero();
    }

    let h1 = T::from(NEAR_THRESHOLD).unwrap_or_else(T::zero) * radius;
    let h9 = T::from(FAR_THRESHOLD).unwrap_or_else(T::one) * radius;

    let mut sum = T::zero();
    for (w, &xj) in weights.iter_mut().zip(&x[window.range()]) {
        let distance = (xj - x_current).abs();
        *w = if distance <= h1 {
            T::one()
        } else if distance > h9 {
            T::zero()
        } else {
            tricube(distance / radius)
        };
        sum = sum + *w;
    }
    sum
}
