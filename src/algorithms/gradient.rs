//! Single-epoch gradient-descent sweep.
//!
//! ## Purpose
//!
//! This module advances a line model by exactly one pass over the point set.
//! It is the inner update of the stateful strategy: the caller carries the
//! model between calls and invokes the sweep once per animation frame, so
//! convergence emerges over many frames rather than within one call.
//!
//! ## Design notes
//!
//! * **Online updates**: Each point's correction applies immediately; the next
//!   point in the same sweep sees the parameters the previous point left
//!   behind, not a snapshot from sweep start. This sequential dependency is a
//!   semantic contract of the strategy. Never reorder the points, batch the
//!   corrections, or vectorize the loop.
//! * **No division**: The update rule has no denominator and therefore no
//!   degenerate input. With a learning rate too large for the coordinate
//!   scale the parameters can grow without bound; callers that care probe the
//!   returned model for finiteness.
//!
//! ## Invariants
//!
//! * Points are visited in slice order, exactly once each.
//! * The update per point `(x, y)` is, in order:
//!   `error = y - (m*x + b)`, then `m += rate*error*x`, then `b += rate*error`,
//!   with `error` computed from the pre-update `m`, `b` of that point.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::MIN_POINTS;
use crate::primitives::errors::FitError;
use crate::primitives::line::LineModel;

// ============================================================================
// Sweep
// ============================================================================

/// Advance `model` by one sweep over the coordinate slices.
///
/// Requires at least [`MIN_POINTS`] points, surfacing
/// [`FitError::InsufficientData`] otherwise. The sweep itself cannot fail;
/// divergence under an oversized learning rate shows up as non-finite
/// parameters in the returned model.
pub fn sweep<T: Float>(
    x: &[T],
    y: &[T],
    model: LineModel<T>,
    learning_rate: T,
) -> Result<LineModel<T>, FitError> {
    let n = x.len();
    if n < MIN_POINTS {
        return Err(FitError::InsufficientData {
            got: n,
            min: MIN_POINTS,
        });
    }

    let mut m = model.slope;
    let mut b = model.intercept;

    for i in 0..n {
        let xi = x[i];
        let error = y[i] - (m * xi + b);
        m = m + learning_rate * error * xi;
        b = b + learning_rate * error;
    }

    Ok(LineModel::new(m, b))
}
