//! Closed-form ordinary least squares.
//!
//! ## Purpose
//!
//! This module computes the exact line minimizing the sum of squared vertical
//! residuals over a point set, in one shot. It is the stateless strategy: each
//! call starts from the coordinates alone and remembers nothing.
//!
//! ## Design notes
//!
//! * **Mean-centering**: The slope comes from centered moments
//!   (`Sxy / Sxx` around the coordinate means) rather than the raw
//!   `sum(xy) - n*mx*my` form, which cancels catastrophically for clustered
//!   coordinates.
//! * **Degeneracy**: When every x-coordinate is the same the slope is
//!   mathematically undefined. The test runs on the coordinates with exact
//!   equality, not on the centered moment, because `Sxx` can round to a tiny
//!   nonzero value when the mean of identical values does not reproduce them
//!   exactly.
//! * **Accumulation**: Both passes dispatch through [`MomentSolver`], so f32
//!   and f64 inputs take the SIMD lanes while other floats fall back to the
//!   scalar loop.
//!
//! ## Invariants
//!
//! * A returned model is always computed from finite moments; degenerate
//!   inputs surface as an error, never as NaN or infinity in the model.

// Internal dependencies
use crate::algorithms::MIN_POINTS;
use crate::math::accumulate::MomentSolver;
use crate::primitives::errors::FitError;
use crate::primitives::line::LineModel;

// ============================================================================
// Closed-Form Solve
// ============================================================================

/// Fit a line to the coordinate slices by ordinary least squares.
///
/// Requires at least [`MIN_POINTS`] points and at least two distinct
/// x-coordinates; violations surface as [`FitError::InsufficientData`] and
/// [`FitError::DegenerateFit`] respectively.
pub fn fit_ols<T: MomentSolver>(x: &[T], y: &[T]) -> Result<LineModel<T>, FitError> {
    let n = x.len();
    if n < MIN_POINTS {
        return Err(FitError::InsufficientData {
            got: n,
            min: MIN_POINTS,
        });
    }

    // Degeneracy is tested on the coordinates, not on Sxx: the centered
    // moment can round to a tiny nonzero value when the mean of identical
    // x-values does not reproduce them exactly.
    let x0 = x[0];
    if x.iter().all(|&v| v == x0) {
        return Err(FitError::DegenerateFit {
            x: x0.to_f64().unwrap_or(f64::NAN),
        });
    }

    let n_t = T::from(n).unwrap();
    let (sum_x, sum_y) = T::accumulate_sums(x, y);
    let x_mean = sum_x / n_t;
    let y_mean = sum_y / n_t;

    let (sxx, sxy) = T::accumulate_centered(x, y, x_mean, y_mean);

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    Ok(LineModel::new(slope, intercept))
}
