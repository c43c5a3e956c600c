//! Least-squares adapter for one-shot line fitting.
//!
//! ## Purpose
//!
//! This module provides the stateless fit strategy: every call recomputes the
//! closed-form least-squares line from the current point set alone. There is
//! no carried state and no iteration counter.
//!
//! ## Design notes
//!
//! * **Statelessness**: The fitter holds no data; two calls on the same set
//!   give identical results, and calls on different sets do not interact.
//! * **Configuration**: The strategy has no tunable parameters. The builder
//!   exists for symmetry with the gradient-descent path and still performs
//!   the shared bookkeeping checks. Both types carry the float type as a
//!   phantom so precision flows through the builder chain.
//!
//! ## Key concepts
//!
//! * **Exact optimum**: The returned model minimizes the sum of squared
//!   vertical residuals exactly; there is nothing to converge.
//!
//! ## Non-goals
//!
//! * This adapter does not track iterations; the counter is meaningless for
//!   a closed-form solve.
//! * This adapter does not keep any memory of prior calls.

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::least_squares::fit_ols;
use crate::engine::validator::Validator;
use crate::math::accumulate::MomentSolver;
use crate::primitives::errors::FitError;
use crate::primitives::line::LineModel;
use crate::primitives::point::PointSet;

// ============================================================================
// Least-Squares Builder
// ============================================================================

/// Builder for the least-squares fitter.
#[derive(Debug, Clone)]
pub struct LeastSquaresBuilder<T: Float> {
    /// Deferred error from strategy conversion.
    pub deferred_error: Option<FitError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for LeastSquaresBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LeastSquaresBuilder<T> {
    /// Create a new least-squares builder.
    fn new() -> Self {
        Self {
            deferred_error: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the fitter.
    pub fn build(self) -> Result<LeastSquaresFitter<T>, FitError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(LeastSquaresFitter::default())
    }
}

// ============================================================================
// Least-Squares Fitter
// ============================================================================

/// Stateless closed-form least-squares fitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeastSquaresFitter<T: Float> {
    _marker: PhantomData<T>,
}

impl<T: Float> Default for LeastSquaresFitter<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: MomentSolver> LeastSquaresFitter<T> {
    /// Fit a line to the current point set from scratch.
    ///
    /// Requires at least two points with at least two distinct x-coordinates;
    /// see [`FitError::InsufficientData`] and [`FitError::DegenerateFit`].
    pub fn fit(&self, points: &PointSet<T>) -> Result<LineModel<T>, FitError> {
        fit_ols(points.xs(), points.ys())
    }
}
