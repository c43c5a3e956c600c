//! The fitted line model.
//!
//! ## Purpose
//!
//! This module defines the output type shared by every fit strategy: a line
//! in slope/intercept form. Closed-form least squares produces one per call;
//! gradient descent carries one across frames as its mutable state.
//!
//! ## Design notes
//!
//! * **Representation**: Slope/intercept (`y = m·x + b`) rather than
//!   two-point form, because both strategies naturally produce and update
//!   those two parameters.
//! * **Finiteness**: A model can hold non-finite parameters transiently (a
//!   diverging gradient-descent run overflows before it is caught), so the
//!   type exposes `is_finite` for the probe instead of validating in the
//!   constructor.

// External dependencies
use num_traits::Float;

// ============================================================================
// LineModel
// ============================================================================

/// A line in slope/intercept form: `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineModel<T: Float> {
    /// Slope (`m`).
    pub slope: T,

    /// Intercept (`b`).
    pub intercept: T,
}

impl<T: Float> LineModel<T> {
    /// Create a model from explicit parameters.
    pub fn new(slope: T, intercept: T) -> Self {
        Self { slope, intercept }
    }

    /// The flat line through the origin (`m = 0`, `b = 0`).
    ///
    /// This is the conventional gradient-descent seed.
    pub fn zero() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
        }
    }

    /// Evaluate the line at `x`.
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Whether both parameters are finite.
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

impl<T: Float> Default for LineModel<T> {
    fn default() -> Self {
        Self::zero()
    }
}
