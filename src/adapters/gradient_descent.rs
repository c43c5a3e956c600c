//! Gradient-descent adapter for frame-driven line fitting.
//!
//! ## Purpose
//!
//! This module provides the stateful fit strategy: the fitter owns the
//! current line model, the learning rate, and an epoch counter, and refines
//! the model by exactly one sweep each time it is stepped. Convergence is a
//! property of many frames, never of one call.
//!
//! ## Design notes
//!
//! * **Ownership**: All mutable fit state lives in the fitter instance; there
//!   are no globals. The host drops the fitter to discard a run.
//! * **Counting**: The counter advances by one per successful step, before
//!   the sweep runs, and counts epochs rather than points.
//! * **Reset hooks**: The interactive path never resets; state survives for
//!   the process lifetime. `reset` and `reset_to` exist for hosts that add
//!   strategy switching, where re-seeding from the last displayed model
//!   avoids a visible snap back to the origin.
//!
//! ## Key concepts
//!
//! * **Learning rate**: Fixed at build time. The library default is 0.02;
//!   the original interactive tool passed 0.1 on its frame path, and both
//!   remain reasonable for unit-square coordinates. Oversized rates diverge
//!   rather than error.
//!
//! ## Invariants
//!
//! * The iteration counter never decreases except through `reset`/`reset_to`.
//! * A failed step (too few points) leaves the model and counter untouched.
//!
//! ## Non-goals
//!
//! * This adapter does not detect divergence; the session layer probes the
//!   model for finiteness when packaging a frame.
//! * This adapter does not batch or parallelize the sweep.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::gradient::sweep;
use crate::algorithms::MIN_POINTS;
use crate::engine::validator::Validator;
use crate::primitives::errors::FitError;
use crate::primitives::line::LineModel;
use crate::primitives::point::PointSet;

// ============================================================================
// Gradient-Descent Builder
// ============================================================================

/// Builder for the gradient-descent fitter.
#[derive(Debug, Clone)]
pub struct GradientDescentBuilder<T: Float> {
    /// Per-point update scale. Library default 0.02.
    pub learning_rate: T,

    /// Initial model the descent starts from. Default (0, 0).
    pub seed: LineModel<T>,

    /// Deferred error from strategy conversion.
    pub deferred_error: Option<FitError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for GradientDescentBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GradientDescentBuilder<T> {
    /// Create a new gradient-descent builder with default parameters.
    fn new() -> Self {
        Self {
            learning_rate: T::from(0.02).unwrap(),
            seed: LineModel::zero(),
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the learning rate.
    pub fn learning_rate(mut self, rate: T) -> Self {
        self.learning_rate = rate;
        self
    }

    /// Set the initial model the descent starts from.
    pub fn seed(mut self, seed: LineModel<T>) -> Self {
        self.seed = seed;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the fitter.
    pub fn build(self) -> Result<GradientDescentFitter<T>, FitError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate parameters
        Validator::validate_learning_rate(self.learning_rate)?;
        Validator::validate_seed(&self.seed)?;

        Ok(GradientDescentFitter {
            model: self.seed,
            learning_rate: self.learning_rate,
            iteration: 0,
        })
    }
}

// ============================================================================
// Gradient-Descent Fitter
// ============================================================================

/// Stateful gradient-descent fitter advancing one sweep per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescentFitter<T: Float> {
    /// Current line model, refined in place across steps.
    model: LineModel<T>,

    /// Per-point update scale, fixed at build time.
    learning_rate: T,

    /// Number of completed sweeps since construction or the last reset.
    iteration: usize,
}

impl<T: Float> Default for GradientDescentFitter<T> {
    /// A fitter with the library-default learning rate and a zero seed.
    fn default() -> Self {
        Self {
            model: LineModel::zero(),
            learning_rate: T::from(0.02).unwrap(),
            iteration: 0,
        }
    }
}

impl<T: Float> GradientDescentFitter<T> {
    // ========================================================================
    // Stepping
    // ========================================================================

    /// Advance the model by one sweep over the point set.
    ///
    /// Increments the iteration counter by exactly one, then applies the
    /// per-point updates in insertion order. Requires at least two points;
    /// a failed call leaves the fitter untouched.
    pub fn step(&mut self, points: &PointSet<T>) -> Result<LineModel<T>, FitError> {
        let n = points.len();
        if n < MIN_POINTS {
            return Err(FitError::InsufficientData {
                got: n,
                min: MIN_POINTS,
            });
        }

        self.iteration += 1;
        self.model = sweep(points.xs(), points.ys(), self.model, self.learning_rate)?;

        Ok(self.model)
    }

    // ========================================================================
    // Reset Hooks
    // ========================================================================

    /// Reset to the zero model and a zero counter.
    pub fn reset(&mut self) {
        self.model = LineModel::zero();
        self.iteration = 0;
    }

    /// Re-seed from an explicit model, zeroing the counter.
    ///
    /// Intended for hosts that switch strategies mid-session: seeding from
    /// the model most recently displayed avoids a visible snap back to the
    /// origin. The counter restarts because sweeps before the re-seed did
    /// not produce the new trajectory.
    pub fn reset_to(&mut self, model: LineModel<T>) {
        self.model = model;
        self.iteration = 0;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The current line model.
    pub fn model(&self) -> LineModel<T> {
        self.model
    }

    /// The learning rate the fitter was built with.
    pub fn learning_rate(&self) -> T {
        self.learning_rate
    }

    /// Number of completed sweeps since construction or the last reset.
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}
