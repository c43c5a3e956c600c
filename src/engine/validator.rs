//! Input validation for fitter configuration.
//!
//! ## Purpose
//!
//! This module provides validation functions for the parameters a fitter is
//! built with: the learning rate, seed model parameters, and builder
//! bookkeeping.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Build-time checks**: Everything here runs once, when a builder turns
//!   into a fitter. Data-dependent conditions (point count, degeneracy) are
//!   guarded by the algorithms themselves, since points arrive only after
//!   construction.
//!
//! ## Invariants
//!
//! * All validated parameters satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not perform the fits or their data-dependent checks.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;
use crate::primitives::line::LineModel;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fitter configuration.
///
/// Provides static methods for validating builder parameters. All methods
/// return `Result<(), FitError>` and fail fast upon identifying the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Scalar Validation
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), FitError> {
        if !val.is_finite() {
            return Err(FitError::NonFiniteValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the gradient-descent learning rate.
    ///
    /// The rate must be finite and strictly positive. An upper bound is not
    /// enforced; a rate too large for the coordinate scale diverges rather
    /// than erroring, which is a documented caller responsibility.
    pub fn validate_learning_rate<T: Float>(rate: T) -> Result<(), FitError> {
        if !rate.is_finite() || rate <= T::zero() {
            return Err(FitError::InvalidLearningRate(
                rate.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a gradient-descent seed model.
    pub fn validate_seed<T: Float>(seed: &LineModel<T>) -> Result<(), FitError> {
        Self::validate_scalar(seed.slope, "seed slope")?;
        Self::validate_scalar(seed.intercept, "seed intercept")?;
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FitError> {
        if let Some(param) = duplicate_param {
            return Err(FitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
