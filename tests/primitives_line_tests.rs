#![cfg(feature = "dev")]
//! Tests for the line model primitive.
//!
//! ## Test Organization
//!
//! 1. **Construction** - new, zero, and Default
//! 2. **Prediction** - Evaluating the line at a given x
//! 3. **Finiteness** - Detecting diverged coefficients

use approx::assert_relative_eq;

use linefit::internals::primitives::line::LineModel;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that new stores slope and intercept unchanged.
#[test]
fn test_line_model_new() {
    let line = LineModel::new(2.0f64, -1.0f64);

    assert_relative_eq!(line.slope, 2.0f64, epsilon = 1e-12);
    assert_relative_eq!(line.intercept, -1.0f64, epsilon = 1e-12);
}

/// Test that zero and Default agree.
///
/// Verifies that the starting model for a fresh session is the flat line
/// through the origin.
#[test]
fn test_line_model_zero_default() {
    let zero = LineModel::<f64>::zero();
    let default = LineModel::<f64>::default();

    assert_eq!(zero, default);
    assert_relative_eq!(zero.slope, 0.0f64, epsilon = 1e-12);
    assert_relative_eq!(zero.intercept, 0.0f64, epsilon = 1e-12);
}

// ============================================================================
// Prediction Tests
// ============================================================================

/// Test predict evaluates slope * x + intercept.
#[test]
fn test_line_model_predict() {
    let line = LineModel::new(3.0f64, 1.0f64);

    assert_relative_eq!(line.predict(0.0), 1.0f64, epsilon = 1e-12);
    assert_relative_eq!(line.predict(2.0), 7.0f64, epsilon = 1e-12);
    assert_relative_eq!(line.predict(-1.0), -2.0f64, epsilon = 1e-12);
}

// ============================================================================
// Finiteness Tests
// ============================================================================

/// Test is_finite over finite and non-finite coefficients.
///
/// Verifies that a NaN or infinite coefficient in either position marks
/// the model as diverged.
#[test]
fn test_line_model_is_finite() {
    assert!(LineModel::new(1.0f64, 2.0).is_finite());
    assert!(!LineModel::new(f64::NAN, 2.0).is_finite());
    assert!(!LineModel::new(1.0, f64::INFINITY).is_finite());
    assert!(!LineModel::new(f64::NEG_INFINITY, f64::NAN).is_finite());
}
