#![cfg(feature = "dev")]
//! Tests for the high-level fitting API.
//!
//! These tests verify the builder pattern and strategy selection:
//! - Base builder defaults and parameter recording
//! - Duplicate parameter detection across strategy conversion
//! - Conversion into the gradient-descent and least-squares builders
//! - Build-time validation errors and their messages
//! - Complete workflows from builder to session
//!
//! ## Test Organization
//!
//! 1. **Base Builder** - Defaults and setters
//! 2. **Duplicate Detection** - Repeated parameters fail the build
//! 3. **Strategy Conversion** - Parameter carry-over and drops
//! 4. **Build Validation** - Invalid configurations
//! 5. **Workflows** - Builder output driving a session

use approx::assert_relative_eq;

use linefit::internals::api::{
    FitError, GradientDescent, LeastSquares, LineModel, LinefitBuilder as Linefit, Point,
    PointSet, Session, SessionEvent, Strategy,
};

// ============================================================================
// Base Builder Tests
// ============================================================================

/// Test that a fresh builder has nothing configured.
#[test]
fn test_builder_defaults() {
    let builder = Linefit::<f64>::new();

    assert!(builder.learning_rate.is_none());
    assert!(builder.seed.is_none());
}

/// Test that setters record their values.
#[test]
fn test_builder_setters() {
    let builder = Linefit::new().learning_rate(0.1).seed(LineModel::new(1.0f64, 0.5));

    assert_eq!(builder.learning_rate, Some(0.1));
    assert_eq!(builder.seed, Some(LineModel::new(1.0, 0.5)));
}

// ============================================================================
// Duplicate Detection Tests
// ============================================================================

/// Test that setting the learning rate twice fails the build.
///
/// Verifies both the error variant and its message.
#[test]
fn test_duplicate_learning_rate() {
    let err = Linefit::<f64>::new()
        .learning_rate(0.1)
        .learning_rate(0.2)
        .strategy(GradientDescent)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        FitError::DuplicateParameter {
            parameter: "learning_rate"
        }
    );
    assert_eq!(
        format!("{}", err),
        "Parameter 'learning_rate' was set multiple times. \
         Each parameter can only be configured once."
    );
}

/// Test that setting the seed twice fails the build.
#[test]
fn test_duplicate_seed() {
    let err = Linefit::new()
        .seed(LineModel::new(1.0f64, 0.0))
        .seed(LineModel::new(2.0, 0.0))
        .strategy(GradientDescent)
        .build()
        .unwrap_err();

    assert_eq!(err, FitError::DuplicateParameter { parameter: "seed" });
}

/// Test that the duplicate flag survives conversion to least squares.
///
/// The dropped gradient-only value must not also drop the configuration
/// error it caused.
#[test]
fn test_duplicate_flag_survives_conversion() {
    let err = Linefit::<f64>::new()
        .learning_rate(0.1)
        .learning_rate(0.2)
        .strategy(LeastSquares)
        .build()
        .unwrap_err();

    assert!(matches!(err, FitError::DuplicateParameter { .. }));
}

// ============================================================================
// Strategy Conversion Tests
// ============================================================================

/// Test that gradient-descent conversion carries the configuration.
#[test]
fn test_gradient_conversion_carries_parameters() {
    let seed = LineModel::new(1.0f64, 0.5);
    let fitter = Linefit::new()
        .learning_rate(0.1)
        .seed(seed)
        .strategy(GradientDescent)
        .build()
        .unwrap();

    assert_relative_eq!(fitter.learning_rate(), 0.1f64, epsilon = 1e-12);
    assert_eq!(fitter.model(), seed);
    assert_eq!(fitter.iteration(), 0);
}

/// Test the gradient-descent defaults through the base builder.
///
/// An unconfigured build lands on learning rate 0.02 and the zero model.
#[test]
fn test_gradient_conversion_defaults() {
    let fitter = Linefit::<f64>::new().strategy(GradientDescent).build().unwrap();

    assert_relative_eq!(fitter.learning_rate(), 0.02f64, epsilon = 1e-12);
    assert_eq!(fitter.model(), LineModel::zero());
}

/// Test that least-squares conversion drops gradient-only parameters.
///
/// A configured learning rate has no closed-form counterpart; the build
/// still succeeds and the fitter works.
#[test]
fn test_least_squares_conversion_drops_parameters() {
    let fitter = Linefit::<f64>::new()
        .learning_rate(0.5)
        .strategy(LeastSquares)
        .build()
        .unwrap();

    let mut points = PointSet::new();
    points.insert(Point::new(0.1f64, 0.1).unwrap());
    points.insert(Point::new(0.9f64, 0.9).unwrap());

    let line = fitter.fit(&points).unwrap();
    assert_relative_eq!(line.slope, 1.0f64, epsilon = 1e-9);
}

/// Test selecting strategies through the namespace path.
#[test]
fn test_strategy_namespace() {
    let gradient = Linefit::<f64>::new().strategy(Strategy::GradientDescent).build();
    let least_squares = Linefit::<f64>::new().strategy(Strategy::LeastSquares).build();

    assert!(gradient.is_ok());
    assert!(least_squares.is_ok());
}

// ============================================================================
// Build Validation Tests
// ============================================================================

/// Test that an invalid learning rate fails the gradient build.
#[test]
fn test_invalid_learning_rate_fails_build() {
    let err = Linefit::<f64>::new()
        .learning_rate(-1.0)
        .strategy(GradientDescent)
        .build()
        .unwrap_err();

    assert_eq!(err, FitError::InvalidLearningRate(-1.0));
}

/// Test that a non-finite seed fails the gradient build.
#[test]
fn test_non_finite_seed_fails_build() {
    let err = Linefit::new()
        .seed(LineModel::new(f64::INFINITY, 0.0))
        .strategy(GradientDescent)
        .build()
        .unwrap_err();

    assert!(matches!(err, FitError::NonFiniteValue(_)));
}

/// Test the error readout for missing data.
#[test]
fn test_insufficient_data_message() {
    let err = FitError::InsufficientData { got: 1, min: 2 };

    assert_eq!(format!("{}", err), "Too few points: got 1, need at least 2");
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test a complete build-then-session workflow.
///
/// Verifies that a fitter from the builder drives a session to a fitted
/// frame.
#[test]
fn test_builder_to_session_workflow() {
    let fitter = Linefit::new()
        .learning_rate(0.1)
        .strategy(GradientDescent)
        .build()
        .unwrap();
    let mut session = Session::with_fitter(fitter);

    session.handle_event(SessionEvent::PrimaryClick(Point::new(0.2f64, 0.3).unwrap()));
    session.handle_event(SessionEvent::PrimaryClick(Point::new(0.8f64, 0.7).unwrap()));
    let report = session.advance_frame();

    assert!(report.should_draw());
    assert_relative_eq!(report.line.slope, 0.059216f64, epsilon = 1e-12);
    assert_relative_eq!(report.line.intercept, 0.09652f64, epsilon = 1e-12);
}
