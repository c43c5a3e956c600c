#![cfg(feature = "dev")]
//! Tests for point primitives.
//!
//! These tests verify the validated point type and the duplicate-free
//! point collection:
//! - Coordinate finiteness validation
//! - Insertion-order preservation
//! - Duplicate rejection
//! - Coordinate-slice accessors used by the fitting algorithms
//!
//! ## Test Organization
//!
//! 1. **Point Construction** - Finite and non-finite coordinates
//! 2. **Point Set Insertion** - Ordering and deduplication
//! 3. **Accessors** - Length, lookup, and coordinate slices

use approx::assert_relative_eq;

use linefit::internals::primitives::errors::FitError;
use linefit::internals::primitives::point::{Point, PointSet};

// ============================================================================
// Point Construction Tests
// ============================================================================

/// Test constructing a point from finite coordinates.
///
/// Verifies that both coordinates are stored unchanged.
#[test]
fn test_point_new_finite() {
    let p = Point::new(0.25f64, 0.75f64).unwrap();

    assert_relative_eq!(p.x, 0.25f64, epsilon = 1e-12);
    assert_relative_eq!(p.y, 0.75f64, epsilon = 1e-12);
}

/// Test that a NaN coordinate is rejected.
///
/// Verifies that the error names the offending coordinate.
#[test]
fn test_point_new_nan() {
    let x_err = Point::new(f64::NAN, 0.5).unwrap_err();
    let y_err = Point::new(0.5, f64::NAN).unwrap_err();

    assert!(matches!(x_err, FitError::NonFiniteValue(_)));
    assert!(matches!(y_err, FitError::NonFiniteValue(_)));
    assert!(format!("{}", x_err).contains("x="));
    assert!(format!("{}", y_err).contains("y="));
}

/// Test that infinite coordinates are rejected.
#[test]
fn test_point_new_infinite() {
    assert!(Point::new(f64::INFINITY, 0.0).is_err());
    assert!(Point::new(0.0, f64::NEG_INFINITY).is_err());
}

/// Test point construction with f32 coordinates.
#[test]
fn test_point_new_f32() {
    let p = Point::new(0.5f32, 0.5f32).unwrap();
    assert_relative_eq!(p.x, 0.5f32, epsilon = 1e-6);

    assert!(Point::new(f32::NAN, 0.5f32).is_err());
}

// ============================================================================
// Point Set Insertion Tests
// ============================================================================

/// Test that insertion preserves arrival order.
///
/// Verifies that points are stored in the order they were inserted, not
/// sorted by coordinate.
#[test]
fn test_point_set_insertion_order() {
    let mut points = PointSet::new();
    points.insert(Point::new(0.9f64, 0.1).unwrap());
    points.insert(Point::new(0.1f64, 0.9).unwrap());
    points.insert(Point::new(0.5f64, 0.5).unwrap());

    assert_relative_eq!(points.xs()[0], 0.9f64, epsilon = 1e-12);
    assert_relative_eq!(points.xs()[1], 0.1f64, epsilon = 1e-12);
    assert_relative_eq!(points.xs()[2], 0.5f64, epsilon = 1e-12);
}

/// Test that an exact duplicate is rejected.
///
/// Verifies that the set length does not change and insert reports false.
#[test]
fn test_point_set_duplicate_rejected() {
    let mut points = PointSet::new();
    let p = Point::new(0.3f64, 0.7).unwrap();

    assert!(points.insert(p));
    assert!(!points.insert(p));
    assert_eq!(points.len(), 1);
}

/// Test that points differing in only one coordinate are both kept.
///
/// Verifies that deduplication requires both coordinates to match.
#[test]
fn test_point_set_near_duplicates_kept() {
    let mut points = PointSet::new();
    points.insert(Point::new(0.3f64, 0.7).unwrap());

    assert!(points.insert(Point::new(0.3f64, 0.8).unwrap()));
    assert!(points.insert(Point::new(0.4f64, 0.7).unwrap()));
    assert_eq!(points.len(), 3);
}

/// Test that a duplicate insert leaves the stored order untouched.
#[test]
fn test_point_set_duplicate_preserves_order() {
    let mut points = PointSet::new();
    points.insert(Point::new(0.1f64, 0.1).unwrap());
    points.insert(Point::new(0.2f64, 0.2).unwrap());
    points.insert(Point::new(0.1f64, 0.1).unwrap());

    assert_eq!(points.len(), 2);
    assert_relative_eq!(points.xs()[1], 0.2f64, epsilon = 1e-12);
}

// ============================================================================
// Accessor Tests
// ============================================================================

/// Test contains, len, and is_empty bookkeeping.
#[test]
fn test_point_set_membership() {
    let mut points = PointSet::new();
    assert!(points.is_empty());

    let p = Point::new(0.5f64, 0.5).unwrap();
    points.insert(p);

    assert!(!points.is_empty());
    assert_eq!(points.len(), 1);
    assert!(points.contains(&p));
    assert!(!points.contains(&Point::new(0.5f64, 0.6).unwrap()));
}

/// Test indexed lookup.
///
/// Verifies that get returns the point at the given insertion index and
/// None past the end.
#[test]
fn test_point_set_get() {
    let mut points = PointSet::new();
    points.insert(Point::new(0.2f64, 0.3).unwrap());
    points.insert(Point::new(0.8f64, 0.7).unwrap());

    let second = points.get(1).unwrap();
    assert_relative_eq!(second.x, 0.8f64, epsilon = 1e-12);
    assert_relative_eq!(second.y, 0.7f64, epsilon = 1e-12);
    assert!(points.get(2).is_none());
}

/// Test that the coordinate slices stay parallel.
///
/// Verifies that xs and ys have equal length and line up index by index
/// with the inserted points.
#[test]
fn test_point_set_parallel_slices() {
    let mut points = PointSet::new();
    points.insert(Point::new(1.0f64, 10.0).unwrap());
    points.insert(Point::new(2.0f64, 20.0).unwrap());
    points.insert(Point::new(3.0f64, 30.0).unwrap());

    assert_eq!(points.xs().len(), points.ys().len());
    for (i, p) in points.iter().enumerate() {
        assert_relative_eq!(p.x, points.xs()[i], epsilon = 1e-12);
        assert_relative_eq!(p.y, points.ys()[i], epsilon = 1e-12);
    }
}

/// Test with_capacity produces an empty, usable set.
#[test]
fn test_point_set_with_capacity() {
    let mut points = PointSet::with_capacity(16);
    assert!(points.is_empty());

    points.insert(Point::new(0.5f64, 0.5).unwrap());
    assert_eq!(points.len(), 1);
}
