//! Validated 2D points and the insertion-ordered point set.
//!
//! ## Purpose
//!
//! This module provides the two data structures the fit strategies consume:
//! a `Point` validated at construction, and a `PointSet` that grows one point
//! at a time as the user clicks the canvas.
//!
//! ## Design notes
//!
//! * **Storage**: The set stores coordinates as parallel x/y vectors, so the
//!   fit algorithms consume plain coordinate slices without gathering.
//! * **Membership**: Duplicate detection uses exact component-wise equality;
//!   there is no epsilon tolerance. Normalized click coordinates rarely repeat
//!   exactly, which is a known fragility kept deliberately.
//! * **Growth**: The set only grows by append. There is no removal operation;
//!   the reserved secondary-click input stays a no-op at the session layer.
//!
//! ## Key concepts
//!
//! * **Normalized coordinates**: Points live in the unit square `[0, 1]²`,
//!   independent of display resolution. The bound is enforced by the viewport
//!   mapping at the edge, not by the constructor, since the fit algorithms
//!   are well-defined for any finite coordinates.
//! * **Insertion order**: Preserved exactly. The gradient-descent sweep
//!   depends on it, so the set never reorders.
//!
//! ## Invariants
//!
//! * Both coordinate vectors always have the same length.
//! * Every stored coordinate is finite (constructor-validated), so exact
//!   equality membership is well-defined (no NaN in the set).
//! * No two stored points compare equal.
//!
//! ## Non-goals
//!
//! * This module does not clamp points to the unit square (viewport's job).
//! * This module does not provide removal or reordering.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Point
// ============================================================================

/// A 2D point in normalized coordinates. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Float> {
    /// Horizontal coordinate.
    pub x: T,

    /// Vertical coordinate.
    pub y: T,
}

impl<T: Float> Point<T> {
    /// Create a point, rejecting NaN or infinite components.
    pub fn new(x: T, y: T) -> Result<Self, FitError> {
        if !x.is_finite() {
            return Err(FitError::NonFiniteValue(format!(
                "x={}",
                x.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if !y.is_finite() {
            return Err(FitError::NonFiniteValue(format!(
                "y={}",
                y.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(Self { x, y })
    }
}

// ============================================================================
// PointSet
// ============================================================================

/// An insertion-ordered, duplicate-free collection of 2D points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet<T> {
    /// x-coordinates in insertion order.
    xs: Vec<T>,

    /// y-coordinates in insertion order.
    ys: Vec<T>,
}

impl<T: Float> PointSet<T> {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    /// Create an empty point set with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    /// Append a point unless an equal point is already present.
    ///
    /// Membership is tested by exact component-wise equality before
    /// insertion. Returns whether the point was inserted; a duplicate is a
    /// no-op returning `false`.
    pub fn insert(&mut self, point: Point<T>) -> bool {
        if self.contains(&point) {
            return false;
        }
        self.xs.push(point.x);
        self.ys.push(point.y);
        true
    }

    /// Check whether an equal point is already stored.
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .any(|(&x, &y)| x == point.x && y == point.y)
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The point at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<Point<T>> {
        match (self.xs.get(index), self.ys.get(index)) {
            (Some(&x), Some(&y)) => Some(Point { x, y }),
            _ => None,
        }
    }

    /// x-coordinates as a slice, in insertion order.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// y-coordinates as a slice, in insertion order.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Point { x, y })
    }
}

impl<T: Float> Default for PointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
