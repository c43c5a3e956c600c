//! Layer 3: Algorithms
//!
//! This layer implements the two line-fitting strategies: the closed-form
//! ordinary least-squares solve and the per-frame gradient-descent sweep.
//! It contains the numerical core but is orchestrated by the layers above.

// Closed-form ordinary least squares.
pub mod least_squares;

// Single-epoch gradient-descent sweep.
pub mod gradient;

/// Minimum number of points either strategy accepts.
///
/// One point leaves the slope underdetermined, so both the closed-form solve
/// and the gradient sweep reject smaller inputs.
pub const MIN_POINTS: usize = 2;
