//! High-level API for interactive line fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate. It
//! implements a fluent builder pattern for configuring fit parameters and
//! choosing a strategy (LeastSquares or GradientDescent).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized strategy builders.
//! * **Validated**: Parameters are validated during fitter construction.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Fit Strategies**: Closed-form LeastSquares and per-frame GradientDescent.
//! * **Configuration Flow**: Builder pattern ending in `.strategy(Strategy::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the
//!   strategy builder.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LinefitBuilder`] via `Linefit::new()`.
//! 2. Chain configuration methods (`.learning_rate()`, `.seed()`).
//! 3. Select a strategy via `.strategy(Strategy::GradientDescent)` to get a
//!    strategy builder, then call `.build()` on it.

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use crate::adapters::gradient_descent::{GradientDescentBuilder, GradientDescentFitter};
pub use crate::adapters::least_squares::{LeastSquaresBuilder, LeastSquaresFitter};
pub use crate::adapters::session::{
    ActiveFitter, EventOutcome, Session, SessionEvent, StrategyKind,
};
pub use crate::engine::report::{FitStatus, FrameReport};
pub use crate::math::accumulate::MomentSolver;
pub use crate::math::mapping::Viewport;
pub use crate::primitives::errors::FitError;
pub use crate::primitives::line::LineModel;
pub use crate::primitives::point::{Point, PointSet};

/// Marker types for selecting fit strategies.
#[allow(non_snake_case)]
pub mod Strategy {
    pub use super::{GradientDescent, LeastSquares};
}

/// Fluent builder for configuring fit parameters and strategies.
#[derive(Debug, Clone)]
pub struct LinefitBuilder<T: Float> {
    /// Gradient-descent learning rate (GradientDescent only).
    pub learning_rate: Option<T>,

    /// Initial model the descent starts from (GradientDescent only).
    pub seed: Option<LineModel<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LinefitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LinefitBuilder<T> {
    /// Select a fit strategy to transition to a strategy builder.
    pub fn strategy<S>(self, _strategy: S) -> S::Output
    where
        S: FitStrategy<T>,
    {
        S::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            learning_rate: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Set the gradient-descent learning rate.
    pub fn learning_rate(mut self, rate: T) -> Self {
        if self.learning_rate.is_some() {
            self.duplicate_param = Some("learning_rate");
        }
        self.learning_rate = Some(rate);
        self
    }

    /// Set the initial model gradient descent starts from.
    pub fn seed(mut self, seed: LineModel<T>) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }
}

/// Trait for transitioning from the generic builder to a strategy builder.
pub trait FitStrategy<T: Float> {
    /// The output strategy builder.
    type Output;

    /// Convert a generic [`LinefitBuilder`] into a strategy-specific builder.
    fn convert(builder: LinefitBuilder<T>) -> Self::Output;
}

/// Marker for the stateless closed-form least-squares strategy.
#[derive(Debug, Clone, Copy)]
pub struct LeastSquares;

impl<T: Float> FitStrategy<T> for LeastSquares {
    type Output = LeastSquaresBuilder<T>;

    fn convert(builder: LinefitBuilder<T>) -> Self::Output {
        let mut result = LeastSquaresBuilder::default();

        // Gradient-only parameters (learning rate, seed) have no
        // least-squares counterpart and are dropped.
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for the stateful gradient-descent strategy.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent;

impl<T: Float> FitStrategy<T> for GradientDescent {
    type Output = GradientDescentBuilder<T>;

    fn convert(builder: LinefitBuilder<T>) -> Self::Output {
        let mut result = GradientDescentBuilder::default();

        // Override with user-provided values
        if let Some(rate) = builder.learning_rate {
            result.learning_rate = rate;
        }
        if let Some(seed) = builder.seed {
            result.seed = seed;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
