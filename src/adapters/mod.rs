//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the two fit strategies as user-facing fitters, plus
//! the session that drives one of them frame by frame:
//!
//! - **LeastSquares**: Stateless closed-form solve, recomputed per call
//! - **GradientDescent**: Stateful per-frame refinement with an epoch counter
//! - **Session**: Event handling and frame advancement over the active fitter
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Stateless closed-form least-squares fitter.
pub mod least_squares;

/// Stateful per-frame gradient-descent fitter.
pub mod gradient_descent;

/// Interactive session driving the active fitter.
pub mod session;
