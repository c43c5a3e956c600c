//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures shared by every other
//! layer: the validated 2D point, the insertion-ordered point set, the line
//! model, and the crate-wide error type. It has zero internal dependencies
//! within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Validated 2D points and the insertion-ordered point set.
pub mod point;

/// Line model (slope and intercept).
pub mod line;

/// Shared error types.
pub mod errors;
