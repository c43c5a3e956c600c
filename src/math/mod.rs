//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the fit
//! pipeline:
//! - Moment accumulation for the closed-form least-squares solve
//! - Linear rescaling between pixel and normalized coordinate spaces
//!
//! These are reusable mathematical building blocks with no strategy-specific
//! logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sum and centered-moment accumulation (scalar and SIMD).
pub mod accumulate;

/// Pixel-to-domain coordinate rescaling.
pub mod mapping;
