//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer sits between the numerical core and the fitter adapters. It
//! validates configuration before a fitter is constructed and packages each
//! frame's outcome for the rendering collaborator.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Per-frame output types.
pub mod report;
