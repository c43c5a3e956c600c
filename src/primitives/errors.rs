//! Error types for line-fitting operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while fitting a line
//! to an interactive point set, including input validation, parameter
//! constraints, and degenerate fit geometry.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. required counts).
//! * **Deferred**: Errors may be caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Non-finite coordinates, too few points.
//! 2. **Parameter validation**: Invalid learning rate, duplicate builder parameters.
//! 3. **Fit geometry**: Zero x-variance makes the slope undefined.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric context values are narrowed to `f64` regardless of the fit precision.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for line-fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Number of points is below the minimum required for a line fit.
    InsufficientData {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// All x-coordinates are equal, so the least-squares slope is undefined.
    DegenerateFit {
        /// The shared x-coordinate of the degenerate set.
        x: f64,
    },

    /// A coordinate or seed component is NaN or infinite.
    NonFiniteValue(String),

    /// Learning rate must be positive and finite.
    InvalidLearningRate(f64),

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InsufficientData { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::DegenerateFit { x } => {
                write!(f, "Degenerate fit: all x-coordinates equal {x}, slope is undefined")
            }
            Self::NonFiniteValue(s) => write!(f, "Non-finite value: {s}"),
            Self::InvalidLearningRate(rate) => {
                write!(f, "Invalid learning rate: {rate} (must be > 0 and finite)")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FitError {}
