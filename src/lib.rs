//! # linefit — Interactive linear fitting for Rust
//!
//! A small frame-driven core for interactive line-fit visualizations: place
//! 2D points, watch a line `y = m·x + b` fit them in real time, by either
//! closed-form least squares or per-frame gradient descent.
//!
//! ## What does it do?
//!
//! The crate owns the model-fitting logic of an interactive scatter tool. A
//! host loop feeds it clicks (as normalized points) and calls it once per
//! animation frame; it returns the current slope, intercept, and iteration
//! count for display. Two strategies are provided: **least squares** solves
//! the exact optimum from scratch each call, while **gradient descent**
//! carries its model across frames and refines it by one sweep per call, so
//! convergence becomes something you can watch.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! // Build the fitter the interactive tool uses
//! let fitter = Linefit::new()
//!     .learning_rate(0.1)         // Interactive-path rate
//!     .strategy(GradientDescent)
//!     .build()?;
//!
//! // Drive a session: two clicks, then one frame
//! let mut session = Session::with_fitter(fitter);
//! session.handle_event(SessionEvent::PrimaryClick(Point::new(0.2, 0.3)?));
//! session.handle_event(SessionEvent::PrimaryClick(Point::new(0.8, 0.7)?));
//!
//! let report = session.advance_frame();
//! println!("{}", report);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ```text
//! m = 0.05922 b = 0.09652
//! iteration 1
//! ```
//!
//! ### Closed-Form Fit
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! let mut points = PointSet::new();
//! points.insert(Point::new(0.1_f64, 0.1)?);
//! points.insert(Point::new(0.9, 0.9)?);
//!
//! let fitter = Linefit::new().strategy(LeastSquares).build()?;
//! let line = fitter.fit(&points)?;
//!
//! assert!((line.slope - 1.0).abs() < 1e-9);
//! assert!(line.intercept.abs() < 1e-9);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fitting returns a `Result<LineModel<T>, FitError>`; the `?` operator is
//! idiomatic, but degenerate inputs are worth matching explicitly:
//!
//! ```rust
//! use linefit::prelude::*;
//!
//! let mut points = PointSet::new();
//! points.insert(Point::new(0.0, 0.0)?);
//! points.insert(Point::new(0.0, 1.0)?);
//!
//! let fitter = Linefit::new().strategy(LeastSquares).build()?;
//!
//! match fitter.fit(&points) {
//!     Ok(line) => println!("m = {:.5} b = {:.5}", line.slope, line.intercept),
//!     Err(FitError::DegenerateFit { x }) => {
//!         // All x-coordinates equal: skip drawing this frame
//!         eprintln!("degenerate at x = {x}");
//!     }
//!     Err(e) => eprintln!("fit failed: {}", e),
//! }
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (touch panels, instrument UIs).
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! linefit = { version = "0.1", default-features = false }
//! ```
//!
//! **Minimal example:**
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use linefit::prelude::*;
//!
//! fn fit_screen_taps() -> Result<(), FitError> {
//!     let mut points = PointSet::new();
//!     points.insert(Point::new(0.25_f32, 0.30)?);
//!     points.insert(Point::new(0.70, 0.65)?);
//!
//!     let mut fitter = Linefit::new()
//!         .learning_rate(0.05)
//!         .strategy(GradientDescent)
//!         .build()?;
//!
//!     let line = fitter.step(&points)?;
//!     let _ = line.predict(0.5);
//!
//!     Ok(())
//! }
//! # fit_screen_taps().unwrap();
//! # }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Interactive point sets stay human-scale (tens of points), so one sweep
//!   or solve is far below a frame interval
//! - Pre-allocate with `PointSet::with_capacity` to avoid mid-session growth
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the two fit strategies' numerical cores.
mod algorithms;

// Layer 4: Engine - validation and frame reporting.
mod engine;

// Layer 5: Adapters - fitter adapters and the interactive session.
mod adapters;

// High-level fluent API for line fitting.
mod api;

// Standard line-fitting prelude.
pub mod prelude {
    pub use crate::api::{
        ActiveFitter, EventOutcome, FitError, FitStatus, FrameReport, GradientDescentBuilder,
        GradientDescentFitter, LeastSquaresBuilder, LeastSquaresFitter, LineModel,
        LinefitBuilder as Linefit, MomentSolver, Point, PointSet, Session, SessionEvent,
        Strategy::{GradientDescent, LeastSquares},
        StrategyKind, Viewport,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
