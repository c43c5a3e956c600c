//! Interactive session driving the active fitter frame by frame.
//!
//! ## Purpose
//!
//! This module is the distilled frame loop of the interactive tool: it owns
//! the growing point set, the strategy chosen at startup, and the line model
//! most recently produced, and it exposes the two operations the host loop
//! performs each frame — feed one input event, then advance the fit once.
//!
//! ## Design notes
//!
//! * **Strategy dispatch**: The two fitters sit behind a tagged
//!   [`ActiveFitter`] enum selected once at construction, not behind boolean
//!   flags. Switching mid-session is unsupported; the gradient fitter's
//!   `reset_to` documents the re-seed semantic a future switch would use.
//! * **Frame discipline**: `advance_frame` invokes the fitter at most once,
//!   and not at all below two points, so the gradient counter advances by at
//!   most one per frame.
//! * **Failure posture**: A degenerate solve or a non-finite model never
//!   escapes as an error from the frame path; both become a frame status the
//!   host renders around (skip the line, keep the HUD).
//!
//! ## Key concepts
//!
//! * **Normalized input**: Events carry points already mapped into the unit
//!   square; pixel concerns stay in the viewport mapping at the edge.
//! * **Reserved input**: The secondary click is accepted and ignored, an
//!   explicit extension point for point removal should it ever be wanted.
//!
//! ## Invariants
//!
//! * At most one point is appended per event, and events never reorder the
//!   set.
//! * A `Pending` frame touches neither the model nor the iteration counter.
//! * The session's model is finite after every `Fitted` frame.
//!
//! ## Non-goals
//!
//! * This module does not poll input, pace frames, or draw.
//! * This module does not support removing points.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::adapters::gradient_descent::GradientDescentFitter;
use crate::adapters::least_squares::LeastSquaresFitter;
use crate::algorithms::MIN_POINTS;
use crate::engine::report::{FitStatus, FrameReport};
use crate::math::accumulate::MomentSolver;
use crate::primitives::errors::FitError;
use crate::primitives::line::LineModel;
use crate::primitives::point::{Point, PointSet};

// ============================================================================
// Session Events
// ============================================================================

/// One input event consumed from the host collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent<T: Float> {
    /// Primary-button click, carrying the already normalized point.
    PrimaryClick(Point<T>),

    /// Secondary-button click. Reserved; currently has no effect.
    SecondaryClick,
}

/// What an event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The point was appended to the set.
    Inserted,

    /// An equal point was already present; the set is unchanged.
    Duplicate,

    /// The event is reserved and had no effect.
    Ignored,
}

// ============================================================================
// Strategy Selection
// ============================================================================

/// The fit strategy chosen at session startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Stateful per-frame gradient descent. The default.
    #[default]
    GradientDescent,

    /// Stateless closed-form least squares.
    LeastSquares,
}

impl StrategyKind {
    /// Get the human-readable name of the strategy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            StrategyKind::GradientDescent => "gradient descent",
            StrategyKind::LeastSquares => "least squares",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = FitError;

    /// Parse a strategy from its flag spelling.
    ///
    /// Accepts the original tool's flag names (`gradient`, `leastsquares`)
    /// plus hyphenated and underscored long forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gradient" | "gradient-descent" | "gradient_descent" => {
                Ok(StrategyKind::GradientDescent)
            }
            "leastsquares" | "least-squares" | "least_squares" => Ok(StrategyKind::LeastSquares),
            other => Err(FitError::InvalidInput(format!(
                "unknown strategy '{}', expected 'gradient' or 'leastsquares'",
                other
            ))),
        }
    }
}

// ============================================================================
// Active Fitter
// ============================================================================

/// The tagged fitter variant a session dispatches on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveFitter<T: Float> {
    /// Stateless closed-form solve.
    LeastSquares(LeastSquaresFitter<T>),

    /// Stateful per-frame descent.
    GradientDescent(GradientDescentFitter<T>),
}

impl<T: Float> ActiveFitter<T> {
    /// Construct a default-configured fitter of the given kind.
    pub fn from_kind(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::LeastSquares => {
                ActiveFitter::LeastSquares(LeastSquaresFitter::default())
            }
            StrategyKind::GradientDescent => {
                ActiveFitter::GradientDescent(GradientDescentFitter::default())
            }
        }
    }

    /// Which strategy this fitter implements.
    pub fn kind(&self) -> StrategyKind {
        match self {
            ActiveFitter::LeastSquares(_) => StrategyKind::LeastSquares,
            ActiveFitter::GradientDescent(_) => StrategyKind::GradientDescent,
        }
    }

    /// Completed sweep count. `None` for least squares, which has no
    /// meaningful counter.
    pub fn iteration(&self) -> Option<usize> {
        match self {
            ActiveFitter::LeastSquares(_) => None,
            ActiveFitter::GradientDescent(fitter) => Some(fitter.iteration()),
        }
    }
}

impl<T: MomentSolver> ActiveFitter<T> {
    /// Invoke the fitter once on the current point set.
    pub fn advance(&mut self, points: &PointSet<T>) -> Result<LineModel<T>, FitError> {
        match self {
            ActiveFitter::LeastSquares(fitter) => fitter.fit(points),
            ActiveFitter::GradientDescent(fitter) => fitter.step(points),
        }
    }
}

impl<T: Float> From<LeastSquaresFitter<T>> for ActiveFitter<T> {
    fn from(fitter: LeastSquaresFitter<T>) -> Self {
        ActiveFitter::LeastSquares(fitter)
    }
}

impl<T: Float> From<GradientDescentFitter<T>> for ActiveFitter<T> {
    fn from(fitter: GradientDescentFitter<T>) -> Self {
        ActiveFitter::GradientDescent(fitter)
    }
}

// ============================================================================
// Session
// ============================================================================

/// Interactive session state: the point set, the active fitter, and the
/// model most recently produced.
#[derive(Debug, Clone)]
pub struct Session<T: Float> {
    /// Points placed so far, in insertion order.
    points: PointSet<T>,

    /// The strategy chosen at startup.
    fitter: ActiveFitter<T>,

    /// Model from the last successful frame; (0, 0) before any fit.
    line: LineModel<T>,
}

impl<T: Float> Default for Session<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Session<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a session with the default strategy (gradient descent).
    pub fn new() -> Self {
        Self::with_strategy(StrategyKind::default())
    }

    /// Create a session with a default-configured fitter of the given kind.
    pub fn with_strategy(kind: StrategyKind) -> Self {
        Self::with_fitter(ActiveFitter::from_kind(kind))
    }

    /// Create a session around an explicitly built fitter.
    pub fn with_fitter(fitter: impl Into<ActiveFitter<T>>) -> Self {
        Self {
            points: PointSet::new(),
            fitter: fitter.into(),
            line: LineModel::zero(),
        }
    }

    // ========================================================================
    // Event Handling
    // ========================================================================

    /// Apply one input event to the session.
    pub fn handle_event(&mut self, event: SessionEvent<T>) -> EventOutcome {
        match event {
            SessionEvent::PrimaryClick(point) => {
                if self.points.insert(point) {
                    EventOutcome::Inserted
                } else {
                    EventOutcome::Duplicate
                }
            }

            // Reserved extension point; removal is a documented non-feature.
            SessionEvent::SecondaryClick => EventOutcome::Ignored,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The points placed so far, for drawing markers.
    pub fn points(&self) -> &PointSet<T> {
        &self.points
    }

    /// The model from the last successful frame.
    pub fn line(&self) -> LineModel<T> {
        self.line
    }

    /// The strategy this session runs.
    pub fn strategy(&self) -> StrategyKind {
        self.fitter.kind()
    }
}

impl<T: MomentSolver> Session<T> {
    // ========================================================================
    // Frame Advancement
    // ========================================================================

    /// Run one frame of the fit loop and report the outcome.
    ///
    /// Below two points the fitter is not invoked at all: the model stays
    /// as it was and the gradient counter does not advance. Otherwise the
    /// active fitter runs exactly once; a degenerate solve keeps the
    /// previous model, and a fit that left finite range is reported as
    /// diverged without replacing the last finite model.
    pub fn advance_frame(&mut self) -> FrameReport<T> {
        let n = self.points.len();

        if n < MIN_POINTS {
            return FrameReport {
                points: n,
                line: self.line,
                iteration: self.fitter.iteration(),
                status: FitStatus::Pending,
            };
        }

        let status = match self.fitter.advance(&self.points) {
            Ok(model) if model.is_finite() => {
                self.line = model;
                FitStatus::Fitted
            }
            Ok(_) => FitStatus::Diverged,
            Err(FitError::DegenerateFit { .. }) => FitStatus::Degenerate,
            // The point count was checked above, so no other error can
            // reach here; skip the frame if one ever does.
            Err(_) => FitStatus::Pending,
        };

        FrameReport {
            points: n,
            line: self.line,
            iteration: self.fitter.iteration(),
            status,
        }
    }
}
