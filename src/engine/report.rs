//! Per-frame output types.
//!
//! ## Purpose
//!
//! This module defines the `FrameReport` struct which packages everything the
//! rendering collaborator needs after one frame: the current model, how it
//! got there, and the iteration count when the stateful strategy is active.
//!
//! ## Design notes
//!
//! * **Draw gating**: The fit line is drawable only for a `Fitted` frame.
//!   Degenerate and diverged frames keep the previous model in the report so
//!   the HUD can still show numbers, but `should_draw` says no.
//! * **Ergonomics**: Implements `Display` rendering the HUD text, so a host
//!   can print a report directly.
//!
//! ## Key concepts
//!
//! * **Iteration count**: `Some` only under gradient descent, where it counts
//!   completed sweeps. Least squares has no meaningful counter and reports
//!   `None`, so the HUD omits the line entirely.
//!
//! ## Invariants
//!
//! * `should_draw()` implies the contained model is finite.
//!
//! ## Non-goals
//!
//! * This module does not perform fits; it only reports them.
//! * This module does not draw; rendering belongs to the host.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::line::LineModel;

// ============================================================================
// Fit Status
// ============================================================================

/// How the active fitter fared this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    /// Fewer than two points exist; no fit was attempted.
    Pending,

    /// The model was updated and is safe to draw.
    Fitted,

    /// All x-coordinates coincide; the solve was skipped this frame.
    Degenerate,

    /// The model left finite range, typically an oversized learning rate.
    Diverged,
}

impl FitStatus {
    /// Whether the fit line should be drawn this frame.
    ///
    /// True only for [`FitStatus::Fitted`]; every other status keeps the
    /// line hidden rather than drawing through stale or non-finite values.
    #[inline]
    pub fn should_draw(&self) -> bool {
        matches!(self, FitStatus::Fitted)
    }
}

// ============================================================================
// Frame Report
// ============================================================================

/// Outcome of one frame advance, packaged for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport<T: Float> {
    /// Number of points in the set this frame.
    pub points: usize,

    /// The current line model. For non-`Fitted` frames this is the model
    /// carried over from the last successful update.
    pub line: LineModel<T>,

    /// Completed sweep count, gradient descent only.
    pub iteration: Option<usize>,

    /// How the fitter fared this frame.
    pub status: FitStatus,
}

impl<T: Float> FrameReport<T> {
    /// Whether the fit line should be drawn this frame.
    #[inline]
    pub fn should_draw(&self) -> bool {
        self.status.should_draw()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FrameReport<T> {
    /// Render the HUD text: `m = {:.5} b = {:.5}` with a parenthesized note
    /// for frames that were not fitted, then `iteration {n}` on a second
    /// line under gradient descent.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "m = {:.5} b = {:.5}", self.line.slope, self.line.intercept)?;

        match self.status {
            FitStatus::Pending => write!(f, " (awaiting points)")?,
            FitStatus::Degenerate => write!(f, " (degenerate fit)")?,
            FitStatus::Diverged => write!(f, " (diverged)")?,
            FitStatus::Fitted => {}
        }

        if let Some(n) = self.iteration {
            write!(f, "\niteration {}", n)?;
        }

        Ok(())
    }
}
