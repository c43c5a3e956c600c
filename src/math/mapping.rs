//! Coordinate rescaling between pixel and normalized spaces.
//!
//! ## Purpose
//!
//! This module converts between the two coordinate systems the session deals
//! with: integer-ish pixel positions on a display surface, and the normalized
//! unit square the fit strategies operate in.
//!
//! ## Design notes
//!
//! * **Saturation**: `rescale` clamps to the target endpoints outside the
//!   source range, so off-surface positions never produce out-of-range
//!   coordinates.
//! * **Axis orientation**: Pixel y grows downward from the top edge while
//!   domain y grows upward, so the vertical mapping runs inverted. The
//!   horizontal mapping is direct.
//!
//! ## Key concepts
//!
//! * **Viewport**: The pixel dimensions of the display surface. The default
//!   is 800x600.
//! * **Unit square**: Domain coordinates live in `[0, 1]²` regardless of the
//!   surface resolution, so fits are resolution-independent.
//!
//! ## Invariants
//!
//! * `to_domain` output always lies in the unit square (saturation).
//! * `to_domain` and `to_pixels` are inverses on in-range values, up to
//!   floating-point rounding.
//!
//! ## Non-goals
//!
//! * This module does not draw anything; it only maps coordinates.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;
use crate::primitives::point::Point;

// ============================================================================
// Default Surface Dimensions
// ============================================================================

/// Default viewport width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;

/// Default viewport height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

// ============================================================================
// Rescaling
// ============================================================================

/// Linearly map `value` from `[from_lo, from_hi]` onto `[to_lo, to_hi]`,
/// saturating at the target endpoints outside the source range.
///
/// The target range may run decreasing (`to_lo > to_hi`); saturation still
/// pins values below the source range to `to_lo` and above it to `to_hi`.
/// The source range is expected increasing.
#[inline]
pub fn rescale<T: Float>(value: T, from_lo: T, from_hi: T, to_lo: T, to_hi: T) -> T {
    if value <= from_lo {
        return to_lo;
    }
    if value >= from_hi {
        return to_hi;
    }

    let fraction = (value - from_lo) / (from_hi - from_lo);
    to_lo + fraction * (to_hi - to_lo)
}

// ============================================================================
// Viewport
// ============================================================================

/// Pixel dimensions of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Surface width in pixels.
    pub width: u32,

    /// Surface height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport with explicit dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map a pixel position to a normalized domain point.
    ///
    /// The vertical axis inverts: the top edge of the surface maps to domain
    /// `y = 1` and the bottom edge to `y = 0`. Off-surface positions saturate
    /// to the unit square. Fails only for NaN pixel inputs, which saturation
    /// cannot pin.
    #[inline]
    pub fn to_domain<T: Float>(&self, px: T, py: T) -> Result<Point<T>, FitError> {
        let w = T::from(self.width).unwrap();
        let h = T::from(self.height).unwrap();

        let x = rescale(px, T::zero(), w, T::zero(), T::one());
        let y = rescale(py, T::zero(), h, T::one(), T::zero());

        Point::new(x, y)
    }

    /// Map a normalized domain point to a pixel position.
    ///
    /// Inverse of [`to_domain`](Self::to_domain), including the vertical
    /// inversion and saturation at the surface edges.
    #[inline]
    pub fn to_pixels<T: Float>(&self, point: &Point<T>) -> (T, T) {
        let w = T::from(self.width).unwrap();
        let h = T::from(self.height).unwrap();

        let px = rescale(point.x, T::zero(), T::one(), T::zero(), w);
        let py = rescale(point.y, T::zero(), T::one(), h, T::zero());

        (px, py)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
