//! Moment accumulation for the closed-form linear fit.
//!
//! ## Purpose
//!
//! This module provides the summations behind the mean-centered least-squares
//! solve:
//! - Coordinate sums (first pass, for the means).
//! - Centered second moments Sxx and Sxy (second pass, for slope/intercept).
//!
//! ## Design notes
//!
//! * **Two passes**: Centering around the means before forming products keeps
//!   the moments small and avoids the cancellation that the raw
//!   `sum(x*y) - n*mean_x*mean_y` form suffers from.
//! * **Specialization**: A generic scalar path covers any `Float`; `f64` and
//!   `f32` override it with SIMD lanes.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar coordinate-sum accumulation (generic Float).
#[inline]
pub fn accumulate_sums_scalar<T: Float>(x: &[T], y: &[T]) -> (T, T) {
    let n = x.len();
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();

    for i in 0..n {
        sum_x = sum_x + x[i];
        sum_y = sum_y + y[i];
    }

    (sum_x, sum_y)
}

/// Scalar centered-moment accumulation (generic Float).
///
/// Returns `(sxx, sxy)` where `sxx = sum((x - x_mean)^2)` and
/// `sxy = sum((x - x_mean) * (y - y_mean))`.
#[inline]
pub fn accumulate_centered_scalar<T: Float>(x: &[T], y: &[T], x_mean: T, y_mean: T) -> (T, T) {
    let n = x.len();
    let mut sxx = T::zero();
    let mut sxy = T::zero();

    for i in 0..n {
        let dx = x[i] - x_mean;
        let dy = y[i] - y_mean;
        sxx = sxx + dx * dx;
        sxy = sxy + dx * dy;
    }

    (sxx, sxy)
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized coordinate-sum accumulation (f64).
#[inline]
pub fn accumulate_sums_simd_f64(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len();
    if n == 0 {
        return (0.0, 0.0);
    }

    let mut i = 0;
    let mut s_x = f64x2::splat(0.0);
    let mut s_y = f64x2::splat(0.0);

    unsafe {
        while i + 2 <= n {
            s_x += f64x2::new([*x.get_unchecked(i), *x.get_unchecked(i + 1)]);
            s_y += f64x2::new([*y.get_unchecked(i), *y.get_unchecked(i + 1)]);
            i += 2;
        }
    }

    let mut a_x = s_x.reduce_add();
    let mut a_y = s_y.reduce_add();

    unsafe {
        while i < n {
            a_x += *x.get_unchecked(i);
            a_y += *y.get_unchecked(i);
            i += 1;
        }
    }

    (a_x, a_y)
}

/// SIMD-optimized centered-moment accumulation (f64).
#[inline]
pub fn accumulate_centered_simd_f64(x: &[f64], y: &[f64], x_mean: f64, y_mean: f64) -> (f64, f64) {
    let n = x.len();
    if n == 0 {
        return (0.0, 0.0);
    }

    let mut i = 0;
    let mx = f64x2::splat(x_mean);
    let my = f64x2::splat(y_mean);
    let mut s_xx = f64x2::splat(0.0);
    let mut s_xy = f64x2::splat(0.0);

    unsafe {
        while i + 2 <= n {
            let dx = f64x2::new([*x.get_unchecked(i), *x.get_unchecked(i + 1)]) - mx;
            let dy = f64x2::new([*y.get_unchecked(i), *y.get_unchecked(i + 1)]) - my;

            s_xx += dx * dx;
            s_xy += dx * dy;

            i += 2;
        }
    }

    let mut a_xx = s_xx.reduce_add();
    let mut a_xy = s_xy.reduce_add();

    unsafe {
        while i < n {
            let dx = *x.get_unchecked(i) - x_mean;
            let dy = *y.get_unchecked(i) - y_mean;

            a_xx += dx * dx;
            a_xy += dx * dy;

            i += 1;
        }
    }

    (a_xx, a_xy)
}

/// SIMD-optimized coordinate-sum accumulation (f32).
#[inline]
pub fn accumulate_sums_simd_f32(x: &[f32], y: &[f32]) -> (f32, f32) {
    let n = x.len();
    if n == 0 {
        return (0.0, 0.0);
    }

    let mut i = 0;
    let mut s_x = f32x8::splat(0.0);
    let mut s_y = f32x8::splat(0.0);

    unsafe {
        while i + 8 <= n {
            s_x += f32x8::new([
                *x.get_unchecked(i),
                *x.get_unchecked(i + 1),
                *x.get_unchecked(i + 2),
                *x.get_unchecked(i + 3),
                *x.get_unchecked(i + 4),
                *x.get_unchecked(i + 5),
                *x.get_unchecked(i + 6),
                *x.get_unchecked(i + 7),
            ]);
            s_y += f32x8::new([
                *y.get_unchecked(i),
                *y.get_unchecked(i + 1),
                *y.get_unchecked(i + 2),
                *y.get_unchecked(i + 3),
                *y.get_unchecked(i + 4),
                *y.get_unchecked(i + 5),
                *y.get_unchecked(i + 6),
                *y.get_unchecked(i + 7),
            ]);
            i += 8;
        }
    }

    let mut a_x = s_x.reduce_add();
    let mut a_y = s_y.reduce_add();

    unsafe {
        while i < n {
            a_x += *x.get_unchecked(i);
            a_y += *y.get_unchecked(i);
            i += 1;
        }
    }

    (a_x, a_y)
}

/// SIMD-optimized centered-moment accumulation (f32).
#[inline]
pub fn accumulate_centered_simd_f32(x: &[f32], y: &[f32], x_mean: f32, y_mean: f32) -> (f32, f32) {
    let n = x.len();
    if n == 0 {
        return (0.0, 0.0);
    }

    let mut i = 0;
    let mx = f32x8::splat(x_mean);
    let my = f32x8::splat(y_mean);
    let mut s_xx = f32x8::splat(0.0);
    let mut s_xy = f32x8::splat(0.0);

    unsafe {
        while i + 8 <= n {
            let dx = f32x8::new([
                *x.get_unchecked(i),
                *x.get_unchecked(i + 1),
                *x.get_unchecked(i + 2),
                *x.get_unchecked(i + 3),
                *x.get_unchecked(i + 4),
                *x.get_unchecked(i + 5),
                *x.get_unchecked(i + 6),
                *x.get_unchecked(i + 7),
            ]) - mx;
            let dy = f32x8::new([
                *y.get_unchecked(i),
                *y.get_unchecked(i + 1),
                *y.get_unchecked(i + 2),
                *y.get_unchecked(i + 3),
                *y.get_unchecked(i + 4),
                *y.get_unchecked(i + 5),
                *y.get_unchecked(i + 6),
                *y.get_unchecked(i + 7),
            ]) - my;

            s_xx += dx * dx;
            s_xy += dx * dy;

            i += 8;
        }
    }

    let mut a_xx = s_xx.reduce_add();
    let mut a_xy = s_xy.reduce_add();

    unsafe {
        while i < n {
            let dx = *x.get_unchecked(i) - x_mean;
            let dy = *y.get_unchecked(i) - y_mean;

            a_xx += dx * dx;
            a_xy += dx * dy;

            i += 1;
        }
    }

    (a_xx, a_xy)
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific moment accumulation.
pub trait MomentSolver: Float {
    /// Accumulate coordinate sums.
    #[inline]
    fn accumulate_sums(x: &[Self], y: &[Self]) -> (Self, Self) {
        accumulate_sums_scalar(x, y)
    }

    /// Accumulate centered second moments around the given means.
    #[inline]
    fn accumulate_centered(x: &[Self], y: &[Self], x_mean: Self, y_mean: Self) -> (Self, Self) {
        accumulate_centered_scalar(x, y, x_mean, y_mean)
    }
}

impl MomentSolver for f64 {
    #[inline]
    fn accumulate_sums(x: &[f64], y: &[f64]) -> (f64, f64) {
        accumulate_sums_simd_f64(x, y)
    }

    #[inline]
    fn accumulate_centered(x: &[f64], y: &[f64], x_mean: f64, y_mean: f64) -> (f64, f64) {
        accumulate_centered_simd_f64(x, y, x_mean, y_mean)
    }
}

impl MomentSolver for f32 {
    #[inline]
    fn accumulate_sums(x: &[f32], y: &[f32]) -> (f32, f32) {
        accumulate_sums_simd_f32(x, y)
    }

    #[inline]
    fn accumulate_centered(x: &[f32], y: &[f32], x_mean: f32, y_mean: f32) -> (f32, f32) {
        accumulate_centered_simd_f32(x, y, x_mean, y_mean)
    }
}
