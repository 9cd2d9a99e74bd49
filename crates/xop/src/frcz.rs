//! Fraction extraction: the signed fractional part of floating-point lanes.
//!
//! `frac(x) = x - trunc(x)`, carrying the sign of the input. The split comes
//! from [`FloatCore::fract`], so non-finite lanes propagate whatever that
//! primitive produces (*NaN* for infinities and *NaN* inputs).

use num_traits::float::FloatCore;
use xop2rs_vec::{V128, V256};

/// Fractional part of each of 4 32-bit float lanes.
pub fn frcz_ps(a: V128) -> V128 {
    V128::from_f32x4(a.to_f32x4().map(FloatCore::fract))
}

/// Fractional part of each of 2 64-bit float lanes.
pub fn frcz_pd(a: V128) -> V128 {
    V128::from_f64x2(a.to_f64x2().map(FloatCore::fract))
}

/// Fractional part of the lowest 32-bit float lane; the upper lanes are
/// copied from `a` unchanged.
pub fn frcz_ss(a: V128) -> V128 {
    let mut xs = a.to_f32x4();
    xs[0] = xs[0].fract();
    V128::from_f32x4(xs)
}

/// Fractional part of the lowest 64-bit float lane; the upper lane is copied
/// from `a` unchanged.
pub fn frcz_sd(a: V128) -> V128 {
    let mut xs = a.to_f64x2();
    xs[0] = xs[0].fract();
    V128::from_f64x2(xs)
}

/// 256-bit [`frcz_ps`], applied to each 128-bit half.
pub fn frcz_ps256(a: V256) -> V256 {
    V256::from_halves(frcz_ps(a.lo()), frcz_ps(a.hi()))
}

/// 256-bit [`frcz_pd`], applied to each 128-bit half.
pub fn frcz_pd256(a: V256) -> V256 {
    V256::from_halves(frcz_pd(a.lo()), frcz_pd(a.hi()))
}
