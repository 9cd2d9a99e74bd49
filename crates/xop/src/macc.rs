//! Multiply-accumulate, with widening, sub-lane selecting, and saturating
//! variants.
//!
//! Non-saturating variants wrap at the destination lane width. Saturating
//! variants compute the product and the accumulate in a wider integer type,
//! then clamp the accumulated result to the signed range of the destination
//! lane; only the clamp distinguishes them from the wrapping forms. The
//! dot-product variants ([`maddd_epi16`], [`maddsd_epi16`]) are the one
//! asymmetric case: the inner two-term dot product always wraps, and
//! [`maddsd_epi16`] saturates only the final addition of the accumulator.

use xop2rs_vec::V128;

/// `r[i] = a[i] * b[i] + c[i]` over 8 signed 16-bit lanes, wrapping.
pub fn macc_epi16(a: V128, b: V128, c: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe {
        V128::from(crate::arch::_mm_add_epi16(
            crate::arch::_mm_mullo_epi16(a.into(), b.into()),
            c.into(),
        ))
    };

    #[cfg(xop_no_intrinsics)]
    return {
        let xs = a.to_i16x8();
        let ys = b.to_i16x8();
        let zs = c.to_i16x8();
        V128::from_i16x8(core::array::from_fn(|i| {
            xs[i].wrapping_mul(ys[i]).wrapping_add(zs[i])
        }))
    };
}

/// `r[i] = a[i] * b[i] + c[i]` over 4 signed 32-bit lanes, wrapping.
pub fn macc_epi32(a: V128, b: V128, c: V128) -> V128 {
    let xs = a.to_i32x4();
    let ys = b.to_i32x4();
    let zs = c.to_i32x4();
    V128::from_i32x4(core::array::from_fn(|i| {
        xs[i].wrapping_mul(ys[i]).wrapping_add(zs[i])
    }))
}

/// Widening multiply of the even 16-bit lanes plus a 32-bit accumulator:
/// `r[i] = a[2i] * b[2i] + c[i]` with the product exact in 32 bits and the
/// accumulate wrapping.
pub fn maccd_epi16(a: V128, b: V128, c: V128) -> V128 {
    let xs = a.to_i16x8();
    let ys = b.to_i16x8();
    let zs = c.to_i32x4();
    V128::from_i32x4(core::array::from_fn(|i| {
        (i32::from(xs[i * 2]) * i32::from(ys[i * 2])).wrapping_add(zs[i])
    }))
}

/// Widening multiply of the even (low) 32-bit lane of each 64-bit pair plus
/// a 64-bit accumulator: `r[i] = a[2i] * b[2i] + c[i]`, accumulate wrapping.
pub fn macclo_epi32(a: V128, b: V128, c: V128) -> V128 {
    let xs = a.to_i32x4();
    let ys = b.to_i32x4();
    let zs = c.to_i64x2();
    V128::from_i64x2(core::array::from_fn(|i| {
        (i64::from(xs[i * 2]) * i64::from(ys[i * 2])).wrapping_add(zs[i])
    }))
}

/// Widening multiply of the odd (high) 32-bit lane of each 64-bit pair plus
/// a 64-bit accumulator: `r[i] = a[2i+1] * b[2i+1] + c[i]`, accumulate
/// wrapping.
pub fn macchi_epi32(a: V128, b: V128, c: V128) -> V128 {
    let xs = a.to_i32x4();
    let ys = b.to_i32x4();
    let zs = c.to_i64x2();
    V128::from_i64x2(core::array::from_fn(|i| {
        (i64::from(xs[i * 2 + 1]) * i64::from(ys[i * 2 + 1])).wrapping_add(zs[i])
    }))
}

/// Saturating [`macc_epi16`]: `a[i] * b[i] + c[i]` computed in 32 bits, then
/// clamped to the signed 16-bit range.
pub fn maccs_epi16(a: V128, b: V128, c: V128) -> V128 {
    let xs = a.to_i16x8();
    let ys = b.to_i16x8();
    let zs = c.to_i16x8();
    V128::from_i16x8(core::array::from_fn(|i| {
        let t = i32::from(xs[i]) * i32::from(ys[i]) + i32::from(zs[i]);
        t.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
    }))
}

/// Saturating [`macc_epi32`]: `a[i] * b[i] + c[i]` computed in 64 bits, then
/// clamped to the signed 32-bit range.
pub fn maccs_epi32(a: V128, b: V128, c: V128) -> V128 {
    let xs = a.to_i32x4();
    let ys = b.to_i32x4();
    let zs = c.to_i32x4();
    V128::from_i32x4(core::array::from_fn(|i| {
        let t = i64::from(xs[i]) * i64::from(ys[i]) + i64::from(zs[i]);
        t.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }))
}

/// Saturating [`maccd_epi16`]: the even-lane product plus the 32-bit
/// accumulator, computed in 64 bits and clamped to the signed 32-bit range
/// of the destination lane.
pub fn maccsd_epi16(a: V128, b: V128, c: V128) -> V128 {
    let xs = a.to_i16x8();
    let ys = b.to_i16x8();
    let zs = c.to_i32x4();
    V128::from_i32x4(core::array::from_fn(|i| {
        let t = i64::from(xs[i * 2]) * i64::from(ys[i * 2]) + i64::from(zs[i]);
        t.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }))
}

/// Saturating [`macclo_epi32`]: the even-lane product plus the 64-bit
/// accumulator, computed in 128 bits and clamped to the signed 64-bit range
/// of the destination lane.
pub fn maccslo_epi32(a: V128, b: V128, c: V128) -> V128 {
    let xs = a.to_i32x4();
    let ys = b.to_i32x4();
    let zs = c.to_i64x2();
    V128::from_i64x2(core::array::from_fn(|i| {
        let t = i128::from(xs[i * 2]) * i128::from(ys[i * 2]) + i128::from(zs[i]);
        t.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }))
}

/// Saturating [`macchi_epi32`]: the odd-lane product plus the 64-bit
/// accumulator, computed in 128 bits and clamped to the signed 64-bit range
/// of the destination lane.
pub fn maccshi_epi32(a: V128, b: V128, c: V128) -> V128 {
    let xs = a.to_i32x4();
    let ys = b.to_i32x4();
    let zs = c.to_i64x2();
    V128::from_i64x2(core::array::from_fn(|i| {
        let t = i128::from(xs[i * 2 + 1]) * i128::from(ys[i * 2 + 1]) + i128::from(zs[i]);
        t.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }))
}

/// Two-lane dot product plus accumulator:
/// `r[i] = a[2i] * b[2i] + a[2i+1] * b[2i+1] + c[i]` over signed 16-bit
/// sources into 4 signed 32-bit lanes, wrapping throughout.
///
/// Each product fits in 32 bits; the inner sum wraps only when both products
/// are exactly `2^30` (both operand pairs `-32768`).
pub fn maddd_epi16(a: V128, b: V128, c: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe {
        V128::from(crate::arch::_mm_add_epi32(
            crate::arch::_mm_madd_epi16(a.into(), b.into()),
            c.into(),
        ))
    };

    #[cfg(xop_no_intrinsics)]
    return {
        let xs = a.to_i16x8();
        let ys = b.to_i16x8();
        let zs = c.to_i32x4();
        V128::from_i32x4(core::array::from_fn(|i| {
            dot_pair(&xs, &ys, i).wrapping_add(zs[i])
        }))
    };
}

/// [`maddd_epi16`] with a saturating accumulate: the inner dot product still
/// wraps, and only the final addition of `c[i]` is clamped to the signed
/// 32-bit range.
pub fn maddsd_epi16(a: V128, b: V128, c: V128) -> V128 {
    let xs = a.to_i16x8();
    let ys = b.to_i16x8();
    let zs = c.to_i32x4();
    V128::from_i32x4(core::array::from_fn(|i| {
        dot_pair(&xs, &ys, i).saturating_add(zs[i])
    }))
}

fn dot_pair(xs: &[i16; 8], ys: &[i16; 8], i: usize) -> i32 {
    (i32::from(xs[i * 2]) * i32::from(ys[i * 2]))
        .wrapping_add(i32::from(xs[i * 2 + 1]) * i32::from(ys[i * 2 + 1]))
}
