//! Byte-level and lane-level two-source permutes.

use xop2rs_vec::{V128, V256};

/// Per-byte select from the 32-byte concatenation of `a` and `b` with an
/// optional complement and a post-operation, controlled by `ctrl`.
///
/// For output byte `i`, `ctrl[i]` decodes as:
///
/// - bits 0..=4: index into the concatenation `a ++ b` (bit 4 selects the
///   source register),
/// - bit 5: bitwise-complement the selected byte,
/// - bits 6..=7: post-operation: `0` identity, `1` bit reversal, `2` force
///   zero, `3` arithmetic sign fill (replicate bit 7 across the byte).
///
/// The axes apply in that order: select, complement, post-operation. Every
/// control bit pattern is defined.
pub fn perm_epi8(a: V128, b: V128, ctrl: V128) -> V128 {
    let xs = a.to_u8x16();
    let ys = b.to_u8x16();
    let cs = ctrl.to_u8x16();
    V128::from_u8x16(core::array::from_fn(|i| {
        let ctl = cs[i];
        let idx = usize::from(ctl & 0x1f);
        let mut byte = if idx < 16 { xs[idx] } else { ys[idx - 16] };
        if ctl & 0x20 != 0 {
            byte = !byte;
        }
        match ctl >> 6 {
            0 => byte,
            1 => byte.reverse_bits(),
            2 => 0,
            _ => ((byte as i8) >> 7) as u8,
        }
    }))
}

// Zero-override table shared by the permute2 forms: a lane is forced to zero
// iff (per-lane zero bit | global mode) is exactly 0x3 or 0xA.
fn permute2_zeroed(m: u32, m2z: u32) -> bool {
    matches!(m | m2z, 0x3 | 0xA)
}

/// Two-source permute at 32-bit lane granularity.
///
/// For output lane `i`, bits 0..=2 of control lane `c[i]` select a lane from
/// the 8-lane concatenation `a ++ b`, and bit 3 is the per-lane zero bit.
/// The low 2 bits of `imm8` are the global zero-override mode; the lane is
/// forced to zero exactly when `(zero bit | mode)` is `0x3` or `0xA`. Bits
/// of `imm8` above the low 2 are ignored.
pub fn permute2_ps(a: V128, b: V128, c: V128, imm8: i32) -> V128 {
    debug_assert!((0..=3).contains(&imm8), "permute2 mode out of range");
    let m2z = (imm8 & 0x03) as u32;
    let xs = a.to_u32x4();
    let ys = b.to_u32x4();
    let cs = c.to_u32x4();
    V128::from_u32x4(core::array::from_fn(|i| {
        let sel = (cs[i] & 0x07) as usize;
        if permute2_zeroed(cs[i] & 0x08, m2z) {
            0
        } else if sel < 4 {
            xs[sel]
        } else {
            ys[sel - 4]
        }
    }))
}

/// Two-source permute at 64-bit lane granularity.
///
/// For output lane `i`, bits 1..=2 of control lane `c[i]` select a lane from
/// the 4-lane concatenation `a ++ b`, and bit 3 is the per-lane zero bit; the
/// zero-override table is the same as [`permute2_ps`].
pub fn permute2_pd(a: V128, b: V128, c: V128, imm8: i32) -> V128 {
    debug_assert!((0..=3).contains(&imm8), "permute2 mode out of range");
    let m2z = (imm8 & 0x03) as u32;
    let xs = a.to_u64x2();
    let ys = b.to_u64x2();
    let cs = c.to_u64x2();
    V128::from_u64x2(core::array::from_fn(|i| {
        let sel = ((cs[i] >> 1) & 0x03) as usize;
        if permute2_zeroed((cs[i] & 0x08) as u32, m2z) {
            0
        } else if sel < 2 {
            xs[sel]
        } else {
            ys[sel - 2]
        }
    }))
}

/// 256-bit [`permute2_ps`]: each 128-bit half of `c` controls the permute of
/// the corresponding halves of `a` and `b`.
pub fn permute2_ps256(a: V256, b: V256, c: V256, imm8: i32) -> V256 {
    V256::from_halves(
        permute2_ps(a.lo(), b.lo(), c.lo(), imm8),
        permute2_ps(a.hi(), b.hi(), c.hi(), imm8),
    )
}

/// 256-bit [`permute2_pd`]: each 128-bit half of `c` controls the permute of
/// the corresponding halves of `a` and `b`.
pub fn permute2_pd256(a: V256, b: V256, c: V256, imm8: i32) -> V256 {
    V256::from_halves(
        permute2_pd(a.lo(), b.lo(), c.lo(), imm8),
        permute2_pd(a.hi(), b.hi(), c.hi(), imm8),
    )
}
