//! Per-lane relational compares producing all-ones/all-zero lane masks.
//!
//! A "true" lane has every bit set and a "false" lane has every bit clear,
//! never a boolean 0/1; this is what makes the masks directly usable with
//! [`cmov_si128`](crate::select::cmov_si128). Only equality and signed/biased
//! greater-than are implemented directly; the remaining relations are exact
//! derivations (`lt(a, b) = gt(b, a)`, `le = !gt`, `ge = !lt`, `neq = !eq`)
//! that hold for any total order on the lane type.

use xop2rs_vec::V128;

/// Predicate selector for the dynamic compare operations, one value per
/// relation in the order the hardware encodes them.
///
/// [`False`](Self::False) and [`True`](Self::True) ignore both operands and
/// produce the all-zero and all-ones vector respectively.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComOp {
    /// Less than.
    Lt = 0,
    /// Less than or equal.
    Le = 1,
    /// Greater than.
    Gt = 2,
    /// Greater than or equal.
    Ge = 3,
    /// Equal.
    Eq = 4,
    /// Not equal.
    Neq = 5,
    /// Unconditionally false: every result lane is all-zero.
    False = 6,
    /// Unconditionally true: every result lane is all-ones.
    True = 7,
}

impl ComOp {
    /// Converts a hardware immediate in `0..=7` into a selector.
    ///
    /// Returns `None` for out-of-range values, which are undefined in the
    /// hardware encoding.
    pub fn from_imm(imm8: i32) -> Option<Self> {
        Some(match imm8 {
            0 => Self::Lt,
            1 => Self::Le,
            2 => Self::Gt,
            3 => Self::Ge,
            4 => Self::Eq,
            5 => Self::Neq,
            6 => Self::False,
            7 => Self::True,
            _ => return None,
        })
    }

    /// Returns the hardware immediate encoding of this selector.
    pub fn imm(self) -> i32 {
        self as i32
    }
}

macro_rules! mask_loop {
    ($a:ident, $b:ident, $to:ident, $from:ident, $op:tt) => {{
        let xs = $a.$to();
        let ys = $b.$to();
        V128::$from(core::array::from_fn(|i| if xs[i] $op ys[i] { !0 } else { 0 }))
    }};
}

// Equality and greater-than for the 8/16/32-bit widths carry an SSE2 body;
// unsigned greater-than biases both operands by the signed minimum so the
// signed compare instruction orders them correctly.

/// Per-lane `==` over 16 signed 8-bit lanes.
pub fn comeq_epi8(a: V128, b: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe { V128::from(crate::arch::_mm_cmpeq_epi8(a.into(), b.into())) };

    #[cfg(xop_no_intrinsics)]
    return mask_loop!(a, b, to_i8x16, from_i8x16, ==);
}

/// Per-lane `==` over 8 signed 16-bit lanes.
pub fn comeq_epi16(a: V128, b: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe { V128::from(crate::arch::_mm_cmpeq_epi16(a.into(), b.into())) };

    #[cfg(xop_no_intrinsics)]
    return mask_loop!(a, b, to_i16x8, from_i16x8, ==);
}

/// Per-lane `==` over 4 signed 32-bit lanes.
pub fn comeq_epi32(a: V128, b: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe { V128::from(crate::arch::_mm_cmpeq_epi32(a.into(), b.into())) };

    #[cfg(xop_no_intrinsics)]
    return mask_loop!(a, b, to_i32x4, from_i32x4, ==);
}

/// Per-lane `==` over 2 signed 64-bit lanes.
pub fn comeq_epi64(a: V128, b: V128) -> V128 {
    mask_loop!(a, b, to_i64x2, from_i64x2, ==)
}

/// Per-lane `==` over 16 unsigned 8-bit lanes.
pub fn comeq_epu8(a: V128, b: V128) -> V128 {
    // Equality does not depend on signedness.
    comeq_epi8(a, b)
}

/// Per-lane `==` over 8 unsigned 16-bit lanes.
pub fn comeq_epu16(a: V128, b: V128) -> V128 {
    comeq_epi16(a, b)
}

/// Per-lane `==` over 4 unsigned 32-bit lanes.
pub fn comeq_epu32(a: V128, b: V128) -> V128 {
    comeq_epi32(a, b)
}

/// Per-lane `==` over 2 unsigned 64-bit lanes.
pub fn comeq_epu64(a: V128, b: V128) -> V128 {
    comeq_epi64(a, b)
}

/// Per-lane signed `>` over 16 8-bit lanes.
pub fn comgt_epi8(a: V128, b: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe { V128::from(crate::arch::_mm_cmpgt_epi8(a.into(), b.into())) };

    #[cfg(xop_no_intrinsics)]
    return mask_loop!(a, b, to_i8x16, from_i8x16, >);
}

/// Per-lane signed `>` over 8 16-bit lanes.
pub fn comgt_epi16(a: V128, b: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe { V128::from(crate::arch::_mm_cmpgt_epi16(a.into(), b.into())) };

    #[cfg(xop_no_intrinsics)]
    return mask_loop!(a, b, to_i16x8, from_i16x8, >);
}

/// Per-lane signed `>` over 4 32-bit lanes.
pub fn comgt_epi32(a: V128, b: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe { V128::from(crate::arch::_mm_cmpgt_epi32(a.into(), b.into())) };

    #[cfg(xop_no_intrinsics)]
    return mask_loop!(a, b, to_i32x4, from_i32x4, >);
}

/// Per-lane signed `>` over 2 64-bit lanes.
pub fn comgt_epi64(a: V128, b: V128) -> V128 {
    mask_loop!(a, b, to_i64x2, from_i64x2, >)
}

/// Per-lane unsigned `>` over 16 8-bit lanes.
pub fn comgt_epu8(a: V128, b: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe {
        let bias = crate::arch::_mm_set1_epi8(i8::MIN);
        V128::from(crate::arch::_mm_cmpgt_epi8(
            crate::arch::_mm_xor_si128(a.into(), bias),
            crate::arch::_mm_xor_si128(b.into(), bias),
        ))
    };

    #[cfg(xop_no_intrinsics)]
    return mask_loop!(a, b, to_u8x16, from_u8x16, >);
}

/// Per-lane unsigned `>` over 8 16-bit lanes.
pub fn comgt_epu16(a: V128, b: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe {
        let bias = crate::arch::_mm_set1_epi16(i16::MIN);
        V128::from(crate::arch::_mm_cmpgt_epi16(
            crate::arch::_mm_xor_si128(a.into(), bias),
            crate::arch::_mm_xor_si128(b.into(), bias),
        ))
    };

    #[cfg(xop_no_intrinsics)]
    return mask_loop!(a, b, to_u16x8, from_u16x8, >);
}

/// Per-lane unsigned `>` over 4 32-bit lanes.
pub fn comgt_epu32(a: V128, b: V128) -> V128 {
    #[cfg(xop_sse2_intrinsics)]
    // SAFETY: check for `sse2` target feature occurs above.
    return unsafe {
        let bias = crate::arch::_mm_set1_epi32(i32::MIN);
        V128::from(crate::arch::_mm_cmpgt_epi32(
            crate::arch::_mm_xor_si128(a.into(), bias),
            crate::arch::_mm_xor_si128(b.into(), bias),
        ))
    };

    #[cfg(xop_no_intrinsics)]
    return mask_loop!(a, b, to_u32x4, from_u32x4, >);
}

/// Per-lane unsigned `>` over 2 64-bit lanes.
pub fn comgt_epu64(a: V128, b: V128) -> V128 {
    mask_loop!(a, b, to_u64x2, from_u64x2, >)
}

macro_rules! derived_compares {
    ($($kind:literal: $eq:ident, $gt:ident =>
        $lt:ident, $le:ident, $ge:ident, $neq:ident, $false_:ident, $true_:ident, $dynamic:ident;)*) => {$(
        #[doc = concat!("Per-lane ", $kind, " `<`; the mirror image of [`", stringify!($gt), "`].")]
        pub fn $lt(a: V128, b: V128) -> V128 {
            $gt(b, a)
        }

        #[doc = concat!("Per-lane ", $kind, " `<=`, as the complement of [`", stringify!($gt), "`].")]
        pub fn $le(a: V128, b: V128) -> V128 {
            $gt(a, b).not()
        }

        #[doc = concat!("Per-lane ", $kind, " `>=`, as the complement of [`", stringify!($lt), "`].")]
        pub fn $ge(a: V128, b: V128) -> V128 {
            $lt(a, b).not()
        }

        #[doc = concat!("Per-lane ", $kind, " `!=`, as the complement of [`", stringify!($eq), "`].")]
        pub fn $neq(a: V128, b: V128) -> V128 {
            $eq(a, b).not()
        }

        #[doc = concat!(
            "Unconditionally false ", $kind,
            " compare; every result lane is all-zero regardless of the operands."
        )]
        pub fn $false_(_a: V128, _b: V128) -> V128 {
            V128::zero()
        }

        #[doc = concat!(
            "Unconditionally true ", $kind,
            " compare; every result lane is all-ones regardless of the operands."
        )]
        pub fn $true_(_a: V128, _b: V128) -> V128 {
            V128::ones()
        }

        #[doc = concat!(
            "Dynamic ", $kind,
            " compare, dispatching on `op` to the fixed-relation functions."
        )]
        pub fn $dynamic(a: V128, b: V128, op: ComOp) -> V128 {
            match op {
                ComOp::Lt => $lt(a, b),
                ComOp::Le => $le(a, b),
                ComOp::Gt => $gt(a, b),
                ComOp::Ge => $ge(a, b),
                ComOp::Eq => $eq(a, b),
                ComOp::Neq => $neq(a, b),
                ComOp::False => $false_(a, b),
                ComOp::True => $true_(a, b),
            }
        }
    )*};
}

derived_compares! {
    "signed 8-bit": comeq_epi8, comgt_epi8 =>
        comlt_epi8, comle_epi8, comge_epi8, comneq_epi8, comfalse_epi8, comtrue_epi8, com_epi8;
    "signed 16-bit": comeq_epi16, comgt_epi16 =>
        comlt_epi16, comle_epi16, comge_epi16, comneq_epi16, comfalse_epi16, comtrue_epi16, com_epi16;
    "signed 32-bit": comeq_epi32, comgt_epi32 =>
        comlt_epi32, comle_epi32, comge_epi32, comneq_epi32, comfalse_epi32, comtrue_epi32, com_epi32;
    "signed 64-bit": comeq_epi64, comgt_epi64 =>
        comlt_epi64, comle_epi64, comge_epi64, comneq_epi64, comfalse_epi64, comtrue_epi64, com_epi64;
    "unsigned 8-bit": comeq_epu8, comgt_epu8 =>
        comlt_epu8, comle_epu8, comge_epu8, comneq_epu8, comfalse_epu8, comtrue_epu8, com_epu8;
    "unsigned 16-bit": comeq_epu16, comgt_epu16 =>
        comlt_epu16, comle_epu16, comge_epu16, comneq_epu16, comfalse_epu16, comtrue_epu16, com_epu16;
    "unsigned 32-bit": comeq_epu32, comgt_epu32 =>
        comlt_epu32, comle_epu32, comge_epu32, comneq_epu32, comfalse_epu32, comtrue_epu32, com_epu32;
    "unsigned 64-bit": comeq_epu64, comgt_epu64 =>
        comlt_epu64, comle_epu64, comge_epu64, comneq_epu64, comfalse_epu64, comtrue_epu64, com_epu64;
}
