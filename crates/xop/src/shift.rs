//! Per-lane variable shifts and rotates.
//!
//! The count operand is itself a vector: lane `i` of the data is shifted or
//! rotated by the signed value in lane `i` of the count. Non-negative counts
//! shift left, negative counts shift right by the negated magnitude.
//!
//! Shift counts are **not** reduced: a magnitude at or beyond the lane width
//! produces the fully-shifted-out value, all-zero for left and logical-right
//! shifts and the sign fill for arithmetic right shifts. Rotate counts **are**
//! reduced modulo the lane width, which makes rotation by `k` and `-k`
//! inverse operations for every count.

use xop2rs_vec::V128;

macro_rules! shift_family {
    ($($bits:literal: $sha:ident, $shl:ident, $rot:ident, $roti:ident,
        $ito:ident / $ifrom:ident, $uto:ident / $ufrom:ident;)*) => {$(
        #[doc = concat!(
            "Per-lane arithmetic shift of signed ", stringify!($bits),
            "-bit lanes by signed per-lane counts; negative counts shift right with sign fill."
        )]
        pub fn $sha(a: V128, count: V128) -> V128 {
            let xs = a.$ito();
            let ns = count.$ito();
            V128::$ifrom(core::array::from_fn(|i| {
                let x = xs[i];
                let n = ns[i];
                let m = n.unsigned_abs();
                if n < 0 {
                    if m >= $bits {
                        x >> ($bits - 1)
                    } else {
                        x >> m
                    }
                } else if m >= $bits {
                    0
                } else {
                    x << m
                }
            }))
        }

        #[doc = concat!(
            "Per-lane logical shift of ", stringify!($bits),
            "-bit lanes by signed per-lane counts; negative counts shift right with zero fill."
        )]
        pub fn $shl(a: V128, count: V128) -> V128 {
            let xs = a.$uto();
            let ns = count.$ito();
            V128::$ufrom(core::array::from_fn(|i| {
                let x = xs[i];
                let m = ns[i].unsigned_abs();
                if m >= $bits {
                    0
                } else if ns[i] < 0 {
                    x >> m
                } else {
                    x << m
                }
            }))
        }

        #[doc = concat!(
            "Per-lane rotate of ", stringify!($bits),
            "-bit lanes by signed per-lane counts, reduced modulo the lane width; ",
            "negative counts rotate right."
        )]
        pub fn $rot(a: V128, count: V128) -> V128 {
            let xs = a.$uto();
            let ns = count.$ito();
            V128::$ufrom(core::array::from_fn(|i| {
                let m = (ns[i].unsigned_abs() % $bits) as u32;
                if ns[i] < 0 {
                    xs[i].rotate_right(m)
                } else {
                    xs[i].rotate_left(m)
                }
            }))
        }

        #[doc = concat!(
            "Rotates every ", stringify!($bits),
            "-bit lane uniformly by the immediate count, reduced modulo the lane width; ",
            "negative counts rotate right."
        )]
        pub fn $roti(a: V128, count: i32) -> V128 {
            let m = count.unsigned_abs() % $bits;
            let xs = a.$uto();
            V128::$ufrom(core::array::from_fn(|i| {
                if count < 0 {
                    xs[i].rotate_right(m)
                } else {
                    xs[i].rotate_left(m)
                }
            }))
        }
    )*};
}

shift_family! {
    8: sha_epi8, shl_epi8, rot_epi8, roti_epi8, to_i8x16 / from_i8x16, to_u8x16 / from_u8x16;
    16: sha_epi16, shl_epi16, rot_epi16, roti_epi16, to_i16x8 / from_i16x8, to_u16x8 / from_u16x8;
    32: sha_epi32, shl_epi32, rot_epi32, roti_epi32, to_i32x4 / from_i32x4, to_u32x4 / from_u32x4;
    64: sha_epi64, shl_epi64, rot_epi64, roti_epi64, to_i64x2 / from_i64x2, to_u64x2 / from_u64x2;
}
