//! Horizontal (adjacent-lane) widening add and subtract.
//!
//! Output lane `i` consumes the contiguous input group
//! `[i * K, (i + 1) * K)` where `K = input lanes / output lanes`. The add
//! family sums the group; the subtract family alternates sign across the
//! group (`a0 - a1 + a2 - a3 ...`), a fixed part of the contract. All
//! arithmetic is exact in the widened output type, so no overflow is
//! possible.

use xop2rs_vec::V128;

macro_rules! horizontal_reduce {
    ($($name:ident: $to:ident -> $from:ident, $wide:ty, $k:literal, $alt:literal, $doc:literal;)*) => {$(
        #[doc = $doc]
        pub fn $name(a: V128) -> V128 {
            let xs = a.$to();
            V128::$from(core::array::from_fn(|i| {
                let mut acc: $wide = 0;
                for j in 0..$k {
                    let term = <$wide>::from(xs[i * $k + j]);
                    acc = if $alt && j % 2 == 1 { acc - term } else { acc + term };
                }
                acc
            }))
        }
    )*};
}

horizontal_reduce! {
    haddw_epi8: to_i8x16 -> from_i16x8, i16, 2, false,
        "Sums adjacent pairs of signed 8-bit lanes into 8 signed 16-bit lanes.";
    haddw_epu8: to_u8x16 -> from_u16x8, u16, 2, false,
        "Sums adjacent pairs of unsigned 8-bit lanes into 8 unsigned 16-bit lanes.";
    haddd_epi8: to_i8x16 -> from_i32x4, i32, 4, false,
        "Sums adjacent groups of four signed 8-bit lanes into 4 signed 32-bit lanes.";
    haddd_epu8: to_u8x16 -> from_u32x4, u32, 4, false,
        "Sums adjacent groups of four unsigned 8-bit lanes into 4 unsigned 32-bit lanes.";
    haddd_epi16: to_i16x8 -> from_i32x4, i32, 2, false,
        "Sums adjacent pairs of signed 16-bit lanes into 4 signed 32-bit lanes.";
    haddd_epu16: to_u16x8 -> from_u32x4, u32, 2, false,
        "Sums adjacent pairs of unsigned 16-bit lanes into 4 unsigned 32-bit lanes.";
    haddq_epi8: to_i8x16 -> from_i64x2, i64, 8, false,
        "Sums adjacent groups of eight signed 8-bit lanes into 2 signed 64-bit lanes.";
    haddq_epu8: to_u8x16 -> from_u64x2, u64, 8, false,
        "Sums adjacent groups of eight unsigned 8-bit lanes into 2 unsigned 64-bit lanes.";
    haddq_epi16: to_i16x8 -> from_i64x2, i64, 4, false,
        "Sums adjacent groups of four signed 16-bit lanes into 2 signed 64-bit lanes.";
    haddq_epu16: to_u16x8 -> from_u64x2, u64, 4, false,
        "Sums adjacent groups of four unsigned 16-bit lanes into 2 unsigned 64-bit lanes.";
    haddq_epi32: to_i32x4 -> from_i64x2, i64, 2, false,
        "Sums adjacent pairs of signed 32-bit lanes into 2 signed 64-bit lanes.";
    haddq_epu32: to_u32x4 -> from_u64x2, u64, 2, false,
        "Sums adjacent pairs of unsigned 32-bit lanes into 2 unsigned 64-bit lanes.";
    hsubw_epi8: to_i8x16 -> from_i16x8, i16, 2, true,
        "Subtracts adjacent pairs of signed 8-bit lanes (`a0 - a1`) into 8 signed 16-bit lanes.";
    hsubd_epi8: to_i8x16 -> from_i32x4, i32, 4, true,
        "Alternating sum `a0 - a1 + a2 - a3` of groups of four signed 8-bit lanes into 4 signed 32-bit lanes.";
    hsubd_epi16: to_i16x8 -> from_i32x4, i32, 2, true,
        "Subtracts adjacent pairs of signed 16-bit lanes (`a0 - a1`) into 4 signed 32-bit lanes.";
    hsubq_epi8: to_i8x16 -> from_i64x2, i64, 8, true,
        "Alternating sum of groups of eight signed 8-bit lanes into 2 signed 64-bit lanes.";
    hsubq_epi16: to_i16x8 -> from_i64x2, i64, 4, true,
        "Alternating sum `a0 - a1 + a2 - a3` of groups of four signed 16-bit lanes into 2 signed 64-bit lanes.";
    hsubq_epi32: to_i32x4 -> from_i64x2, i64, 2, true,
        "Subtracts adjacent pairs of signed 32-bit lanes (`a0 - a1`) into 2 signed 64-bit lanes.";
}
