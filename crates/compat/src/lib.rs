//! Vendor-named aliases for the `xop2rs` operation catalog.
//!
//! Call sites written against the `_mm_*`/`_mm256_*` naming convention of the
//! original hardware intrinsics can depend on this crate and keep compiling
//! when the shim is substituted for the vendor headers. Every alias is a
//! mechanical one-line forward to the corresponding [`xop2rs_xop`] function
//! and carries no additional semantics; the only translation happening here
//! is the conversion of the dynamic-compare immediate into [`ComOp`].

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

use xop2rs_xop::ComOp;
pub use xop2rs_vec::{V128, V256};

/// Immediate encoding of [`ComOp::Lt`] for the dynamic compare operations.
pub const _MM_PCOMCTRL_LT: i32 = 0;
/// Immediate encoding of [`ComOp::Le`].
pub const _MM_PCOMCTRL_LE: i32 = 1;
/// Immediate encoding of [`ComOp::Gt`].
pub const _MM_PCOMCTRL_GT: i32 = 2;
/// Immediate encoding of [`ComOp::Ge`].
pub const _MM_PCOMCTRL_GE: i32 = 3;
/// Immediate encoding of [`ComOp::Eq`].
pub const _MM_PCOMCTRL_EQ: i32 = 4;
/// Immediate encoding of [`ComOp::Neq`].
pub const _MM_PCOMCTRL_NEQ: i32 = 5;
/// Immediate encoding of [`ComOp::False`].
pub const _MM_PCOMCTRL_FALSE: i32 = 6;
/// Immediate encoding of [`ComOp::True`].
pub const _MM_PCOMCTRL_TRUE: i32 = 7;

macro_rules! alias {
    ($(fn $legacy:ident($($arg:ident: $ty:ty),*) -> $ret:ty = $target:ident;)*) => {$(
        #[doc = concat!("Vendor-named alias for [`xop2rs_xop::", stringify!($target), "`].")]
        #[inline]
        pub fn $legacy($($arg: $ty),*) -> $ret {
            xop2rs_xop::$target($($arg),*)
        }
    )*};
}

macro_rules! alias_com {
    ($(fn $legacy:ident = $target:ident;)*) => {$(
        #[doc = concat!(
            "Vendor-named alias for [`xop2rs_xop::", stringify!($target),
            "`], taking the predicate as a `_MM_PCOMCTRL_*` immediate.\n\n",
            "Immediates outside `0..=7` are undefined in the hardware encoding; ",
            "they trip a debug assertion and yield the zero vector in release builds."
        )]
        #[inline]
        pub fn $legacy(a: V128, b: V128, imm8: i32) -> V128 {
            match ComOp::from_imm(imm8) {
                Some(op) => xop2rs_xop::$target(a, b, op),
                None => {
                    debug_assert!(false, "compare selector out of range: {imm8}");
                    V128::zero()
                }
            }
        }
    )*};
}

alias! {
    // Conditional select.
    fn _mm_cmov_si128(a: V128, b: V128, c: V128) -> V128 = cmov_si128;
    fn _mm256_cmov_si256(a: V256, b: V256, c: V256) -> V256 = cmov_si256;

    // Fixed-relation compares.
    fn _mm_comeq_epi8(a: V128, b: V128) -> V128 = comeq_epi8;
    fn _mm_comeq_epi16(a: V128, b: V128) -> V128 = comeq_epi16;
    fn _mm_comeq_epi32(a: V128, b: V128) -> V128 = comeq_epi32;
    fn _mm_comeq_epi64(a: V128, b: V128) -> V128 = comeq_epi64;
    fn _mm_comeq_epu8(a: V128, b: V128) -> V128 = comeq_epu8;
    fn _mm_comeq_epu16(a: V128, b: V128) -> V128 = comeq_epu16;
    fn _mm_comeq_epu32(a: V128, b: V128) -> V128 = comeq_epu32;
    fn _mm_comeq_epu64(a: V128, b: V128) -> V128 = comeq_epu64;
    fn _mm_comneq_epi8(a: V128, b: V128) -> V128 = comneq_epi8;
    fn _mm_comneq_epi16(a: V128, b: V128) -> V128 = comneq_epi16;
    fn _mm_comneq_epi32(a: V128, b: V128) -> V128 = comneq_epi32;
    fn _mm_comneq_epi64(a: V128, b: V128) -> V128 = comneq_epi64;
    fn _mm_comneq_epu8(a: V128, b: V128) -> V128 = comneq_epu8;
    fn _mm_comneq_epu16(a: V128, b: V128) -> V128 = comneq_epu16;
    fn _mm_comneq_epu32(a: V128, b: V128) -> V128 = comneq_epu32;
    fn _mm_comneq_epu64(a: V128, b: V128) -> V128 = comneq_epu64;
    fn _mm_comlt_epi8(a: V128, b: V128) -> V128 = comlt_epi8;
    fn _mm_comlt_epi16(a: V128, b: V128) -> V128 = comlt_epi16;
    fn _mm_comlt_epi32(a: V128, b: V128) -> V128 = comlt_epi32;
    fn _mm_comlt_epi64(a: V128, b: V128) -> V128 = comlt_epi64;
    fn _mm_comlt_epu8(a: V128, b: V128) -> V128 = comlt_epu8;
    fn _mm_comlt_epu16(a: V128, b: V128) -> V128 = comlt_epu16;
    fn _mm_comlt_epu32(a: V128, b: V128) -> V128 = comlt_epu32;
    fn _mm_comlt_epu64(a: V128, b: V128) -> V128 = comlt_epu64;
    fn _mm_comle_epi8(a: V128, b: V128) -> V128 = comle_epi8;
    fn _mm_comle_epi16(a: V128, b: V128) -> V128 = comle_epi16;
    fn _mm_comle_epi32(a: V128, b: V128) -> V128 = comle_epi32;
    fn _mm_comle_epi64(a: V128, b: V128) -> V128 = comle_epi64;
    fn _mm_comle_epu8(a: V128, b: V128) -> V128 = comle_epu8;
    fn _mm_comle_epu16(a: V128, b: V128) -> V128 = comle_epu16;
    fn _mm_comle_epu32(a: V128, b: V128) -> V128 = comle_epu32;
    fn _mm_comle_epu64(a: V128, b: V128) -> V128 = comle_epu64;
    fn _mm_comgt_epi8(a: V128, b: V128) -> V128 = comgt_epi8;
    fn _mm_comgt_epi16(a: V128, b: V128) -> V128 = comgt_epi16;
    fn _mm_comgt_epi32(a: V128, b: V128) -> V128 = comgt_epi32;
    fn _mm_comgt_epi64(a: V128, b: V128) -> V128 = comgt_epi64;
    fn _mm_comgt_epu8(a: V128, b: V128) -> V128 = comgt_epu8;
    fn _mm_comgt_epu16(a: V128, b: V128) -> V128 = comgt_epu16;
    fn _mm_comgt_epu32(a: V128, b: V128) -> V128 = comgt_epu32;
    fn _mm_comgt_epu64(a: V128, b: V128) -> V128 = comgt_epu64;
    fn _mm_comge_epi8(a: V128, b: V128) -> V128 = comge_epi8;
    fn _mm_comge_epi16(a: V128, b: V128) -> V128 = comge_epi16;
    fn _mm_comge_epi32(a: V128, b: V128) -> V128 = comge_epi32;
    fn _mm_comge_epi64(a: V128, b: V128) -> V128 = comge_epi64;
    fn _mm_comge_epu8(a: V128, b: V128) -> V128 = comge_epu8;
    fn _mm_comge_epu16(a: V128, b: V128) -> V128 = comge_epu16;
    fn _mm_comge_epu32(a: V128, b: V128) -> V128 = comge_epu32;
    fn _mm_comge_epu64(a: V128, b: V128) -> V128 = comge_epu64;
    fn _mm_comfalse_epi8(a: V128, b: V128) -> V128 = comfalse_epi8;
    fn _mm_comfalse_epi16(a: V128, b: V128) -> V128 = comfalse_epi16;
    fn _mm_comfalse_epi32(a: V128, b: V128) -> V128 = comfalse_epi32;
    fn _mm_comfalse_epi64(a: V128, b: V128) -> V128 = comfalse_epi64;
    fn _mm_comfalse_epu8(a: V128, b: V128) -> V128 = comfalse_epu8;
    fn _mm_comfalse_epu16(a: V128, b: V128) -> V128 = comfalse_epu16;
    fn _mm_comfalse_epu32(a: V128, b: V128) -> V128 = comfalse_epu32;
    fn _mm_comfalse_epu64(a: V128, b: V128) -> V128 = comfalse_epu64;
    fn _mm_comtrue_epi8(a: V128, b: V128) -> V128 = comtrue_epi8;
    fn _mm_comtrue_epi16(a: V128, b: V128) -> V128 = comtrue_epi16;
    fn _mm_comtrue_epi32(a: V128, b: V128) -> V128 = comtrue_epi32;
    fn _mm_comtrue_epi64(a: V128, b: V128) -> V128 = comtrue_epi64;
    fn _mm_comtrue_epu8(a: V128, b: V128) -> V128 = comtrue_epu8;
    fn _mm_comtrue_epu16(a: V128, b: V128) -> V128 = comtrue_epu16;
    fn _mm_comtrue_epu32(a: V128, b: V128) -> V128 = comtrue_epu32;
    fn _mm_comtrue_epu64(a: V128, b: V128) -> V128 = comtrue_epu64;

    // Fraction extraction.
    fn _mm_frcz_ps(a: V128) -> V128 = frcz_ps;
    fn _mm_frcz_pd(a: V128) -> V128 = frcz_pd;
    fn _mm_frcz_ss(a: V128) -> V128 = frcz_ss;
    fn _mm_frcz_sd(a: V128) -> V128 = frcz_sd;
    fn _mm256_frcz_ps(a: V256) -> V256 = frcz_ps256;
    fn _mm256_frcz_pd(a: V256) -> V256 = frcz_pd256;

    // Horizontal add/subtract.
    fn _mm_haddw_epi8(a: V128) -> V128 = haddw_epi8;
    fn _mm_haddw_epu8(a: V128) -> V128 = haddw_epu8;
    fn _mm_haddd_epi8(a: V128) -> V128 = haddd_epi8;
    fn _mm_haddd_epu8(a: V128) -> V128 = haddd_epu8;
    fn _mm_haddd_epi16(a: V128) -> V128 = haddd_epi16;
    fn _mm_haddd_epu16(a: V128) -> V128 = haddd_epu16;
    fn _mm_haddq_epi8(a: V128) -> V128 = haddq_epi8;
    fn _mm_haddq_epu8(a: V128) -> V128 = haddq_epu8;
    fn _mm_haddq_epi16(a: V128) -> V128 = haddq_epi16;
    fn _mm_haddq_epu16(a: V128) -> V128 = haddq_epu16;
    fn _mm_haddq_epi32(a: V128) -> V128 = haddq_epi32;
    fn _mm_haddq_epu32(a: V128) -> V128 = haddq_epu32;
    fn _mm_hsubw_epi8(a: V128) -> V128 = hsubw_epi8;
    fn _mm_hsubd_epi8(a: V128) -> V128 = hsubd_epi8;
    fn _mm_hsubd_epi16(a: V128) -> V128 = hsubd_epi16;
    fn _mm_hsubq_epi8(a: V128) -> V128 = hsubq_epi8;
    fn _mm_hsubq_epi16(a: V128) -> V128 = hsubq_epi16;
    fn _mm_hsubq_epi32(a: V128) -> V128 = hsubq_epi32;

    // Multiply-accumulate.
    fn _mm_macc_epi16(a: V128, b: V128, c: V128) -> V128 = macc_epi16;
    fn _mm_macc_epi32(a: V128, b: V128, c: V128) -> V128 = macc_epi32;
    fn _mm_maccd_epi16(a: V128, b: V128, c: V128) -> V128 = maccd_epi16;
    fn _mm_macclo_epi32(a: V128, b: V128, c: V128) -> V128 = macclo_epi32;
    fn _mm_macchi_epi32(a: V128, b: V128, c: V128) -> V128 = macchi_epi32;
    fn _mm_maccs_epi16(a: V128, b: V128, c: V128) -> V128 = maccs_epi16;
    fn _mm_maccs_epi32(a: V128, b: V128, c: V128) -> V128 = maccs_epi32;
    fn _mm_maccsd_epi16(a: V128, b: V128, c: V128) -> V128 = maccsd_epi16;
    fn _mm_maccslo_epi32(a: V128, b: V128, c: V128) -> V128 = maccslo_epi32;
    fn _mm_maccshi_epi32(a: V128, b: V128, c: V128) -> V128 = maccshi_epi32;
    fn _mm_maddd_epi16(a: V128, b: V128, c: V128) -> V128 = maddd_epi16;
    fn _mm_maddsd_epi16(a: V128, b: V128, c: V128) -> V128 = maddsd_epi16;

    // Shifts and rotates.
    fn _mm_sha_epi8(a: V128, count: V128) -> V128 = sha_epi8;
    fn _mm_sha_epi16(a: V128, count: V128) -> V128 = sha_epi16;
    fn _mm_sha_epi32(a: V128, count: V128) -> V128 = sha_epi32;
    fn _mm_sha_epi64(a: V128, count: V128) -> V128 = sha_epi64;
    fn _mm_shl_epi8(a: V128, count: V128) -> V128 = shl_epi8;
    fn _mm_shl_epi16(a: V128, count: V128) -> V128 = shl_epi16;
    fn _mm_shl_epi32(a: V128, count: V128) -> V128 = shl_epi32;
    fn _mm_shl_epi64(a: V128, count: V128) -> V128 = shl_epi64;
    fn _mm_rot_epi8(a: V128, count: V128) -> V128 = rot_epi8;
    fn _mm_rot_epi16(a: V128, count: V128) -> V128 = rot_epi16;
    fn _mm_rot_epi32(a: V128, count: V128) -> V128 = rot_epi32;
    fn _mm_rot_epi64(a: V128, count: V128) -> V128 = rot_epi64;
    fn _mm_roti_epi8(a: V128, count: i32) -> V128 = roti_epi8;
    fn _mm_roti_epi16(a: V128, count: i32) -> V128 = roti_epi16;
    fn _mm_roti_epi32(a: V128, count: i32) -> V128 = roti_epi32;
    fn _mm_roti_epi64(a: V128, count: i32) -> V128 = roti_epi64;

    // Permutes.
    fn _mm_perm_epi8(a: V128, b: V128, c: V128) -> V128 = perm_epi8;
    fn _mm_permute2_ps(a: V128, b: V128, c: V128, imm8: i32) -> V128 = permute2_ps;
    fn _mm_permute2_pd(a: V128, b: V128, c: V128, imm8: i32) -> V128 = permute2_pd;
    fn _mm256_permute2_ps(a: V256, b: V256, c: V256, imm8: i32) -> V256 = permute2_ps256;
    fn _mm256_permute2_pd(a: V256, b: V256, c: V256, imm8: i32) -> V256 = permute2_pd256;
}

alias_com! {
    fn _mm_com_epi8 = com_epi8;
    fn _mm_com_epi16 = com_epi16;
    fn _mm_com_epi32 = com_epi32;
    fn _mm_com_epi64 = com_epi64;
    fn _mm_com_epu8 = com_epu8;
    fn _mm_com_epu16 = com_epu16;
    fn _mm_com_epu32 = com_epu32;
    fn _mm_com_epu64 = com_epu64;
}
