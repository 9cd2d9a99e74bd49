//! Re-exports target architecture-specific intrinsics.
//!
//! Only compiled on supported platforms when the `simd-intrinsics` feature
//! flag is enabled.

#[cfg(target_arch = "x86")]
use core::arch::x86 as intrin;

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64 as intrin;

pub(crate) use intrin::{
    __m128i, _mm_add_epi16, _mm_add_epi32, _mm_cmpeq_epi16, _mm_cmpeq_epi32, _mm_cmpeq_epi8,
    _mm_cmpgt_epi16, _mm_cmpgt_epi32, _mm_cmpgt_epi8, _mm_madd_epi16, _mm_mullo_epi16,
    _mm_set1_epi16, _mm_set1_epi32, _mm_set1_epi8, _mm_xor_si128,
};
