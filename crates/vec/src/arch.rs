//! Re-exports target architecture-specific intrinsics.
//!
//! Only compiled on supported platforms when the `simd-intrinsics` feature
//! flag is enabled.

#[cfg(target_arch = "x86")]
use core::arch::x86 as intrin;

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64 as intrin;

pub(crate) use intrin::{
    __m128, __m128d, __m128i, _mm_and_si128, _mm_andnot_si128, _mm_castpd_si128,
    _mm_castps_si128, _mm_castsi128_pd, _mm_castsi128_ps, _mm_loadu_si128, _mm_or_si128,
    _mm_set1_epi8, _mm_setzero_si128, _mm_storeu_si128, _mm_xor_si128,
};
