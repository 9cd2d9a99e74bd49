//! The generic [128-bit vector register value](V128).

#[cfg(xop_sse2_intrinsics)]
type Repr = crate::arch::__m128i;

#[derive(Clone, Copy)]
#[repr(align(16))]
#[cfg(xop_no_intrinsics)]
struct Repr {
    bits: u128,
}

/// Represents a generic 128-bit register value whose interpretation is not
/// specified.
///
/// # Interpretations
///
/// Specific interpretations of the lanes of a [`V128`] are obtained through
/// explicit accessor pairs, one per lane type: [`from_i8x16`]/[`to_i8x16`],
/// [`from_u16x8`]/[`to_u16x8`], [`from_f32x4`]/[`to_f32x4`], and so on. All
/// views alias the same 16 bytes; lane `i` of a `W`-byte lane type occupies
/// bytes `i * W..(i + 1) * W` in little-endian order, so converting through
/// one view and out of another reinterprets the underlying two's-complement
/// or IEEE-754 bit patterns.
///
/// # Disabling `simd-intrinsics`
///
/// When the `simd-intrinsics` feature flag is **not** enabled, the value is
/// stored as a plain 128-bit integer (which may still be optimized by the
/// Rust compiler's auto-vectorization) rather than a target-architecture
/// specific SIMD register type.
///
/// [`from_i8x16`]: V128::from_i8x16
/// [`to_i8x16`]: V128::to_i8x16
/// [`from_u16x8`]: V128::from_u16x8
/// [`to_u16x8`]: V128::to_u16x8
/// [`from_f32x4`]: V128::from_f32x4
/// [`to_f32x4`]: V128::to_f32x4
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct V128(Repr);

impl V128 {
    /// Returns the vector with every bit clear.
    pub fn zero() -> Self {
        #[cfg(xop_sse2_intrinsics)]
        // SAFETY: check for `sse2` target feature occurs above.
        return Self(unsafe { crate::arch::_mm_setzero_si128() });

        #[cfg(xop_no_intrinsics)]
        return Self(Repr { bits: 0 });
    }

    /// Returns the vector with every bit set.
    pub fn ones() -> Self {
        #[cfg(xop_sse2_intrinsics)]
        // SAFETY: check for `sse2` target feature occurs above.
        return Self(unsafe { crate::arch::_mm_set1_epi8(-1) });

        #[cfg(xop_no_intrinsics)]
        return Self(Repr { bits: !0 });
    }

    /// Interprets a 128-bit integer value as a 128-bit vector.
    pub fn from_bits(bits: u128) -> Self {
        #[cfg(xop_sse2_intrinsics)]
        return Self::from_bytes(bits.to_le_bytes());

        #[cfg(xop_no_intrinsics)]
        return Self(Repr { bits });
    }

    /// Returns a 128-bit integer value containing the contents of the vector.
    pub fn to_bits(self) -> u128 {
        #[cfg(xop_sse2_intrinsics)]
        return u128::from_le_bytes(self.to_bytes());

        #[cfg(xop_no_intrinsics)]
        return self.0.bits;
    }

    /// Constructs a 128-bit vector from bytes in little-endian order.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        #[cfg(xop_sse2_intrinsics)]
        // SAFETY: check for `sse2` target feature occurs above; `_mm_loadu_si128`
        // places no alignment requirement on its operand.
        return Self(unsafe { crate::arch::_mm_loadu_si128(bytes.as_ptr().cast()) });

        #[cfg(xop_no_intrinsics)]
        return Self(Repr {
            bits: u128::from_le_bytes(bytes),
        });
    }

    /// Returns the representation of the vector as a byte array in
    /// little-endian order.
    pub fn to_bytes(self) -> [u8; 16] {
        #[cfg(xop_sse2_intrinsics)]
        return {
            let mut bytes = [0u8; 16];
            // SAFETY: check for `sse2` target feature occurs above;
            // `_mm_storeu_si128` places no alignment requirement on its operand.
            unsafe {
                crate::arch::_mm_storeu_si128(bytes.as_mut_ptr().cast(), self.0);
            }
            bytes
        };

        #[cfg(xop_no_intrinsics)]
        return self.0.bits.to_le_bytes();
    }

    /// Bitwise AND.
    pub fn and(self, rhs: Self) -> Self {
        #[cfg(xop_sse2_intrinsics)]
        // SAFETY: check for `sse2` target feature occurs above.
        return Self(unsafe { crate::arch::_mm_and_si128(self.0, rhs.0) });

        #[cfg(xop_no_intrinsics)]
        return Self(Repr {
            bits: self.0.bits & rhs.0.bits,
        });
    }

    /// Bitwise OR.
    pub fn or(self, rhs: Self) -> Self {
        #[cfg(xop_sse2_intrinsics)]
        // SAFETY: check for `sse2` target feature occurs above.
        return Self(unsafe { crate::arch::_mm_or_si128(self.0, rhs.0) });

        #[cfg(xop_no_intrinsics)]
        return Self(Repr {
            bits: self.0.bits | rhs.0.bits,
        });
    }

    /// Bitwise XOR.
    pub fn xor(self, rhs: Self) -> Self {
        #[cfg(xop_sse2_intrinsics)]
        // SAFETY: check for `sse2` target feature occurs above.
        return Self(unsafe { crate::arch::_mm_xor_si128(self.0, rhs.0) });

        #[cfg(xop_no_intrinsics)]
        return Self(Repr {
            bits: self.0.bits ^ rhs.0.bits,
        });
    }

    /// Bitwise AND-NOT, computing `!self & rhs` like the corresponding x86
    /// instruction.
    pub fn andnot(self, rhs: Self) -> Self {
        #[cfg(xop_sse2_intrinsics)]
        // SAFETY: check for `sse2` target feature occurs above.
        return Self(unsafe { crate::arch::_mm_andnot_si128(self.0, rhs.0) });

        #[cfg(xop_no_intrinsics)]
        return Self(Repr {
            bits: !self.0.bits & rhs.0.bits,
        });
    }

    /// Bitwise complement.
    pub fn not(self) -> Self {
        self.xor(Self::ones())
    }
}

#[cfg(xop_sse2_intrinsics)]
impl From<crate::arch::__m128i> for V128 {
    fn from(v: crate::arch::__m128i) -> Self {
        Self(v)
    }
}

#[cfg(xop_sse2_intrinsics)]
impl From<V128> for crate::arch::__m128i {
    fn from(v: V128) -> Self {
        v.0
    }
}

#[cfg(xop_sse2_intrinsics)]
impl From<crate::arch::__m128> for V128 {
    fn from(v: crate::arch::__m128) -> Self {
        // SAFETY: this is compiled only when the `sse2` target feature is enabled.
        Self(unsafe { crate::arch::_mm_castps_si128(v) })
    }
}

#[cfg(xop_sse2_intrinsics)]
impl From<V128> for crate::arch::__m128 {
    fn from(v: V128) -> Self {
        // SAFETY: this is compiled only when the `sse2` target feature is enabled.
        unsafe { crate::arch::_mm_castsi128_ps(v.0) }
    }
}

#[cfg(xop_sse2_intrinsics)]
impl From<crate::arch::__m128d> for V128 {
    fn from(v: crate::arch::__m128d) -> Self {
        // SAFETY: this is compiled only when the `sse2` target feature is enabled.
        Self(unsafe { crate::arch::_mm_castpd_si128(v) })
    }
}

#[cfg(xop_sse2_intrinsics)]
impl From<V128> for crate::arch::__m128d {
    fn from(v: V128) -> Self {
        // SAFETY: this is compiled only when the `sse2` target feature is enabled.
        unsafe { crate::arch::_mm_castsi128_pd(v.0) }
    }
}

impl PartialEq for V128 {
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for V128 {}

impl core::fmt::Debug for V128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#034X}", self.to_bits())
    }
}
