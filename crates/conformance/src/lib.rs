//! Harness primitives for the conformance runner: seeded random vector
//! generation, tolerant result comparison, and mismatch reporting.
//!
//! The contract mirrors the test harness the original shim was driven by:
//! supply random typed vectors, compare two result vectors for equality
//! (exactly for integers, within a documented ULP tolerance for floats), and
//! on the first mismatch dump the operands and both results.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use xop2rs_vec::{V128, V256};

/// Floating-point results may differ from the scalar model by at most this
/// many units in the last place, per lane.
pub const MAX_ULPS: u32 = 1;

/// Creates the deterministic generator every check draws from.
pub fn rng_for(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Generates a uniformly random 128-bit vector.
pub fn rand_v128(rng: &mut SmallRng) -> V128 {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);
    V128::from_bytes(bytes)
}

/// Generates a uniformly random 256-bit vector.
pub fn rand_v256(rng: &mut SmallRng) -> V256 {
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes[..]);
    V256::from_bytes(bytes)
}

/// Generates an operand pair that shares some 32-bit chunks, so that
/// equality-flavored relations see both outcomes instead of almost never
/// holding between independent random vectors.
pub fn rand_related_pair(rng: &mut SmallRng) -> (V128, V128) {
    let a = rand_v128(rng);
    let mut b = rand_v128(rng).to_bytes();
    let shared = a.to_bytes();
    for chunk in 0..4 {
        if rng.gen_ratio(1, 3) {
            let range = chunk * 4..(chunk + 1) * 4;
            b[range.clone()].copy_from_slice(&shared[range]);
        }
    }
    (a, V128::from_bytes(b))
}

/// Generates a vector of floating-point lanes drawn from a moderate range,
/// with occasional non-finite and integral lanes mixed in.
pub fn rand_f32s(rng: &mut SmallRng) -> V128 {
    V128::from_f32x4(core::array::from_fn(|_| match rng.gen_range(0..8) {
        0 => f32::NAN,
        1 => f32::INFINITY,
        2 => rng.gen_range(-100i32..100) as f32,
        _ => rng.gen_range(-1.0e6f32..1.0e6),
    }))
}

/// Generates a vector of 64-bit floating-point lanes, as [`rand_f32s`].
pub fn rand_f64s(rng: &mut SmallRng) -> V128 {
    V128::from_f64x2(core::array::from_fn(|_| match rng.gen_range(0..8) {
        0 => f64::NAN,
        1 => f64::NEG_INFINITY,
        2 => rng.gen_range(-100i32..100) as f64,
        _ => rng.gen_range(-1.0e9f64..1.0e9),
    }))
}

fn ulp_distance_f32(a: f32, b: f32) -> u32 {
    if a.is_nan() && b.is_nan() {
        return 0;
    }
    if a == b {
        return 0;
    }
    if a.is_sign_positive() != b.is_sign_positive() || a.is_nan() || b.is_nan() {
        return u32::MAX;
    }
    a.to_bits().abs_diff(b.to_bits())
}

fn ulp_distance_f64(a: f64, b: f64) -> u64 {
    if a.is_nan() && b.is_nan() {
        return 0;
    }
    if a == b {
        return 0;
    }
    if a.is_sign_positive() != b.is_sign_positive() || a.is_nan() || b.is_nan() {
        return u64::MAX;
    }
    a.to_bits().abs_diff(b.to_bits())
}

/// Compares two results interpreted as 32-bit float lanes within
/// [`MAX_ULPS`]; *NaN* lanes compare equal to *NaN* lanes.
pub fn f32x4_agree(got: V128, want: V128) -> bool {
    got.to_f32x4()
        .into_iter()
        .zip(want.to_f32x4())
        .all(|(g, w)| ulp_distance_f32(g, w) <= MAX_ULPS)
}

/// Compares two results interpreted as 64-bit float lanes within
/// [`MAX_ULPS`]; *NaN* lanes compare equal to *NaN* lanes.
pub fn f64x2_agree(got: V128, want: V128) -> bool {
    got.to_f64x2()
        .into_iter()
        .zip(want.to_f64x2())
        .all(|(g, w)| ulp_distance_f64(g, w) <= u64::from(MAX_ULPS))
}

/// A failed comparison: the operation, a dump of the operands, and both
/// result vectors.
#[derive(Debug)]
pub struct Mismatch {
    /// Name of the operation that disagreed with its model.
    pub op: &'static str,
    /// Rendered operand vectors.
    pub operands: String,
    /// Result produced by the shim.
    pub got: String,
    /// Result produced by the scalar model.
    pub want: String,
}

impl Mismatch {
    /// Builds a mismatch record from the operand and result vectors.
    pub fn new(op: &'static str, operands: &[V128], got: V128, want: V128) -> Self {
        let mut rendered = String::new();
        for (i, v) in operands.iter().enumerate() {
            if i > 0 {
                rendered.push_str(", ");
            }
            rendered.push_str(&format!("{v:?}"));
        }
        Self {
            op,
            operands: rendered,
            got: format!("{got:?}"),
            want: format!("{want:?}"),
        }
    }

    /// Builds a mismatch record for a 256-bit operation.
    pub fn wide(op: &'static str, operands: &[V256], got: V256, want: V256) -> Self {
        let mut rendered = String::new();
        for (i, v) in operands.iter().enumerate() {
            if i > 0 {
                rendered.push_str(", ");
            }
            rendered.push_str(&format!("{v:?}"));
        }
        Self {
            op,
            operands: rendered,
            got: format!("{got:?}"),
            want: format!("{want:?}"),
        }
    }
}

impl core::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "conformance mismatch in `{}`", self.op)?;
        writeln!(f, "  operands: {}", self.operands)?;
        writeln!(f, "  got:      {}", self.got)?;
        write!(f, "  expected: {}", self.want)
    }
}

impl std::error::Error for Mismatch {}
