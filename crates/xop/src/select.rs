//! Bitwise conditional select.

use xop2rs_vec::{V128, V256};

/// Selects bits from `a` where the corresponding bit of `c` is set and from
/// `b` where it is clear: `(c & a) | (!c & b)`.
///
/// The operation is defined at the bit level, so it is correct for any lane
/// interpretation; with an all-ones/all-zero lane mask in `c` (as produced by
/// the compare family) it selects whole lanes.
pub fn cmov_si128(a: V128, b: V128, c: V128) -> V128 {
    c.and(a).or(c.andnot(b))
}

/// 256-bit [`cmov_si128`], applied to each 128-bit half.
pub fn cmov_si256(a: V256, b: V256, c: V256) -> V256 {
    V256::from_halves(
        cmov_si128(a.lo(), b.lo(), c.lo()),
        cmov_si128(a.hi(), b.hi(), c.hi()),
    )
}
