use xop2rs_xop::{
    macc_epi16, macc_epi32, macchi_epi32, macclo_epi32, maccd_epi16, maccs_epi16, maccs_epi32,
    maccsd_epi16, maccshi_epi32, maccslo_epi32, maddd_epi16, maddsd_epi16, V128,
};

fn splat16(x: i16) -> V128 {
    V128::from_i16x8([x; 8])
}

fn splat32(x: i32) -> V128 {
    V128::from_i32x4([x; 4])
}

#[test]
fn wrapping_multiply_accumulate() {
    let a = V128::from_i16x8([3, -3, 100, -100, 0, 1, i16::MAX, i16::MIN]);
    let b = V128::from_i16x8([4, 4, 100, 100, 9, -1, 2, 2]);
    let c = V128::from_i16x8([1, 1, 0, 0, -9, 0, 0, 0]);
    assert_eq!(
        macc_epi16(a, b, c).to_i16x8(),
        [
            13,
            -11,
            10000,
            -10000,
            -9,
            -1,
            i16::MAX.wrapping_mul(2),
            i16::MIN.wrapping_mul(2),
        ]
    );

    let r = macc_epi32(splat32(i32::MAX), splat32(2), splat32(5));
    assert_eq!(r.to_i32x4(), [i32::MAX.wrapping_mul(2).wrapping_add(5); 4]);
}

#[test]
fn saturating_multiply_accumulate_clamps_both_rails() {
    // Product 60000 + 10000 = 70000 must clamp, not wrap.
    let r = maccs_epi16(splat16(30000), splat16(2), splat16(10000));
    assert_eq!(r.to_i16x8(), [i16::MAX; 8]);

    let r = maccs_epi16(splat16(-30000), splat16(2), splat16(-10000));
    assert_eq!(r.to_i16x8(), [i16::MIN; 8]);

    // In range: identical to the wrapping form.
    let a = V128::from_i16x8([100, -100, 7, -7, 0, 1, -1, 12]);
    let b = V128::from_i16x8([5, 5, -6, -6, 3, 3, 3, 3]);
    let c = V128::from_i16x8([1, -1, 2, -2, 0, 0, 0, 0]);
    assert_eq!(maccs_epi16(a, b, c), macc_epi16(a, b, c));

    let r = maccs_epi32(splat32(i32::MAX), splat32(i32::MAX), splat32(-1));
    assert_eq!(r.to_i32x4(), [i32::MAX; 4]);
    let r = maccs_epi32(splat32(i32::MAX), splat32(i32::MIN), splat32(0));
    assert_eq!(r.to_i32x4(), [i32::MIN; 4]);
}

#[test]
fn sub_lane_selection() {
    // maccd takes the even 16-bit lanes.
    let a = V128::from_i16x8([2, 999, 3, 999, 4, 999, 5, 999]);
    let b = V128::from_i16x8([10, 999, 10, 999, 10, 999, 10, 999]);
    let c = V128::from_i32x4([1, 2, 3, 4]);
    assert_eq!(maccd_epi16(a, b, c).to_i32x4(), [21, 32, 43, 54]);

    // macclo takes the even 32-bit lanes, macchi the odd ones.
    let a = V128::from_i32x4([7, -7, 11, -11]);
    let b = V128::from_i32x4([3, 1000, 3, 1000]);
    let c = V128::from_i64x2([100, 200]);
    assert_eq!(macclo_epi32(a, b, c).to_i64x2(), [121, 233]);
    assert_eq!(macchi_epi32(a, b, c).to_i64x2(), [-6900, -10800]);
}

#[test]
fn widened_saturating_variants_clamp_to_the_destination_width() {
    // 2^30 + i32::MAX overflows 32 bits; the clamp bound is the 32-bit
    // destination lane, not the 16-bit source.
    let a = splat16(i16::MIN);
    let r = maccsd_epi16(a, a, splat32(i32::MAX));
    assert_eq!(r.to_i32x4(), [i32::MAX; 4]);

    let r = maccsd_epi16(splat16(2), splat16(3), splat32(-7));
    assert_eq!(r.to_i32x4(), [-1; 4]);

    let r = maccsd_epi16(splat16(i16::MIN), splat16(i16::MAX), splat32(i32::MIN));
    assert_eq!(r.to_i32x4(), [i32::MIN; 4]);

    // 2^62 + i64::MAX clamps to the 64-bit destination.
    let big = splat32(i32::MIN);
    let cmax = V128::from_i64x2([i64::MAX, i64::MAX]);
    assert_eq!(maccslo_epi32(big, big, cmax).to_i64x2(), [i64::MAX; 2]);
    assert_eq!(maccshi_epi32(big, big, cmax).to_i64x2(), [i64::MAX; 2]);

    let cmin = V128::from_i64x2([i64::MIN, i64::MIN]);
    let r = maccslo_epi32(big, splat32(i32::MAX), cmin);
    assert_eq!(r.to_i64x2(), [i64::MIN; 2]);

    // In range: equals the wrapping form.
    let a = V128::from_i32x4([5, 6, -7, 8]);
    let b = V128::from_i32x4([100, 100, 100, 100]);
    let c = V128::from_i64x2([10, -10]);
    assert_eq!(maccslo_epi32(a, b, c), macclo_epi32(a, b, c));
    assert_eq!(maccshi_epi32(a, b, c), macchi_epi32(a, b, c));
}

#[test]
fn dot_product_accumulate() {
    let a = V128::from_i16x8([1, 2, 3, 4, 5, 6, 7, 8]);
    let b = V128::from_i16x8([10, 10, 10, 10, 10, 10, 10, 10]);
    let c = V128::from_i32x4([1, 2, 3, 4]);
    // (1*10 + 2*10) + 1, (3*10 + 4*10) + 2, ...
    assert_eq!(maddd_epi16(a, b, c).to_i32x4(), [31, 72, 113, 154]);
    assert_eq!(maddsd_epi16(a, b, c).to_i32x4(), [31, 72, 113, 154]);
}

#[test]
fn dot_product_saturates_only_the_accumulate() {
    // Both products are 2^30; the inner sum wraps to i32::MIN in both
    // variants. Only the accumulate differs.
    let a = splat16(i16::MIN);
    let wrapped = maddd_epi16(a, a, splat32(0));
    assert_eq!(wrapped.to_i32x4(), [i32::MIN; 4]);
    let saturated = maddsd_epi16(a, a, splat32(0));
    assert_eq!(saturated.to_i32x4(), [i32::MIN; 4]);

    // Accumulate below the rail: maddd wraps, maddsd clamps.
    assert_eq!(
        maddd_epi16(a, a, splat32(-1)).to_i32x4(),
        [i32::MAX; 4]
    );
    assert_eq!(
        maddsd_epi16(a, a, splat32(-1)).to_i32x4(),
        [i32::MIN; 4]
    );

    // Accumulate above the positive rail.
    let big = V128::from_i16x8([i16::MAX, i16::MAX, 0, 0, 0, 0, 0, 0]);
    let dot = i32::from(i16::MAX) * i32::from(i16::MAX) * 2;
    assert_eq!(
        maddd_epi16(big, big, splat32(i32::MAX)).to_i32x4()[0],
        dot.wrapping_add(i32::MAX)
    );
    assert_eq!(
        maddsd_epi16(big, big, splat32(i32::MAX)).to_i32x4()[0],
        i32::MAX
    );
}
