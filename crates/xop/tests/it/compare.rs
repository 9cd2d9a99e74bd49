use xop2rs_xop::{
    com_epi16, com_epu8, comeq_epi16, comeq_epi32, comeq_epi64, comeq_epi8, comeq_epu16,
    comfalse_epi16, comge_epi8, comge_epu32, comgt_epi32, comgt_epi64, comgt_epi8, comgt_epu64,
    comgt_epu8, comle_epi16, comlt_epi16, comlt_epi32, comlt_epi8, comneq_epi8, comneq_epu32,
    comtrue_epu64, ComOp, V128,
};

#[test]
fn equality_is_reflexive() {
    let a = V128::from_i8x16([-128, -1, 0, 1, 127, 5, -5, 99, 3, 2, 1, 0, -1, -2, -3, -4]);
    assert_eq!(comeq_epi8(a, a), V128::ones());
    assert_eq!(comneq_epi8(a, a), V128::zero());

    let b = V128::from_i64x2([i64::MIN, i64::MAX]);
    assert_eq!(comeq_epi64(b, b), V128::ones());
}

#[test]
fn masks_are_all_ones_or_all_zero() {
    let a = V128::from_i16x8([1, 2, 3, 4, 5, 6, 7, 8]);
    let b = V128::from_i16x8([1, 0, 3, 0, 5, 0, 7, 0]);
    assert_eq!(comeq_epu16(a, b).to_u16x8(), [!0, 0, !0, 0, !0, 0, !0, 0]);
}

#[test]
fn trichotomy_per_lane() {
    let a = V128::from_i32x4([-5, 7, 0, i32::MIN]);
    let b = V128::from_i32x4([3, 7, -1, i32::MAX]);
    let lt = comlt_epi32(a, b).to_i32x4();
    let eq = comeq_epi32(a, b).to_i32x4();
    let gt = comgt_epi32(a, b).to_i32x4();
    for i in 0..4 {
        let masks = [lt[i], eq[i], gt[i]];
        assert_eq!(masks.iter().filter(|&&m| m == !0).count(), 1, "lane {i}");
        assert_eq!(masks.iter().filter(|&&m| m == 0).count(), 2, "lane {i}");
    }
}

#[test]
fn signedness_changes_the_order() {
    let a = V128::from_u8x16([0xFF; 16]);
    let b = V128::from_u8x16([1; 16]);
    // 0xFF is 255 unsigned but -1 signed.
    assert_eq!(comgt_epu8(a, b), V128::ones());
    assert_eq!(comgt_epi8(a, b), V128::zero());
    assert_eq!(comlt_epi8(a, b), V128::ones());

    let c = V128::from_u64x2([u64::MAX, 0]);
    let d = V128::from_u64x2([0, 0]);
    assert_eq!(comgt_epu64(c, d).to_u64x2(), [!0, 0]);
    assert_eq!(comgt_epi64(c, d).to_u64x2(), [0, 0]);
}

#[test]
fn derived_relations_are_consistent() {
    let a = V128::from_i8x16([3, -3, 0, 100, -100, 50, 5, -5, 1, 2, 3, 4, -1, -2, -3, -4]);
    let b = V128::from_i8x16([3, 3, 1, -100, 100, 50, -5, 5, 2, 1, 4, 3, -2, -1, -4, -3]);
    assert_eq!(comge_epi8(a, b), comlt_epi8(a, b).not());
    assert_eq!(comlt_epi8(a, b), comgt_epi8(b, a));

    let c = V128::from_u32x4([0, 1, u32::MAX, 7]);
    let d = V128::from_u32x4([0, 2, 3, 7]);
    assert_eq!(comge_epu32(c, d).to_u32x4(), [!0, 0, !0, !0]);
    assert_eq!(comneq_epu32(c, d).to_u32x4(), [0, !0, !0, 0]);
}

#[test]
fn false_and_true_ignore_operands() {
    let a = V128::from_bits(0xDEAD_BEEF);
    let b = V128::from_bits(0x1234_5678);
    assert_eq!(comfalse_epi16(a, b), V128::zero());
    assert_eq!(comtrue_epu64(a, b), V128::ones());
}

#[test]
fn dynamic_compare_matches_fixed() {
    let a = V128::from_i16x8([-3, 9, 0, 7, 7, -7, 100, -100]);
    let b = V128::from_i16x8([5, 9, -1, 6, 8, -7, -100, 100]);
    assert_eq!(com_epi16(a, b, ComOp::Lt), comlt_epi16(a, b));
    assert_eq!(com_epi16(a, b, ComOp::Le), comle_epi16(a, b));
    assert_eq!(com_epi16(a, b, ComOp::Eq), comeq_epi16(a, b));
    assert_eq!(com_epi16(a, b, ComOp::False), V128::zero());
    assert_eq!(com_epi16(a, b, ComOp::True), V128::ones());

    let c = V128::from_u8x16([200; 16]);
    let d = V128::from_u8x16([100; 16]);
    assert_eq!(com_epu8(c, d, ComOp::Gt), V128::ones());
    assert_eq!(com_epu8(c, d, ComOp::Neq), V128::ones());
}

#[test]
fn selector_immediate_round_trip() {
    for imm in 0..=7 {
        let op = ComOp::from_imm(imm).unwrap();
        assert_eq!(op.imm(), imm);
    }
    assert_eq!(ComOp::from_imm(8), None);
    assert_eq!(ComOp::from_imm(-1), None);
    assert_eq!(ComOp::from_imm(4), Some(ComOp::Eq));
}
