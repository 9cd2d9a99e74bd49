use xop2rs_xop::{perm_epi8, permute2_pd, permute2_pd256, permute2_ps, permute2_ps256, V128, V256};

fn bytes_a() -> V128 {
    V128::from_u8x16([
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE,
        0xFF,
    ])
}

fn bytes_b() -> V128 {
    V128::from_u8x16([
        0x0F, 0x1E, 0x2D, 0x3C, 0x4B, 0x5A, 0x69, 0x78, 0x87, 0x96, 0xA5, 0xB4, 0xC3, 0xD2, 0xE1,
        0xF0,
    ])
}

fn identity_ctrl() -> V128 {
    V128::from_u8x16(core::array::from_fn(|i| i as u8))
}

#[test]
fn identity_control_reproduces_a() {
    assert_eq!(perm_epi8(bytes_a(), bytes_b(), identity_ctrl()), bytes_a());
}

#[test]
fn bit_four_selects_the_second_source() {
    let ctrl = V128::from_u8x16(core::array::from_fn(|i| i as u8 + 16));
    assert_eq!(perm_epi8(bytes_a(), bytes_b(), ctrl), bytes_b());
}

#[test]
fn index_permutes_within_a_source() {
    // Reverse the bytes of `a`.
    let ctrl = V128::from_u8x16(core::array::from_fn(|i| 15 - i as u8));
    let expected: [u8; 16] = core::array::from_fn(|i| bytes_a().to_u8x16()[15 - i]);
    assert_eq!(perm_epi8(bytes_a(), bytes_b(), ctrl).to_u8x16(), expected);
}

#[test]
fn negate_bit_complements_the_selected_byte() {
    let ctrl = V128::from_u8x16(core::array::from_fn(|i| i as u8 | 0x20));
    let expected: [u8; 16] = bytes_a().to_u8x16().map(|b| !b);
    assert_eq!(perm_epi8(bytes_a(), bytes_b(), ctrl).to_u8x16(), expected);
}

#[test]
fn post_ops_apply_after_the_complement() {
    let a = V128::from_u8x16([0b0000_0001; 16]);
    let b = V128::zero();

    // Bit reversal.
    let ctrl = V128::from_u8x16([0x40; 16]);
    assert_eq!(perm_epi8(a, b, ctrl).to_u8x16(), [0b1000_0000; 16]);

    // Force zero.
    let ctrl = V128::from_u8x16([0x80; 16]);
    assert_eq!(perm_epi8(a, b, ctrl), V128::zero());

    // Sign fill: replicate bit 7.
    let mixed = V128::from_u8x16([
        0x80, 0x7F, 0xFF, 0x00, 0x81, 0x01, 0xC3, 0x3C, 0x80, 0x7F, 0xFF, 0x00, 0x81, 0x01, 0xC3,
        0x3C,
    ]);
    let ctrl = V128::from_u8x16(core::array::from_fn(|i| i as u8 | 0xC0));
    assert_eq!(
        perm_epi8(mixed, b, ctrl).to_u8x16(),
        [0xFF, 0, 0xFF, 0, 0xFF, 0, 0xFF, 0, 0xFF, 0, 0xFF, 0, 0xFF, 0, 0xFF, 0]
    );

    // Complement happens first: !0b0000_0001 = 0b1111_1110, reversed = 0b0111_1111.
    let ctrl = V128::from_u8x16([0x60; 16]);
    assert_eq!(perm_epi8(a, b, ctrl).to_u8x16(), [0b0111_1111; 16]);

    // Complement then sign fill: !0x7F has bit 7 set.
    let ctrl = V128::from_u8x16([0xE0; 16]);
    assert_eq!(
        perm_epi8(V128::from_u8x16([0x7F; 16]), b, ctrl).to_u8x16(),
        [0xFF; 16]
    );
}

#[test]
fn lane_permute_selects_from_the_concatenation() {
    let a = V128::from_u32x4([100, 101, 102, 103]);
    let b = V128::from_u32x4([200, 201, 202, 203]);
    // Selector 0..=3 reads a, 4..=7 reads b.
    let c = V128::from_u32x4([7, 0, 4, 3]);
    assert_eq!(permute2_ps(a, b, c, 0).to_u32x4(), [203, 100, 200, 103]);

    let a = V128::from_u64x2([1000, 1001]);
    let b = V128::from_u64x2([2000, 2001]);
    // The pd selector sits in bits 1..=2.
    let c = V128::from_u64x2([3 << 1, 0 << 1]);
    assert_eq!(permute2_pd(a, b, c, 0).to_u64x2(), [2001, 1000]);
}

#[test]
fn zero_override_table_is_exact() {
    let a = V128::from_u32x4([11, 11, 11, 11]);
    let b = V128::from_u32x4([22, 22, 22, 22]);
    for m2z in 0..=3 {
        for zero_bit in [0u32, 0x08] {
            let c = V128::from_u32x4([zero_bit; 4]);
            let zeroed = matches!(zero_bit | m2z, 0x3 | 0xA);
            let expected = if zeroed { 0 } else { 11 };
            assert_eq!(
                permute2_ps(a, b, c, m2z as i32).to_u32x4(),
                [expected; 4],
                "zero_bit = {zero_bit:#x}, m2z = {m2z}"
            );

            let cd = V128::from_u64x2([u64::from(zero_bit); 2]);
            let ad = V128::from_u64x2([33, 33]);
            let bd = V128::from_u64x2([44, 44]);
            let expected = if zeroed { 0 } else { 33 };
            assert_eq!(
                permute2_pd(ad, bd, cd, m2z as i32).to_u64x2(),
                [expected; 2],
                "zero_bit = {zero_bit:#x}, m2z = {m2z}"
            );
        }
    }
}

#[test]
fn wide_permutes_compose_from_halves() {
    let a = V256::from_halves(V128::from_u32x4([1, 2, 3, 4]), V128::from_u32x4([5, 6, 7, 8]));
    let b = V256::from_halves(
        V128::from_u32x4([10, 20, 30, 40]),
        V128::from_u32x4([50, 60, 70, 80]),
    );
    let c = V256::from_halves(V128::from_u32x4([4, 5, 6, 7]), V128::from_u32x4([0, 1, 2, 3]));
    let r = permute2_ps256(a, b, c, 0);
    assert_eq!(r.lo(), permute2_ps(a.lo(), b.lo(), c.lo(), 0));
    assert_eq!(r.hi(), permute2_ps(a.hi(), b.hi(), c.hi(), 0));
    assert_eq!(r.to_u32x8(), [10, 20, 30, 40, 5, 6, 7, 8]);

    let r = permute2_pd256(
        V256::from_bytes(a.to_bytes()),
        V256::from_bytes(b.to_bytes()),
        V256::from_halves(V128::from_u64x2([0, 0]), V128::from_u64x2([0, 0])),
        0,
    );
    assert_eq!(r.lo(), permute2_pd(a.lo(), b.lo(), V128::from_u64x2([0, 0]), 0));
}
