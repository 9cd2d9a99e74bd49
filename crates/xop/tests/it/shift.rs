use xop2rs_xop::{
    rot_epi16, rot_epi32, rot_epi64, rot_epi8, roti_epi16, roti_epi32, roti_epi64, roti_epi8,
    sha_epi16, sha_epi32, sha_epi64, sha_epi8, shl_epi16, shl_epi32, shl_epi64, shl_epi8, V128,
};

#[test]
fn logical_shift_follows_the_count_sign() {
    let a = V128::from_u8x16([0b1000_0001; 16]);
    let count = V128::from_i8x16([0, 1, -1, 4, -4, 7, -7, 0, 1, -1, 2, -2, 3, -3, 5, -5]);
    assert_eq!(
        shl_epi8(a, count).to_u8x16(),
        [
            0b1000_0001,
            0b0000_0010,
            0b0100_0000,
            0b0001_0000,
            0b0000_1000,
            0b1000_0000,
            0b0000_0001,
            0b1000_0001,
            0b0000_0010,
            0b0100_0000,
            0b0000_0100,
            0b0010_0000,
            0b0000_1000,
            0b0001_0000,
            0b0010_0000,
            0b0000_0100,
        ]
    );
}

#[test]
fn arithmetic_right_shift_fills_with_the_sign() {
    let a = V128::from_i16x8([-32768, -2, 255, -255, 16, -16, 1, -1]);
    let count = V128::from_i16x8([-15, -1, -4, -4, 2, 2, 0, -1]);
    assert_eq!(
        sha_epi16(a, count).to_i16x8(),
        [-1, -1, 15, -16, 64, -64, 1, -1]
    );

    let a = V128::from_i64x2([i64::MIN, -1]);
    let count = V128::from_i64x2([-63, -1]);
    assert_eq!(sha_epi64(a, count).to_i64x2(), [-1, -1]);
}

#[test]
fn oversized_shift_counts_shift_everything_out() {
    let a = V128::from_u32x4([0xDEAD_BEEF; 4]);
    let count = V128::from_i32x4([32, -32, 100, -100]);
    assert_eq!(shl_epi32(a, count).to_u32x4(), [0; 4]);

    let b = V128::from_i32x4([-1, -1, 5, 5]);
    assert_eq!(sha_epi32(b, count).to_i32x4(), [0, -1, 0, 0]);

    let c = V128::from_i8x16([-1; 16]);
    let counts = V128::from_i8x16([8, -8, 127, -128, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(
        sha_epi8(c, counts).to_i8x16(),
        [0, -1, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1]
    );
    assert_eq!(
        shl_epi8(V128::from_u8x16([0xFF; 16]), counts).to_u8x16()[..4],
        [0, 0, 0, 0]
    );
}

#[test]
fn rotate_wraps_bits_around() {
    let a = V128::from_u16x8([0x8001; 8]);
    let count = V128::from_i16x8([1, -1, 4, -4, 16, -16, 17, -17]);
    assert_eq!(
        rot_epi16(a, count).to_u16x8(),
        [0x0003, 0xC000, 0x0018, 0x1800, 0x8001, 0x8001, 0x0003, 0xC000]
    );

    let b = V128::from_u64x2([1, 1]);
    let c = V128::from_i64x2([-1, 65]);
    assert_eq!(rot_epi64(b, c).to_u64x2(), [1 << 63, 2]);
}

#[test]
fn rotate_by_k_then_minus_k_is_identity() {
    let a = V128::from_u32x4([0xDEAD_BEEF, 1, 0x8000_0000, 0x1234_5678]);
    for k in 0..=31 {
        let pos = V128::from_i32x4([k; 4]);
        let neg = V128::from_i32x4([-k; 4]);
        assert_eq!(rot_epi32(rot_epi32(a, pos), neg), a, "k = {k}");
        assert_eq!(roti_epi32(roti_epi32(a, k), -k), a, "k = {k}");
    }

    let b = V128::from_u8x16([0xA5; 16]);
    for k in 0..=7 {
        assert_eq!(roti_epi8(roti_epi8(b, k), -k), b, "k = {k}");
    }
}

#[test]
fn immediate_rotate_applies_uniformly() {
    let a = V128::from_u8x16([
        0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0xFF, 0x00, 0xA5, 0x5A, 0x0F, 0xF0, 0x81,
        0x18,
    ]);
    assert_eq!(
        roti_epi8(a, 1).to_u8x16(),
        [
            0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x01, 0xFF, 0x00, 0x4B, 0xB4, 0x1E, 0xE1,
            0x03, 0x30,
        ]
    );

    // Counts reduce modulo the lane width.
    let b = V128::from_u16x8([0x1234; 8]);
    assert_eq!(roti_epi16(b, 16), b);
    assert_eq!(roti_epi16(b, 20), roti_epi16(b, 4));
    assert_eq!(roti_epi16(b, -20), roti_epi16(b, -4));

    let c = V128::from_u64x2([0x0123_4567_89AB_CDEF, !0]);
    assert_eq!(roti_epi64(c, 64), c);
    assert_eq!(roti_epi64(c, 4).to_u64x2(), [0x1234_5678_9ABC_DEF0, !0]);
    assert_eq!(roti_epi32(V128::from_u32x4([1; 4]), -1).to_u32x4(), [0x8000_0000; 4]);
}
