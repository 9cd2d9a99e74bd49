//! Conformance runner: drives every operation in the catalog with random
//! typed vectors (plus the fixed literal vectors from the contract) and
//! compares the shim's results against independent scalar models.
//!
//! Exits with status 0 when every comparison passes; on the first mismatch,
//! dumps the operation name, operands, and both result vectors to stderr and
//! exits non-zero.

use anyhow::bail;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::Rng;
use xop2rs_conformance::{
    f32x4_agree, f64x2_agree, rand_f32s, rand_f64s, rand_related_pair, rand_v128, rand_v256,
    rng_for, Mismatch,
};
use xop2rs_vec::{V128, V256};
use xop2rs_xop as xop;

#[derive(Parser)]
#[command(name = "xop2rs-conformance")]
#[command(about = "Compare the xop2rs shim against independent scalar models")]
struct Args {
    /// Number of random trials per operation.
    #[arg(long, default_value_t = 512)]
    iterations: u32,

    /// Seed for the random vector generator.
    #[arg(long, default_value_t = 0x784F_9C02_D1A5_33E7)]
    seed: u64,

    /// Only run checks whose family matches (select, compare, horizontal,
    /// macc, shift, permute, frcz, literals).
    #[arg(long)]
    family: Option<String>,
}

struct Check {
    name: &'static str,
    family: &'static str,
    run: fn(&mut SmallRng) -> Result<(), Mismatch>,
}

fn verify(op: &'static str, operands: &[V128], got: V128, want: V128) -> Result<(), Mismatch> {
    if got == want {
        Ok(())
    } else {
        Err(Mismatch::new(op, operands, got, want))
    }
}

fn verify_wide(op: &'static str, operands: &[V256], got: V256, want: V256) -> Result<(), Mismatch> {
    if got.to_bytes() == want.to_bytes() {
        Ok(())
    } else {
        Err(Mismatch::wide(op, operands, got, want))
    }
}

fn verify_f32(op: &'static str, operands: &[V128], got: V128, want: V128) -> Result<(), Mismatch> {
    if f32x4_agree(got, want) {
        Ok(())
    } else {
        Err(Mismatch::new(op, operands, got, want))
    }
}

fn verify_f64(op: &'static str, operands: &[V128], got: V128, want: V128) -> Result<(), Mismatch> {
    if f64x2_agree(got, want) {
        Ok(())
    } else {
        Err(Mismatch::new(op, operands, got, want))
    }
}

// ---------------------------------------------------------------------------
// Conditional select.

fn cmov_si128_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_v128(rng);
    let b = rand_v128(rng);
    let c = rand_v128(rng);
    let got = xop::cmov_si128(a, b, c);
    let (ab, bb, cb) = (a.to_bytes(), b.to_bytes(), c.to_bytes());
    let want = V128::from_bytes(core::array::from_fn(|i| (cb[i] & ab[i]) | (!cb[i] & bb[i])));
    verify("cmov_si128", &[a, b, c], got, want)
}

fn cmov_si256_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_v256(rng);
    let b = rand_v256(rng);
    let c = rand_v256(rng);
    let got = xop::cmov_si256(a, b, c);
    let (ab, bb, cb) = (a.to_bytes(), b.to_bytes(), c.to_bytes());
    let want = V256::from_bytes(core::array::from_fn(|i| (cb[i] & ab[i]) | (!cb[i] & bb[i])));
    verify_wide("cmov_si256", &[a, b, c], got, want)
}

fn select_checks() -> Vec<Check> {
    vec![
        Check {
            name: "cmov_si128",
            family: "select",
            run: cmov_si128_check,
        },
        Check {
            name: "cmov_si256",
            family: "select",
            run: cmov_si256_check,
        },
    ]
}

// ---------------------------------------------------------------------------
// Compares.

macro_rules! compare_checks {
    ($($fname:ident = $func:ident, $to:ident, $from:ident, $op:tt;)*) => {
        $(
            fn $fname(rng: &mut SmallRng) -> Result<(), Mismatch> {
                let (a, b) = rand_related_pair(rng);
                let got = xop::$func(a, b);
                let xs = a.$to();
                let ys = b.$to();
                let want = V128::$from(core::array::from_fn(|i| {
                    if xs[i] $op ys[i] { !0 } else { 0 }
                }));
                verify(stringify!($func), &[a, b], got, want)
            }
        )*

        fn fixed_compare_check_list() -> Vec<Check> {
            vec![$(Check {
                name: stringify!($func),
                family: "compare",
                run: $fname,
            }),*]
        }
    };
}

compare_checks! {
    comeq_epi8_check = comeq_epi8, to_i8x16, from_i8x16, ==;
    comeq_epi16_check = comeq_epi16, to_i16x8, from_i16x8, ==;
    comeq_epi32_check = comeq_epi32, to_i32x4, from_i32x4, ==;
    comeq_epi64_check = comeq_epi64, to_i64x2, from_i64x2, ==;
    comeq_epu8_check = comeq_epu8, to_u8x16, from_u8x16, ==;
    comeq_epu16_check = comeq_epu16, to_u16x8, from_u16x8, ==;
    comeq_epu32_check = comeq_epu32, to_u32x4, from_u32x4, ==;
    comeq_epu64_check = comeq_epu64, to_u64x2, from_u64x2, ==;
    comneq_epi8_check = comneq_epi8, to_i8x16, from_i8x16, !=;
    comneq_epi16_check = comneq_epi16, to_i16x8, from_i16x8, !=;
    comneq_epi32_check = comneq_epi32, to_i32x4, from_i32x4, !=;
    comneq_epi64_check = comneq_epi64, to_i64x2, from_i64x2, !=;
    comneq_epu8_check = comneq_epu8, to_u8x16, from_u8x16, !=;
    comneq_epu16_check = comneq_epu16, to_u16x8, from_u16x8, !=;
    comneq_epu32_check = comneq_epu32, to_u32x4, from_u32x4, !=;
    comneq_epu64_check = comneq_epu64, to_u64x2, from_u64x2, !=;
    comlt_epi8_check = comlt_epi8, to_i8x16, from_i8x16, <;
    comlt_epi16_check = comlt_epi16, to_i16x8, from_i16x8, <;
    comlt_epi32_check = comlt_epi32, to_i32x4, from_i32x4, <;
    comlt_epi64_check = comlt_epi64, to_i64x2, from_i64x2, <;
    comlt_epu8_check = comlt_epu8, to_u8x16, from_u8x16, <;
    comlt_epu16_check = comlt_epu16, to_u16x8, from_u16x8, <;
    comlt_epu32_check = comlt_epu32, to_u32x4, from_u32x4, <;
    comlt_epu64_check = comlt_epu64, to_u64x2, from_u64x2, <;
    comle_epi8_check = comle_epi8, to_i8x16, from_i8x16, <=;
    comle_epi16_check = comle_epi16, to_i16x8, from_i16x8, <=;
    comle_epi32_check = comle_epi32, to_i32x4, from_i32x4, <=;
    comle_epi64_check = comle_epi64, to_i64x2, from_i64x2, <=;
    comle_epu8_check = comle_epu8, to_u8x16, from_u8x16, <=;
    comle_epu16_check = comle_epu16, to_u16x8, from_u16x8, <=;
    comle_epu32_check = comle_epu32, to_u32x4, from_u32x4, <=;
    comle_epu64_check = comle_epu64, to_u64x2, from_u64x2, <=;
    comgt_epi8_check = comgt_epi8, to_i8x16, from_i8x16, >;
    comgt_epi16_check = comgt_epi16, to_i16x8, from_i16x8, >;
    comgt_epi32_check = comgt_epi32, to_i32x4, from_i32x4, >;
    comgt_epi64_check = comgt_epi64, to_i64x2, from_i64x2, >;
    comgt_epu8_check = comgt_epu8, to_u8x16, from_u8x16, >;
    comgt_epu16_check = comgt_epu16, to_u16x8, from_u16x8, >;
    comgt_epu32_check = comgt_epu32, to_u32x4, from_u32x4, >;
    comgt_epu64_check = comgt_epu64, to_u64x2, from_u64x2, >;
    comge_epi8_check = comge_epi8, to_i8x16, from_i8x16, >=;
    comge_epi16_check = comge_epi16, to_i16x8, from_i16x8, >=;
    comge_epi32_check = comge_epi32, to_i32x4, from_i32x4, >=;
    comge_epi64_check = comge_epi64, to_i64x2, from_i64x2, >=;
    comge_epu8_check = comge_epu8, to_u8x16, from_u8x16, >=;
    comge_epu16_check = comge_epu16, to_u16x8, from_u16x8, >=;
    comge_epu32_check = comge_epu32, to_u32x4, from_u32x4, >=;
    comge_epu64_check = comge_epu64, to_u64x2, from_u64x2, >=;
}

macro_rules! dynamic_compare_checks {
    ($($fname:ident = $func:ident / $false_:ident / $true_:ident, $to:ident, $from:ident;)*) => {
        $(
            fn $fname(rng: &mut SmallRng) -> Result<(), Mismatch> {
                let (a, b) = rand_related_pair(rng);
                let xs = a.$to();
                let ys = b.$to();
                let eq = V128::$from(core::array::from_fn(|i| {
                    if xs[i] == ys[i] { !0 } else { 0 }
                }));
                let lt = V128::$from(core::array::from_fn(|i| {
                    if xs[i] < ys[i] { !0 } else { 0 }
                }));
                let imm = rng.gen_range(0..8);
                let op = xop::ComOp::from_imm(imm).expect("selector in range");
                let got = xop::$func(a, b, op);
                let want = match imm {
                    0 => lt,
                    1 => lt.or(eq),
                    2 => lt.or(eq).not(),
                    3 => lt.not(),
                    4 => eq,
                    5 => eq.not(),
                    6 => V128::zero(),
                    _ => V128::ones(),
                };
                verify(stringify!($func), &[a, b], got, want)?;

                // The constant relations ignore their operands entirely.
                verify(stringify!($false_), &[a, b], xop::$false_(a, b), V128::zero())?;
                verify(stringify!($true_), &[a, b], xop::$true_(a, b), V128::ones())
            }
        )*

        fn dynamic_compare_check_list() -> Vec<Check> {
            vec![$(Check {
                name: stringify!($func),
                family: "compare",
                run: $fname,
            }),*]
        }
    };
}

dynamic_compare_checks! {
    com_epi8_check = com_epi8 / comfalse_epi8 / comtrue_epi8, to_i8x16, from_i8x16;
    com_epi16_check = com_epi16 / comfalse_epi16 / comtrue_epi16, to_i16x8, from_i16x8;
    com_epi32_check = com_epi32 / comfalse_epi32 / comtrue_epi32, to_i32x4, from_i32x4;
    com_epi64_check = com_epi64 / comfalse_epi64 / comtrue_epi64, to_i64x2, from_i64x2;
    com_epu8_check = com_epu8 / comfalse_epu8 / comtrue_epu8, to_u8x16, from_u8x16;
    com_epu16_check = com_epu16 / comfalse_epu16 / comtrue_epu16, to_u16x8, from_u16x8;
    com_epu32_check = com_epu32 / comfalse_epu32 / comtrue_epu32, to_u32x4, from_u32x4;
    com_epu64_check = com_epu64 / comfalse_epu64 / comtrue_epu64, to_u64x2, from_u64x2;
}

// ---------------------------------------------------------------------------
// Horizontal add/subtract. The models accumulate exactly in 128 bits and
// truncate once at the end, which agrees with exact widened arithmetic.

macro_rules! horizontal_checks {
    ($($fname:ident = $func:ident, $to:ident, $from:ident, $wide:ty, $k:literal, $sub:literal;)*) => {
        $(
            fn $fname(rng: &mut SmallRng) -> Result<(), Mismatch> {
                let a = rand_v128(rng);
                let got = xop::$func(a);
                let xs = a.$to();
                let want = V128::$from(core::array::from_fn(|i| {
                    let mut acc: i128 = 0;
                    for j in 0..$k {
                        let term = xs[i * $k + j] as i128;
                        if $sub && j % 2 == 1 {
                            acc -= term;
                        } else {
                            acc += term;
                        }
                    }
                    acc as $wide
                }));
                verify(stringify!($func), &[a], got, want)
            }
        )*

        fn horizontal_check_list() -> Vec<Check> {
            vec![$(Check {
                name: stringify!($func),
                family: "horizontal",
                run: $fname,
            }),*]
        }
    };
}

horizontal_checks! {
    haddw_epi8_check = haddw_epi8, to_i8x16, from_i16x8, i16, 2, false;
    haddw_epu8_check = haddw_epu8, to_u8x16, from_u16x8, u16, 2, false;
    haddd_epi8_check = haddd_epi8, to_i8x16, from_i32x4, i32, 4, false;
    haddd_epu8_check = haddd_epu8, to_u8x16, from_u32x4, u32, 4, false;
    haddd_epi16_check = haddd_epi16, to_i16x8, from_i32x4, i32, 2, false;
    haddd_epu16_check = haddd_epu16, to_u16x8, from_u32x4, u32, 2, false;
    haddq_epi8_check = haddq_epi8, to_i8x16, from_i64x2, i64, 8, false;
    haddq_epu8_check = haddq_epu8, to_u8x16, from_u64x2, u64, 8, false;
    haddq_epi16_check = haddq_epi16, to_i16x8, from_i64x2, i64, 4, false;
    haddq_epu16_check = haddq_epu16, to_u16x8, from_u64x2, u64, 4, false;
    haddq_epi32_check = haddq_epi32, to_i32x4, from_i64x2, i64, 2, false;
    haddq_epu32_check = haddq_epu32, to_u32x4, from_u64x2, u64, 2, false;
    hsubw_epi8_check = hsubw_epi8, to_i8x16, from_i16x8, i16, 2, true;
    hsubd_epi8_check = hsubd_epi8, to_i8x16, from_i32x4, i32, 4, true;
    hsubd_epi16_check = hsubd_epi16, to_i16x8, from_i32x4, i32, 2, true;
    hsubq_epi8_check = hsubq_epi8, to_i8x16, from_i64x2, i64, 8, true;
    hsubq_epi16_check = hsubq_epi16, to_i16x8, from_i64x2, i64, 4, true;
    hsubq_epi32_check = hsubq_epi32, to_i32x4, from_i64x2, i64, 2, true;
}

// ---------------------------------------------------------------------------
// Multiply-accumulate. Models compute exactly in 128 bits, then either
// truncate (wrapping contract) or clamp to the destination range
// (saturating contract).

fn clamp_to<T>(value: i128, min: T, max: T) -> i128
where
    i128: From<T>,
{
    value.clamp(i128::from(min), i128::from(max))
}

macro_rules! macc_checks {
    ($($fname:ident = $func:ident($a:ident, $b:ident, $c:ident) {
        $to_ab:ident, $to_c:ident, $from:ident, $out:ty, |$i:ident| $model:expr
    };)*) => {
        $(
            fn $fname(rng: &mut SmallRng) -> Result<(), Mismatch> {
                let va = rand_v128(rng);
                let vb = rand_v128(rng);
                let vc = rand_v128(rng);
                let got = xop::$func(va, vb, vc);
                let $a = va.$to_ab();
                let $b = vb.$to_ab();
                let $c = vc.$to_c();
                let want = V128::$from(core::array::from_fn(|$i| ($model) as $out));
                verify(stringify!($func), &[va, vb, vc], got, want)
            }
        )*

        fn macc_check_list() -> Vec<Check> {
            vec![$(Check {
                name: stringify!($func),
                family: "macc",
                run: $fname,
            }),*]
        }
    };
}

macc_checks! {
    macc_epi16_check = macc_epi16(a, b, c) {
        to_i16x8, to_i16x8, from_i16x8, i16,
        |i| a[i] as i128 * b[i] as i128 + c[i] as i128
    };
    macc_epi32_check = macc_epi32(a, b, c) {
        to_i32x4, to_i32x4, from_i32x4, i32,
        |i| a[i] as i128 * b[i] as i128 + c[i] as i128
    };
    maccd_epi16_check = maccd_epi16(a, b, c) {
        to_i16x8, to_i32x4, from_i32x4, i32,
        |i| a[i * 2] as i128 * b[i * 2] as i128 + c[i] as i128
    };
    macclo_epi32_check = macclo_epi32(a, b, c) {
        to_i32x4, to_i64x2, from_i64x2, i64,
        |i| a[i * 2] as i128 * b[i * 2] as i128 + c[i] as i128
    };
    macchi_epi32_check = macchi_epi32(a, b, c) {
        to_i32x4, to_i64x2, from_i64x2, i64,
        |i| a[i * 2 + 1] as i128 * b[i * 2 + 1] as i128 + c[i] as i128
    };
    maccs_epi16_check = maccs_epi16(a, b, c) {
        to_i16x8, to_i16x8, from_i16x8, i16,
        |i| clamp_to(a[i] as i128 * b[i] as i128 + c[i] as i128, i16::MIN, i16::MAX)
    };
    maccs_epi32_check = maccs_epi32(a, b, c) {
        to_i32x4, to_i32x4, from_i32x4, i32,
        |i| clamp_to(a[i] as i128 * b[i] as i128 + c[i] as i128, i32::MIN, i32::MAX)
    };
    maccsd_epi16_check = maccsd_epi16(a, b, c) {
        to_i16x8, to_i32x4, from_i32x4, i32,
        |i| clamp_to(a[i * 2] as i128 * b[i * 2] as i128 + c[i] as i128, i32::MIN, i32::MAX)
    };
    maccslo_epi32_check = maccslo_epi32(a, b, c) {
        to_i32x4, to_i64x2, from_i64x2, i64,
        |i| clamp_to(a[i * 2] as i128 * b[i * 2] as i128 + c[i] as i128, i64::MIN, i64::MAX)
    };
    maccshi_epi32_check = maccshi_epi32(a, b, c) {
        to_i32x4, to_i64x2, from_i64x2, i64,
        |i| clamp_to(a[i * 2 + 1] as i128 * b[i * 2 + 1] as i128 + c[i] as i128, i64::MIN, i64::MAX)
    };
    maddd_epi16_check = maddd_epi16(a, b, c) {
        to_i16x8, to_i32x4, from_i32x4, i32,
        |i| a[i * 2] as i128 * b[i * 2] as i128
            + a[i * 2 + 1] as i128 * b[i * 2 + 1] as i128
            + c[i] as i128
    };
    maddsd_epi16_check = maddsd_epi16(a, b, c) {
        to_i16x8, to_i32x4, from_i32x4, i32,
        |i| {
            // The inner dot product wraps to 32 bits before the clamped
            // accumulate; saturating the whole expression would be wrong.
            let dot = (a[i * 2] as i128 * b[i * 2] as i128
                + a[i * 2 + 1] as i128 * b[i * 2 + 1] as i128) as i32;
            clamp_to(dot as i128 + c[i] as i128, i32::MIN, i32::MAX)
        }
    };
}

// ---------------------------------------------------------------------------
// Shifts and rotates. Count vectors are drawn from the full lane range, so
// oversized magnitudes are exercised constantly.

macro_rules! shift_checks {
    ($($sha_name:ident / $shl_name:ident / $rot_name:ident / $roti_name:ident =
        $sha:ident / $shl:ident / $rot:ident / $roti:ident,
        $ito:ident / $ifrom:ident, $uto:ident / $ufrom:ident, $sty:ty, $uty:ty, $bits:literal;)*) => {
        $(
            fn $sha_name(rng: &mut SmallRng) -> Result<(), Mismatch> {
                let a = rand_v128(rng);
                let count = rand_v128(rng);
                let got = xop::$sha(a, count);
                let xs = a.$ito();
                let ns = count.$ito();
                let want = V128::$ifrom(core::array::from_fn(|i| {
                    let wide = xs[i] as i128;
                    let m = (ns[i].unsigned_abs() as u128).min(127) as u32;
                    if ns[i] < 0 {
                        (wide >> m) as $sty
                    } else {
                        (wide << m) as $sty
                    }
                }));
                verify(stringify!($sha), &[a, count], got, want)
            }

            fn $shl_name(rng: &mut SmallRng) -> Result<(), Mismatch> {
                let a = rand_v128(rng);
                let count = rand_v128(rng);
                let got = xop::$shl(a, count);
                let xs = a.$uto();
                let ns = count.$ito();
                let want = V128::$ufrom(core::array::from_fn(|i| {
                    let wide = xs[i] as u128;
                    let m = (ns[i].unsigned_abs() as u128).min(127) as u32;
                    if ns[i] < 0 {
                        (wide >> m) as $uty
                    } else {
                        (wide << m) as $uty
                    }
                }));
                verify(stringify!($shl), &[a, count], got, want)
            }

            fn $rot_name(rng: &mut SmallRng) -> Result<(), Mismatch> {
                let a = rand_v128(rng);
                let count = rand_v128(rng);
                let got = xop::$rot(a, count);
                let xs = a.$uto();
                let ns = count.$ito();
                let want = V128::$ufrom(core::array::from_fn(|i| {
                    let m = (ns[i].unsigned_abs() % $bits) as u32;
                    let left = if ns[i] < 0 { ($bits - m) % $bits } else { m };
                    let wide = xs[i] as u128;
                    ((wide << left) | (wide >> (($bits - left) % $bits))) as $uty
                }));
                verify(stringify!($rot), &[a, count], got, want)
            }

            fn $roti_name(rng: &mut SmallRng) -> Result<(), Mismatch> {
                let a = rand_v128(rng);
                let count = rng.gen_range(-3 * $bits..=3 * $bits);
                let got = xop::$roti(a, count);
                let xs = a.$uto();
                let m = (count.unsigned_abs() % $bits) as u32;
                let left = if count < 0 { ($bits - m) % $bits } else { m };
                let want = V128::$ufrom(core::array::from_fn(|i| {
                    let wide = xs[i] as u128;
                    ((wide << left) | (wide >> (($bits - left) % $bits))) as $uty
                }));
                verify(stringify!($roti), &[a], got, want)
            }
        )*

        fn shift_check_list() -> Vec<Check> {
            vec![
                $(
                    Check { name: stringify!($sha), family: "shift", run: $sha_name },
                    Check { name: stringify!($shl), family: "shift", run: $shl_name },
                    Check { name: stringify!($rot), family: "shift", run: $rot_name },
                    Check { name: stringify!($roti), family: "shift", run: $roti_name },
                )*
            ]
        }
    };
}

shift_checks! {
    sha_epi8_check / shl_epi8_check / rot_epi8_check / roti_epi8_check =
        sha_epi8 / shl_epi8 / rot_epi8 / roti_epi8,
        to_i8x16 / from_i8x16, to_u8x16 / from_u8x16, i8, u8, 8;
    sha_epi16_check / shl_epi16_check / rot_epi16_check / roti_epi16_check =
        sha_epi16 / shl_epi16 / rot_epi16 / roti_epi16,
        to_i16x8 / from_i16x8, to_u16x8 / from_u16x8, i16, u16, 16;
    sha_epi32_check / shl_epi32_check / rot_epi32_check / roti_epi32_check =
        sha_epi32 / shl_epi32 / rot_epi32 / roti_epi32,
        to_i32x4 / from_i32x4, to_u32x4 / from_u32x4, i32, u32, 32;
    sha_epi64_check / shl_epi64_check / rot_epi64_check / roti_epi64_check =
        sha_epi64 / shl_epi64 / rot_epi64 / roti_epi64,
        to_i64x2 / from_i64x2, to_u64x2 / from_u64x2, i64, u64, 64;
}

// ---------------------------------------------------------------------------
// Permutes.

fn model_perm_epi8(a: V128, b: V128, ctrl: V128) -> V128 {
    let xs = a.to_u8x16();
    let ys = b.to_u8x16();
    let cs = ctrl.to_u8x16();
    V128::from_u8x16(core::array::from_fn(|i| {
        let ctl = cs[i];
        let idx = usize::from(ctl & 0x1f);
        let selected = if idx < 16 { xs[idx] } else { ys[idx - 16] };
        let src = if ctl & 0x20 != 0 { !selected } else { selected };
        match ctl >> 6 {
            0 => src,
            1 => {
                let mut rev = 0u8;
                for k in 0..8 {
                    rev = (rev << 1) | ((src >> k) & 1);
                }
                rev
            }
            2 => 0,
            _ => {
                if src & 0x80 != 0 {
                    0xFF
                } else {
                    0
                }
            }
        }
    }))
}

fn perm_epi8_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_v128(rng);
    let b = rand_v128(rng);
    let ctrl = rand_v128(rng);
    let got = xop::perm_epi8(a, b, ctrl);
    verify("perm_epi8", &[a, b, ctrl], got, model_perm_epi8(a, b, ctrl))
}

fn model_permute2_ps(a: V128, b: V128, c: V128, imm8: i32) -> V128 {
    let xs = a.to_u32x4();
    let ys = b.to_u32x4();
    let cs = c.to_u32x4();
    let m2z = (imm8 & 0x03) as u32;
    V128::from_u32x4(core::array::from_fn(|i| {
        let zeroed = matches!((cs[i] & 0x08) | m2z, 0x3 | 0xA);
        let sel = (cs[i] & 0x07) as usize;
        if zeroed {
            0
        } else if sel < 4 {
            xs[sel]
        } else {
            ys[sel - 4]
        }
    }))
}

fn model_permute2_pd(a: V128, b: V128, c: V128, imm8: i32) -> V128 {
    let xs = a.to_u64x2();
    let ys = b.to_u64x2();
    let cs = c.to_u64x2();
    let m2z = (imm8 & 0x03) as u64;
    V128::from_u64x2(core::array::from_fn(|i| {
        let zeroed = matches!((cs[i] & 0x08) | m2z, 0x3 | 0xA);
        let sel = ((cs[i] >> 1) & 0x03) as usize;
        if zeroed {
            0
        } else if sel < 2 {
            xs[sel]
        } else {
            ys[sel - 2]
        }
    }))
}

fn permute2_ps_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_v128(rng);
    let b = rand_v128(rng);
    let c = rand_v128(rng);
    let imm8 = rng.gen_range(0..4);
    let got = xop::permute2_ps(a, b, c, imm8);
    verify(
        "permute2_ps",
        &[a, b, c],
        got,
        model_permute2_ps(a, b, c, imm8),
    )
}

fn permute2_pd_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_v128(rng);
    let b = rand_v128(rng);
    let c = rand_v128(rng);
    let imm8 = rng.gen_range(0..4);
    let got = xop::permute2_pd(a, b, c, imm8);
    verify(
        "permute2_pd",
        &[a, b, c],
        got,
        model_permute2_pd(a, b, c, imm8),
    )
}

fn permute2_ps256_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_v256(rng);
    let b = rand_v256(rng);
    let c = rand_v256(rng);
    let imm8 = rng.gen_range(0..4);
    let got = xop::permute2_ps256(a, b, c, imm8);
    let want = V256::from_halves(
        model_permute2_ps(a.lo(), b.lo(), c.lo(), imm8),
        model_permute2_ps(a.hi(), b.hi(), c.hi(), imm8),
    );
    verify_wide("permute2_ps256", &[a, b, c], got, want)
}

fn permute2_pd256_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_v256(rng);
    let b = rand_v256(rng);
    let c = rand_v256(rng);
    let imm8 = rng.gen_range(0..4);
    let got = xop::permute2_pd256(a, b, c, imm8);
    let want = V256::from_halves(
        model_permute2_pd(a.lo(), b.lo(), c.lo(), imm8),
        model_permute2_pd(a.hi(), b.hi(), c.hi(), imm8),
    );
    verify_wide("permute2_pd256", &[a, b, c], got, want)
}

fn permute_checks() -> Vec<Check> {
    vec![
        Check {
            name: "perm_epi8",
            family: "permute",
            run: perm_epi8_check,
        },
        Check {
            name: "permute2_ps",
            family: "permute",
            run: permute2_ps_check,
        },
        Check {
            name: "permute2_pd",
            family: "permute",
            run: permute2_pd_check,
        },
        Check {
            name: "permute2_ps256",
            family: "permute",
            run: permute2_ps256_check,
        },
        Check {
            name: "permute2_pd256",
            family: "permute",
            run: permute2_pd256_check,
        },
    ]
}

// ---------------------------------------------------------------------------
// Fraction extraction. Models use the standard library's split; results must
// agree within the documented ULP tolerance.

fn model_frcz_f32(xs: [f32; 4]) -> V128 {
    V128::from_f32x4(xs.map(|x| x - x.trunc()))
}

fn model_frcz_f64(xs: [f64; 2]) -> V128 {
    V128::from_f64x2(xs.map(|x| x - x.trunc()))
}

fn frcz_ps_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_f32s(rng);
    verify_f32("frcz_ps", &[a], xop::frcz_ps(a), model_frcz_f32(a.to_f32x4()))
}

fn frcz_pd_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_f64s(rng);
    verify_f64("frcz_pd", &[a], xop::frcz_pd(a), model_frcz_f64(a.to_f64x2()))
}

fn frcz_ss_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_f32s(rng);
    let mut want = a.to_f32x4();
    want[0] -= want[0].trunc();
    verify_f32("frcz_ss", &[a], xop::frcz_ss(a), V128::from_f32x4(want))
}

fn frcz_sd_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = rand_f64s(rng);
    let mut want = a.to_f64x2();
    want[0] -= want[0].trunc();
    verify_f64("frcz_sd", &[a], xop::frcz_sd(a), V128::from_f64x2(want))
}

fn frcz_ps256_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let lo = rand_f32s(rng);
    let hi = rand_f32s(rng);
    let a = V256::from_halves(lo, hi);
    let got = xop::frcz_ps256(a);
    verify_f32("frcz_ps256 (low)", &[lo], got.lo(), model_frcz_f32(lo.to_f32x4()))?;
    verify_f32("frcz_ps256 (high)", &[hi], got.hi(), model_frcz_f32(hi.to_f32x4()))
}

fn frcz_pd256_check(rng: &mut SmallRng) -> Result<(), Mismatch> {
    let lo = rand_f64s(rng);
    let hi = rand_f64s(rng);
    let a = V256::from_halves(lo, hi);
    let got = xop::frcz_pd256(a);
    verify_f64("frcz_pd256 (low)", &[lo], got.lo(), model_frcz_f64(lo.to_f64x2()))?;
    verify_f64("frcz_pd256 (high)", &[hi], got.hi(), model_frcz_f64(hi.to_f64x2()))
}

fn frcz_checks() -> Vec<Check> {
    vec![
        Check {
            name: "frcz_ps",
            family: "frcz",
            run: frcz_ps_check,
        },
        Check {
            name: "frcz_pd",
            family: "frcz",
            run: frcz_pd_check,
        },
        Check {
            name: "frcz_ss",
            family: "frcz",
            run: frcz_ss_check,
        },
        Check {
            name: "frcz_sd",
            family: "frcz",
            run: frcz_sd_check,
        },
        Check {
            name: "frcz_ps256",
            family: "frcz",
            run: frcz_ps256_check,
        },
        Check {
            name: "frcz_pd256",
            family: "frcz",
            run: frcz_pd256_check,
        },
    ]
}

// ---------------------------------------------------------------------------
// Fixed literal vectors from the contract.

fn literal_haddd_check(_rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = V128::from_i8x16([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
    let want = V128::from_i32x4([10, 26, 42, 58]);
    verify("haddd_epi8 (literal)", &[a], xop::haddd_epi8(a), want)
}

fn literal_maccs_check(_rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = V128::from_i16x8([30000; 8]);
    let b = V128::from_i16x8([2; 8]);
    let c = V128::from_i16x8([10000; 8]);
    let want = V128::from_i16x8([i16::MAX; 8]);
    verify("maccs_epi16 (literal)", &[a, b, c], xop::maccs_epi16(a, b, c), want)
}

fn literal_perm_identity_check(_rng: &mut SmallRng) -> Result<(), Mismatch> {
    let a = V128::from_bits(0x0F0E_0D0C_0B0A_0908_0706_0504_0302_0100);
    let b = V128::from_bits(!0);
    let ctrl = V128::from_u8x16(core::array::from_fn(|i| i as u8));
    verify("perm_epi8 (identity)", &[a, b, ctrl], xop::perm_epi8(a, b, ctrl), a)
}

fn literal_checks() -> Vec<Check> {
    vec![
        Check {
            name: "haddd_epi8 literal",
            family: "literals",
            run: literal_haddd_check,
        },
        Check {
            name: "maccs_epi16 literal",
            family: "literals",
            run: literal_maccs_check,
        },
        Check {
            name: "perm_epi8 identity",
            family: "literals",
            run: literal_perm_identity_check,
        },
    ]
}

// ---------------------------------------------------------------------------

fn all_checks() -> Vec<Check> {
    let mut checks = select_checks();
    checks.extend(fixed_compare_check_list());
    checks.extend(dynamic_compare_check_list());
    checks.extend(horizontal_check_list());
    checks.extend(macc_check_list());
    checks.extend(shift_check_list());
    checks.extend(permute_checks());
    checks.extend(frcz_checks());
    checks.extend(literal_checks());
    checks
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut rng = rng_for(args.seed);

    let checks = all_checks();
    let mut ran = 0usize;
    for check in &checks {
        if let Some(filter) = &args.family {
            if check.family != filter {
                continue;
            }
        }

        for _ in 0..args.iterations {
            if let Err(mismatch) = (check.run)(&mut rng) {
                eprintln!("{mismatch}");
                bail!("conformance failed at `{}`", check.name);
            }
        }
        ran += 1;
    }

    if ran == 0 {
        bail!("no checks matched family filter");
    }

    println!(
        "{ran} operations conformant ({} trials each, seed {:#x})",
        args.iterations, args.seed
    );
    Ok(())
}
