use xop2rs_xop::{frcz_pd, frcz_pd256, frcz_ps, frcz_ps256, frcz_sd, frcz_ss, V128, V256};

#[test]
fn fractional_part_keeps_the_sign() {
    let a = V128::from_f32x4([1.75, -1.25, 0.5, -0.5]);
    assert_eq!(frcz_ps(a).to_f32x4(), [0.75, -0.25, 0.5, -0.5]);

    let b = V128::from_f64x2([2.0625, -1023.5]);
    assert_eq!(frcz_pd(b).to_f64x2(), [0.0625, -0.5]);
}

#[test]
fn integral_inputs_have_zero_fraction() {
    let a = V128::from_f32x4([0.0, -0.0, 123456.0, -3.0]);
    let r = frcz_ps(a).to_f32x4();
    assert_eq!(r, [0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn extraction_is_idempotent() {
    let a = V128::from_f32x4([3.875, -7.125, 0.1, 1e9]);
    assert_eq!(frcz_ps(frcz_ps(a)), frcz_ps(a));

    let b = V128::from_f64x2([9.000244140625, -2.5]);
    assert_eq!(frcz_pd(frcz_pd(b)), frcz_pd(b));
}

#[test]
fn non_finite_lanes_propagate_through_the_split() {
    let a = V128::from_f32x4([f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1.5]);
    let r = frcz_ps(a).to_f32x4();
    assert!(r[0].is_nan());
    assert!(r[1].is_nan());
    assert!(r[2].is_nan());
    assert_eq!(r[3], 0.5);
}

#[test]
fn scalar_forms_touch_only_the_low_lane() {
    let a = V128::from_f32x4([1.75, 2.75, 3.75, 4.75]);
    assert_eq!(frcz_ss(a).to_f32x4(), [0.75, 2.75, 3.75, 4.75]);

    let b = V128::from_f64x2([-9.25, 7.5]);
    assert_eq!(frcz_sd(b).to_f64x2(), [-0.25, 7.5]);
}

#[test]
fn wide_forms_compose_from_halves() {
    let a = V256::from_halves(
        V128::from_f32x4([1.5, -2.25, 8.0, 0.75]),
        V128::from_f32x4([-0.125, 100.5, -100.5, 3.0]),
    );
    let r = frcz_ps256(a);
    assert_eq!(r.lo(), frcz_ps(a.lo()));
    assert_eq!(r.hi(), frcz_ps(a.hi()));
    assert_eq!(
        r.to_f32x8(),
        [0.5, -0.25, 0.0, 0.75, -0.125, 0.5, -0.5, 0.0]
    );

    let b = V256::from_halves(
        V128::from_f64x2([1.5, -2.25]),
        V128::from_f64x2([0.0, 42.125]),
    );
    assert_eq!(frcz_pd256(b).to_f64x4(), [0.5, -0.25, 0.0, 0.125]);
}
