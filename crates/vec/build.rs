fn main() {
    use cfg_aliases::cfg_aliases;

    println!("cargo::rustc-check-cfg=cfg(xop_intrinsics)");
    println!("cargo::rustc-check-cfg=cfg(xop_sse2_intrinsics)");
    println!("cargo::rustc-check-cfg=cfg(xop_no_intrinsics)");

    cfg_aliases! {
        xop_intrinsics: { feature = "simd-intrinsics" },
        xop_sse2_intrinsics: {
            all(xop_intrinsics, any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2")
        },
        xop_no_intrinsics: { not(any(xop_sse2_intrinsics)) },
    }
}
