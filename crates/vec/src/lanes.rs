//! Generates the lane-view accessor pairs for [`V128`] and [`V256`].
//!
//! Each accessor pair reinterprets the same underlying bytes; none of them
//! change the stored value. Lanes are laid out in little-endian byte order,
//! lane 0 in the lowest-addressed bytes.

use crate::{V128, V256};

macro_rules! lane_views {
    ($vec:ident, $bytes:literal; $($t:tt, $n:literal, $w:literal, $from:ident, $to:ident;)*) => {$(
        impl $vec {
            #[doc = concat!(
                "Constructs the vector from ", stringify!($n), " lanes of packed [`",
                stringify!($t), "`] values in lane order."
            )]
            pub fn $from(lanes: [$t; $n]) -> Self {
                let mut bytes = [0u8; $bytes];
                for (chunk, lane) in bytes.chunks_exact_mut($w).zip(lanes) {
                    chunk.copy_from_slice(&lane.to_le_bytes());
                }
                Self::from_bytes(bytes)
            }

            #[doc = concat!(
                "Reinterprets the vector as ", stringify!($n), " lanes of packed [`",
                stringify!($t), "`] values in lane order."
            )]
            pub fn $to(self) -> [$t; $n] {
                let bytes = self.to_bytes();
                core::array::from_fn(|i| {
                    let mut le = [0u8; $w];
                    le.copy_from_slice(&bytes[i * $w..(i + 1) * $w]);
                    <$t>::from_le_bytes(le)
                })
            }
        }
    )*};
}

lane_views! {
    V128, 16;
    i8, 16, 1, from_i8x16, to_i8x16;
    u8, 16, 1, from_u8x16, to_u8x16;
    i16, 8, 2, from_i16x8, to_i16x8;
    u16, 8, 2, from_u16x8, to_u16x8;
    i32, 4, 4, from_i32x4, to_i32x4;
    u32, 4, 4, from_u32x4, to_u32x4;
    i64, 2, 8, from_i64x2, to_i64x2;
    u64, 2, 8, from_u64x2, to_u64x2;
    f32, 4, 4, from_f32x4, to_f32x4;
    f64, 2, 8, from_f64x2, to_f64x2;
}

lane_views! {
    V256, 32;
    i8, 32, 1, from_i8x32, to_i8x32;
    u8, 32, 1, from_u8x32, to_u8x32;
    i16, 16, 2, from_i16x16, to_i16x16;
    u16, 16, 2, from_u16x16, to_u16x16;
    i32, 8, 4, from_i32x8, to_i32x8;
    u32, 8, 4, from_u32x8, to_u32x8;
    i64, 4, 8, from_i64x4, to_i64x4;
    u64, 4, 8, from_u64x4, to_u64x4;
    f32, 8, 4, from_f32x8, to_f32x8;
    f64, 4, 8, from_f64x4, to_f64x4;
}
