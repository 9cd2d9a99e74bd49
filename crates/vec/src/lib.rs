//! Vector register values for `xop2rs`.
//!
//! The [`V128`] and [`V256`] types model the 128-bit and 256-bit register
//! values that the `xop2rs-xop` operation catalog consumes and produces. A
//! register value is an opaque bag of bytes; specific interpretations of its
//! lanes (16 bytes, 8 words, 4 floats, ...) are obtained through explicit
//! accessor pairs such as [`V128::from_i16x8`]/[`V128::to_i16x8`]. Every view
//! aliases the same underlying bytes, so writing through one view and reading
//! through another observes the reinterpreted bit patterns.
//!
//! # Utilizing SIMD Intrinsics
//!
//! If the `simd-intrinsics` feature is enabled, then architecture-specific
//! SIMD intrinsics back the [`V128`] representation rather than relying on
//! the Rust compiler's auto-vectorization. Intrinsics are used on the
//! following target architectures when the corresponding target features are
//! enabled:
//!
//! - `x86` and `x86-64`: requires `sse2`
//!   - Note that common targets such as `x86_64-unknown-linux-gnu` and
//!     `x86_64-pc-windows-msvc` already enable the `sse2` target feature by
//!     default.
//!
//! The `simd-intrinsics` feature flag is provided to allow testing the
//! fallback representation which doesn't use SIMD intrinsics.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(xop_sse2_intrinsics)]
pub(crate) mod arch;

mod lanes;
mod v128;
mod v256;

pub use v128::V128;
pub use v256::V256;
