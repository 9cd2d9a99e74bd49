//! Portable emulation of the [AMD XOP] x86 instruction-set extension.
//!
//! Each public function reproduces the bit-level semantics of one XOP
//! instruction for one lane interpretation, as a pure function from
//! [`V128`]/[`V256`] register values to a register value. The catalog is
//! grouped into one module per instruction family and re-exported flat at the
//! crate root, so `xop2rs_xop::comeq_epi8` and `xop2rs_xop::compare::comeq_epi8`
//! name the same function.
//!
//! Every function is total over its declared domain: any bit pattern is a
//! valid operand, comparison results are all-ones/all-zero lane masks, and no
//! operation allocates, blocks, or observes shared state. Immediate operands
//! with a closed range (the dynamic compare selector, the `permute2`
//! zero-override mode) are checked with debug assertions at the legacy
//! boundary; the Rust-native surface makes invalid selectors unrepresentable
//! via [`ComOp`].
//!
//! # Utilizing SIMD Intrinsics
//!
//! If the `simd-intrinsics` feature is enabled, operations with an
//! SSE2-expressible form use architecture-specific intrinsics on `x86` and
//! `x86_64` targets with the `sse2` target feature; every other operation
//! uses lane-wise Rust code that the compiler may auto-vectorize. The flag
//! exists so the fallback code paths can be tested on machines where the
//! intrinsics are available.
//!
//! [AMD XOP]: https://en.wikipedia.org/wiki/XOP_instruction_set

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(xop_sse2_intrinsics)]
pub(crate) mod arch;

pub mod compare;
pub mod frcz;
pub mod horizontal;
pub mod macc;
pub mod permute;
pub mod select;
pub mod shift;

pub use compare::*;
pub use frcz::*;
pub use horizontal::*;
pub use macc::*;
pub use permute::*;
pub use select::*;
pub use shift::*;

pub use xop2rs_vec::{V128, V256};
