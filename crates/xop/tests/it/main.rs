//! Integration tests for [`xop2rs_xop`].

mod compare;
mod frcz;
mod macc;
mod permute;
mod shift;
