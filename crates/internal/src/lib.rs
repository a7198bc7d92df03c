//! Internal utilities for the dfpe library
//!
//! Helpers shared by the member crates. Nothing here is part of the
//! stable public surface.

#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, xor_in_place};
