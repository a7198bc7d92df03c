//! Constant values for the dfpe library
//!
//! Round counts, domain bounds, tweak sizes and block cipher sizes are
//! fixed properties of the FF1 and FF3-1 constructions; they live here so
//! every crate in the workspace agrees on them.

#![no_std]

pub mod alphabets;
pub mod fpe;
pub mod symmetric;
