//! Capability traits for the dfpe library

pub mod block;
pub mod fpe;

pub use block::{Block, BlockPrimitive, BLOCK_SIZE};
pub use fpe::FormatPreservingCipher;
