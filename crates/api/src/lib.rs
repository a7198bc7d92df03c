//! Public API traits and types for the dfpe library
//!
//! This crate provides the public API surface for the dfpe ecosystem: the
//! error taxonomy, the block primitive capability consumed by the Feistel
//! engine, the format-preserving cipher trait implemented by every facade,
//! and the shared value types.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::{CipherSettings, FpeKey, Variant};

// Re-export all traits from the traits module
pub use traits::{Block, BlockPrimitive, FormatPreservingCipher, BLOCK_SIZE};
