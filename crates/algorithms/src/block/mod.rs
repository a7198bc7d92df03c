//! Block cipher primitives
//!
//! The Feistel constructions consume a 128-bit block cipher through the
//! [`BlockPrimitive`] capability and only ever in the forward direction.

pub mod aes;

pub use self::aes::Aes;
pub use dfpe_api::{Block, BlockPrimitive, BLOCK_SIZE};
