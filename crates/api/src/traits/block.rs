//! Block primitive capability
//!
//! The Feistel engine only ever needs the forward direction of a 128-bit
//! block cipher: both FF1 and FF3-1 call the primitive in encrypt mode
//! when decrypting, and only the modular arithmetic around it reverses.

use crate::Result;

/// Size in bytes of a primitive block
pub const BLOCK_SIZE: usize = dfpe_params::symmetric::AES_BLOCK_SIZE;

/// A single primitive block
pub type Block = [u8; BLOCK_SIZE];

/// Keyed, deterministic, side-effect free 128-bit block encryption
///
/// Implementations hold their key schedule from construction onwards and
/// must be safe to call from many threads at once.
pub trait BlockPrimitive: Send + Sync {
    /// Returns the name of this primitive
    fn name(&self) -> &'static str;

    /// Encrypts one block in place
    fn encrypt_block(&self, block: &mut Block) -> Result<()>;
}
