//! AES block primitive
//!
//! Wraps the RustCrypto `aes` implementation for all three key sizes (FIPS
//! 197). The key schedule is expanded once at construction and is read-only
//! afterwards, so one value can serve any number of concurrent callers.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use core::fmt;

use crate::error::{validate, Error, Result};
use dfpe_api::{Block, BlockPrimitive};
use dfpe_params::symmetric::{AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE};

/// AES keyed for forward block encryption
#[derive(Clone)]
pub enum Aes {
    /// 128-bit key
    Aes128(aes::Aes128),
    /// 192-bit key
    Aes192(aes::Aes192),
    /// 256-bit key
    Aes256(aes::Aes256),
}

impl Aes {
    /// Expands the key schedule for a 16, 24 or 32 byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::key_length(key.len())?;
        let invalid = |_| Error::InvalidKeyLength { actual: key.len() };
        let cipher = match key.len() {
            AES128_KEY_SIZE => Aes::Aes128(aes::Aes128::new_from_slice(key).map_err(invalid)?),
            AES192_KEY_SIZE => Aes::Aes192(aes::Aes192::new_from_slice(key).map_err(invalid)?),
            AES256_KEY_SIZE => Aes::Aes256(aes::Aes256::new_from_slice(key).map_err(invalid)?),
            actual => return Err(Error::InvalidKeyLength { actual }),
        };
        Ok(cipher)
    }

    /// Key size in bytes
    pub fn key_size(&self) -> usize {
        match self {
            Aes::Aes128(_) => AES128_KEY_SIZE,
            Aes::Aes192(_) => AES192_KEY_SIZE,
            Aes::Aes256(_) => AES256_KEY_SIZE,
        }
    }
}

impl BlockPrimitive for Aes {
    fn name(&self) -> &'static str {
        match self {
            Aes::Aes128(_) => "AES-128",
            Aes::Aes192(_) => "AES-192",
            Aes::Aes256(_) => "AES-256",
        }
    }

    fn encrypt_block(&self, block: &mut Block) -> Result<()> {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Aes::Aes128(cipher) => cipher.encrypt_block(block),
            Aes::Aes192(cipher) => cipher.encrypt_block(block),
            Aes::Aes256(cipher) => cipher.encrypt_block(block),
        }
        Ok(())
    }
}

// The expanded key schedule is secret; only the size is shown.
impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes({})", self.name())
    }
}
