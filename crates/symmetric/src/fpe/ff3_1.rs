//! FF3-1 facade

use super::FpeCipher;
use crate::cipher::FormatPreservingCipher;
use crate::error::Result;
use dfpe_api::{CipherSettings, Variant};

/// FF3-1 cipher; its 56-bit tweak is fixed at construction
#[derive(Debug, Clone)]
pub struct Ff3_1Cipher {
    inner: FpeCipher,
}

impl Ff3_1Cipher {
    /// Creates an FF3-1 cipher; `tweak` must be exactly 7 bytes
    pub fn new(key: &[u8], alphabet: &str, tweak: &[u8]) -> Result<Self> {
        FpeCipher::new(key, alphabet, tweak, Variant::Ff3_1).map(|inner| Self { inner })
    }

    /// Creates an FF3-1 cipher from hex-encoded key and tweak
    pub fn from_hex(key: &str, alphabet: &str, tweak: &str) -> Result<Self> {
        FpeCipher::from_hex(key, alphabet, tweak, Variant::Ff3_1).map(|inner| Self { inner })
    }

    /// The variant-agnostic cipher underneath
    pub fn as_fpe(&self) -> &FpeCipher {
        &self.inner
    }
}

impl FormatPreservingCipher for Ff3_1Cipher {
    fn variant(&self) -> Variant {
        Variant::Ff3_1
    }

    fn settings(&self) -> CipherSettings {
        self.inner.settings()
    }

    fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.inner.encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        self.inner.decrypt(ciphertext)
    }
}
