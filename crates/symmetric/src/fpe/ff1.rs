//! FF1 facade

use super::FpeCipher;
use crate::cipher::{FormatPreservingCipher, TweakableCipher};
use crate::error::Result;
use crate::params::{FpeParams, ParamProvider};
use dfpe_api::{CipherSettings, Variant};

/// FF1 cipher with a default tweak that may be overridden per call
#[derive(Debug, Clone)]
pub struct Ff1Cipher {
    inner: FpeCipher,
}

impl Ff1Cipher {
    /// Creates an FF1 cipher; `tweak` may be empty and at most 256 bytes
    pub fn new(key: &[u8], alphabet: &str, tweak: &[u8]) -> Result<Self> {
        FpeCipher::new(key, alphabet, tweak, Variant::Ff1).map(|inner| Self { inner })
    }

    /// Creates an FF1 cipher accepting tweaks of at most `max_tweak_len` bytes
    pub fn with_max_tweak_len(
        key: &[u8],
        alphabet: &str,
        tweak: &[u8],
        max_tweak_len: usize,
    ) -> Result<Self> {
        let params = FpeParams::new(Variant::Ff1, alphabet).with_max_tweak_len(max_tweak_len);
        FpeCipher::with_params(key, tweak, &params).map(|inner| Self { inner })
    }

    /// Creates an FF1 cipher from hex-encoded key and tweak
    pub fn from_hex(key: &str, alphabet: &str, tweak: &str) -> Result<Self> {
        FpeCipher::from_hex(key, alphabet, tweak, Variant::Ff1).map(|inner| Self { inner })
    }

    /// The variant-agnostic cipher underneath
    pub fn as_fpe(&self) -> &FpeCipher {
        &self.inner
    }
}

impl FormatPreservingCipher for Ff1Cipher {
    fn variant(&self) -> Variant {
        Variant::Ff1
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

impl TweakableCipher for Ff1Cipher {
    fn encrypt_with_tweak(&self, plaintext: &str, tweak: &[u8]) -> Result<String> {
        self.inner.encrypt_with_tweak(plaintext, tweak)
    }

    fn decrypt_with_tweak(&self, ciphertext: &str, tweak: &[u8]) -> Result<String> {
        self.inner.decrypt_with_tweak(ciphertext, tweak)
    }
}

impl ParamProvider for Ff1Cipher {
    type Params = FpeParams;

    fn params(&self) -> &FpeParams {
        self.inner.params()
    }
}
