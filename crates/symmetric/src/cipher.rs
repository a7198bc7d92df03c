//! Cipher traits for dfpe-symmetric
//!
//! [`FormatPreservingCipher`] covers every facade; ciphers that accept a
//! tweak per call also implement [`TweakableCipher`].

use crate::error::Result;
pub use dfpe_api::FormatPreservingCipher;

/// A format-preserving cipher whose tweak can be overridden per call
pub trait TweakableCipher: FormatPreservingCipher {
    /// Encrypts `plaintext` under `tweak` instead of the bound default
    fn encrypt_with_tweak(&self, plaintext: &str, tweak: &[u8]) -> Result<String>;

    /// Decrypts `ciphertext` under `tweak` instead of the bound default
    fn decrypt_with_tweak(&self, ciphertext: &str, tweak: &[u8]) -> Result<String>;
}
