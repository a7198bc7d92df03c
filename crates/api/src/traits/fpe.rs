//! Format-preserving cipher trait

use crate::types::{CipherSettings, Variant};
use crate::error::CipherResult;

/// Common interface of every keyed format-preserving cipher
///
/// The ciphertext is drawn from the same alphabet as the plaintext and has
/// the same length.
///
/// # Security Note
///
/// Decryption is a permutation, not an authenticated operation. A ciphertext
/// produced under a different key, tweak or alphabet still "decrypts"
/// without error to some unrelated string of the same length. Callers that
/// need integrity must check recovered plaintext by other means.
pub trait FormatPreservingCipher {
    /// The Feistel construction behind this cipher
    fn variant(&self) -> Variant;

    /// Radix and accepted message lengths, fixed at construction
    fn settings(&self) -> CipherSettings;

    /// Encrypts a plaintext over the bound alphabet
    fn encrypt(&self, plaintext: &str) -> CipherResult<String>;

    /// Decrypts a ciphertext over the bound alphabet
    fn decrypt(&self, ciphertext: &str) -> CipherResult<String>;

    /// Returns the name of this cipher
    fn name(&self) -> &'static str {
        self.variant().name()
    }
}
