//! Format-preserving cipher facades
//!
//! [`FpeCipher`] binds one key, alphabet, default tweak and variant. The
//! derived [`CipherSettings`] are fixed at construction, and every call
//! checks the message length and symbols before the Feistel network runs.
//!
//! # Examples
//!
//! ```
//! use dfpe_symmetric::{FpeCipher, Result};
//! use dfpe_api::{FormatPreservingCipher, Variant};
//!
//! fn example() -> Result<()> {
//!     let key = [0x2Bu8; 16];
//!     let cipher = FpeCipher::new(&key, "0123456789", b"order-42", Variant::Ff1)?;
//!
//!     let ciphertext = cipher.encrypt("4111111111111111")?;
//!     assert_eq!(ciphertext.len(), 16);
//!     assert_eq!(cipher.decrypt(&ciphertext)?, "4111111111111111");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Security Note
//!
//! Decryption never fails on a well-formed ciphertext. A ciphertext made
//! under another key, tweak or alphabet decrypts to unrelated output.

pub mod ff1;
pub mod ff3_1;

pub use ff1::Ff1Cipher;
pub use ff3_1::Ff3_1Cipher;

use tracing::{debug, warn};

use crate::cipher::{FormatPreservingCipher, TweakableCipher};
use crate::error::{Error, Result, SymmetricResultExt};
use crate::params::{FpeParams, ParamProvider};
use dfpe_algorithms::{tweak, Alphabet, Direction, DomainPolicy, FeistelEngine, Ff3_1Tweak};
use dfpe_api::{CipherSettings, FpeKey, Variant};

/// A keyed format-preserving cipher of either variant
///
/// Immutable after construction and `Send + Sync`; share it freely across
/// threads.
#[derive(Debug, Clone)]
pub struct FpeCipher {
    engine: FeistelEngine,
    alphabet: Alphabet,
    policy: DomainPolicy,
    tweak: Vec<u8>,
    params: FpeParams,
}

impl FpeCipher {
    /// Creates a cipher over `alphabet` with a default tweak
    ///
    /// `key` must be 16, 24 or 32 bytes. For FF3-1 `tweak` must be exactly
    /// 7 bytes; for FF1 it may be up to 256 bytes, including empty.
    pub fn new(key: &[u8], alphabet: &str, tweak: &[u8], variant: Variant) -> Result<Self> {
        Self::with_params(key, tweak, &FpeParams::new(variant, alphabet))
    }

    /// Creates a cipher from a parameter set
    pub fn with_params(key: &[u8], tweak: &[u8], params: &FpeParams) -> Result<Self> {
        let key = FpeKey::new(key)?;
        Self::with_key(&key, tweak, params)
    }

    /// Creates a cipher from hex-encoded key and tweak
    pub fn from_hex(key: &str, alphabet: &str, tweak: &str, variant: Variant) -> Result<Self> {
        let key = FpeKey::new(&hex::decode(key).map_hex_err("key")?)?;
        let tweak = hex::decode(tweak).map_hex_err("tweak")?;
        Self::with_key(&key, &tweak, &FpeParams::new(variant, alphabet))
    }

    /// Creates a cipher from an already validated key
    pub fn with_key(key: &FpeKey, tweak: &[u8], params: &FpeParams) -> Result<Self> {
        let variant = params.variant;
        let alphabet = params.validate()?;
        match variant {
            Variant::Ff1 => tweak::check_ff1(tweak, params.max_tweak_len)?,
            Variant::Ff3_1 => {
                Ff3_1Tweak::split(tweak)?;
            }
        }
        let policy = DomainPolicy::new(alphabet.radix(), variant)?;
        let engine = FeistelEngine::new(variant, key)?;

        debug!(
            %variant,
            radix = policy.radix(),
            min_len = policy.min_len(),
            max_len = policy.max_len(),
            tweak_len = tweak.len(),
            primitive = engine.primitive_name(),
            "format-preserving cipher ready"
        );
        if variant == Variant::Ff1 && tweak.is_empty() {
            warn!("FF1 cipher built with an empty default tweak");
        }

        Ok(Self {
            engine,
            alphabet,
            policy,
            tweak: tweak.to_vec(),
            params: params.clone(),
        })
    }

    /// The bound alphabet
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The default tweak
    pub fn tweak(&self) -> &[u8] {
        &self.tweak
    }

    fn check_tweak_override(&self, tweak: &[u8]) -> Result<()> {
        if self.variant() != Variant::Ff1 {
            return Err(Error::param(
                "FF3-1 tweak",
                "tweak is fixed at construction and cannot be overridden",
            ));
        }
        tweak::check_ff1(tweak, self.params.max_tweak_len)
    }

    fn transform(&self, direction: Direction, text: &str, tweak: &[u8]) -> Result<String> {
        self.policy.check(text.chars().count())?;
        let numerals = self.alphabet.to_indices(text)?;
        let output = self
            .engine
            .run_with_policy(direction, &self.policy, tweak, &numerals)?;
        self.alphabet.to_symbols(&output)
    }
}

impl FormatPreservingCipher for FpeCipher {
    fn variant(&self) -> Variant {
        self.engine.variant()
    }

    fn settings(&self) -> CipherSettings {
        self.policy.settings()
    }

    fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.transform(Direction::Encrypt, plaintext, &self.tweak)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        self.transform(Direction::Decrypt, ciphertext, &self.tweak)
    }
}

impl TweakableCipher for FpeCipher {
    /// Fails with `InvalidParameter` on an FF3-1 cipher
    fn encrypt_with_tweak(&self, plaintext: &str, tweak: &[u8]) -> Result<String> {
        self.check_tweak_override(tweak)?;
        self.transform(Direction::Encrypt, plaintext, tweak)
    }

    /// Fails with `InvalidParameter` on an FF3-1 cipher
    fn decrypt_with_tweak(&self, ciphertext: &str, tweak: &[u8]) -> Result<String> {
        self.check_tweak_override(tweak)?;
        self.transform(Direction::Decrypt, ciphertext, tweak)
    }
}

impl ParamProvider for FpeCipher {
    type Params = FpeParams;

    fn params(&self) -> &FpeParams {
        &self.params
    }
}
