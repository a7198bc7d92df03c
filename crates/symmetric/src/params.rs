//! Run-time cipher configuration

use dfpe_algorithms::{tweak, Alphabet};
use dfpe_api::Variant;
use dfpe_params::alphabets::DIGITS;
use dfpe_params::fpe::FF1_DEFAULT_MAX_TWEAK_LEN;

use crate::error::Result;

/// Trait for ciphers built from a parameter set
pub trait ParamProvider {
    /// The parameter type associated with this cipher
    type Params: Clone;

    /// Returns the parameters the cipher was built from
    fn params(&self) -> &Self::Params;
}

/// Variant, alphabet and tweak bound for a format-preserving cipher
///
/// Defaults to FF1 over the decimal digits with a 256-byte tweak maximum.
/// `max_tweak_len` only applies to FF1; FF3-1 tweaks are always 7 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FpeParams {
    /// Feistel construction
    pub variant: Variant,
    /// Symbols in numeral order
    pub alphabet: String,
    /// Longest FF1 tweak accepted, in bytes (at most 256)
    pub max_tweak_len: usize,
}

impl FpeParams {
    /// Parameters for `variant` over `alphabet`, other fields at their defaults
    pub fn new(variant: Variant, alphabet: impl Into<String>) -> Self {
        Self {
            variant,
            alphabet: alphabet.into(),
            ..Self::default()
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the alphabet
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Set the FF1 tweak maximum
    pub fn with_max_tweak_len(mut self, max_tweak_len: usize) -> Self {
        self.max_tweak_len = max_tweak_len;
        self
    }

    /// Checks the alphabet and the tweak maximum
    pub fn validate(&self) -> Result<Alphabet> {
        tweak::check_ff1_max_len(self.max_tweak_len)?;
        Alphabet::new(&self.alphabet)
    }
}

impl Default for FpeParams {
    fn default() -> Self {
        Self {
            variant: Variant::Ff1,
            alphabet: DIGITS.to_string(),
            max_tweak_len: FF1_DEFAULT_MAX_TWEAK_LEN,
        }
    }
}
