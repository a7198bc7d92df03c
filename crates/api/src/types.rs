//! Core types with security guarantees for the dfpe library
//!
//! This module provides the value types shared by every crate in the
//! workspace: the variant selector, the derived cipher settings and the
//! secret key container.

use core::fmt;
use core::str::FromStr;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::validate;
use crate::error::KeyResult;
use crate::{Error, Result};
use dfpe_internal::constant_time::ct_eq;
use dfpe_params::fpe::{FF1_ROUNDS, FF3_1_ROUNDS};

/// Feistel construction selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// FF1: 10 rounds, variable-length tweak, CBC-MAC round function
    #[cfg_attr(feature = "serde", serde(rename = "FF1"))]
    Ff1,
    /// FF3-1: 8 rounds, 56-bit tweak, single-block round function
    #[cfg_attr(feature = "serde", serde(rename = "FF3-1", alias = "FF3_1"))]
    Ff3_1,
}

impl Variant {
    /// Number of Feistel rounds of this construction
    pub const fn rounds(self) -> u8 {
        match self {
            Variant::Ff1 => FF1_ROUNDS,
            Variant::Ff3_1 => FF3_1_ROUNDS,
        }
    }

    /// Canonical name of this construction
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Ff1 => "FF1",
            Variant::Ff3_1 => "FF3-1",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FF1" => Ok(Variant::Ff1),
            "FF3-1" | "FF3_1" | "FF31" => Ok(Variant::Ff3_1),
            other => Err(Error::param(
                "variant",
                format!("unknown FPE variant '{}' (expected FF1 or FF3-1)", other),
            )),
        }
    }
}

/// Radix and accepted message lengths of a constructed cipher
///
/// Computed once when a cipher is built and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CipherSettings {
    radix: u32,
    min_len: usize,
    max_len: usize,
}

impl CipherSettings {
    /// Create settings from their components
    pub const fn new(radix: u32, min_len: usize, max_len: usize) -> Self {
        Self { radix, min_len, max_len }
    }

    /// Number of symbols in the alphabet
    pub const fn radix(&self) -> u32 {
        self.radix
    }

    /// Shortest accepted message, in symbols
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Longest accepted message, in symbols
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether a message of `len` symbols lies in the domain
    pub const fn accepts_len(&self, len: usize) -> bool {
        len >= self.min_len && len <= self.max_len
    }
}

impl fmt::Display for CipherSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CipherSettings[radix={}, minLen={}, maxLen={}]",
            self.radix, self.min_len, self.max_len)
    }
}

/// An AES key that is securely zeroed when dropped
///
/// This type provides:
/// - Length validation (16, 24 or 32 bytes) at construction
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FpeKey {
    data: Vec<u8>,
}

impl FpeKey {
    /// Create a key by copying from a slice of a valid AES key length
    pub fn new(bytes: &[u8]) -> KeyResult<Self> {
        validate::key_length(bytes.len())?;
        Ok(Self { data: bytes.to_vec() })
    }

    /// Generate a random key of `size` bytes
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, size: usize) -> KeyResult<Self> {
        validate::key_length(size)?;
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        Ok(Self { data })
    }

    /// A copy of this key with its bytes in reverse order
    pub fn reversed(&self) -> Self {
        let mut data = self.data.clone();
        data.reverse();
        Self { data }
    }

    /// Get the length of the key in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the key is empty (never true for a constructed key)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for FpeKey {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for FpeKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for FpeKey {}

impl fmt::Debug for FpeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FpeKey<{}>[REDACTED]", self.data.len())
    }
}

impl TryFrom<&[u8]> for FpeKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes)
    }
}
