//! Message length bounds
//!
//! The smallest accepted length is the least `m` with `radix^m >= 1_000_000`,
//! never below 2. FF3-1 bounds the longest message by twice the largest
//! `m` with `radix^m <= 2^96`; FF1 uses a fixed practical cap. All bounds
//! are computed with exact integer arithmetic.

use crate::error::{validate, Result};
use dfpe_api::{CipherSettings, Variant};
use dfpe_params::fpe::{
    DOMAIN_MIN, FF1_MAX_LEN, FF3_1_NUMERAL_BITS, MAX_RADIX, MIN_MESSAGE_LEN, MIN_RADIX,
};

/// Accepted message lengths for one radix and variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainPolicy {
    variant: Variant,
    radix: u32,
    min_len: usize,
    max_len: usize,
}

impl DomainPolicy {
    /// Derives the bounds for `radix` under `variant`
    pub fn new(radix: u32, variant: Variant) -> Result<Self> {
        validate::radix(radix as usize, MIN_RADIX, MAX_RADIX)?;

        let min_len = min_len(radix);
        let max_len = match variant {
            Variant::Ff1 => FF1_MAX_LEN,
            Variant::Ff3_1 => 2 * max_half_len(radix),
        };
        validate::parameter(
            min_len <= max_len,
            "domain policy",
            "radix admits no message length",
        )?;

        Ok(Self { variant, radix, min_len, max_len })
    }

    /// The variant these bounds apply to
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The radix these bounds apply to
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Shortest accepted message
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Longest accepted message
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Fails with `MessageLengthOutOfRange` unless `len` is accepted
    pub fn check(&self, len: usize) -> Result<()> {
        validate::message_length(len, self.min_len, self.max_len)
    }

    /// The bounds as caller-facing settings
    pub fn settings(&self) -> CipherSettings {
        CipherSettings::new(self.radix, self.min_len, self.max_len)
    }
}

/// Least `m` with `radix^m >= DOMAIN_MIN`, at least `MIN_MESSAGE_LEN`
fn min_len(radix: u32) -> usize {
    let mut len: usize = 0;
    let mut span: u64 = 1;
    while span < DOMAIN_MIN {
        span = span.saturating_mul(radix as u64);
        len += 1;
    }
    len.max(MIN_MESSAGE_LEN)
}

/// Largest `m` with `radix^m <= 2^96`
fn max_half_len(radix: u32) -> usize {
    let limit: u128 = 1 << FF3_1_NUMERAL_BITS;
    let mut len: usize = 0;
    let mut span: u128 = 1;
    while let Some(next) = span.checked_mul(radix as u128) {
        if next > limit {
            break;
        }
        span = next;
        len += 1;
    }
    len
}
