//! Validation utilities used at operation boundaries

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a key length against the accepted AES sizes
#[inline(always)]
pub fn key_length(actual: usize) -> Result<()> {
    if !dfpe_params::symmetric::AES_KEY_SIZES.contains(&actual) {
        return Err(Error::InvalidKeyLength { actual });
    }
    Ok(())
}

/// Validate a fixed tweak length
#[inline(always)]
pub fn tweak_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidTweakLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a variable tweak length against its maximum
#[inline(always)]
pub fn max_tweak_length(actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::TweakTooLong { max, actual });
    }
    Ok(())
}

/// Validate that a message length lies in `[min_len, max_len]`
#[inline(always)]
pub fn message_length(len: usize, min_len: usize, max_len: usize) -> Result<()> {
    if len < min_len || len > max_len {
        return Err(Error::MessageLengthOutOfRange {
            len,
            min_len,
            max_len,
        });
    }
    Ok(())
}

/// Validate that a radix lies in `[min, max]`
#[inline(always)]
pub fn radix(radix: usize, min: u32, max: u32) -> Result<()> {
    if radix < min as usize || radix > max as usize {
        return Err(Error::RadixOutOfRange { radix, min, max });
    }
    Ok(())
}
