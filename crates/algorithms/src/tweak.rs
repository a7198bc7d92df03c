//! Tweak validation and splitting
//!
//! FF1 takes a byte string of any length up to a configured maximum.
//! FF3-1 takes exactly 56 bits, split into two 32-bit halves:
//!
//! ```text
//! TL = T[0..3] || (T[3] & 0xF0)
//! TR = T[4..7] || ((T[3] & 0x0F) << 4)
//! ```

use crate::error::{validate, Error, Result};
use dfpe_params::fpe::{FF1_MAX_TWEAK_LEN_LIMIT, FF3_1_TWEAK_HALF_LEN, FF3_1_TWEAK_LEN};

/// Fails with `TweakTooLong` if an FF1 tweak exceeds `max_len` bytes
pub fn check_ff1(tweak: &[u8], max_len: usize) -> Result<()> {
    validate::max_tweak_length(tweak.len(), max_len)
}

/// Fails with `InvalidParameter` if a configured FF1 tweak maximum is too large
pub fn check_ff1_max_len(max_len: usize) -> Result<()> {
    if max_len > FF1_MAX_TWEAK_LEN_LIMIT {
        return Err(Error::param(
            "FF1 tweak",
            format!(
                "maximum tweak length {} exceeds limit of {}",
                max_len, FF1_MAX_TWEAK_LEN_LIMIT
            ),
        ));
    }
    Ok(())
}

/// An FF3-1 tweak split into its left and right halves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ff3_1Tweak {
    left: [u8; FF3_1_TWEAK_HALF_LEN],
    right: [u8; FF3_1_TWEAK_HALF_LEN],
}

impl Ff3_1Tweak {
    /// Splits a 7-byte tweak
    pub fn split(tweak: &[u8]) -> Result<Self> {
        validate::tweak_length("FF3-1 tweak", tweak.len(), FF3_1_TWEAK_LEN)?;

        let left = [tweak[0], tweak[1], tweak[2], tweak[3] & 0xF0];
        let right = [tweak[4], tweak[5], tweak[6], (tweak[3] & 0x0F) << 4];
        Ok(Self { left, right })
    }

    /// W for round `round`: TR on even rounds, TL on odd ones
    pub fn for_round(&self, round: u8) -> &[u8; FF3_1_TWEAK_HALF_LEN] {
        if round % 2 == 0 {
            &self.right
        } else {
            &self.left
        }
    }
}
