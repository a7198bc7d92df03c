//! Big-radix numeral arithmetic
//!
//! Numeral strings are read most significant digit first, as in NIST SP
//! 800-38G: `NUM_radix(X)` and its inverse `STR^m_radix(x)`. Values are
//! `BigUint`s scoped to a single call.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::error::{Error, NumeralResult};

/// NUM_radix: the value of a numeral string, first digit most significant
pub fn num_radix<I>(digits: I, radix: u32) -> BigUint
where
    I: IntoIterator<Item = u16>,
{
    digits
        .into_iter()
        .fold(BigUint::zero(), |acc, digit| acc * radix + u32::from(digit))
}

/// STR^len_radix: the `len`-digit representation of `x`
///
/// Fails if `x >= radix^len`.
pub fn str_radix(x: &BigUint, radix: u32, len: usize) -> NumeralResult<Vec<u16>> {
    let base = BigUint::from(radix);
    let mut rest = x.clone();
    let mut digits = vec![0u16; len];

    for slot in digits.iter_mut().rev() {
        let (quotient, remainder) = rest.div_rem(&base);
        *slot = remainder
            .to_u16()
            .ok_or_else(|| Error::primitive("numeral", "digit exceeds 16 bits"))?;
        rest = quotient;
    }

    if !rest.is_zero() {
        return Err(Error::primitive("numeral", "value does not fit in the requested length"));
    }
    Ok(digits)
}

/// `radix^exp`
pub fn radix_pow(radix: u32, exp: usize) -> BigUint {
    num_traits::pow(BigUint::from(radix), exp)
}

/// `(a + y) mod modulus`
pub fn add_mod(a: &BigUint, y: &BigUint, modulus: &BigUint) -> BigUint {
    (a + y) % modulus
}

/// `(a - y) mod modulus`, for `a < modulus`
pub fn sub_mod(a: &BigUint, y: &BigUint, modulus: &BigUint) -> BigUint {
    let y = y % modulus;
    (a + modulus - y) % modulus
}

/// Big-endian encoding of `x` in exactly `len` bytes
///
/// Fails if `x >= 256^len`.
pub fn to_fixed_be_bytes(x: &BigUint, len: usize) -> NumeralResult<Vec<u8>> {
    let raw = x.to_bytes_be();
    let start = raw.iter().position(|&b| b != 0).unwrap_or(raw.len());
    let significant = &raw[start..];
    if significant.len() > len {
        return Err(Error::primitive("numeral", "value does not fit in the requested bytes"));
    }

    let mut out = vec![0u8; len];
    out[len - significant.len()..].copy_from_slice(significant);
    Ok(out)
}

/// Bytes needed for any `v`-digit numeral: `ceil(ceil(v * log2(radix)) / 8)`
///
/// Computed as the byte length of `radix^v - 1`, which equals the
/// logarithmic form without rounding error.
pub fn byte_len(radix: u32, v: usize) -> usize {
    let largest = radix_pow(radix, v) - 1u32;
    let bits = largest.bits() as usize;
    (bits + 7) / 8
}
