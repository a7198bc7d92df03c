//! Feistel network
//!
//! Runs the alternating-halves network of FF1 (10 rounds) or FF3-1 (8
//! rounds) over a numeral string. Each call takes every parameter
//! explicitly and keeps all of its state local, so one engine can serve
//! concurrent callers in both directions.
//!
//! Both halves are carried as integers for the whole run. FF3-1 reads and
//! writes its halves digit-reversed; with that, both variants share one
//! round loop:
//!
//! ```text
//! encrypt, i = 0..R:      y = F(i, B);  C = (A + y) mod radix^m;  A = B;  B = C
//! decrypt, i = R-1..0:    y = F(i, A);  C = (B - y) mod radix^m;  B = A;  A = C
//! ```
//!
//! where `m` is `u` on even rounds and `v` on odd ones.

use num_bigint::BigUint;
use tracing::trace;

use crate::block::Aes;
use crate::domain::DomainPolicy;
use crate::error::{Error, Result};
use crate::numeral::{add_mod, num_radix, radix_pow, str_radix, sub_mod};
use crate::prf::{Ff1Prf, Ff3_1Prf, RoundFunction};
use crate::tweak::{self, Ff3_1Tweak};
use dfpe_api::{BlockPrimitive, FpeKey, Variant};
use dfpe_params::fpe::FF1_MAX_TWEAK_LEN_LIMIT;

/// Direction of a Feistel call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Rounds run forwards, halves combined by modular addition
    Encrypt,
    /// Rounds run backwards, halves recovered by modular subtraction
    Decrypt,
}

/// A keyed Feistel network of one variant
#[derive(Clone, Debug)]
pub enum FeistelEngine {
    /// FF1 over AES keyed with K
    Ff1(Aes),
    /// FF3-1 over AES keyed with REVB(K)
    Ff3_1(Aes),
}

impl FeistelEngine {
    /// Expands the key schedule for `variant`
    pub fn new(variant: Variant, key: &FpeKey) -> Result<Self> {
        match variant {
            Variant::Ff1 => Ok(FeistelEngine::Ff1(Aes::new(key.as_ref())?)),
            // REVB(K); the reversed copy is wiped when it drops
            Variant::Ff3_1 => Ok(FeistelEngine::Ff3_1(Aes::new(key.reversed().as_ref())?)),
        }
    }

    /// The variant this engine runs
    pub fn variant(&self) -> Variant {
        match self {
            FeistelEngine::Ff1(_) => Variant::Ff1,
            FeistelEngine::Ff3_1(_) => Variant::Ff3_1,
        }
    }

    /// Name of the underlying block primitive
    pub fn primitive_name(&self) -> &'static str {
        match self {
            FeistelEngine::Ff1(aes) | FeistelEngine::Ff3_1(aes) => aes.name(),
        }
    }

    /// Encrypts a numeral string
    pub fn encrypt(&self, radix: u32, tweak: &[u8], numerals: &[u16]) -> Result<Vec<u16>> {
        self.run(Direction::Encrypt, radix, tweak, numerals)
    }

    /// Decrypts a numeral string
    pub fn decrypt(&self, radix: u32, tweak: &[u8], numerals: &[u16]) -> Result<Vec<u16>> {
        self.run(Direction::Decrypt, radix, tweak, numerals)
    }

    /// Runs the network in `direction`
    ///
    /// Derives the domain bounds for `radix`, then validates length,
    /// numerals and tweak before the first round; nothing is returned
    /// unless every round succeeds.
    pub fn run(
        &self,
        direction: Direction,
        radix: u32,
        tweak: &[u8],
        numerals: &[u16],
    ) -> Result<Vec<u16>> {
        let policy = DomainPolicy::new(radix, self.variant())?;
        self.run_with_policy(direction, &policy, tweak, numerals)
    }

    /// Runs the network under bounds the caller derived once up front
    ///
    /// `policy` must belong to this engine's variant. The bounds are not
    /// recomputed; the length is still compared against them, so the
    /// engine stays total for callers that skipped their own check.
    pub fn run_with_policy(
        &self,
        direction: Direction,
        policy: &DomainPolicy,
        tweak: &[u8],
        numerals: &[u16],
    ) -> Result<Vec<u16>> {
        let variant = self.variant();
        let radix = policy.radix();
        let n = numerals.len();
        trace!(%variant, radix, n, ?direction, "feistel call");

        if policy.variant() != variant {
            return Err(Error::param(
                "domain policy",
                "bounds were derived for another variant",
            ));
        }
        policy.check(n)?;
        if let Some(&index) = numerals.iter().find(|&&d| u32::from(d) >= radix) {
            return Err(Error::IndexOutOfRange {
                index: index as usize,
                radix: radix as usize,
            });
        }

        let (u, reversed, round_fn) = match self {
            FeistelEngine::Ff1(aes) => {
                tweak::check_ff1(tweak, FF1_MAX_TWEAK_LEN_LIMIT)?;
                let u = n / 2;
                (u, false, RoundFunction::Ff1(Ff1Prf::new(aes, radix, tweak, n, u)?))
            }
            FeistelEngine::Ff3_1(aes) => {
                let split = Ff3_1Tweak::split(tweak)?;
                ((n + 1) / 2, true, RoundFunction::Ff3_1(Ff3_1Prf::new(aes, split)))
            }
        };
        let v = n - u;

        let read = |half: &[u16]| {
            if reversed {
                num_radix(half.iter().rev().copied(), radix)
            } else {
                num_radix(half.iter().copied(), radix)
            }
        };
        let (left, right) = numerals.split_at(u);
        let mut a = read(left);
        let mut b = read(right);

        let moduli = [radix_pow(radix, u), radix_pow(radix, v)];
        let rounds = variant.rounds();
        match direction {
            Direction::Encrypt => {
                for round in 0..rounds {
                    let y = round_fn.evaluate(round, &b)?;
                    let c = add_mod(&a, &y, &moduli[usize::from(round % 2)]);
                    a = b;
                    b = c;
                }
            }
            Direction::Decrypt => {
                for round in (0..rounds).rev() {
                    let y = round_fn.evaluate(round, &a)?;
                    let c = sub_mod(&b, &y, &moduli[usize::from(round % 2)]);
                    b = a;
                    a = c;
                }
            }
        }

        let write = |x: &BigUint, len: usize| -> Result<Vec<u16>> {
            let mut digits = str_radix(x, radix, len)?;
            if reversed {
                digits.reverse();
            }
            Ok(digits)
        };
        let mut out = write(&a, u)?;
        out.extend(write(&b, v)?);
        Ok(out)
    }
}
