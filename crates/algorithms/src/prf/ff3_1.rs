//! FF3-1 round function
//!
//! ```text
//! P = (W ^ [i]) || NUM(REV(B)) (12)
//! y = NUM(REVB(CIPH_REVK(REVB(P))))
//! ```
//!
//! The primitive must already be keyed with the byte-reversed key.

use num_bigint::BigUint;

use crate::error::RoundResult;
use crate::numeral;
use crate::tweak::Ff3_1Tweak;
use dfpe_api::{Block, BlockPrimitive, BLOCK_SIZE};
use dfpe_params::fpe::{FF3_1_NUMERAL_LEN, FF3_1_TWEAK_HALF_LEN};

/// FF3-1 round function for one tweak
pub struct Ff3_1Prf<'a, P: BlockPrimitive + ?Sized> {
    primitive: &'a P,
    tweak: Ff3_1Tweak,
}

impl<'a, P: BlockPrimitive + ?Sized> Ff3_1Prf<'a, P> {
    /// Binds a reversed-key primitive and a split tweak
    pub fn new(primitive: &'a P, tweak: Ff3_1Tweak) -> Self {
        Self { primitive, tweak }
    }

    /// Computes `y` for round `round` from `NUM(REV(B))`
    pub fn evaluate(&self, round: u8, half: &BigUint) -> RoundResult<BigUint> {
        let mut p: Block = [0u8; BLOCK_SIZE];
        p[..FF3_1_TWEAK_HALF_LEN].copy_from_slice(self.tweak.for_round(round));
        p[FF3_1_TWEAK_HALF_LEN - 1] ^= round;
        p[FF3_1_TWEAK_HALF_LEN..].copy_from_slice(&numeral::to_fixed_be_bytes(half, FF3_1_NUMERAL_LEN)?);

        p.reverse();
        self.primitive.encrypt_block(&mut p)?;
        p.reverse();

        Ok(BigUint::from_bytes_be(&p))
    }
}
