//! Round functions
//!
//! Each Feistel round derives a pseudorandom integer `y` from the known
//! half, the tweak and the round index. Both variants call the block
//! primitive in the forward direction only, whichever way the network is
//! run.

pub mod ff1;
pub mod ff3_1;

pub use ff1::Ff1Prf;
pub use ff3_1::Ff3_1Prf;

use num_bigint::BigUint;

use crate::error::RoundResult;
use dfpe_api::BlockPrimitive;

/// The round function of one variant, bound to a single Feistel call
pub enum RoundFunction<'a, P: BlockPrimitive + ?Sized> {
    /// CBC-MAC based function of FF1
    Ff1(Ff1Prf<'a, P>),
    /// Single-block function of FF3-1
    Ff3_1(Ff3_1Prf<'a, P>),
}

impl<P: BlockPrimitive + ?Sized> RoundFunction<'_, P> {
    /// Computes `y` for round `round` from the numeral value of the known half
    pub fn evaluate(&self, round: u8, half: &BigUint) -> RoundResult<BigUint> {
        match self {
            RoundFunction::Ff1(prf) => prf.evaluate(round, half),
            RoundFunction::Ff3_1(prf) => prf.evaluate(round, half),
        }
    }
}
