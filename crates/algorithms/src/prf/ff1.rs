//! FF1 round function
//!
//! For round `i` with known half `B`:
//!
//! ```text
//! P = [1,2,1] || radix (3) || [10] || [u mod 256] || n (4) || t (4)
//! Q = T || 0^((-t-b-1) mod 16) || [i] || NUM(B) (b)
//! R = CBC-MAC(P || Q)
//! S = R || CIPH(R ^ [1]) || CIPH(R ^ [2]) || ...   truncated to d bytes
//! y = NUM(S)
//! ```

use byteorder::{BigEndian, ByteOrder};
use num_bigint::BigUint;

use crate::error::{Error, RoundResult};
use crate::numeral;
use dfpe_api::{Block, BlockPrimitive, BLOCK_SIZE};
use dfpe_internal::xor_in_place;

/// FF1 round function for one message length and tweak
pub struct Ff1Prf<'a, P: BlockPrimitive + ?Sized> {
    primitive: &'a P,
    tweak: &'a [u8],
    // CBC-MAC state after the fixed block P; identical for every round
    header_state: Block,
    pad: usize,
    // bytes per encoded half in Q
    pub(super) b: usize,
    // bytes of pseudorandom output per round
    pub(super) d: usize,
}

impl<'a, P: BlockPrimitive + ?Sized> Ff1Prf<'a, P> {
    /// Prepares the round function for an `n`-symbol message split at `u`
    pub fn new(primitive: &'a P, radix: u32, tweak: &'a [u8], n: usize, u: usize) -> RoundResult<Self> {
        let v = n - u;
        let b = numeral::byte_len(radix, v);
        let d = 4 * ((b + 3) / 4) + 4;
        let pad = (BLOCK_SIZE - (tweak.len() + b + 1) % BLOCK_SIZE) % BLOCK_SIZE;

        let mut header_state = header_block(radix, tweak.len(), n, u)?;
        primitive.encrypt_block(&mut header_state)?;

        Ok(Self { primitive, tweak, header_state, pad, b, d })
    }

    /// Computes `y` for round `round`
    pub fn evaluate(&self, round: u8, half: &BigUint) -> RoundResult<BigUint> {
        let mut q = Vec::with_capacity(self.tweak.len() + self.pad + 1 + self.b);
        q.extend_from_slice(self.tweak);
        q.resize(q.len() + self.pad, 0);
        q.push(round);
        q.extend_from_slice(&numeral::to_fixed_be_bytes(half, self.b)?);

        let mut r = self.header_state;
        for chunk in q.chunks(BLOCK_SIZE) {
            xor_in_place(&mut r, chunk);
            self.primitive.encrypt_block(&mut r)?;
        }

        let mut s = Vec::with_capacity(self.d + BLOCK_SIZE);
        s.extend_from_slice(&r);
        let mut counter: u64 = 1;
        while s.len() < self.d {
            let mut block: Block = [0u8; BLOCK_SIZE];
            BigEndian::write_u64(&mut block[8..], counter);
            xor_in_place(&mut block, &r);
            self.primitive.encrypt_block(&mut block)?;
            s.extend_from_slice(&block);
            counter += 1;
        }
        s.truncate(self.d);

        Ok(BigUint::from_bytes_be(&s))
    }
}

/// The fixed first block P
pub(crate) fn header_block(radix: u32, t: usize, n: usize, u: usize) -> RoundResult<Block> {
    let n = u32::try_from(n).map_err(|_| Error::param("FF1", "message length exceeds 2^32"))?;
    let t = u32::try_from(t).map_err(|_| Error::param("FF1", "tweak length exceeds 2^32"))?;

    let mut p: Block = [0u8; BLOCK_SIZE];
    p[..3].copy_from_slice(&[1, 2, 1]);
    BigEndian::write_u24(&mut p[3..6], radix);
    p[6] = 10;
    p[7] = (u % 256) as u8;
    BigEndian::write_u32(&mut p[8..12], n);
    BigEndian::write_u32(&mut p[12..16], t);
    Ok(p)
}
