//! Constants for the FF1 and FF3-1 Feistel constructions (NIST SP 800-38G Rev. 1)

/// Minimum number of distinct messages a domain must hold (radix^minlen >= DOMAIN_MIN)
pub const DOMAIN_MIN: u64 = 1_000_000;

/// Smallest supported alphabet size
pub const MIN_RADIX: u32 = 2;

/// Largest supported alphabet size (exclusive bound is 2^16)
pub const MAX_RADIX: u32 = (1 << 16) - 1;

/// Messages shorter than this are never accepted, whatever the radix
pub const MIN_MESSAGE_LEN: usize = 2;

/// Number of Feistel rounds in FF1
pub const FF1_ROUNDS: u8 = 10;

/// Number of Feistel rounds in FF3-1
pub const FF3_1_ROUNDS: u8 = 8;

/// Practical ceiling on FF1 message length, in symbols
///
/// FF1 only bounds n by 2^32. Numeral conversion is quadratic in n, so the
/// per-call cost is capped here instead.
pub const FF1_MAX_LEN: usize = 4096;

/// Default maximum FF1 tweak length in bytes
pub const FF1_DEFAULT_MAX_TWEAK_LEN: usize = 256;

/// Hard ceiling for a configured FF1 tweak maximum, in bytes
pub const FF1_MAX_TWEAK_LEN_LIMIT: usize = 256;

/// FF3-1 tweak length in bytes (56 bits)
pub const FF3_1_TWEAK_LEN: usize = 7;

/// Length in bytes of each FF3-1 tweak half after padding
pub const FF3_1_TWEAK_HALF_LEN: usize = 4;

/// Bytes of the FF3-1 round block that carry the numeral
pub const FF3_1_NUMERAL_LEN: usize = 12;

/// Bit budget of the FF3-1 half-numeral (radix^maxlen/2 <= 2^96)
pub const FF3_1_NUMERAL_BITS: u32 = 96;
