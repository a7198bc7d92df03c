//! Constants for the AES block primitive

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// Key sizes accepted by the AES primitive, in bytes
pub const AES_KEY_SIZES: [usize; 3] = [AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE];

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;
