//! Format-preserving cipher facades for the dfpe library
//!
//! This crate binds a key, an alphabet, a default tweak and a variant into
//! reusable `encrypt`/`decrypt` operations over strings. It is built on the
//! primitives in `dfpe-algorithms` and uses the unified API error system.
//!
//! # Security Note
//!
//! Format-preserving encryption is unauthenticated. Decrypting with the
//! wrong key, tweak or alphabet succeeds and yields an unrelated string of
//! the same length. Validate recovered plaintext out-of-band.

#![forbid(unsafe_code)]

pub mod cipher;
pub mod error;
pub mod fpe;
pub mod params;

// Re-export main types for convenience
pub use cipher::TweakableCipher;
pub use fpe::{Ff1Cipher, Ff3_1Cipher, FpeCipher};
pub use params::{FpeParams, ParamProvider};

// Re-export the API error system instead of custom error types
pub use dfpe_api::error::{Error, Result};

// Re-export commonly used validation utilities
pub use dfpe_api::error::validate;
