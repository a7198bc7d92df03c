//! # dfpe
//!
//! Format-preserving encryption with the FF1 and FF3-1 Feistel
//! constructions (NIST SP 800-38G Rev. 1) over arbitrary alphabets, on an
//! AES block primitive.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dfpe = "0.1"
//! ```
//!
//! ```
//! use dfpe::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let key = [0x11u8; 32];
//! let cipher = Ff3_1Cipher::new(&key, "0123456789abcdefghijklmnopqrstuvwxyz", b"7-bytes")?;
//!
//! let settings = cipher.settings();
//! assert_eq!((settings.min_len(), settings.max_len()), (4, 36));
//!
//! let token = cipher.encrypt("customer42")?;
//! assert_eq!(cipher.decrypt(&token)?, "customer42");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for settings, variants and parameters
//! - `rand`: random key generation helpers
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dfpe-api`]: Errors, traits and shared types
//! - [`dfpe-params`]: Constants
//! - [`dfpe-algorithms`]: Alphabet, domain policy, round functions, Feistel engine
//! - [`dfpe-symmetric`]: Cipher facades and configuration
//!
//! ## Security
//!
//! Decryption is unauthenticated: a ciphertext produced under a different
//! key, tweak or alphabet decrypts without error to an unrelated string.

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use dfpe_algorithms as algorithms;
pub use dfpe_api as api;
pub use dfpe_internal as internal;
pub use dfpe_params as params;
pub use dfpe_symmetric as symmetric;

pub use zeroize;

#[cfg(feature = "rand")]
pub use rand;

/// Generates a random AES key of `size` bytes from the thread-local RNG
#[cfg(feature = "rand")]
pub fn generate_key(size: usize) -> api::Result<api::FpeKey> {
    api::FpeKey::generate(&mut rand::thread_rng(), size)
}

/// Common imports for dfpe users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{BlockPrimitive, FormatPreservingCipher};
    pub use crate::symmetric::{ParamProvider, TweakableCipher};

    // Re-export value types
    pub use crate::api::{CipherSettings, FpeKey, Variant};
    pub use crate::algorithms::Alphabet;

    // Re-export ciphers and configuration
    pub use crate::symmetric::{Ff1Cipher, Ff3_1Cipher, FpeCipher, FpeParams};

    #[cfg(feature = "rand")]
    pub use crate::generate_key;
}
