//! Feistel format-preserving encryption primitives
//!
//! This crate implements the building blocks of the FF1 and FF3-1
//! constructions (NIST SP 800-38G Rev. 1): the symbol alphabet, the domain
//! policy deriving accepted message lengths, tweak handling, arbitrary
//! precision numeral arithmetic, the AES-based round functions and the
//! Feistel engine driving them.
//!
//! Everything here is stateless apart from the expanded AES key schedule,
//! which is computed once and only read afterwards. All per-call state is
//! allocated on entry and dropped on return.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block primitive
pub mod block;
pub use block::Aes;

// Symbol mapping and domain bounds
pub mod alphabet;
pub use alphabet::Alphabet;

pub mod domain;
pub use domain::DomainPolicy;

pub mod tweak;
pub use tweak::Ff3_1Tweak;

// Big-radix arithmetic
pub mod numeral;

// Round functions and the Feistel network
pub mod prf;
pub use prf::RoundFunction;

pub mod feistel;
pub use feistel::{Direction, FeistelEngine};
