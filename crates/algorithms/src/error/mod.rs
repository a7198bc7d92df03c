//! Error handling for Feistel primitives
//!
//! The primitives share the workspace error taxonomy so that a failure
//! raised deep inside a round surfaces unchanged at the cipher facade.

pub use dfpe_api::error::{validate, Error, Result};

/// Result type for numeral arithmetic
pub type NumeralResult<T> = Result<T>;

/// Result type for round-function evaluation
pub type RoundResult<T> = Result<T>;
