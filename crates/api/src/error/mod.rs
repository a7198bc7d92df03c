//! Error handling for the format-preserving encryption ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

use std::error::Error as StdError;

impl StdError for Error {}

// Specialized result types for different operations
pub type CipherResult<T> = Result<T>;
pub type KeyResult<T> = Result<T>;
