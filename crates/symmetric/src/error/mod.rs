//! Error handling for the cipher facades
//!
//! Re-exports the API error system and adds conversions for the encodings
//! accepted at construction.

// Re-export the primary API error system
pub use dfpe_api::error::{validate, Error, Result};

/// Convert a hex decoding failure to an API Error
pub fn from_hex_error(context: &'static str, err: hex::FromHexError) -> Error {
    Error::param(context, format!("invalid hex: {}", err))
}

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a Result with a hex error to a Result with API Error
    fn map_hex_err(self, context: &'static str) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, hex::FromHexError> {
    fn map_hex_err(self, context: &'static str) -> Result<T> {
        self.map_err(|err| from_hex_error(context, err))
    }
}
