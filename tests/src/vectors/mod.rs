//! Known-answer vectors for FF1 and FF3-1
//!
//! Re-export the public surface so callers can do
//! `use dfpe_tests::vectors::*;`.

pub mod runner;

pub use error::*;
pub use loader::*;
pub use model::*;
pub use runner::*;
