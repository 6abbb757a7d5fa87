//! Rune price table and its persistence.

pub mod error;
pub mod persistence;
pub mod types;

pub use error::PriceFileError;
pub use persistence::*;
pub use types::*;
