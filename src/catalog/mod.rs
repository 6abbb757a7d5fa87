//! Item catalog: HTTP client, wire types and effect normalization.

pub mod client;
pub mod error;
pub mod format;
pub mod types;

pub use client::*;
pub use error::CatalogError;
pub use format::*;
pub use types::*;
