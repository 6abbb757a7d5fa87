//! Forgemagie rune table and stat-to-rune resolution.

pub mod data;
pub mod logic;
pub mod types;

pub use data::ALL_RUNES;
pub use logic::*;
pub use types::*;
