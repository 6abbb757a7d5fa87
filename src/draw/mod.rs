//! Random draw wheel: shuffle a list of names and pick winners.

pub mod error;
pub mod logic;

pub use error::DrawError;
pub use logic::*;
