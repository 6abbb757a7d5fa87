//! Forgemagie breakage calculator: stat weights, profitability, breakeven
//! limits and reroll simulation.

pub mod error;
pub mod logic;
pub mod simulation;
pub mod types;

pub use error::{AnalysisError, InputError};
pub use logic::*;
pub use simulation::*;
pub use types::*;
