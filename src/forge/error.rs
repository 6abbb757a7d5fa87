use super::types::{MAX_FIXED_REROLLS, MAX_ITEM_PERCENTAGE};
use thiserror::Error;

/// Calculator inputs rejected before any computation.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("craft price must be a positive number of kamas (got {0})")]
    InvalidCraftPrice(i64),
    #[error("safety margin must be a non-negative percentage (got {0})")]
    InvalidMargin(f64),
    #[error("item percentage must be above 0 and at most {max} (got {0})", max = MAX_ITEM_PERCENTAGE)]
    InvalidPercentage(f64),
    #[error("reroll count must be between 1 and {max} (got {0})", max = MAX_FIXED_REROLLS)]
    InvalidRerollCount(i64),
    #[error("a reroll count needs the item's current percentage")]
    MissingPercentage,
}

/// Errors raised while analyzing an item.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("no forgemagie stat found on this item")]
    NothingToAnalyze,
}
