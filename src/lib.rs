//! Forgemagie - Breakage Profitability Calculator and Draw Wheel
//!
//! Library side of the `forgemagie` binary: the rune table, the item catalog
//! client, the breakage calculator, the rune price store and the draw wheel.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod draw;
pub mod forge;
pub mod prices;
pub mod report;
pub mod runes;
pub mod utils;

pub use catalog::{CatalogClient, Item};
pub use config::AppConfig;
pub use forge::{analyze_item, AnalysisRequest, AnalysisResult, CalculatorInputs};
pub use prices::RunePriceTable;
