use super::error::InputError;
use crate::config::{DEFAULT_MARGIN_PERCENTAGE, DEFAULT_MAX_ITERATIONS};
use serde::Serialize;
use std::fmt;

/// Percentage lost per reroll is `DECAY_COEFFICIENT × p²`.
pub const DECAY_COEFFICIENT: f64 = 9.52e-5;

/// Share of the other lines' weight a reroll redistributes onto a line.
pub const REDISTRIBUTION_SHARE: f64 = 0.5;

/// Highest item percentage accepted as a simulation start.
pub const MAX_ITEM_PERCENTAGE: f64 = 100.0;

/// Upper bound for a fixed reroll count.
pub const MAX_FIXED_REROLLS: u32 = 10_000;

/// One analyzed stat line of an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub effect_id: u32,
    pub rune_key: &'static str,
    pub rune_name: &'static str,
    /// Average roll, `(min + max) / 2`
    pub stat_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub weight: f64,
    pub density: f64,
    pub effect: f64,
    pub description: String,
    /// Rune price / density; 0 until priced
    pub ratio: f64,
    /// 0 until priced
    pub profitability: f64,
}

/// Breakage strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    WithFocus,
    WithoutFocus,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::WithFocus => "With focus",
            Strategy::WithoutFocus => "Without focus",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Breakeven percentages for both strategies. Infinite when nothing pays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LimitPercentages {
    pub with_focus: f64,
    pub without_focus: f64,
    pub best_percentage: f64,
    pub use_focus: bool,
    pub recommendation: Strategy,
}

/// One reroll of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationStep {
    pub iteration: u32,
    pub percentage: f64,
    pub kamas_this_step: f64,
    pub total_kamas: f64,
    pub total_runes: f64,
}

/// Simulation state at a given point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationSnapshot {
    pub iterations: u32,
    pub final_percentage: f64,
    pub total_kamas: f64,
    pub total_runes: f64,
    /// Crafts paid for: `iterations × craft_price`
    pub investment: f64,
}

impl SimulationSnapshot {
    pub fn is_profitable(&self) -> bool {
        self.total_kamas > 0.0
    }
}

/// Outcome of a threshold-driven simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Stop point keeping the safety margin above the limit
    pub with_margin: SimulationSnapshot,
    /// Stop point at the limit itself (maximum extraction)
    pub without_margin: SimulationSnapshot,
    pub history: Vec<SimulationStep>,
    pub is_profitable: bool,
    pub margin_percentage: f64,
    /// The loop stopped on `max_iterations` rather than on the limit
    pub hit_iteration_cap: bool,
}

/// Outcome of a fixed-count simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedSimulationResult {
    pub snapshot: SimulationSnapshot,
    pub history: Vec<SimulationStep>,
    pub is_profitable: bool,
}

/// Full analysis of an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub lines: Vec<StatLine>,
    pub focus_line: Option<StatLine>,
    pub limits: LimitPercentages,
    pub simulation: Option<SimulationResult>,
    pub fixed_simulation: Option<FixedSimulationResult>,
    pub craft_price: u64,
}

/// Raw calculator inputs as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorInputs {
    pub craft_price: i64,
    pub margin_percentage: f64,
    pub current_percentage: Option<f64>,
    pub reroll_count: Option<i64>,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            craft_price: 0,
            margin_percentage: DEFAULT_MARGIN_PERCENTAGE,
            current_percentage: None,
            reroll_count: None,
        }
    }
}

/// Validated calculator inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub craft_price: u64,
    pub margin_percentage: f64,
    /// Item percentage to simulate from; no simulation when absent
    pub current_percentage: Option<f64>,
    /// Also simulate exactly this many rerolls
    pub reroll_count: Option<u32>,
    pub max_iterations: u32,
}

impl AnalysisRequest {
    pub fn new(craft_price: u64) -> Self {
        Self {
            craft_price,
            margin_percentage: DEFAULT_MARGIN_PERCENTAGE,
            current_percentage: None,
            reroll_count: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl CalculatorInputs {
    /// Check every input before anything gets computed.
    pub fn validate(&self) -> Result<AnalysisRequest, InputError> {
        if self.craft_price <= 0 {
            return Err(InputError::InvalidCraftPrice(self.craft_price));
        }
        if !self.margin_percentage.is_finite() || self.margin_percentage < 0.0 {
            return Err(InputError::InvalidMargin(self.margin_percentage));
        }
        if let Some(p) = self.current_percentage {
            if !p.is_finite() || p <= 0.0 || p > MAX_ITEM_PERCENTAGE {
                return Err(InputError::InvalidPercentage(p));
            }
        }
        let reroll_count = match self.reroll_count {
            None => None,
            Some(n) if n <= 0 || n > MAX_FIXED_REROLLS as i64 => {
                return Err(InputError::InvalidRerollCount(n))
            }
            Some(_) if self.current_percentage.is_none() => {
                return Err(InputError::MissingPercentage)
            }
            Some(n) => Some(n as u32),
        };

        Ok(AnalysisRequest {
            craft_price: self.craft_price as u64,
            margin_percentage: self.margin_percentage,
            current_percentage: self.current_percentage,
            reroll_count,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        })
    }
}
