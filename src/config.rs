//! Application configuration, persisted to ~/.forgemagie/config.json.

use crate::catalog::DiceInterpretation;
use crate::utils::persistence::{load_json_or_default, save_json};
use std::io;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_API_BASE_URL: &str = "https://api.dofusdb.fr";
pub const DEFAULT_REFERER: &str = "Roue de Gamma";
pub const DEFAULT_SEARCH_LIMIT: usize = 15;
pub const DEFAULT_MARGIN_PERCENTAGE: f64 = 10.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Settings shared by the catalog client and the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Item catalog base URL (no trailing slash)
    pub api_base_url: String,

    /// Value sent in the `Referer` header; the catalog rejects anonymous calls
    pub referer: String,

    /// Maximum number of equipment returned by a search
    pub search_limit: usize,

    /// Safety margin (percent above the breakeven limit) used by simulations
    pub default_margin: f64,

    /// Iteration cap for threshold-driven simulations
    pub max_iterations: u32,

    /// How dice effects are turned into min/max values
    pub dice: DiceInterpretation,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            default_margin: DEFAULT_MARGIN_PERCENTAGE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            dice: DiceInterpretation::default(),
        }
    }
}

impl AppConfig {
    /// Load from the data directory, falling back to defaults.
    pub fn load() -> Self {
        load_json_or_default(CONFIG_FILE)
    }

    /// Write to the data directory so the file can be edited by hand.
    pub fn save(&self) -> io::Result<()> {
        save_json(CONFIG_FILE, self)
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}
