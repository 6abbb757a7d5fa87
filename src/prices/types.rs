use super::error::PriceFileError;
use crate::runes::{is_known_rune, ALL_RUNES};
use serde::Serialize;
use std::collections::BTreeMap;

/// User-supplied rune prices in kamas. Every known rune has an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RunePriceTable {
    prices: BTreeMap<String, u64>,
}

/// What an import did to the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub applied: usize,
    /// Unknown keys or non-numeric values
    pub ignored: Vec<String>,
}

impl Default for RunePriceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RunePriceTable {
    /// All runes at 0.
    pub fn new() -> Self {
        Self {
            prices: ALL_RUNES.iter().map(|r| (r.key.to_string(), 0)).collect(),
        }
    }

    /// Price of a rune; unknown keys cost 0.
    pub fn price(&self, key: &str) -> u64 {
        self.prices.get(key).copied().unwrap_or(0)
    }

    pub fn set(&mut self, key: &str, price: u64) -> Result<(), PriceFileError> {
        if !is_known_rune(key) {
            return Err(PriceFileError::UnknownRune(key.to_string()));
        }
        self.prices.insert(key.to_string(), price);
        Ok(())
    }

    pub fn has_any_price(&self) -> bool {
        self.prices.values().any(|&p| p > 0)
    }

    pub fn reset(&mut self) {
        for price in self.prices.values_mut() {
            *price = 0;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.prices.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Merge a JSON price file into the table.
    ///
    /// Only known rune keys with numeric values are applied. The table is left
    /// untouched when the document does not parse or is not an object.
    pub fn merge_json(&mut self, json: &str) -> Result<ImportSummary, PriceFileError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| PriceFileError::InvalidFormat(e.to_string()))?;
        let object = value.as_object().ok_or_else(|| {
            PriceFileError::InvalidFormat("expected an object of rune prices".to_string())
        })?;

        let mut summary = ImportSummary::default();
        for (key, value) in object {
            match (is_known_rune(key), import_price(value)) {
                (true, Some(price)) => {
                    self.prices.insert(key.clone(), price);
                    summary.applied += 1;
                }
                _ => summary.ignored.push(key.clone()),
            }
        }
        Ok(summary)
    }
}

// Fractions are truncated; negatives and non-numbers are rejected
fn import_price(value: &serde_json::Value) -> Option<u64> {
    if let Some(price) = value.as_u64() {
        return Some(price);
    }
    value
        .as_f64()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .map(|p| p.trunc() as u64)
}
