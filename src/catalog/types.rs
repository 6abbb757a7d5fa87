use serde::{Deserialize, Serialize};

/// Localized string as served by the catalog. Only French is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub fr: Option<String>,
}

impl LocalizedText {
    pub fn new(fr: impl Into<String>) -> Self {
        Self {
            fr: Some(fr.into()),
        }
    }

    pub fn text(&self) -> &str {
        self.fr.as_deref().unwrap_or("")
    }
}

/// A stat effect exactly as the catalog returns it.
///
/// Dice effects carry `diceNum`/`diceSide`; older records use `from`/`to`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEffect {
    #[serde(default)]
    pub effect_id: u32,
    #[serde(default)]
    pub dice_num: Option<f64>,
    #[serde(default)]
    pub dice_side: Option<f64>,
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
    #[serde(default)]
    pub characteristic: Option<i32>,
    #[serde(default)]
    pub description: Option<LocalizedText>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemTypeInfo {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: LocalizedText,
}

/// An item record from `/items` or `/items/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: u32,
    #[serde(default)]
    pub name: LocalizedText,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub icon_id: Option<u32>,
    #[serde(default)]
    pub type_id: Option<u32>,
    #[serde(rename = "type", default)]
    pub item_type: Option<ItemTypeInfo>,
    #[serde(default)]
    pub possible_effects: Option<Vec<RawEffect>>,
    #[serde(default)]
    pub effects: Option<Vec<RawEffect>>,
}

impl CatalogItem {
    /// Effects to analyze: `possibleEffects`, falling back to `effects`.
    pub fn raw_effects(&self) -> &[RawEffect] {
        self.possible_effects
            .as_deref()
            .or(self.effects.as_deref())
            .unwrap_or(&[])
    }

    pub fn type_name(&self) -> &str {
        self.item_type
            .as_ref()
            .map(|t| t.name.text())
            .unwrap_or("")
    }
}

/// Entry of the `/item-types` listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    pub id: u32,
    #[serde(default)]
    pub name: LocalizedText,
}

/// Paginated list envelope used by the catalog's collection endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// How `diceSide` turns into a maximum value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiceInterpretation {
    /// `max = diceNum + diceSide`
    #[default]
    Additive,
    /// `max = diceSide`
    Range,
}

/// A normalized stat effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemEffect {
    pub effect_id: u32,
    pub min: f64,
    pub max: f64,
    pub characteristic: Option<i32>,
    pub description: String,
}

/// An item ready for analysis: identity, level and normalized effects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub level: u32,
    pub icon_id: Option<u32>,
    pub type_id: Option<u32>,
    pub type_name: String,
    pub effects: Vec<ItemEffect>,
}
