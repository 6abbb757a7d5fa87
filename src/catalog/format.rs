//! Effect normalization for catalog items.

use super::types::{CatalogItem, DiceInterpretation, Item, ItemEffect, RawEffect};

/// Normalize one raw effect, or `None` if it carries no usable value.
pub fn format_effect(raw: &RawEffect, dice: DiceInterpretation) -> Option<ItemEffect> {
    if raw.dice_num.is_none() && raw.from.is_none() && raw.to.is_none() {
        return None;
    }

    let (min, max) = match raw.dice_num {
        Some(num) => {
            let side = raw.dice_side.unwrap_or(0.0);
            let max = if side > 0.0 {
                match dice {
                    DiceInterpretation::Additive => num + side,
                    DiceInterpretation::Range => side,
                }
            } else {
                num
            };
            (num, max)
        }
        None => {
            let from = nonzero(raw.from).unwrap_or(0.0);
            let to = nonzero(raw.to).or(nonzero(raw.from)).unwrap_or(0.0);
            (from, to)
        }
    };

    if max <= 0.0 {
        return None;
    }

    Some(ItemEffect {
        effect_id: raw.effect_id,
        min,
        max,
        characteristic: raw.characteristic,
        description: raw
            .description
            .as_ref()
            .map(|d| d.text().to_string())
            .unwrap_or_default(),
    })
}

/// Normalize a list of raw effects, dropping the ones without positive values.
pub fn format_item_effects(raw: &[RawEffect], dice: DiceInterpretation) -> Vec<ItemEffect> {
    raw.iter().filter_map(|e| format_effect(e, dice)).collect()
}

// A zero bound counts as missing
fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

impl Item {
    pub fn from_catalog(raw: &CatalogItem, dice: DiceInterpretation) -> Self {
        Self {
            id: raw.id,
            name: raw.name.text().to_string(),
            level: raw.level,
            icon_id: raw.icon_id,
            type_id: raw.type_id,
            type_name: raw.type_name().to_string(),
            effects: format_item_effects(raw.raw_effects(), dice),
        }
    }
}
