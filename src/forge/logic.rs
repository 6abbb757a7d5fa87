//! Weight, profitability and breakeven calculations.

use super::error::AnalysisError;
use super::simulation::{simulate_fixed_rerolls, simulate_rerolls, SimulationParams};
use super::types::*;
use crate::catalog::{Item, ItemEffect};
use crate::prices::RunePriceTable;
use crate::runes::{find_rune_for_effect, Rune};

/// Price per unit of density. Zero-density runes have ratio 0.
pub fn calculate_ratio(rune: &Rune, price: u64) -> f64 {
    density_ratio(price, rune.density)
}

fn density_ratio(price: u64, density: f64) -> f64 {
    if density == 0.0 {
        return 0.0;
    }
    price as f64 / density
}

/// Forgemagie weight of a stat line:
/// `(value × density × level × 3) / (200 × effect) + 1`.
pub fn calculate_stat_weight(stat_value: f64, rune: &Rune, item_level: u32) -> f64 {
    (stat_value * rune.density * item_level as f64 * 3.0) / (200.0 * rune.effect) + 1.0
}

/// `(min, max, average)` of an effect; max falls back to min.
pub fn effect_roll(effect: &ItemEffect) -> (f64, f64, f64) {
    let min = effect.min;
    let max = if effect.max != 0.0 { effect.max } else { min };
    (min, max, (min + max) / 2.0)
}

/// Build the weighted stat lines of an item, unpriced.
///
/// Effects with no matching rune or a non-positive average are skipped.
pub fn analyze_item_stats(effects: &[ItemEffect], item_level: u32) -> Vec<StatLine> {
    effects
        .iter()
        .filter_map(|effect| {
            let rune = find_rune_for_effect(effect.effect_id, effect.characteristic)?;
            let (min_value, max_value, stat_value) = effect_roll(effect);
            if stat_value <= 0.0 {
                return None;
            }

            Some(StatLine {
                effect_id: effect.effect_id,
                rune_key: rune.key,
                rune_name: rune.name,
                stat_value,
                min_value,
                max_value,
                weight: calculate_stat_weight(stat_value, rune, item_level),
                density: rune.density,
                effect: rune.effect,
                description: effect.description.clone(),
                ratio: 0.0,
                profitability: 0.0,
            })
        })
        .collect()
}

/// Price each line: `ratio × (weight + 0.5 × (total_weight − weight))`.
pub fn calculate_profitability(lines: Vec<StatLine>, prices: &RunePriceTable) -> Vec<StatLine> {
    let total_weight: f64 = lines.iter().map(|l| l.weight).sum();

    lines
        .into_iter()
        .map(|mut line| {
            line.ratio = density_ratio(prices.price(line.rune_key), line.density);
            line.profitability =
                line.ratio * (line.weight + REDISTRIBUTION_SHARE * (total_weight - line.weight));
            line
        })
        .collect()
}

/// Most profitable line; ties go to the earliest.
pub fn determine_focus_line(lines: &[StatLine]) -> Option<&StatLine> {
    let (first, rest) = lines.split_first()?;
    Some(rest.iter().fold(first, |best, line| {
        if line.profitability > best.profitability {
            line
        } else {
            best
        }
    }))
}

/// Profitability when breaking without focus: `Σ weight × ratio`.
pub fn unfocused_profitability(lines: &[StatLine]) -> f64 {
    lines.iter().map(|l| l.weight * l.ratio).sum()
}

fn breakeven(craft_price: u64, profitability: f64) -> f64 {
    if profitability == 0.0 {
        return f64::INFINITY;
    }
    (craft_price as f64 * 100.0) / profitability
}

pub fn limit_percentage_with_focus(craft_price: u64, focus_profitability: f64) -> f64 {
    breakeven(craft_price, focus_profitability)
}

pub fn limit_percentage_without_focus(craft_price: u64, lines: &[StatLine]) -> f64 {
    breakeven(craft_price, unfocused_profitability(lines))
}

/// Breakeven percentages for both strategies and the better one.
pub fn calculate_limit_percentages(
    craft_price: u64,
    lines: &[StatLine],
    focus_line: Option<&StatLine>,
) -> LimitPercentages {
    let with_focus = focus_line
        .map(|f| limit_percentage_with_focus(craft_price, f.profitability))
        .unwrap_or(f64::INFINITY);
    let without_focus = limit_percentage_without_focus(craft_price, lines);
    let use_focus = with_focus <= without_focus;

    LimitPercentages {
        with_focus,
        without_focus,
        best_percentage: with_focus.min(without_focus),
        use_focus,
        recommendation: if use_focus {
            Strategy::WithFocus
        } else {
            Strategy::WithoutFocus
        },
    }
}

impl AnalysisResult {
    /// Line to focus on when the recommended strategy uses one.
    pub fn strategy_focus(&self) -> Option<&StatLine> {
        if self.limits.use_focus {
            self.focus_line.as_ref()
        } else {
            None
        }
    }

    /// Profitability of the recommended strategy.
    pub fn strategy_profitability(&self) -> f64 {
        match self.strategy_focus() {
            Some(focus) => focus.profitability,
            None => unfocused_profitability(&self.lines),
        }
    }

    /// Simulation parameters for the recommended strategy.
    pub fn simulation_params(
        &self,
        initial_percentage: f64,
        margin_percentage: f64,
        max_iterations: u32,
    ) -> SimulationParams<'_> {
        SimulationParams {
            initial_percentage,
            craft_price: self.craft_price as f64,
            limit_percentage: self.limits.best_percentage,
            profitability: self.strategy_profitability(),
            margin_percentage,
            focus_line: self.strategy_focus(),
            lines: &self.lines,
            max_iterations,
        }
    }

    /// Lines ordered by descending profitability (stable).
    pub fn lines_by_profitability(&self) -> Vec<&StatLine> {
        let mut lines: Vec<&StatLine> = self.lines.iter().collect();
        lines.sort_by(|a, b| b.profitability.total_cmp(&a.profitability));
        lines
    }

    pub fn is_focus(&self, line: &StatLine) -> bool {
        self.focus_line
            .as_ref()
            .is_some_and(|f| f.rune_key == line.rune_key)
    }
}

/// Full analysis: lines, focus, breakeven limits and optional simulations.
pub fn analyze_item(
    item: &Item,
    request: &AnalysisRequest,
    prices: &RunePriceTable,
) -> Result<AnalysisResult, AnalysisError> {
    let lines = analyze_item_stats(&item.effects, item.level);
    if lines.is_empty() {
        return Err(AnalysisError::NothingToAnalyze);
    }

    let lines = calculate_profitability(lines, prices);
    let focus_line = determine_focus_line(&lines).cloned();
    let limits = calculate_limit_percentages(request.craft_price, &lines, focus_line.as_ref());

    log::debug!(
        "{}: {} lines, focus {:?}, limit {:.2}% ({})",
        item.name,
        lines.len(),
        focus_line.as_ref().map(|f| f.rune_key),
        limits.best_percentage,
        limits.recommendation
    );

    let mut result = AnalysisResult {
        lines,
        focus_line,
        limits,
        simulation: None,
        fixed_simulation: None,
        craft_price: request.craft_price,
    };

    if let Some(initial) = request.current_percentage {
        let params =
            result.simulation_params(initial, request.margin_percentage, request.max_iterations);
        let simulation = simulate_rerolls(&params);
        let fixed = request
            .reroll_count
            .map(|count| simulate_fixed_rerolls(&params, count));
        result.simulation = Some(simulation);
        result.fixed_simulation = fixed;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runes::rune;

    fn effect(effect_id: u32, min: f64, max: f64) -> ItemEffect {
        ItemEffect {
            effect_id,
            min,
            max,
            characteristic: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_weight_floor_is_one() {
        for key in ["fo", "ga_pa", "ini", "pod"] {
            let r = rune(key).unwrap();
            assert_eq!(calculate_stat_weight(0.0, r, 200), 1.0);
        }
    }

    #[test]
    fn test_weight_force_example() {
        let fo = rune("fo").unwrap();
        assert!((calculate_stat_weight(50.0, fo, 200) - 151.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio() {
        let do_rune = rune("do").unwrap();
        assert!((calculate_ratio(do_rune, 2000) - 100.0).abs() < 1e-9);
        assert_eq!(calculate_ratio(do_rune, 0), 0.0);
    }

    #[test]
    fn test_effect_roll_max_falls_back_to_min() {
        assert_eq!(effect_roll(&effect(118, 10.0, 0.0)), (10.0, 10.0, 10.0));
        assert_eq!(effect_roll(&effect(118, 10.0, 20.0)), (10.0, 20.0, 15.0));
    }

    #[test]
    fn test_unmatched_and_non_positive_skipped() {
        let effects = vec![
            effect(118, 10.0, 20.0),
            effect(99_999, 5.0, 5.0),
            effect(125, -10.0, 0.0),
        ];
        let lines = analyze_item_stats(&effects, 100);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].rune_key, "fo");
    }

    #[test]
    fn test_focus_ties_go_first() {
        let effects = vec![effect(118, 50.0, 50.0), effect(126, 50.0, 50.0)];
        let mut prices = RunePriceTable::new();
        prices.set("fo", 100).unwrap();
        prices.set("ine", 100).unwrap();
        let lines = calculate_profitability(analyze_item_stats(&effects, 200), &prices);
        assert_eq!(lines[0].profitability, lines[1].profitability);
        assert_eq!(determine_focus_line(&lines).unwrap().rune_key, "fo");
    }

    #[test]
    fn test_focus_empty() {
        assert!(determine_focus_line(&[]).is_none());
    }

    #[test]
    fn test_zero_prices_give_infinite_limits() {
        let lines = calculate_profitability(
            analyze_item_stats(&[effect(118, 50.0, 50.0)], 200),
            &RunePriceTable::new(),
        );
        let limits = calculate_limit_percentages(1000, &lines, determine_focus_line(&lines));
        assert!(limits.with_focus.is_infinite());
        assert!(limits.without_focus.is_infinite());
        assert!(limits.use_focus);
        assert_eq!(limits.recommendation, Strategy::WithFocus);
    }
}
