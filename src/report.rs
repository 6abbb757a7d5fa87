//! Plain-text rendering of items, analyses and simulations.

use crate::catalog::Item;
use crate::forge::{effect_roll, AnalysisResult, FixedSimulationResult, SimulationSnapshot};
use crate::prices::RunePriceTable;
use crate::runes::{find_rune_for_effect, rune, sorted_rune_keys};

const RULE: &str = "═══════════════════════════════════════════════════════════════\n";

/// "1.25 M", "12.5 K" or "850". Negative amounts keep their sign.
pub fn format_kamas(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{}{:.2} M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}{:.1} K", sign, abs / 1_000.0)
    } else {
        format!("{}{:.0}", sign, abs)
    }
}

/// Breakeven percentage with two decimals, `∞` when nothing pays.
pub fn format_percent(value: f64) -> String {
    if value.is_infinite() {
        "∞%".to_string()
    } else {
        format!("{:.2}%", value)
    }
}

fn section(title: &str) -> String {
    let dashes = 62usize.saturating_sub(title.chars().count() + 4);
    format!("── {} {}\n", title, "─".repeat(dashes))
}

fn header(title: &str) -> String {
    format!("{RULE}  {title}\n{RULE}\n")
}

/// Item identity and its stat effects with the rune each maps to.
pub fn item_text(item: &Item) -> String {
    let mut out = header(&format!("{} (#{})", item.name, item.id));
    out.push_str(&format!("  Level {}", item.level));
    if !item.type_name.is_empty() {
        out.push_str(&format!("  ·  {}", item.type_name));
    }
    out.push_str("\n\n");

    out.push_str(&section("EFFECTS"));
    if item.effects.is_empty() {
        out.push_str("  (none)\n");
    }
    for effect in &item.effects {
        let (min, max, _) = effect_roll(effect);
        let text = if !effect.description.is_empty() {
            effect.description.clone()
        } else if min == max {
            format!("{} (effect {})", min, effect.effect_id)
        } else {
            format!("{} to {} (effect {})", min, max, effect.effect_id)
        };
        let rune_name = find_rune_for_effect(effect.effect_id, effect.characteristic)
            .map(|r| r.short_name)
            .unwrap_or("-");
        out.push_str(&format!("  {:<40} {}\n", text, rune_name));
    }
    out
}

fn snapshot_text(out: &mut String, snapshot: &SimulationSnapshot, show_runes: bool) {
    out.push_str(&format!("  Rerolls:        {}\n", snapshot.iterations));
    out.push_str(&format!(
        "  Total gain:     {}\n",
        format_kamas(snapshot.total_kamas)
    ));
    out.push_str(&format!(
        "  Investment:     {}\n",
        format_kamas(snapshot.investment)
    ));
    out.push_str(&format!(
        "  Final %:        {:.2}%\n",
        snapshot.final_percentage
    ));
    if show_runes {
        out.push_str(&format!("  Runes made:     {:.1}\n", snapshot.total_runes));
    }
}

/// Focus, breakeven limits, simulations and the line table.
pub fn analysis_text(item: &Item, analysis: &AnalysisResult) -> String {
    let mut out = header(&format!("BREAKAGE ANALYSIS · {}", item.name));
    let limits = &analysis.limits;

    out.push_str(&section("FOCUS"));
    match &analysis.focus_line {
        Some(focus) => {
            out.push_str(&format!("  {} +{}\n", focus.rune_name, focus.stat_value));
            out.push_str(&format!("  Weight:         {:.2}\n", focus.weight));
            out.push_str(&format!("  Profitability:  {:.4}\n\n", focus.profitability));
        }
        None => out.push_str("  No focus line identified\n\n"),
    }

    out.push_str(&section("BREAKEVEN"));
    out.push_str(&format!(
        "  With focus:     {}{}\n",
        format_percent(limits.with_focus),
        if limits.use_focus { "  ◀" } else { "" }
    ));
    out.push_str(&format!(
        "  Without focus:  {}{}\n",
        format_percent(limits.without_focus),
        if limits.use_focus { "" } else { "  ◀" }
    ));
    out.push_str(&format!("  Strategy:       {}\n", limits.recommendation));
    out.push_str(&format!(
        "  Above {} breaking pays for a {} craft.\n\n",
        format_percent(limits.best_percentage),
        format_kamas(analysis.craft_price as f64)
    ));

    if let Some(sim) = &analysis.simulation {
        out.push_str(&section("SIMULATION"));
        out.push_str(if sim.with_margin.is_profitable() {
            "  Profitable!\n\n"
        } else {
            "  Not profitable\n\n"
        });
        out.push_str(&format!(
            "  With safety margin ({}%)\n",
            sim.margin_percentage
        ));
        snapshot_text(&mut out, &sim.with_margin, limits.use_focus);
        out.push_str("\n  Without margin (maximum extraction)\n");
        snapshot_text(&mut out, &sim.without_margin, false);
        if sim.hit_iteration_cap {
            out.push_str("  (stopped on the iteration cap)\n");
        }
        out.push('\n');
    }

    if let Some(fixed) = &analysis.fixed_simulation {
        out.push_str(&fixed_simulation_text(fixed, limits.use_focus));
        out.push('\n');
    }

    out.push_str(&section("LINES"));
    out.push_str(&format!(
        "  {:<28} {:>8} {:<12} {:>9} {:>12} {:>14}\n",
        "Stat", "Value", "Rune", "Weight", "Ratio", "Profitability"
    ));
    for line in analysis.lines_by_profitability() {
        let marker = if analysis.is_focus(line) { "*" } else { " " };
        let label = if line.description.is_empty() {
            line.rune_name
        } else {
            line.description.as_str()
        };
        out.push_str(&format!(
            "{} {:<28} {:>8} {:<12} {:>9.2} {:>12.6} {:>14.4}\n",
            marker,
            truncate(label, 28),
            format!("+{}", line.stat_value),
            truncate(line.rune_name, 12),
            line.weight,
            line.ratio,
            line.profitability
        ));
    }
    out
}

pub fn fixed_simulation_text(result: &FixedSimulationResult, show_runes: bool) -> String {
    let mut out = section(&format!("{} REROLL(S)", result.snapshot.iterations));
    snapshot_text(&mut out, &result.snapshot, show_runes);
    out
}

/// Every rune in presentation order with its price.
pub fn price_list_text(prices: &RunePriceTable) -> String {
    let mut out = header("RUNE PRICES");
    for key in sorted_rune_keys() {
        let Some(r) = rune(key) else { continue };
        if r.is_chasse() {
            out.push('\n');
            out.push_str(&section("SPECIAL RUNE"));
        }
        out.push_str(&format!(
            "  {:<12} {:<24} {:>12} K\n",
            r.key,
            r.name,
            prices.price(key)
        ));
    }
    out
}

/// The rune table in presentation order.
pub fn rune_table_text() -> String {
    let mut out = header("RUNES");
    out.push_str(&format!(
        "  {:<12} {:<24} {:>8} {:>7}  {}\n",
        "Key", "Name", "Density", "Effect", "Effect ids"
    ));
    for key in sorted_rune_keys() {
        let Some(r) = rune(key) else { continue };
        let ids: Vec<String> = r.effect_ids.iter().map(|id| id.to_string()).collect();
        out.push_str(&format!(
            "  {:<12} {:<24} {:>8} {:>7}  {}\n",
            r.key,
            r.name,
            r.density,
            r.effect,
            ids.join(",")
        ));
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
