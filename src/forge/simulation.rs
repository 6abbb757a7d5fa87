//! Reroll (brisage) simulation.
//!
//! Each reroll lowers the item percentage by `DECAY_COEFFICIENT × p²`, yields
//! `profitability × p / 100` kamas of runes and costs one craft. The
//! accumulation order below is the reference one; keep it when editing.

use super::types::*;

/// Inputs of a simulation run.
#[derive(Debug, Clone)]
pub struct SimulationParams<'a> {
    pub initial_percentage: f64,
    pub craft_price: f64,
    /// Stop once the percentage falls under this
    pub limit_percentage: f64,
    /// Profitability of the chosen strategy
    pub profitability: f64,
    pub margin_percentage: f64,
    /// Focused line; `None` when breaking without focus
    pub focus_line: Option<&'a StatLine>,
    pub lines: &'a [StatLine],
    pub max_iterations: u32,
}

/// Item percentage after one reroll.
pub fn decay_percentage(percentage: f64) -> f64 {
    percentage - (DECAY_COEFFICIENT * percentage * percentage)
}

/// Focus-mode rune yield as `percentage × numerator / denominator`.
#[derive(Debug, Clone, Copy)]
struct RuneYield {
    numerator: f64,
    denominator: f64,
}

impl RuneYield {
    fn for_focus(focus: &StatLine, lines: &[StatLine]) -> Self {
        let non_focus_weight: f64 = lines
            .iter()
            .filter(|l| l.rune_key != focus.rune_key)
            .map(|l| l.weight)
            .sum();
        Self {
            numerator: focus.weight + REDISTRIBUTION_SHARE * non_focus_weight,
            denominator: 100.0 * focus.density,
        }
    }

    fn runes_at(&self, percentage: f64) -> f64 {
        (percentage * self.numerator) / self.denominator
    }
}

/// Running state of a simulation.
#[derive(Debug, Clone, Copy)]
struct RerollState {
    current_percentage: f64,
    total_kamas: f64,
    total_runes: f64,
    iterations: u32,
}

/// What one reroll produced.
struct StepOutcome {
    previous_percentage: f64,
    kamas: f64,
    runes: f64,
}

impl RerollState {
    fn new(initial_percentage: f64) -> Self {
        Self {
            current_percentage: initial_percentage,
            total_kamas: 0.0,
            total_runes: 0.0,
            iterations: 0,
        }
    }

    fn step(
        &mut self,
        params: &SimulationParams<'_>,
        runes: Option<RuneYield>,
        history: &mut Vec<SimulationStep>,
    ) -> StepOutcome {
        let previous_percentage = self.current_percentage;
        let next = decay_percentage(previous_percentage);

        let kamas = (params.profitability * next / 100.0) - params.craft_price;
        self.total_kamas += kamas;

        let runes = match runes {
            Some(rune_yield) => {
                let generated = rune_yield.runes_at(next);
                self.total_runes += generated;
                generated
            }
            None => 0.0,
        };

        self.iterations += 1;
        self.current_percentage = next;

        history.push(SimulationStep {
            iteration: self.iterations,
            percentage: next,
            kamas_this_step: kamas,
            total_kamas: self.total_kamas,
            total_runes: self.total_runes,
        });

        StepOutcome {
            previous_percentage,
            kamas,
            runes,
        }
    }

    fn snapshot(&self, craft_price: f64) -> SimulationSnapshot {
        SimulationSnapshot {
            iterations: self.iterations,
            final_percentage: self.current_percentage,
            total_kamas: self.total_kamas,
            total_runes: self.total_runes,
            investment: self.iterations as f64 * craft_price,
        }
    }
}

fn rune_yield(params: &SimulationParams<'_>) -> Option<RuneYield> {
    params
        .focus_line
        .map(|focus| RuneYield::for_focus(focus, params.lines))
}

/// Reroll while the percentage stays at or above the limit, up to
/// `max_iterations` rerolls.
///
/// The margin snapshot is the state just before the first reroll that drops
/// under `limit × (1 + margin / 100)`; when that never happens it equals the
/// final state.
pub fn simulate_rerolls(params: &SimulationParams<'_>) -> SimulationResult {
    let threshold_with_margin = params.limit_percentage * (1.0 + params.margin_percentage / 100.0);
    let threshold_without_margin = params.limit_percentage;
    let runes = rune_yield(params);

    let mut state = RerollState::new(params.initial_percentage);
    let mut history = Vec::new();
    let mut with_margin: Option<SimulationSnapshot> = None;

    while state.current_percentage >= threshold_without_margin
        && state.iterations < params.max_iterations
    {
        let outcome = state.step(params, runes, &mut history);

        if with_margin.is_none() && state.current_percentage < threshold_with_margin {
            let iterations = state.iterations - 1;
            with_margin = Some(SimulationSnapshot {
                iterations,
                final_percentage: outcome.previous_percentage,
                total_kamas: state.total_kamas - outcome.kamas,
                total_runes: state.total_runes - outcome.runes,
                investment: iterations as f64 * params.craft_price,
            });
        }
    }

    let hit_iteration_cap = state.iterations >= params.max_iterations
        && state.current_percentage >= threshold_without_margin;
    log::debug!(
        "simulation stopped after {} rerolls at {:.2}%{}",
        state.iterations,
        state.current_percentage,
        if hit_iteration_cap { " (iteration cap)" } else { "" }
    );

    let without_margin = state.snapshot(params.craft_price);
    SimulationResult {
        with_margin: with_margin.unwrap_or(without_margin),
        without_margin,
        history,
        is_profitable: state.total_kamas > 0.0,
        margin_percentage: params.margin_percentage,
        hit_iteration_cap,
    }
}

/// Reroll exactly `count` times, ignoring the limit.
pub fn simulate_fixed_rerolls(params: &SimulationParams<'_>, count: u32) -> FixedSimulationResult {
    let runes = rune_yield(params);
    let mut state = RerollState::new(params.initial_percentage);
    let mut history = Vec::new();

    for _ in 0..count {
        state.step(params, runes, &mut history);
    }

    FixedSimulationResult {
        snapshot: state.snapshot(params.craft_price),
        history,
        is_profitable: state.total_kamas > 0.0,
    }
}
