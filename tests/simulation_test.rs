//! Reroll simulation tests: decay, stop conditions and margin snapshot.

use forgemagie::forge::{
    decay_percentage, simulate_fixed_rerolls, simulate_rerolls, SimulationParams, StatLine,
};

fn line(rune_key: &'static str, weight: f64, density: f64, profitability: f64) -> StatLine {
    StatLine {
        effect_id: 118,
        rune_key,
        rune_name: rune_key,
        stat_value: 50.0,
        min_value: 50.0,
        max_value: 50.0,
        weight,
        density,
        effect: 1.0,
        description: String::new(),
        ratio: 1000.0,
        profitability,
    }
}

fn params<'a>(focus: Option<&'a StatLine>, lines: &'a [StatLine]) -> SimulationParams<'a> {
    SimulationParams {
        initial_percentage: 100.0,
        craft_price: 10_000.0,
        limit_percentage: 20.0,
        profitability: 151_000.0,
        margin_percentage: 10.0,
        focus_line: focus,
        lines,
        max_iterations: 1000,
    }
}

// =========================================================================
// Decay
// =========================================================================

#[test]
fn test_decay_from_100() {
    assert!((decay_percentage(100.0) - 99.048).abs() < 1e-9);
}

#[test]
fn test_decay_stays_in_range_from_0_to_100() {
    for step in 0..=200 {
        let p = step as f64 * 0.5;
        let next = decay_percentage(p);
        assert!(next <= p, "{p} -> {next}");
        assert!(next >= 0.0, "{p} -> {next}");
    }
    assert_eq!(decay_percentage(0.0), 0.0);

    let lines = [line("fo", 151.0, 1.0, 151_000.0)];
    let result = simulate_rerolls(&params(None, &lines));
    assert!(result.without_margin.iterations < 1000);
    assert!(!result.hit_iteration_cap);
}

#[test]
fn test_decay_is_monotonic() {
    let mut p = 300.0;
    for _ in 0..500 {
        let next = decay_percentage(p);
        assert!(next < p);
        assert!(next > 0.0);
        p = next;
    }
}

// =========================================================================
// Stop conditions
// =========================================================================

#[test]
fn test_threshold_reached_before_cap() {
    let lines = [line("fo", 151.0, 1.0, 151_000.0)];
    let result = simulate_rerolls(&params(None, &lines));

    assert!(!result.hit_iteration_cap);
    assert!(result.without_margin.iterations < 1000);
    assert!(result.without_margin.final_percentage < 20.0);
    // Every step before the last was still above the limit
    let history = &result.history;
    assert!(history[..history.len() - 1]
        .iter()
        .all(|s| s.percentage >= 20.0));
}

#[test]
fn test_iteration_cap_never_exceeded() {
    let lines = [line("fo", 151.0, 1.0, 151_000.0)];
    let mut p = params(None, &lines);
    p.limit_percentage = 0.001;
    p.max_iterations = 25;

    let result = simulate_rerolls(&p);
    assert_eq!(result.without_margin.iterations, 25);
    assert_eq!(result.history.len(), 25);
    assert!(result.hit_iteration_cap);
}

#[test]
fn test_start_below_limit_does_nothing() {
    let lines = [line("fo", 151.0, 1.0, 151_000.0)];
    let mut p = params(None, &lines);
    p.initial_percentage = 10.0;

    let result = simulate_rerolls(&p);
    assert_eq!(result.without_margin.iterations, 0);
    assert_eq!(result.without_margin.total_kamas, 0.0);
    assert_eq!(result.with_margin, result.without_margin);
    assert!(!result.is_profitable);
}

// =========================================================================
// Accounting
// =========================================================================

#[test]
fn test_first_step_kamas() {
    let lines = [line("fo", 151.0, 1.0, 151_000.0)];
    let result = simulate_fixed_rerolls(&params(None, &lines), 1);

    let expected = 151_000.0 * decay_percentage(100.0) / 100.0 - 10_000.0;
    assert!((result.snapshot.total_kamas - expected).abs() < 1e-6);
    assert!((result.snapshot.investment - 10_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_zero_rerolls() {
    let lines = [line("fo", 151.0, 1.0, 151_000.0)];
    let result = simulate_fixed_rerolls(&params(None, &lines), 0);

    assert_eq!(result.snapshot.iterations, 0);
    assert_eq!(result.snapshot.total_kamas, 0.0);
    assert_eq!(result.snapshot.investment, 0.0);
    assert!((result.snapshot.final_percentage - 100.0).abs() < f64::EPSILON);
    assert!(result.history.is_empty());
}

#[test]
fn test_fixed_rerolls_ignore_limit() {
    let lines = [line("fo", 151.0, 1.0, 151_000.0)];
    let mut p = params(None, &lines);
    p.limit_percentage = 99.5;

    let result = simulate_fixed_rerolls(&p, 40);
    assert_eq!(result.snapshot.iterations, 40);
    assert!(result.snapshot.final_percentage < 99.5);
}

#[test]
fn test_runes_only_counted_with_focus() {
    let lines = [
        line("fo", 151.0, 1.0, 301_500.0),
        line("vi", 301.0, 1.0, 37_650.0),
    ];

    let unfocused = simulate_fixed_rerolls(&params(None, &lines), 3);
    assert_eq!(unfocused.snapshot.total_runes, 0.0);

    let focused = simulate_fixed_rerolls(&params(Some(&lines[0]), &lines), 1);
    let next = decay_percentage(100.0);
    let expected = next * (151.0 + 0.5 * 301.0) / (100.0 * 1.0);
    assert!((focused.snapshot.total_runes - expected).abs() < 1e-9);
}

// =========================================================================
// Margin snapshot
// =========================================================================

#[test]
fn test_margin_snapshot_precedes_threshold_crossing() {
    let lines = [line("fo", 151.0, 1.0, 151_000.0)];
    let result = simulate_rerolls(&params(None, &lines));
    let margin = &result.with_margin;

    assert!(margin.iterations < result.without_margin.iterations);
    assert!(margin.final_percentage >= 22.0);
    assert!(result.history[margin.iterations as usize].percentage < 22.0);

    let before = &result.history[margin.iterations as usize - 1];
    assert!((margin.total_kamas - before.total_kamas).abs() < 1e-6);
    assert!((margin.final_percentage - before.percentage).abs() < f64::EPSILON);
    assert!((margin.investment - margin.iterations as f64 * 10_000.0).abs() < f64::EPSILON);
}

#[test]
fn test_zero_margin_matches_limit() {
    let lines = [line("fo", 151.0, 1.0, 151_000.0)];
    let mut p = params(None, &lines);
    p.margin_percentage = 0.0;

    let result = simulate_rerolls(&p);
    assert_eq!(
        result.with_margin.iterations,
        result.without_margin.iterations - 1
    );
}
