//! Rune price table tests: editing, import/export and stored prices.

use forgemagie::prices::{
    export_prices, import_prices, load_prices_from, save_prices_to, PriceFileError,
    RunePriceTable,
};
use forgemagie::runes::ALL_RUNES;
use std::fs;
use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "forgemagie_price_test_{}_{}.json",
        name,
        std::process::id()
    ))
}

// =========================================================================
// Table basics
// =========================================================================

#[test]
fn test_new_table_has_every_rune_at_zero() {
    let table = RunePriceTable::new();
    assert_eq!(table.len(), ALL_RUNES.len());
    assert!(table.iter().all(|(_, price)| price == 0));
    assert!(!table.has_any_price());
}

#[test]
fn test_set_known_and_unknown() {
    let mut table = RunePriceTable::new();
    table.set("vi", 42).unwrap();
    assert_eq!(table.price("vi"), 42);
    assert!(table.has_any_price());

    assert_eq!(
        table.set("mana", 10),
        Err(PriceFileError::UnknownRune("mana".to_string()))
    );
}

#[test]
fn test_reset() {
    let mut table = RunePriceTable::new();
    table.set("fo", 1500).unwrap();
    table.set("chasse", 90_000).unwrap();
    table.reset();
    assert_eq!(table, RunePriceTable::new());
}

// =========================================================================
// Import / export
// =========================================================================

#[test]
fn test_export_then_import_restores_prices() {
    let path = scratch("roundtrip");
    let mut original = RunePriceTable::new();
    original.set("fo", 1500).unwrap();
    original.set("ret_pa", 250_000).unwrap();
    export_prices(&original, &path).unwrap();

    let mut restored = RunePriceTable::new();
    let summary = import_prices(&mut restored, &path).unwrap();
    assert_eq!(restored, original);
    assert_eq!(summary.applied, ALL_RUNES.len());
    assert!(summary.ignored.is_empty());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_import_ignores_unknown_keys_and_keeps_others() {
    let mut table = RunePriceTable::new();
    table.set("sa", 800).unwrap();

    let summary = table
        .merge_json(r#"{"fo": 1200, "pa_magique": 5, "vi": "cheap"}"#)
        .unwrap();

    assert_eq!(summary.applied, 1);
    assert_eq!(summary.ignored.len(), 2);
    assert_eq!(table.price("fo"), 1200);
    assert_eq!(table.price("sa"), 800);
    assert_eq!(table.price("vi"), 0);
}

#[test]
fn test_invalid_import_leaves_table_unchanged() {
    let path = scratch("invalid");
    fs::write(&path, "{ not json").unwrap();

    let mut table = RunePriceTable::new();
    table.set("fo", 1000).unwrap();
    let before = table.clone();

    let err = import_prices(&mut table, &path).unwrap_err();
    assert!(matches!(err, PriceFileError::InvalidFormat(_)));
    assert_eq!(table, before);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_non_object_import_rejected() {
    let mut table = RunePriceTable::new();
    assert!(matches!(
        table.merge_json("[1, 2, 3]"),
        Err(PriceFileError::InvalidFormat(_))
    ));
}

#[test]
fn test_import_missing_file_is_io_error() {
    let mut table = RunePriceTable::new();
    let err = import_prices(&mut table, &scratch("missing")).unwrap_err();
    assert!(matches!(err, PriceFileError::Io(_)));
}

#[test]
fn test_fractional_prices_truncated_negative_ignored() {
    let mut table = RunePriceTable::new();
    let summary = table.merge_json(r#"{"fo": 99.9, "vi": -5}"#).unwrap();
    assert_eq!(table.price("fo"), 99);
    assert_eq!(table.price("vi"), 0);
    assert_eq!(summary.ignored, vec!["vi".to_string()]);
}

// =========================================================================
// Stored prices
// =========================================================================

#[test]
fn test_saved_prices_reload() {
    let path = scratch("stored");
    let mut table = RunePriceTable::new();
    table.set("pui", 3000).unwrap();
    save_prices_to(&path, &table).unwrap();

    assert_eq!(load_prices_from(&path), table);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_stored_file_with_old_runes_still_loads() {
    let path = scratch("old_runes");
    fs::write(&path, r#"{"fo": 700, "retired_rune": 12}"#).unwrap();

    let table = load_prices_from(&path);
    assert_eq!(table.price("fo"), 700);
    assert_eq!(table.len(), ALL_RUNES.len());

    let _ = fs::remove_file(&path);
}
