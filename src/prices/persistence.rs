//! Rune price storage: ~/.forgemagie/rune_prices.json plus import/export files.

use super::error::PriceFileError;
use super::types::{ImportSummary, RunePriceTable};
use crate::utils::persistence::{data_path, save_json_to};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const PRICES_FILE: &str = "rune_prices.json";

/// File name suggested for exports.
pub const DEFAULT_EXPORT_FILE: &str = "prix-runes.json";

pub fn prices_path() -> io::Result<PathBuf> {
    data_path(PRICES_FILE)
}

/// Load prices from `path`. Missing or unreadable files give an all-zero table.
pub fn load_prices_from(path: &Path) -> RunePriceTable {
    let mut table = RunePriceTable::new();
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return table,
    };
    match table.merge_json(&json) {
        Ok(summary) => {
            log::debug!(
                "loaded {} rune prices from {}",
                summary.applied,
                path.display()
            );
            table
        }
        Err(e) => {
            log::warn!("ignoring stored prices at {}: {}", path.display(), e);
            RunePriceTable::new()
        }
    }
}

/// Load the stored price table.
pub fn load_prices() -> RunePriceTable {
    match prices_path() {
        Ok(path) => load_prices_from(&path),
        Err(_) => RunePriceTable::new(),
    }
}

pub fn save_prices_to(path: &Path, table: &RunePriceTable) -> Result<(), PriceFileError> {
    save_json_to(path, table)?;
    Ok(())
}

/// Persist the price table in the data directory.
pub fn save_prices(table: &RunePriceTable) -> Result<(), PriceFileError> {
    save_prices_to(&prices_path()?, table)
}

/// Write the table to a standalone JSON file.
pub fn export_prices(table: &RunePriceTable, path: &Path) -> Result<(), PriceFileError> {
    save_prices_to(path, table)?;
    log::info!("exported {} rune prices to {}", table.len(), path.display());
    Ok(())
}

/// Merge a JSON price file into `table`. On error the table is unchanged.
pub fn import_prices(
    table: &mut RunePriceTable,
    path: &Path,
) -> Result<ImportSummary, PriceFileError> {
    let json = fs::read_to_string(path)?;
    let summary = table.merge_json(&json)?;
    log::info!(
        "imported {} rune prices from {} ({} ignored)",
        summary.applied,
        path.display(),
        summary.ignored.len()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("forgemagie_prices_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_load_missing_is_default() {
        let table = load_prices_from(&scratch("does_not_exist"));
        assert_eq!(table, RunePriceTable::new());
    }

    #[test]
    fn test_load_corrupted_is_default() {
        let path = scratch("corrupted");
        fs::write(&path, "[1, 2").unwrap();
        assert_eq!(load_prices_from(&path), RunePriceTable::new());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("save_load");
        let mut table = RunePriceTable::new();
        table.set("vi", 80).unwrap();
        save_prices_to(&path, &table).unwrap();

        assert_eq!(load_prices_from(&path), table);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let mut table = RunePriceTable::new();
        let err = import_prices(&mut table, &scratch("absent_import")).unwrap_err();
        assert!(matches!(err, PriceFileError::Io(_)));
    }
}
