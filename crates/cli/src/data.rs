//! JSON persistence for the order book and the notepad.
//!
//! The CLI keeps everything in two flat JSON files. Saves write the whole
//! file; there is no locking, matching single-operator use.

use std::fs;
use std::path::Path;

use thiserror::Error;

use carvet_core::Order;
use carvet_crm::Notepad;

/// Errors from loading or saving data files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Data file not found: {0} (run `carvet seed` first)")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the order book.
///
/// # Errors
///
/// Returns `DataError::NotFound` when the file does not exist, `Io`/`Json`
/// when it cannot be read or parsed.
pub fn load_orders(path: &Path) -> Result<Vec<Order>, DataError> {
    if !path.exists() {
        return Err(DataError::NotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the order book, pretty-printed so diffs stay reviewable.
///
/// # Errors
///
/// Returns `DataError::Io`/`Json` when the file cannot be written.
pub fn save_orders(path: &Path, orders: &[Order]) -> Result<(), DataError> {
    let content = serde_json::to_string_pretty(orders)?;
    fs::write(path, content)?;
    Ok(())
}

/// Load the notepad, starting empty when the file does not exist yet.
///
/// # Errors
///
/// Returns `DataError::Io`/`Json` when an existing file cannot be read or
/// parsed.
pub fn load_notepad(path: &Path) -> Result<Notepad, DataError> {
    if !path.exists() {
        return Ok(Notepad::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the notepad.
///
/// # Errors
///
/// Returns `DataError::Io`/`Json` when the file cannot be written.
pub fn save_notepad(path: &Path, notepad: &Notepad) -> Result<(), DataError> {
    let content = serde_json::to_string_pretty(notepad)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use carvet_core::{Money, OrderId};
    use carvet_crm::QueryType;

    use super::*;

    #[test]
    fn test_orders_round_trip_through_file() {
        let dir = std::env::temp_dir().join("carvet-data-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("orders.json");

        let placed = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let orders = vec![Order::new(OrderId::new("ORD0001"), Money::czk(3_990), placed)];
        save_orders(&path, &orders).unwrap();
        let back = load_orders(&path).unwrap();
        assert_eq!(back, orders);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_order_file_is_reported() {
        let err = load_orders(Path::new("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }

    #[test]
    fn test_missing_notepad_starts_empty() {
        let notepad = load_notepad(Path::new("does-not-exist.json")).unwrap();
        assert!(notepad.is_empty());
    }

    #[test]
    fn test_notepad_round_trip_through_file() {
        let dir = std::env::temp_dir().join("carvet-notepad-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("notes.json");

        let mut notepad = Notepad::new();
        notepad
            .add_note("anna", QueryType::Billing, "caller asked about invoice")
            .unwrap();
        save_notepad(&path, &notepad).unwrap();
        let back = load_notepad(&path).unwrap();
        assert_eq!(back, notepad);

        fs::remove_file(&path).unwrap();
    }
}
