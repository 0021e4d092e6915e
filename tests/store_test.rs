use std::fs;
use std::io::Write;

use anyhow::Result;
use spesa::domain::Transaction;
use spesa::storage::{LedgerStore, StoreError};
use tempfile::TempDir;

#[test]
fn test_initialization_is_idempotent() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("ledger.csv");
    let store = LedgerStore::new(path.clone());

    store.ensure_initialized()?;
    let first = fs::read_to_string(&path)?;

    store.ensure_initialized()?;
    let second = fs::read_to_string(&path)?;

    assert_eq!(first, "Date,Category,Amount\n");
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_append_round_trip() -> Result<()> {
    let temp = TempDir::new()?;
    let store = LedgerStore::new(temp.path().join("ledger.csv"));
    store.ensure_initialized()?;

    store.append(&Transaction::new("2024-03-05", "Food", 12.5))?;
    let transactions = store.read_all()?;

    assert_eq!(transactions.len(), 1);
    assert_eq!(
        transactions[0],
        Transaction::new("2024-03-05", "Food", 12.5)
    );
    assert_eq!(transactions[0].amount, 12.5);
    Ok(())
}

#[test]
fn test_append_grows_line_count_by_one() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("ledger.csv");
    let store = LedgerStore::new(path.clone());
    store.ensure_initialized()?;

    let before = fs::read_to_string(&path)?.lines().count();
    store.append(&Transaction::new("2024-03-05", "Food", 12.5))?;
    let after = fs::read_to_string(&path)?.lines().count();

    assert_eq!(after, before + 1);
    Ok(())
}

#[test]
fn test_header_never_surfaces_as_transaction() -> Result<()> {
    let temp = TempDir::new()?;
    let store = LedgerStore::new(temp.path().join("ledger.csv"));
    store.ensure_initialized()?;

    assert!(store.read_all()?.is_empty());
    assert_eq!(store.count()?, 0);

    store.append(&Transaction::new("2024-01-01", "Food", 1.0))?;
    let transactions = store.read_all()?;
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].date, "2024-01-01");
    Ok(())
}

#[test]
fn test_read_preserves_insertion_order() -> Result<()> {
    let temp = TempDir::new()?;
    let store = LedgerStore::new(temp.path().join("ledger.csv"));
    store.ensure_initialized()?;

    store.append(&Transaction::new("2024-02-01", "Transport", 3.0))?;
    store.append(&Transaction::new("2024-01-01", "Food", 1.0))?;
    store.append(&Transaction::new("2024-03-01", "Food", 2.0))?;

    let transactions = store.read_all()?;
    let dates: Vec<&str> = transactions.iter().map(|tx| tx.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-02-01", "2024-01-01", "2024-03-01"]);
    Ok(())
}

#[test]
fn test_read_missing_ledger_is_not_found() -> Result<()> {
    let temp = TempDir::new()?;
    let store = LedgerStore::new(temp.path().join("missing.csv"));

    let err = store.read_all().unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    Ok(())
}

#[test]
fn test_append_to_missing_ledger_is_not_found() -> Result<()> {
    let temp = TempDir::new()?;
    let store = LedgerStore::new(temp.path().join("missing.csv"));

    let err = store
        .append(&Transaction::new("2024-01-01", "Food", 1.0))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    Ok(())
}

#[test]
fn test_non_numeric_amount_fails_whole_read() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("ledger.csv");
    let store = LedgerStore::new(path.clone());
    store.ensure_initialized()?;
    store.append(&Transaction::new("2024-01-01", "Food", 1.0))?;

    // A row written by some other caller with a bad amount field
    let mut file = fs::OpenOptions::new().append(true).open(&path)?;
    writeln!(file, "2024-01-02,Food,twelve")?;

    let err = store.read_all().unwrap_err();
    assert!(matches!(err, StoreError::MalformedRow { .. }));
    Ok(())
}

#[test]
fn test_category_with_comma_round_trips_quoted() -> Result<()> {
    let temp = TempDir::new()?;
    let store = LedgerStore::new(temp.path().join("ledger.csv"));
    store.ensure_initialized()?;

    store.append(&Transaction::new("2024-01-01", "Food, drinks", 7.5))?;
    let transactions = store.read_all()?;

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].category, "Food, drinks");
    Ok(())
}
