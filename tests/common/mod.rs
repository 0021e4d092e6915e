// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use spesa::application::JournalService;
use tempfile::TempDir;

/// Helper to create a test service backed by a temporary ledger file
pub fn test_service() -> Result<(JournalService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let ledger_path = temp_dir.path().join("test.csv");
    let service = JournalService::init(ledger_path)?;
    Ok((service, temp_dir))
}

/// Helper to parse a date string into a NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Record one transaction from string fixtures
pub fn log(service: &JournalService, date: &str, category: &str, amount: f64) -> Result<()> {
    service.record(parse_date(date), category, amount)?;
    Ok(())
}
