use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::{self, Amount, DATE_FORMAT, Transaction};
use crate::storage::LedgerStore;

use super::{AppError, CategoryReport, CategorySummary, MonthSummary, MonthlyReport};

/// High-level journal operations. This is the primary interface for any
/// client (CLI, interactive shell, tests).
pub struct JournalService {
    store: LedgerStore,
}

impl JournalService {
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Open the journal at `path`, creating the backing file if needed.
    pub fn init(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let store = LedgerStore::new(path);
        store.ensure_initialized()?;
        Ok(Self::new(store))
    }

    /// Open the journal at `path` without touching the filesystem. Reads
    /// against a path that was never initialized surface a not-found error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(LedgerStore::new(path))
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Record one transaction. The date is taken as an already-validated
    /// calendar date; the amount is stored as given, sign and all.
    pub fn record(
        &self,
        date: NaiveDate,
        category: impl Into<String>,
        amount: Amount,
    ) -> Result<Transaction, AppError> {
        let tx = Transaction::new(date.format(DATE_FORMAT).to_string(), category, amount);
        self.store.append(&tx)?;
        Ok(tx)
    }

    /// All transactions, in insertion order.
    pub fn transactions(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.store.read_all()?)
    }

    /// Per-category totals with count and share of the grand total.
    pub fn category_report(&self) -> Result<CategoryReport, AppError> {
        let transactions = self.transactions()?;
        let totals = domain::totals_by_category(&transactions);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tx in &transactions {
            *counts.entry(tx.category.as_str()).or_insert(0) += 1;
        }

        let total: Amount = totals.values().sum();
        let mut categories: Vec<CategorySummary> = totals
            .iter()
            .map(|(category, &sum)| CategorySummary {
                category: category.clone(),
                total: sum,
                count: counts.get(category.as_str()).copied().unwrap_or(0),
                percentage: if total == 0.0 {
                    0.0
                } else {
                    sum / total * 100.0
                },
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });

        Ok(CategoryReport { categories, total })
    }

    /// Month-by-month totals in chronological order.
    pub fn monthly_report(&self) -> Result<MonthlyReport, AppError> {
        let transactions = self.transactions()?;
        let totals = domain::totals_by_month(&transactions)?;

        let total: Amount = totals.values().sum();
        let mut months: Vec<MonthSummary> = totals
            .into_iter()
            .map(|(month, sum)| MonthSummary { month, total: sum })
            .collect();

        // "YYYY-MM" keys sort chronologically as strings
        months.sort_by(|a, b| a.month.cmp(&b.month));

        Ok(MonthlyReport { months, total })
    }
}
