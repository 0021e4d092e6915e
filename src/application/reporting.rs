use serde::{Deserialize, Serialize};

use crate::domain::Amount;

/// Per-category totals over the whole journal, largest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub categories: Vec<CategorySummary>,
    pub total: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total: Amount,
    pub count: usize,
    pub percentage: f64,
}

/// Month-by-month totals, chronological.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub months: Vec<MonthSummary>,
    pub total: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: String,
    pub total: Amount,
}
