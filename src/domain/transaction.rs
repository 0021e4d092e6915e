use serde::{Deserialize, Serialize};

use super::Amount;
use super::amount;

/// One dated, categorized, monetary record.
/// Transactions are immutable once written - the journal is append-only and
/// no edit or delete operation exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    /// Calendar date as entered, `YYYY-MM-DD`.
    pub date: String,
    /// Free-text label. Grouping is by exact string equality, whitespace
    /// and case included.
    pub category: String,
    /// Signed decimal amount. No sign or magnitude restriction.
    #[serde(deserialize_with = "amount::deserialize_amount")]
    pub amount: Amount,
}

impl Transaction {
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: Amount) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
        }
    }
}
