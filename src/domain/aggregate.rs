use std::collections::HashMap;

use super::date::{ParseDateError, month_key};
use super::{Amount, Transaction};

/// Sum amounts per category over a transaction sequence.
/// Grouping is exact string equality - no trimming, no case folding - and
/// categories absent from the input never appear in the output.
pub fn totals_by_category(transactions: &[Transaction]) -> HashMap<String, Amount> {
    let mut totals: HashMap<String, Amount> = HashMap::new();

    for tx in transactions {
        *totals.entry(tx.category.clone()).or_insert(0.0) += tx.amount;
    }

    totals
}

/// Sum amounts per `YYYY-MM` month over a transaction sequence.
/// Every date is re-parsed here: the store may contain rows written by any
/// caller, so one malformed date fails the whole view rather than being
/// skipped or misgrouped.
pub fn totals_by_month(
    transactions: &[Transaction],
) -> Result<HashMap<String, Amount>, ParseDateError> {
    let mut totals: HashMap<String, Amount> = HashMap::new();

    for tx in transactions {
        let month = month_key(&tx.date)?;
        *totals.entry(month).or_insert(0.0) += tx.amount;
    }

    Ok(totals)
}
