use std::fmt;

use serde::{Deserialize, Deserializer, de};

/// Amounts are plain floats, matching the journal's text representation.
/// Sums run in insertion order; rounding drift at journal scale is not a
/// correctness concern.
pub type Amount = f64;

/// Format an amount for table output.
/// Example: 12.5 -> "12.50", -3.0 -> "-3.00"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Parse a decimal string into an Amount.
/// Accepts anything a float literal accepts, sign included. This is the
/// single amount-coercion path: input validation and read-time parsing
/// both go through here.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseAmountError::InvalidFormat(input.trim().to_string()))
}

/// Serde hook so CSV amount fields are coerced via `parse_amount`.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Amount, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_amount(&raw).map_err(de::Error::custom)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat(String),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat(input) => {
                write!(f, "invalid amount '{}'", input)
            }
        }
    }
}

impl std::error::Error for ParseAmountError {}
