use std::fmt;

use chrono::NaiveDate;

/// Journal dates are entered and persisted in this format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a journal date string. Pure: callers that want to re-prompt on
/// failure loop themselves.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseDateError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ParseDateError::InvalidFormat(input.to_string()))
}

/// Derive the `YYYY-MM` grouping key from a stored date string.
pub fn month_key(date: &str) -> Result<String, ParseDateError> {
    Ok(parse_date(date)?.format("%Y-%m").to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDateError {
    InvalidFormat(String),
}

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDateError::InvalidFormat(input) => {
                write!(f, "invalid date '{}', expected YYYY-MM-DD", input)
            }
        }
    }
}

impl std::error::Error for ParseDateError {}
