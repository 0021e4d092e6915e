use thiserror::Error;

use crate::domain::{ParseAmountError, ParseDateError};
use crate::storage::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] ParseDateError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
