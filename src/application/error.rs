use thiserror::Error;

use crate::domain::Cents;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No financial profile found for user '{0}'. Save one first.")]
    ProfileNotFound(String),

    #[error("Vendor must not be empty")]
    EmptyVendor,

    #[error("{field} must not be negative (got {value} cents)")]
    NegativeAmount { field: &'static str, value: Cents },

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}
