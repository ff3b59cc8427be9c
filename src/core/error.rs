use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the fee computations and the notice workflow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MahnError {
    /// Caller supplied a value outside the function's domain
    /// (non-positive amount, unparseable date, empty fee table, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Statutory configuration or fee table is malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invoice is younger than the minimum age required before a reminder
    /// may be issued.
    #[error(
        "invoice too recent: a reminder can only be issued {min_age_days} days after the invoice date (invoice dated {})",
        .invoice_date.format("%d.%m.%Y")
    )]
    TooRecent {
        /// Issue date of the rejected invoice.
        invoice_date: NaiveDate,
        /// Required minimum age in days.
        min_age_days: u32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MahnError>;
