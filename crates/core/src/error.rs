//! Engine error types.

use chrono::NaiveDate;
use mizan_shared::types::{AccountId, BudgetId};
use thiserror::Error;

/// Errors that can occur while answering a report query.
///
/// None of these are fatal to the host: each query stands alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Account not found in the supplied chart of accounts.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Budget not found in the supplied snapshot.
    #[error("Budget not found: {0}")]
    BudgetNotFound(BudgetId),

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl From<ReportError> for mizan_shared::AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::AccountNotFound(_) | ReportError::BudgetNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            ReportError::InvalidDateRange { .. } => Self::Validation(err.to_string()),
        }
    }
}
