//! Analysis error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::ledger::StoreError;

/// Errors that can occur during concentration analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The ledger store failed; no partial report is produced.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The requested period is inverted.
    #[error("Invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl From<AnalysisError> for quanso_shared::AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Store(e) => e.into(),
            e @ AnalysisError::InvalidPeriod { .. } => Self::Validation(e.to_string()),
        }
    }
}
