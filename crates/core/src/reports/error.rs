//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::ledger::StoreError;

/// Errors that can occur during report generation.
///
/// An empty ledger is never one of them; every generator resolves that to
/// its documented zero report.
#[derive(Debug, Error)]
pub enum ReportError {
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

impl From<ReportError> for quanso_shared::AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Store(e) => e.into(),
            e @ ReportError::InvalidPeriod { .. } => Self::Validation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quanso_shared::AppError;

    #[test]
    fn test_store_failure_keeps_source_message() {
        let err = ReportError::from(StoreError::Unavailable("timeout".to_string()));
        assert_eq!(err.to_string(), "store unavailable: timeout");
    }

    #[test]
    fn test_invalid_period_maps_to_validation() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err: AppError = ReportError::InvalidPeriod { start, end }.into();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
