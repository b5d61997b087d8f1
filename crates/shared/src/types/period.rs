//! Report period type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range a statement is generated over.
///
/// Generators validate `start <= end` before any I/O; a `ReportPeriod`
/// embedded in a report is therefore always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day of the period (inclusive).
    pub start: NaiveDate,
    /// Last day of the period (inclusive).
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Creates a period without validating the bounds.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true when `start <= end`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Returns true if the date falls within the period (inclusive).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The day before the period starts, used for opening balances.
    ///
    /// `None` only when the period starts at the calendar minimum, in which
    /// case nothing can precede it.
    #[must_use]
    pub fn day_before_start(&self) -> Option<NaiveDate> {
        self.start.pred_opt()
    }
}
