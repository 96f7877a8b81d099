//! Inclusive calendar date ranges.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// A closed range of calendar days.
///
/// Both ends are inclusive at day granularity: an entry stamped
/// `end 23:59:59.999` is inside, one stamped on the following midnight is not.
/// A range whose start is after its end matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start: NaiveDate,
    /// Last day included.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range. A malformed range is accepted and matches nothing.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Everything up to and including `end`.
    #[must_use]
    pub const fn through(end: NaiveDate) -> Self {
        Self {
            start: NaiveDate::MIN,
            end,
        }
    }

    /// Returns true if `start` is after `end`.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.start > self.end
    }

    /// Returns true if the timestamp falls on a day inside the range.
    #[must_use]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.contains_date(at.date())
    }

    /// Returns true if the day is inside the range.
    #[must_use]
    pub fn contains_date(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Returns true if the timestamp falls on a day strictly after `end`.
    #[must_use]
    pub fn is_after(&self, at: NaiveDateTime) -> bool {
        at.date() > self.end
    }

    /// Rejects malformed ranges for callers that want to surface them.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if `start > end`.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.is_malformed() {
            return Err(ReportError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}
