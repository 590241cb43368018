//! Working-week boundaries.
//!
//! An entry covers Monday to Friday of the week its run date falls in. On a
//! weekend the week that just ended is used.

use super::error::LogbookError;
use chrono::{Datelike, Duration, NaiveDate};

/// Format used for the week range and the entry file name.
pub const WEEK_DATE_FORMAT: &str = "%Y.%m.%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Week {
    pub fn containing(date: NaiveDate) -> Self {
        let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Self {
            start,
            end: start + Duration::days(4),
        }
    }

    pub fn start_formatted(&self) -> String {
        self.start.format(WEEK_DATE_FORMAT).to_string()
    }

    pub fn end_formatted(&self) -> String {
        self.end.format(WEEK_DATE_FORMAT).to_string()
    }

    /// `start - end`, as written into the reporting period.
    pub fn range(&self) -> String {
        format!("{} - {}", self.start_formatted(), self.end_formatted())
    }

    /// Name of the entry file, `YYYY.MM.DD.md` after the Monday.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.start_formatted())
    }
}

/// Parses a `YYYY-MM-DD` command-line date.
pub fn parse_date(value: &str) -> Result<NaiveDate, LogbookError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| LogbookError::InvalidDate(value.to_string()))
}
