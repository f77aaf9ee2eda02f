use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDateTime};

/// A calendar month used as a grouping key for the monthly spend reports.
///
/// Ordering is chronological (year first, then month), which is what the
/// moving-average and cumulative reports sort on. Displays as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl From<NaiveDateTime> for MonthKey {
    fn from(timestamp: NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }
}

impl Display for MonthKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:04}-{:02}", self.year, self.month)
    }
}
