//! Calendar-day key and sequential navigation primitives.
//!
//! # Responsibility
//! - Define the year-independent `(month, day)` key used by the fixed
//!   dataset and the generation cache.
//! - Provide one-day forward/backward stepping for book-style browsing.
//!
//! # Invariants
//! - The wire form is `M/D` with no zero-padding.
//! - `month` is validated to `1..=12` and `day` to `1..=31`; finer
//!   month-length rules (Feb 29, short months) are owned by native date
//!   arithmetic, not by this type.

use chrono::{Datelike, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Year-independent calendar key, serialized as `"M/D"` unpadded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    month: u32,
    day: u32,
}

/// Validation failure for a `DateKey` candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateKeyError {
    MonthOutOfRange(u32),
    DayOutOfRange(u32),
    Malformed(String),
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MonthOutOfRange(month) => write!(f, "month {month} outside 1..=12"),
            Self::DayOutOfRange(day) => write!(f, "day {day} outside 1..=31"),
            Self::Malformed(value) => write!(f, "malformed date key `{value}`; expected M/D"),
        }
    }
}

impl Error for DateKeyError {}

impl DateKey {
    /// January 1st, the closed-world fallback key for random browsing.
    pub const JAN_FIRST: Self = Self { month: 1, day: 1 };

    /// Builds a key from raw month/day numbers.
    pub fn new(month: u32, day: u32) -> Result<Self, DateKeyError> {
        if !(1..=12).contains(&month) {
            return Err(DateKeyError::MonthOutOfRange(month));
        }
        if !(1..=31).contains(&day) {
            return Err(DateKeyError::DayOutOfRange(day));
        }
        Ok(Self { month, day })
    }

    /// Derives the key for a calendar date. The year is discarded.
    pub fn from_date(date: NaiveDate) -> Self {
        // chrono guarantees month/day are in range for any valid NaiveDate.
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || DateKeyError::Malformed(value.to_string());
        let (month_text, day_text) = value.split_once('/').ok_or_else(malformed)?;
        let month: u32 = month_text.trim().parse().map_err(|_| malformed())?;
        let day: u32 = day_text.trim().parse().map_err(|_| malformed())?;
        Self::new(month, day)
    }
}

/// Browsing direction for book-style sequential reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Steps exactly one calendar day in the given direction.
///
/// Month and year boundaries roll over via native date arithmetic. At the
/// representable calendar edge the input date is returned unchanged.
pub fn advance(date: NaiveDate, direction: Direction) -> NaiveDate {
    let stepped = match direction {
        Direction::Next => date.succ_opt(),
        Direction::Prev => date.pred_opt(),
    };
    stepped.unwrap_or(date)
}
