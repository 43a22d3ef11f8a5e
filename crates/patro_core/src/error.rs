//! Error types for calendar operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month index outside 0..=11.
    InvalidMonth(u8),
    /// Day of month outside 1..=30.
    InvalidDay(u8),
    /// Zodiac key that does not name one of the 12 signs.
    UnknownSign(String),
    /// Date text that could not be parsed.
    InvalidDate(String),
    /// Month navigation that would move the year past the `i32` range.
    YearOutOfRange { year: i32, delta: i32 },
    /// Today highlighting rule name that is not recognised.
    UnknownPolicy(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month index {m} (expected 0-11)"),
            Self::InvalidDay(d) => write!(f, "invalid day {d} (expected 1-30)"),
            Self::UnknownSign(s) => write!(f, "unknown zodiac sign: {s}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::YearOutOfRange { year, delta } => {
                write!(f, "moving {delta} months from year {year} leaves the supported range")
            }
            Self::UnknownPolicy(s) => write!(
                f,
                "unknown today policy '{s}' (expected day-only, home-month or full-date)"
            ),
        }
    }
}

impl Error for CalendarError {}

impl From<chrono::ParseError> for CalendarError {
    fn from(e: chrono::ParseError) -> Self {
        Self::InvalidDate(e.to_string())
    }
}
