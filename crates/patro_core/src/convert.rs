//! Approximate BS to Gregorian mapping.
//!
//! This is NOT a calendar conversion. A single Gregorian anchor date is
//! paired with one BS day of month; any other BS date maps to the anchor
//! shifted by the difference in day of month. Year and month are ignored,
//! so results are only meaningful for days near the anchor. A real
//! conversion needs a verified BS month-length table.

use chrono::{NaiveDate, TimeDelta};

use crate::date::{BsDate, check_day};
use crate::error::CalendarError;

/// Default Gregorian anchor: 2024-11-15.
pub const DEFAULT_ANCHOR: NaiveDate = match NaiveDate::from_ymd_opt(2024, 11, 15) {
    Some(date) => date,
    None => panic!("default anchor is a valid date"),
};

/// Largest shift a `u8` day of month can produce against the anchor.
const MAX_SHIFT_DAYS: i64 = u8::MAX as i64;

/// A Gregorian date paired with the BS day of month it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GregorianAnchor {
    date: NaiveDate,
    reference_day: u8,
}

impl GregorianAnchor {
    /// Create an anchor.
    ///
    /// Fails if `reference_day` is outside 1..=30 or if the anchor is so close
    /// to the edge of the representable range that shifting it could overflow.
    pub fn new(date: NaiveDate, reference_day: u8) -> Result<Self, CalendarError> {
        check_day(reference_day)?;
        let span = TimeDelta::days(MAX_SHIFT_DAYS);
        if date.checked_add_signed(span).is_none() || date.checked_sub_signed(span).is_none() {
            return Err(CalendarError::InvalidDate(format!(
                "anchor {date} is outside the supported range"
            )));
        }
        Ok(Self {
            date,
            reference_day,
        })
    }

    /// The anchor's Gregorian date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The BS day of month the anchor stands for.
    pub fn reference_day(&self) -> u8 {
        self.reference_day
    }

    /// Approximate Gregorian date for a BS date: `anchor + (day - reference_day)`.
    pub fn approximate(&self, date: &BsDate) -> NaiveDate {
        let shift = date.day as i64 - self.reference_day as i64;
        // Bounded by MAX_SHIFT_DAYS, checked in `new`.
        self.date + TimeDelta::days(shift)
    }
}

/// Short English form of a Gregorian date, e.g. `Dec 1, 2024`.
pub fn format_english_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parse a `YYYY-MM-DD` Gregorian date.
pub fn parse_gregorian(s: &str) -> Result<NaiveDate, CalendarError> {
    Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
}
