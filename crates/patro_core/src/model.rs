//! The calendar model: a BS month cursor and the day records derived from it.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::convert::GregorianAnchor;
use crate::date::{BsDate, DAYS_IN_MONTH, check_day, english_month_name};
use crate::error::CalendarError;
use crate::festival::events_for_day;
use crate::model_types::{CalendarConfig, DayRecord, MonthHeader};
use crate::numerals::to_nepali_signed;
use crate::tithi::tithi_for_day;

/// Blank cells before day 1 in the month grid.
///
/// Fixed rather than derived from the weekday of day 1, which would need a
/// real conversion.
pub const LEADING_BLANK_CELLS: usize = 1;

/// Day of month whose Gregorian date names the month in [`MonthHeader::english`].
const HEADER_REFERENCE_DAY: u8 = 15;

/// Calendar state for one view.
///
/// Owns the navigation cursor. Independent models never share state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarModel {
    config: CalendarConfig,
    anchor: GregorianAnchor,
    cursor: BsDate,
}

impl CalendarModel {
    /// Build a model positioned at `config.home`.
    pub fn new(config: CalendarConfig) -> Result<Self, CalendarError> {
        let home = BsDate::new(config.home.year, config.home.month, config.home.day)?;
        let anchor = GregorianAnchor::new(config.anchor, home.day)?;
        debug!(%home, anchor = %anchor.date(), "calendar model created");
        Ok(Self {
            config,
            anchor,
            cursor: home,
        })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// The date treated as "today".
    pub fn home(&self) -> BsDate {
        self.config.home
    }

    /// Current cursor position.
    pub fn cursor(&self) -> BsDate {
        self.cursor
    }

    pub fn anchor(&self) -> &GregorianAnchor {
        &self.anchor
    }

    /// Move the cursor to an arbitrary date.
    pub fn set_cursor(&mut self, date: BsDate) -> Result<(), CalendarError> {
        self.cursor = BsDate::new(date.year, date.month, date.day)?;
        Ok(())
    }

    /// Move the cursor back to the home date.
    pub fn reset_to_home(&mut self) {
        self.cursor = self.config.home;
    }

    /// Move the cursor by `delta` months.
    ///
    /// Month 11 + 1 wraps to month 0 of the next year and month 0 - 1 wraps
    /// to month 11 of the previous year. The year may take any `i32` value;
    /// a move past that range fails and leaves the cursor where it was.
    pub fn advance_month(&mut self, delta: i32) -> Result<(), CalendarError> {
        self.cursor = self.cursor.add_months(delta)?;
        debug!(
            delta,
            year = self.cursor.year,
            month = self.cursor.month,
            "cursor moved"
        );
        Ok(())
    }

    /// Approximate Gregorian date of a BS date (anchor offset, see [`GregorianAnchor`]).
    pub fn approximate_gregorian_date(&self, date: &BsDate) -> NaiveDate {
        self.anchor.approximate(date)
    }

    /// Record for one day of the cursor month.
    pub fn day_record(&self, day: u8) -> Result<DayRecord, CalendarError> {
        check_day(day)?;
        Ok(self.record_for(day))
    }

    /// Records for days 1..=30 of the cursor month.
    ///
    /// Always 30 entries. Recomputed on every call.
    pub fn generate_month_records(&self) -> BTreeMap<u8, DayRecord> {
        trace!(cursor = %self.cursor, "generating month records");
        (1..=DAYS_IN_MONTH)
            .map(|day| (day, self.record_for(day)))
            .collect()
    }

    /// Nepali and English titles for the cursor month.
    pub fn month_header(&self) -> MonthHeader {
        let nepali = format!(
            "{} {}",
            self.cursor.bs_month().nepali_name(),
            to_nepali_signed(self.cursor.year as i64)
        );
        let mid = BsDate {
            day: HEADER_REFERENCE_DAY,
            ..self.cursor
        };
        let greg = self.approximate_gregorian_date(&mid);
        let english = format!(
            "{} {}",
            english_month_name(greg.month()).unwrap_or_default(),
            greg.year()
        );
        MonthHeader { nepali, english }
    }

    /// Month grid as weeks of seven cells; `None` marks a blank cell.
    pub fn month_grid(&self) -> Vec<[Option<u8>; 7]> {
        let cells: Vec<Option<u8>> = std::iter::repeat_n(None, LEADING_BLANK_CELLS)
            .chain((1..=DAYS_IN_MONTH).map(Some))
            .collect();
        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }

    fn record_for(&self, day: u8) -> DayRecord {
        let date = BsDate { day, ..self.cursor };
        DayRecord {
            nepali_day: day,
            approximate_gregorian: self.approximate_gregorian_date(&date),
            tithi: tithi_for_day(day as i32),
            events: events_for_day(day as i32),
            is_today: self
                .config
                .today_policy
                .is_today(&self.config.home, &self.cursor, day),
        }
    }
}
