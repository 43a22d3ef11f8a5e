//! The "today" panel: clock, header years and today's date in both calendars.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike};

use crate::model::CalendarModel;
use crate::numerals::{format_bs_date, localize_digits, to_nepali_signed};
use crate::tithi::{TithiLabel, tithi_for_day};
use crate::vaar::nepali_weekday;

/// Nepal Standard Time offset from UTC in seconds (+05:45).
pub const NEPAL_UTC_OFFSET_SECS: i32 = 5 * 3600 + 45 * 60;

/// Nepal Standard Time as a fixed offset.
pub const NEPAL_OFFSET: FixedOffset = match FixedOffset::east_opt(NEPAL_UTC_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("+05:45 is a valid offset"),
};

/// Text for the today panel at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodaySummary {
    /// 24-hour `HH:MM:SS` in Nepal time, Devanagari digits.
    pub clock: String,
    /// BS year header, e.g. `२०८१ साल`.
    pub bs_year: String,
    /// Gregorian year header, e.g. `2024 AD`.
    pub gregorian_year: String,
    /// Home BS date as `YYYY/MM/DD`, Devanagari digits.
    pub bs_date: String,
    /// Gregorian date as `M/D/YYYY`.
    pub gregorian_date: String,
    /// Tithi of the home day.
    pub tithi: TithiLabel,
    /// Nepali weekday name of `now` in Nepal time.
    pub weekday: &'static str,
}

impl TodaySummary {
    /// Build the panel for `now`.
    ///
    /// The BS fields come from the model's home date; the clock, Gregorian
    /// fields and weekday come from `now` converted to Nepal time.
    pub fn at<Tz: TimeZone>(model: &CalendarModel, now: &DateTime<Tz>) -> Self {
        let local = now.with_timezone(&NEPAL_OFFSET);
        let home = model.home();
        let clock = format!(
            "{:02}:{:02}:{:02}",
            local.hour(),
            local.minute(),
            local.second()
        );
        Self {
            clock: localize_digits(&clock),
            bs_year: format!("{} साल", to_nepali_signed(home.year as i64)),
            gregorian_year: format!("{} AD", local.year()),
            bs_date: format_bs_date(&home),
            gregorian_date: format!("{}/{}/{}", local.month(), local.day(), local.year()),
            tithi: tithi_for_day(home.day as i32),
            weekday: nepali_weekday(local.weekday()),
        }
    }
}
