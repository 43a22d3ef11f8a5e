//! Configuration and result types for the calendar model.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::convert::DEFAULT_ANCHOR;
use crate::date::BsDate;
use crate::error::CalendarError;
use crate::tithi::TithiLabel;

/// Which days of the grid are flagged as "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TodayPolicy {
    /// Day of month equals the home day, in every displayed month.
    DayOnly,
    /// Day and month equal the home date; the year is not compared.
    HomeMonth,
    /// Day, month and year all equal the home date.
    #[default]
    FullDate,
}

impl TodayPolicy {
    /// Whether `day` of the displayed month `shown` is the home date.
    pub fn is_today(self, home: &BsDate, shown: &BsDate, day: u8) -> bool {
        if day != home.day {
            return false;
        }
        match self {
            Self::DayOnly => true,
            Self::HomeMonth => shown.month == home.month,
            Self::FullDate => shown.month == home.month && shown.year == home.year,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::DayOnly => "day-only",
            Self::HomeMonth => "home-month",
            Self::FullDate => "full-date",
        }
    }
}

impl FromStr for TodayPolicy {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day-only" => Ok(Self::DayOnly),
            "home-month" => Ok(Self::HomeMonth),
            "full-date" => Ok(Self::FullDate),
            _ => Err(CalendarError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Parameters a [`CalendarModel`](crate::CalendarModel) is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConfig {
    /// The BS date treated as "today". Default: 2081 Mangsir 11.
    pub home: BsDate,
    /// Gregorian date that `home.day` maps to. Default: 2024-11-15.
    pub anchor: NaiveDate,
    /// Today highlighting rule. Default: [`TodayPolicy::FullDate`].
    pub today_policy: TodayPolicy,
}

/// Default home date: 2081 Mangsir (month index 7) day 11.
pub const DEFAULT_HOME: BsDate = BsDate {
    year: 2081,
    month: 7,
    day: 11,
};

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            home: DEFAULT_HOME,
            anchor: DEFAULT_ANCHOR,
            today_policy: TodayPolicy::default(),
        }
    }
}

impl CalendarConfig {
    /// Replace the home date, validating its fields.
    pub fn with_home(mut self, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        self.home = BsDate::new(year, month, day)?;
        Ok(self)
    }
}

/// Derived information for one day of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    /// Day of month, 1..=30.
    pub nepali_day: u8,
    /// See [`GregorianAnchor::approximate`](crate::GregorianAnchor::approximate).
    pub approximate_gregorian: NaiveDate,
    pub tithi: TithiLabel,
    pub events: &'static [&'static str],
    pub is_today: bool,
}

impl DayRecord {
    /// Whether the day carries event markers.
    pub fn is_festival(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Titles shown above the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthHeader {
    /// `"<month name> <year>"` in Devanagari, e.g. `मंसिर २०८१`.
    pub nepali: String,
    /// `"<English month> <year>"` of the approximate Gregorian date of day 15.
    pub english: String,
}
