//! Bikram Sambat (Nepali) calendar model for calendar widgets.
//!
//! This crate provides:
//! - A month cursor over BS dates with year carry on navigation
//! - Per-day records: approximate Gregorian date, tithi label, event markers
//! - Static tables: month and weekday names, Devanagari digits, festivals,
//!   zodiac signs with horoscope text
//! - The "today" panel text for a given instant in Nepal time
//!
//! The Gregorian mapping is an anchor-offset approximation, not a calendar
//! conversion. See [`convert`].
//!
//! ```rust
//! use patro_core::{CalendarConfig, CalendarModel};
//!
//! let mut model = CalendarModel::new(CalendarConfig::default()).unwrap();
//! model.advance_month(1).unwrap();
//! let records = model.generate_month_records();
//! assert_eq!(records.len(), 30);
//! ```

pub mod convert;
pub mod date;
pub mod error;
pub mod festival;
pub mod model;
pub mod model_types;
pub mod numerals;
pub mod rashi;
pub mod tithi;
pub mod today;
pub mod vaar;

pub use convert::{DEFAULT_ANCHOR, GregorianAnchor, format_english_date, parse_gregorian};
pub use date::{
    ALL_BS_MONTHS, BsDate, BsMonth, DAYS_IN_MONTH, ENGLISH_MONTH_NAMES, english_month_name,
};
pub use error::CalendarError;
pub use festival::{FESTIVALS, FestivalEntry, events_for_day, is_festival_day};
pub use model::{CalendarModel, LEADING_BLANK_CELLS};
pub use model_types::{CalendarConfig, DEFAULT_HOME, DayRecord, MonthHeader, TodayPolicy};
pub use numerals::{
    NEPALI_DIGITS, digit_from_glyph, format_bs_date, localize_digits, parse_nepali_number,
    to_nepali_number, to_nepali_signed,
};
pub use rashi::{ALL_RASHIS, Rashi, ZODIAC_SIGNS, ZodiacSign, horoscope};
pub use tithi::{ALL_TITHIS, Paksha, Tithi, TithiLabel, tithi_for_day};
pub use today::{NEPAL_OFFSET, TodaySummary};
pub use vaar::{ENGLISH_WEEKDAYS, NEPALI_WEEKDAYS, english_weekday, nepali_weekday};
