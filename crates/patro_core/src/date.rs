//! Bikram Sambat date cursor and month names.
//!
//! Every BS month is treated as 30 days long. Real BS months run 29 to 32
//! days and vary per year; that table is not modelled here.

use crate::error::CalendarError;

/// Days assumed in every BS month.
pub const DAYS_IN_MONTH: u8 = 30;

/// A Bikram Sambat date with a 0-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BsDate {
    pub year: i32,
    /// 0 = Baishakh .. 11 = Chaitra.
    pub month: u8,
    /// 1..=30.
    pub day: u8,
}

impl BsDate {
    /// Create a validated date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth(month));
        }
        check_day(day)?;
        Ok(Self { year, month, day })
    }

    /// The month as an enum.
    pub fn bs_month(&self) -> BsMonth {
        ALL_BS_MONTHS[self.month as usize]
    }

    /// Move by `delta` months, wrapping the month and carrying into the year.
    ///
    /// The day is kept as is. Fails with [`CalendarError::YearOutOfRange`]
    /// if the resulting year does not fit in an `i32`.
    pub fn add_months(self, delta: i32) -> Result<Self, CalendarError> {
        let total = i64::from(self.month) + i64::from(delta);
        let year = i64::from(self.year)
            .checked_add(total.div_euclid(12))
            .and_then(|y| i32::try_from(y).ok())
            .ok_or(CalendarError::YearOutOfRange {
                year: self.year,
                delta,
            })?;
        Ok(Self {
            year,
            month: total.rem_euclid(12) as u8,
            day: self.day,
        })
    }
}

impl std::fmt::Display for BsDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02} BS", self.year, self.month + 1, self.day)
    }
}

/// Reject a day of month outside 1..=30.
pub fn check_day(day: u8) -> Result<u8, CalendarError> {
    if (1..=DAYS_IN_MONTH).contains(&day) {
        Ok(day)
    } else {
        Err(CalendarError::InvalidDay(day))
    }
}

/// The 12 months of the Bikram Sambat year, starting from Baishakh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BsMonth {
    Baishakh,
    Jestha,
    Ashadh,
    Shrawan,
    Bhadra,
    Ashwin,
    Kartik,
    Mangsir,
    Poush,
    Magh,
    Falgun,
    Chaitra,
}

/// All 12 months in order (index 0 = Baishakh).
pub const ALL_BS_MONTHS: [BsMonth; 12] = [
    BsMonth::Baishakh,
    BsMonth::Jestha,
    BsMonth::Ashadh,
    BsMonth::Shrawan,
    BsMonth::Bhadra,
    BsMonth::Ashwin,
    BsMonth::Kartik,
    BsMonth::Mangsir,
    BsMonth::Poush,
    BsMonth::Magh,
    BsMonth::Falgun,
    BsMonth::Chaitra,
];

const NEPALI_MONTH_NAMES: [&str; 12] = [
    "बैशाख", "जेठ", "आषाढ", "श्रावण", "भाद्र", "आश्विन", "कार्तिक", "मंसिर", "पुष", "माघ",
    "फाल्गुन", "चैत्र",
];

/// Gregorian month names, January first.
pub const ENGLISH_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl BsMonth {
    /// 0-based index (Baishakh=0 .. Chaitra=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Baishakh => 0,
            Self::Jestha => 1,
            Self::Ashadh => 2,
            Self::Shrawan => 3,
            Self::Bhadra => 4,
            Self::Ashwin => 5,
            Self::Kartik => 6,
            Self::Mangsir => 7,
            Self::Poush => 8,
            Self::Magh => 9,
            Self::Falgun => 10,
            Self::Chaitra => 11,
        }
    }

    /// Month name in Devanagari.
    pub fn nepali_name(self) -> &'static str {
        NEPALI_MONTH_NAMES[self.index() as usize]
    }

    /// Romanised month name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baishakh => "Baishakh",
            Self::Jestha => "Jestha",
            Self::Ashadh => "Ashadh",
            Self::Shrawan => "Shrawan",
            Self::Bhadra => "Bhadra",
            Self::Ashwin => "Ashwin",
            Self::Kartik => "Kartik",
            Self::Mangsir => "Mangsir",
            Self::Poush => "Poush",
            Self::Magh => "Magh",
            Self::Falgun => "Falgun",
            Self::Chaitra => "Chaitra",
        }
    }

    /// Month from a 0-based index.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_BS_MONTHS.get(index as usize).copied()
    }
}

/// English name of a Gregorian month (1-based, as `chrono::Datelike::month`).
pub fn english_month_name(month1: u32) -> Option<&'static str> {
    let idx = usize::try_from(month1).ok()?.checked_sub(1)?;
    ENGLISH_MONTH_NAMES.get(idx).copied()
}
