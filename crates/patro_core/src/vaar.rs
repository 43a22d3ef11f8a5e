//! Weekday (vaar) names.

use chrono::Weekday;

/// Short Nepali weekday names, Sunday first.
pub const NEPALI_WEEKDAYS: [&str; 7] = ["आइत", "सोम", "मंगल", "बुध", "बिहि", "शुक्र", "शनि"];

/// English weekday names, Sunday first.
pub const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Nepali short name of a weekday.
pub fn nepali_weekday(day: Weekday) -> &'static str {
    NEPALI_WEEKDAYS[day.num_days_from_sunday() as usize]
}

/// English name of a weekday.
pub fn english_weekday(day: Weekday) -> &'static str {
    ENGLISH_WEEKDAYS[day.num_days_from_sunday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_first() {
        assert_eq!(nepali_weekday(Weekday::Sun), "आइत");
        assert_eq!(english_weekday(Weekday::Sun), "Sunday");
    }

    #[test]
    fn saturday_last() {
        assert_eq!(nepali_weekday(Weekday::Sat), "शनि");
        assert_eq!(english_weekday(Weekday::Sat), "Saturday");
    }
}
