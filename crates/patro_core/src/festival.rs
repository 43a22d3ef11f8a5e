//! Festival reference list and per-day event markers.

/// A festival shown in the festival list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalEntry {
    /// BS date as displayed, e.g. `मंसिर १५`.
    pub nepali_date_label: &'static str,
    /// Gregorian date as displayed, e.g. `Dec 1, 2024`.
    pub gregorian_date_label: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Upcoming festivals, in display order.
pub const FESTIVALS: [FestivalEntry; 3] = [
    FestivalEntry {
        nepali_date_label: "मंसिर १५",
        gregorian_date_label: "Dec 1, 2024",
        name: "बिवाह पञ्चमी",
        description: "सीता राम विवाहको उत्सव",
    },
    FestivalEntry {
        nepali_date_label: "पुष १५",
        gregorian_date_label: "Dec 30, 2024",
        name: "माघे सङ्क्रान्ति",
        description: "सूर्यको मकर राशिमा प्रवेश",
    },
    FestivalEntry {
        nepali_date_label: "माघ १",
        gregorian_date_label: "Jan 14, 2025",
        name: "माघे सङ्क्रान्ति",
        description: "तिल र घिउको दान",
    },
];

/// Event names marked on a day of month. Independent of month and year.
pub fn events_for_day(day: i32) -> &'static [&'static str] {
    match day {
        1 => &["कल्याण काल"],
        5 => &["पञ्चमी व्रत"],
        11 => &["एकादशी व्रत"],
        15 => &["पूर्णिमा"],
        30 => &["औंसी"],
        _ => &[],
    }
}

/// Whether the day carries any event marker.
pub fn is_festival_day(day: i32) -> bool {
    !events_for_day(day).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ekadashi_on_11() {
        assert_eq!(events_for_day(11), ["एकादशी व्रत"]);
    }

    #[test]
    fn plain_day_has_no_events() {
        assert!(events_for_day(2).is_empty());
        assert!(!is_festival_day(2));
    }

    #[test]
    fn marked_days() {
        let marked: Vec<i32> = (1..=30).filter(|&d| is_festival_day(d)).collect();
        assert_eq!(marked, vec![1, 5, 11, 15, 30]);
    }

    #[test]
    fn festival_list_is_complete() {
        assert_eq!(FESTIVALS.len(), 3);
        assert_eq!(FESTIVALS[0].name, "बिवाह पञ्चमी");
        assert_eq!(FESTIVALS[2].gregorian_date_label, "Jan 14, 2025");
    }
}
