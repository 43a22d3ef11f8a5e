//! Golden values for the static lookup tables and digit conversion.

use patro_core::{
    ALL_BS_MONTHS, ALL_RASHIS, FESTIVALS, NEPALI_DIGITS, Paksha, Rashi, Tithi, digit_from_glyph,
    events_for_day, horoscope, localize_digits, parse_nepali_number, tithi_for_day,
    to_nepali_number,
};

// ---------------------------------------------------------------------------
// Numerals
// ---------------------------------------------------------------------------

#[test]
fn every_digit_round_trips() {
    for (d, glyph) in NEPALI_DIGITS.iter().enumerate() {
        assert_eq!(to_nepali_number(d as u64), glyph.to_string());
        assert_eq!(digit_from_glyph(*glyph), Some(d as u8));
    }
}

#[test]
fn numbers_parse_back() {
    for n in [0u64, 1, 15, 30, 2081, 2082, 100_000] {
        assert_eq!(parse_nepali_number(&to_nepali_number(n)), Some(n), "n = {n}");
    }
}

#[test]
fn latin_digit_is_not_a_glyph() {
    assert_eq!(digit_from_glyph('5'), None);
}

#[test]
fn clock_localisation_keeps_separators() {
    assert_eq!(localize_digits("23:59:59"), "२३:५९:५९");
}

// ---------------------------------------------------------------------------
// Tithi
// ---------------------------------------------------------------------------

#[test]
fn tithi_endpoints() {
    let cases = [
        (1, Paksha::Shukla, Tithi::Pratipada),
        (15, Paksha::Shukla, Tithi::PurnimaAmavasya),
        (16, Paksha::Krishna, Tithi::Pratipada),
        (30, Paksha::Krishna, Tithi::PurnimaAmavasya),
    ];
    for (day, paksha, tithi) in cases {
        let label = tithi_for_day(day);
        assert_eq!(label.paksha, paksha, "day {day}");
        assert_eq!(label.tithi, tithi, "day {day}");
    }
}

#[test]
fn tithi_sweep_mirrors_pakshas() {
    for day in 1..=15 {
        assert_eq!(tithi_for_day(day).tithi, tithi_for_day(day + 15).tithi);
    }
}

// ---------------------------------------------------------------------------
// Events and festivals
// ---------------------------------------------------------------------------

#[test]
fn event_days() {
    assert_eq!(events_for_day(1), ["कल्याण काल"]);
    assert_eq!(events_for_day(5), ["पञ्चमी व्रत"]);
    assert_eq!(events_for_day(11), ["एकादशी व्रत"]);
    assert_eq!(events_for_day(15), ["पूर्णिमा"]);
    assert_eq!(events_for_day(30), ["औंसी"]);
    assert!(events_for_day(2).is_empty());
    assert!(events_for_day(31).is_empty());
}

#[test]
fn festival_labels() {
    let labels: Vec<&str> = FESTIVALS.iter().map(|f| f.nepali_date_label).collect();
    assert_eq!(labels, ["मंसिर १५", "पुष १५", "माघ १"]);
}

// ---------------------------------------------------------------------------
// Months and zodiac
// ---------------------------------------------------------------------------

#[test]
fn month_names_in_order() {
    let names: Vec<&str> = ALL_BS_MONTHS.iter().map(|m| m.nepali_name()).collect();
    assert_eq!(names.first(), Some(&"बैशाख"));
    assert_eq!(names.last(), Some(&"चैत्र"));
    assert_eq!(names.len(), 12);
}

#[test]
fn every_sign_has_a_horoscope() {
    for r in ALL_RASHIS {
        let sign = horoscope(r.key()).unwrap();
        assert_eq!(sign.key, r);
    }
}

#[test]
fn scorpio_text() {
    let sign = horoscope("scorpio").unwrap();
    assert_eq!(sign.key, Rashi::Vrischika);
    assert_eq!(sign.display_name, "वृश्चिक राशि");
    assert!(sign.horoscope_text.contains("सावधानी"));
}
