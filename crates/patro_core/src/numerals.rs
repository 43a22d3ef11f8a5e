//! Devanagari numerals and Bikram Sambat date formatting.

use crate::date::BsDate;

/// Devanagari digit glyphs, indexed by their decimal value.
pub const NEPALI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Render a non-negative integer with Devanagari digits.
pub fn to_nepali_number(n: u64) -> String {
    n.to_string()
        .bytes()
        .map(|b| NEPALI_DIGITS[(b - b'0') as usize])
        .collect()
}

/// Decimal value of a Devanagari digit glyph.
pub fn digit_from_glyph(c: char) -> Option<u8> {
    NEPALI_DIGITS.iter().position(|&g| g == c).map(|i| i as u8)
}

/// Parse a string made only of Devanagari digits.
///
/// Returns `None` for empty input, any non-digit glyph, or overflow.
pub fn parse_nepali_number(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    s.chars().try_fold(0u64, |acc, c| {
        let d = digit_from_glyph(c)?;
        acc.checked_mul(10)?.checked_add(d as u64)
    })
}

/// Replace every ASCII digit in `s` with its Devanagari glyph.
///
/// Separators and letters pass through unchanged, so `"09:05:30"` becomes
/// `"०९:०५:३०"`.
pub fn localize_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => NEPALI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Render a signed integer with Devanagari digits and a leading `-` if negative.
pub fn to_nepali_signed(n: i64) -> String {
    if n < 0 {
        format!("-{}", to_nepali_number(n.unsigned_abs()))
    } else {
        to_nepali_number(n as u64)
    }
}

/// Left-pad a Nepali number with `०` to at least `width` glyphs.
fn pad_nepali(n: u64, width: usize) -> String {
    let digits = to_nepali_number(n);
    let len = digits.chars().count();
    if len >= width {
        return digits;
    }
    let mut out: String = std::iter::repeat_n(NEPALI_DIGITS[0], width - len).collect();
    out.push_str(&digits);
    out
}

/// Format a BS date as `YYYY/MM/DD` in Devanagari digits.
///
/// The month is shown 1-based; month and day are zero-padded to two glyphs.
pub fn format_bs_date(date: &BsDate) -> String {
    format!(
        "{}/{}/{}",
        to_nepali_signed(date.year as i64),
        pad_nepali(date.month as u64 + 1, 2),
        pad_nepali(date.day as u64, 2)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_single_glyph() {
        assert_eq!(to_nepali_number(0), "०");
    }

    #[test]
    fn year_2081() {
        assert_eq!(to_nepali_number(2081), "२०८१");
    }

    #[test]
    fn glyph_count_matches_decimal_digits() {
        for n in [0u64, 7, 10, 99, 100, 2081, 1_234_567_890, u64::MAX] {
            assert_eq!(
                to_nepali_number(n).chars().count(),
                n.to_string().len(),
                "n = {n}"
            );
        }
    }

    #[test]
    fn glyphs_map_back_to_digits() {
        for n in [0u64, 42, 9_876_543_210] {
            let back: String = to_nepali_number(n)
                .chars()
                .map(|c| char::from(b'0' + digit_from_glyph(c).unwrap()))
                .collect();
            assert_eq!(back, n.to_string());
        }
    }

    #[test]
    fn signed_numbers() {
        assert_eq!(to_nepali_signed(-45), "-४५");
        assert_eq!(to_nepali_signed(45), "४५");
    }

    #[test]
    fn parse_rejects_latin_and_empty() {
        assert_eq!(parse_nepali_number(""), None);
        assert_eq!(parse_nepali_number("२०8१"), None);
        assert_eq!(parse_nepali_number("२०८१"), Some(2081));
    }

    #[test]
    fn parse_overflow_is_none() {
        assert_eq!(parse_nepali_number("९९९९९९९९९९९९९९९९९९९९९"), None);
    }

    #[test]
    fn localize_clock_text() {
        assert_eq!(localize_digits("09:05:30"), "०९:०५:३०");
        assert_eq!(localize_digits("AD 2024"), "AD २०२४");
    }

    #[test]
    fn format_pads_month_and_day() {
        let d = BsDate::new(2081, 7, 11).unwrap();
        assert_eq!(format_bs_date(&d), "२०८१/०८/११");
        let d = BsDate::new(2081, 0, 3).unwrap();
        assert_eq!(format_bs_date(&d), "२०८१/०१/०३");
    }
}
