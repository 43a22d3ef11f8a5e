//! Tithi (lunar day) labels for the day grid.
//!
//! The label is derived from the day of month alone: days 1-15 fall in the
//! Shukla (bright) paksha and days 16-30 in the Krishna (dark) paksha. No
//! lunar position is consulted.

use std::fmt::{Display, Formatter};

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Bright (waxing) fortnight.
    Shukla,
    /// Dark (waning) fortnight.
    Krishna,
}

impl Paksha {
    /// Devanagari name, including the word paksha.
    pub const fn nepali_name(self) -> &'static str {
        match self {
            Self::Shukla => "शुक्ल पक्ष",
            Self::Krishna => "कृष्ण पक्ष",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 15 tithis of a paksha. The last entry covers both Purnima and Amavasya.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    PurnimaAmavasya,
}

/// All 15 tithis in order (index 0 = Pratipada).
pub const ALL_TITHIS: [Tithi; 15] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
    Tithi::PurnimaAmavasya,
];

const NEPALI_TITHI_NAMES: [&str; 15] = [
    "प्रतिपदा",
    "द्वितीया",
    "तृतीया",
    "चतुर्थी",
    "पञ्चमी",
    "षष्ठी",
    "सप्तमी",
    "अष्टमी",
    "नवमी",
    "दशमी",
    "एकादशी",
    "द्वादशी",
    "त्रयोदशी",
    "चतुर्दशी",
    "औंसी/पूर्णिमा",
];

impl Tithi {
    /// 0-based index within the paksha.
    pub const fn index(self) -> u8 {
        match self {
            Self::Pratipada => 0,
            Self::Dwitiya => 1,
            Self::Tritiya => 2,
            Self::Chaturthi => 3,
            Self::Panchami => 4,
            Self::Shashthi => 5,
            Self::Saptami => 6,
            Self::Ashtami => 7,
            Self::Navami => 8,
            Self::Dashami => 9,
            Self::Ekadashi => 10,
            Self::Dwadashi => 11,
            Self::Trayodashi => 12,
            Self::Chaturdashi => 13,
            Self::PurnimaAmavasya => 14,
        }
    }

    /// Devanagari name.
    pub fn nepali_name(self) -> &'static str {
        NEPALI_TITHI_NAMES[self.index() as usize]
    }
}

/// A tithi together with the paksha it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TithiLabel {
    pub paksha: Paksha,
    pub tithi: Tithi,
}

impl Display for TithiLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.paksha.nepali_name(), self.tithi.nepali_name())
    }
}

/// Tithi label for a day of month.
///
/// Total over `i32`: any index that lands outside the 15-entry table
/// (day 0, day 31, negative days) falls back to Pratipada.
pub fn tithi_for_day(day: i32) -> TithiLabel {
    let (paksha, idx) = if day <= 15 {
        (Paksha::Shukla, day - 1)
    } else {
        (Paksha::Krishna, day - 16)
    };
    let tithi = usize::try_from(idx)
        .ok()
        .and_then(|i| ALL_TITHIS.get(i).copied())
        .unwrap_or(ALL_TITHIS[0]);
    TithiLabel { paksha, tithi }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_1_is_shukla_pratipada() {
        let t = tithi_for_day(1);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.tithi, Tithi::Pratipada);
        assert_eq!(t.to_string(), "शुक्ल पक्ष प्रतिपदा");
    }

    #[test]
    fn day_15_is_last_shukla() {
        let t = tithi_for_day(15);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.tithi, ALL_TITHIS[14]);
    }

    #[test]
    fn day_16_restarts_in_krishna() {
        let t = tithi_for_day(16);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.tithi, Tithi::Pratipada);
    }

    #[test]
    fn day_30_is_last_krishna() {
        let t = tithi_for_day(30);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.tithi, Tithi::PurnimaAmavasya);
        assert_eq!(t.to_string(), "कृष्ण पक्ष औंसी/पूर्णिमा");
    }

    #[test]
    fn out_of_table_falls_back_to_pratipada() {
        assert_eq!(tithi_for_day(0).tithi, Tithi::Pratipada);
        assert_eq!(tithi_for_day(0).paksha, Paksha::Shukla);
        assert_eq!(tithi_for_day(31).tithi, Tithi::Pratipada);
        assert_eq!(tithi_for_day(31).paksha, Paksha::Krishna);
        assert_eq!(tithi_for_day(-7).tithi, Tithi::Pratipada);
    }

    #[test]
    fn tithi_indices_sequential() {
        for (i, t) in ALL_TITHIS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert!(!t.nepali_name().is_empty());
        }
    }
}
