//! Rashi (zodiac sign) names and the daily horoscope panel text.
//!
//! 12 rashis starting from Mesha (Aries). Each sign is addressed by its
//! lower-case western key (`aries` .. `pisces`), which is what the
//! horoscope panel is keyed on.

use std::str::FromStr;

use crate::error::CalendarError;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Lookup key used by the horoscope panel.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mesha => "aries",
            Self::Vrishabha => "taurus",
            Self::Mithuna => "gemini",
            Self::Karka => "cancer",
            Self::Simha => "leo",
            Self::Kanya => "virgo",
            Self::Tula => "libra",
            Self::Vrischika => "scorpio",
            Self::Dhanu => "sagittarius",
            Self::Makara => "capricorn",
            Self::Kumbha => "aquarius",
            Self::Meena => "pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Horoscope panel entry for this sign.
    pub fn sign(self) -> &'static ZodiacSign {
        &ZODIAC_SIGNS[self.index() as usize]
    }
}

impl FromStr for Rashi {
    type Err = CalendarError;

    /// Accepts the western key, western name or Sanskrit name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| r.key() == wanted || r.name().to_lowercase() == wanted)
            .ok_or_else(|| CalendarError::UnknownSign(s.to_string()))
    }
}

/// One card of the horoscope panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacSign {
    pub key: Rashi,
    /// Devanagari sign name, e.g. `मेष राशि`.
    pub display_name: &'static str,
    pub horoscope_text: &'static str,
}

/// Horoscope panel entries, in rashi order.
pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign {
        key: Rashi::Mesha,
        display_name: "मेष राशि",
        horoscope_text: "मेष राशिका जातकहरूको लागि आज धेरै राम्रो दिन हुनेछ। काम र व्यवसायमा सफलता प्राप्त हुनेछ।",
    },
    ZodiacSign {
        key: Rashi::Vrishabha,
        display_name: "वृष राशि",
        horoscope_text: "वृष राशिका जातकहरूले आज धैर्य राख्नुपर्नेछ। स्वास्थ्यमा केही समस्या आउन सक्छ।",
    },
    ZodiacSign {
        key: Rashi::Mithuna,
        display_name: "मिथुन राशि",
        horoscope_text: "मिथुन राशिका जातकहरूको लागि आज मिश्रित फल छ। नयाँ अवसरहरू प्राप्त हुनेछ।",
    },
    ZodiacSign {
        key: Rashi::Karka,
        display_name: "कर्कट राशि",
        horoscope_text: "कर्कट राशिका जातकहरूको लागि आज शुभ दिन हो। पारिवारिक खुशी प्राप्त हुनेछ।",
    },
    ZodiacSign {
        key: Rashi::Simha,
        display_name: "सिंह राशि",
        horoscope_text: "सिंह राशिका जातकहरूले आज आफ्नो स्वास्थ्यमा ध्यान दिनुपर्छ। काममा सफलता मिल्नेछ।",
    },
    ZodiacSign {
        key: Rashi::Kanya,
        display_name: "कन्या राशि",
        horoscope_text: "कन्या राशिका जातकहरूको लागि आज राम्रो दिन छ। आर्थिक लाभ हुने सम्भावना छ।",
    },
    ZodiacSign {
        key: Rashi::Tula,
        display_name: "तुला राशि",
        horoscope_text: "तुला राशिका जातकहरूले आज सामाजिक कार्यमा सक्रिय भएर फाइदा उठाउन सक्छन्।",
    },
    ZodiacSign {
        key: Rashi::Vrischika,
        display_name: "वृश्चिक राशि",
        horoscope_text: "वृश्चिक राशिका जातकहरूको लागि आज चुनौतीपूर्ण दिन हो। सावधानी अपनाउनुहोस्।",
    },
    ZodiacSign {
        key: Rashi::Dhanu,
        display_name: "धनु राशि",
        horoscope_text: "धनु राशिका जातकहरूको लागि आज शुभ दिन हो। शिक्षा र ज्ञानमा वृद्धि हुनेछ।",
    },
    ZodiacSign {
        key: Rashi::Makara,
        display_name: "मकर राशि",
        horoscope_text: "मकर राशिका जातकहरूले आज व्यापारमा फाइदा हुने सम्भावना छ। मेहनत सफल हुनेछ।",
    },
    ZodiacSign {
        key: Rashi::Kumbha,
        display_name: "कुम्भ राशि",
        horoscope_text: "कुम्भ राशिका जातकहरूको लागि आज मध्यम फल छ। नयाँ मित्रता हुने सम्भावना छ।",
    },
    ZodiacSign {
        key: Rashi::Meena,
        display_name: "मीन राशि",
        horoscope_text: "मीन राशिका जातकहरूको लागि आज शुभ दिन हो। मानसिक शान्ति प्राप्त हुनेछ।",
    },
];

/// Look up a horoscope entry by key (see [`Rashi::from_str`]).
pub fn horoscope(key: &str) -> Result<&'static ZodiacSign, CalendarError> {
    Ok(key.parse::<Rashi>()?.sign())
}
