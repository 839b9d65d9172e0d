//! `HijriMonth`: month-of-year enum for the Hijri calendar.

/// Month of the Hijri year.
///
/// Variants are numbered 1–12 (Muharram = 1, Dhu al-Hijjah = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HijriMonth {
    /// Muharram (1).
    Muharram = 1,
    /// Safar (2).
    Safar = 2,
    /// Rabi' al-Awwal (3).
    RabiAlAwwal = 3,
    /// Rabi' al-Thani (4).
    RabiAlThani = 4,
    /// Jumada al-Awwal (5).
    JumadaAlAwwal = 5,
    /// Jumada al-Thani (6).
    JumadaAlThani = 6,
    /// Rajab (7).
    Rajab = 7,
    /// Sha'ban (8).
    Shaban = 8,
    /// Ramadan (9).
    Ramadan = 9,
    /// Shawwal (10).
    Shawwal = 10,
    /// Dhu al-Qi'dah (11).
    DhuAlQidah = 11,
    /// Dhu al-Hijjah (12).
    DhuAlHijjah = 12,
}

impl HijriMonth {
    /// Construct from a number (1 = Muharram … 12 = Dhu al-Hijjah).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(HijriMonth::Muharram),
            2 => Some(HijriMonth::Safar),
            3 => Some(HijriMonth::RabiAlAwwal),
            4 => Some(HijriMonth::RabiAlThani),
            5 => Some(HijriMonth::JumadaAlAwwal),
            6 => Some(HijriMonth::JumadaAlThani),
            7 => Some(HijriMonth::Rajab),
            8 => Some(HijriMonth::Shaban),
            9 => Some(HijriMonth::Ramadan),
            10 => Some(HijriMonth::Shawwal),
            11 => Some(HijriMonth::DhuAlQidah),
            12 => Some(HijriMonth::DhuAlHijjah),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the transliterated name (`"Muharram"`, `"Safar"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            HijriMonth::Muharram => "Muharram",
            HijriMonth::Safar => "Safar",
            HijriMonth::RabiAlAwwal => "Rabi' al-Awwal",
            HijriMonth::RabiAlThani => "Rabi' al-Thani",
            HijriMonth::JumadaAlAwwal => "Jumada al-Awwal",
            HijriMonth::JumadaAlThani => "Jumada al-Thani",
            HijriMonth::Rajab => "Rajab",
            HijriMonth::Shaban => "Sha'ban",
            HijriMonth::Ramadan => "Ramadan",
            HijriMonth::Shawwal => "Shawwal",
            HijriMonth::DhuAlQidah => "Dhu al-Qi'dah",
            HijriMonth::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }

    /// One of the four sacred months (Muharram, Rajab, Dhu al-Qi'dah,
    /// Dhu al-Hijjah).
    pub fn is_sacred(&self) -> bool {
        matches!(
            self,
            HijriMonth::Muharram
                | HijriMonth::Rajab
                | HijriMonth::DhuAlQidah
                | HijriMonth::DhuAlHijjah
        )
    }
}

impl std::fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<HijriMonth> for u8 {
    fn from(m: HijriMonth) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=12u8 {
            let m = HijriMonth::from_number(n).unwrap();
            assert_eq!(m.number(), n);
            assert_eq!(u8::from(m), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(HijriMonth::from_number(0).is_none());
        assert!(HijriMonth::from_number(13).is_none());
    }

    #[test]
    fn names() {
        assert_eq!(HijriMonth::Ramadan.to_string(), "Ramadan");
        assert_eq!(HijriMonth::DhuAlHijjah.long_name(), "Dhu al-Hijjah");
        assert!(HijriMonth::Rajab.is_sacred());
        assert!(!HijriMonth::Ramadan.is_sacred());
    }
}
